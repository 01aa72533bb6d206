//! Session tests - actions flowing from input names to the cube

use flat_cube::core::{Cube, Palette};
use flat_cube::engine::CubeSession;
use flat_cube::term::net_text;
use flat_cube::types::{CubeAction, Face, SCRAMBLE_MOVES};

fn apply_all(session: &mut CubeSession, names: &[&str]) {
    for name in names {
        let action = CubeAction::from_str(name).unwrap_or_else(|| panic!("bad action {name}"));
        session.apply_action(action);
    }
}

#[test]
fn test_column_up_shows_in_net() {
    let mut session = CubeSession::default();
    apply_all(&mut session, &["cursorRight", "rotateUp"]);

    let expected = concat!(
        "    WRW\n",
        "    WRW\n",
        "    WRW\n",
        "\n",
        "GGG RYR BBB OWO\n",
        "GGG RYR BBB OWO\n",
        "GGG RYR BBB OWO\n",
        "\n",
        "    YOY\n",
        "    YOY\n",
        "    YOY\n",
    );
    assert_eq!(net_text(session.cube()), expected);
    assert_eq!(session.moves(), 1);
}

#[test]
fn test_rotation_follows_viewed_face() {
    let mut session = CubeSession::default();
    apply_all(&mut session, &["lookAtRight", "rotateRight"]);

    // Looking at right, a row twist cycles right <- front.
    let right = session.cube().face(Face::Right);
    assert_eq!(
        session.cube().palette().name(right.get(0, 0).unwrap()),
        Some("red")
    );
    assert!(session.cube().face(Face::Top).is_uniform());
}

#[test]
fn test_inverse_actions_restore_cube() {
    let mut session = CubeSession::default();
    apply_all(
        &mut session,
        &["cursorDown", "rotateLeft", "cursorRight", "rotateUp"],
    );
    apply_all(&mut session, &["rotateDown", "cursorLeft", "rotateRight"]);

    assert_eq!(session.cube(), &Cube::default());
    assert_eq!(session.moves(), 4);
}

#[test]
fn test_scramble_then_reset() {
    let cube = Cube::create(4, 4, Palette::default()).unwrap();
    let mut session = CubeSession::new(cube.clone(), 2024);

    assert!(session.apply_action(CubeAction::Scramble));
    assert_ne!(session.cube(), &cube);
    assert_eq!(session.cube().color_counts(), cube.color_counts());
    assert_eq!(session.moves(), 0);
    assert_eq!(session.total_twists(), SCRAMBLE_MOVES as u64);

    assert!(session.apply_action(CubeAction::Reset));
    assert_eq!(session.cube(), &cube);
}

#[test]
fn test_same_seed_same_scramble() {
    let mut a = CubeSession::new(Cube::default(), 77);
    let mut b = CubeSession::new(Cube::default(), 77);
    a.apply_action(CubeAction::Scramble);
    b.apply_action(CubeAction::Scramble);
    assert_eq!(a.cube(), b.cube());
}

#[test]
fn test_cursor_stays_in_non_square_grid() {
    let cube = Cube::create(5, 2, Palette::default()).unwrap();
    let mut session = CubeSession::new(cube, 1);
    for _ in 0..10 {
        session.apply_action(CubeAction::CursorRight);
        session.apply_action(CubeAction::CursorDown);
    }
    assert_eq!(session.cursor(), (1, 4));
    assert!(session.apply_action(CubeAction::RotateUp));
    assert!(session.apply_action(CubeAction::RotateLeft));
}
