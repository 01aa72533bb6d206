//! Random twists driven by the deterministic [`SimpleRng`].

use tracing::info;

use crate::core::{Cube, CubeError, SimpleRng};
use crate::listener::ChangeListener;
use crate::rotation::RotationEngine;
use crate::types::{Axis, ColumnDirection, Orientation, RowDirection, Twist};

/// Pick a valid twist for the cube's dimensions.
pub fn random_twist(cube: &Cube, rng: &mut SimpleRng) -> Twist {
    if rng.flip() {
        let index = rng.below(cube.height());
        let direction = if rng.flip() {
            RowDirection::Left
        } else {
            RowDirection::Right
        };
        Twist::Row { index, direction }
    } else {
        let index = rng.below(cube.width());
        let direction = if rng.flip() {
            ColumnDirection::Up
        } else {
            ColumnDirection::Down
        };
        Twist::Column { index, direction }
    }
}

/// Apply `count` random twists through the engine and return them in order.
///
/// Every twist goes through the normal rotation path, so the listener sees
/// one event per twist.
pub fn scramble<L: ChangeListener>(
    engine: &mut RotationEngine<L>,
    cube: &mut Cube,
    orientation: Orientation,
    rng: &mut SimpleRng,
    count: u32,
) -> Result<Vec<Twist>, CubeError> {
    let mut applied = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let twist = random_twist(cube, rng);
        engine.apply(cube, orientation, twist)?;
        applied.push(twist);
    }

    let rows = applied.iter().filter(|t| t.axis() == Axis::Row).count();
    info!(
        facing = orientation.facing().as_str(),
        twists = applied.len(),
        rows,
        columns = applied.len() - rows,
        "cube scrambled"
    );
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;
    use crate::listener::ChangeTracker;

    #[test]
    fn random_twists_are_always_in_bounds() {
        let cube = Cube::create(5, 2, Palette::default()).unwrap();
        let mut rng = SimpleRng::new(99);
        for _ in 0..500 {
            let twist = random_twist(&cube, &mut rng);
            assert!(cube.check_index(twist.axis(), twist.index()).is_ok());
        }
    }

    #[test]
    fn scramble_notifies_once_per_twist() {
        let mut cube = Cube::default();
        let mut engine = RotationEngine::with_listener(ChangeTracker::new());
        let mut rng = SimpleRng::new(5);

        let twists = scramble(&mut engine, &mut cube, Orientation::default(), &mut rng, 12).unwrap();
        assert_eq!(twists.len(), 12);
        assert_eq!(engine.listener().changes(), 12);
    }

    #[test]
    fn same_seed_same_scramble() {
        let mut a = Cube::default();
        let mut b = Cube::default();
        let mut engine = RotationEngine::new();

        scramble(&mut engine, &mut a, Orientation::default(), &mut SimpleRng::new(8), 30).unwrap();
        scramble(&mut engine, &mut b, Orientation::default(), &mut SimpleRng::new(8), 30).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Cube::default());
    }
}
