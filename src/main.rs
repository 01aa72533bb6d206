//! Flat cube terminal runner (default binary).
//!
//! `flat-cube` (or `flat-cube play`) opens the interactive view. `flat-cube show`
//! applies a list of actions and prints the unfolded net, which is handy for
//! scripting and for checking a sequence without a terminal UI.

mod config;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use flat_cube::engine::CubeSession;
use flat_cube::input::{handle_key_event, should_quit};
use flat_cube::term::{legend_text, net_text, CubeView, FrameBuffer, TerminalRenderer, Viewport};
use flat_cube::types::CubeAction;

use crate::config::{AppConfig, FileConfig};

#[derive(Parser, Debug)]
#[command(name = "flat-cube", version, about = "Twist a puzzle cube in the terminal")]
struct Cli {
    /// Face width in cells
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Face height in cells
    #[arg(long, global = true)]
    height: Option<usize>,

    /// Six comma-separated color names, top/front/right/back/left/bottom
    #[arg(long, global = true, value_delimiter = ',')]
    palette: Option<Vec<String>>,

    /// JSON config file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Scramble seed
    #[arg(long, global = true)]
    seed: Option<u32>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive terminal view (default)
    Play,
    /// Apply actions such as `rotateUp lookAtTop` and print the net
    Show { actions: Vec<String> },
}

impl Cli {
    fn overrides(&self) -> FileConfig {
        FileConfig {
            width: self.width,
            height: self.height,
            palette: self.palette.clone(),
            seed: self.seed,
        }
    }

    fn resolve_config(&self) -> Result<AppConfig> {
        let mut cfg = AppConfig::default();
        if let Some(path) = &self.config {
            cfg = cfg.merge(FileConfig::load(path)?);
        }
        Ok(cfg.merge(self.overrides()))
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or(Command::Play);

    // The interactive view owns stdout, so it only logs when given a file.
    let to_stderr = matches!(command, Command::Show { .. });
    init_logging(cli.verbose, cli.log_file.as_deref(), to_stderr)?;

    let cfg = cli.resolve_config()?;
    let cube = cfg.build_cube()?;
    info!(
        width = cfg.width,
        height = cfg.height,
        seed = cfg.seed,
        "cube created"
    );
    let mut session = CubeSession::new(cube, cfg.seed);

    match command {
        Command::Play => play(&mut session),
        Command::Show { actions } => show(&mut session, &actions),
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if to_stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn show(session: &mut CubeSession, actions: &[String]) -> Result<()> {
    let parsed = actions
        .iter()
        .map(|name| match CubeAction::from_str(name) {
            Some(action) => Ok(action),
            None => bail!("unknown action {name:?}"),
        })
        .collect::<Result<Vec<_>>>()?;

    for action in parsed {
        let changed = session.apply_action(action);
        debug!(action = action.as_str(), changed, "applied");
    }

    println!("{}", status_line(session));
    println!();
    println!("{}", net_text(session.cube()));
    println!();
    println!("{}", legend_text(session.cube()));
    Ok(())
}

fn status_line(session: &CubeSession) -> String {
    let (row, col) = session.cursor();
    format!(
        "facing: {}  cursor: {row},{col}  moves: {}  seed: {}",
        session.orientation().facing().as_str(),
        session.moves(),
        session.seed()
    )
}

fn play(session: &mut CubeSession) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(moves = session.moves(), "session closed");
    result
}

fn run(term: &mut TerminalRenderer, session: &mut CubeSession) -> Result<()> {
    let view = CubeView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let (mut w, mut h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut needs_draw = true;

    loop {
        if session.take_dirty() || needs_draw {
            view.render_into(session, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            needs_draw = false;
        }

        // Nothing animates, so block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let changed = session.apply_action(action);
                    debug!(action = action.as_str(), changed, "key action");
                }
            }
            Event::Resize(new_w, new_h) => {
                w = new_w;
                h = new_h;
                term.invalidate();
                needs_draw = true;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flat_cube::core::Cube;

    #[test]
    fn status_line_reports_view_and_seed() {
        let mut session = CubeSession::new(Cube::default(), 42);
        session.apply_action(CubeAction::CursorDown);
        session.apply_action(CubeAction::RotateLeft);
        session.apply_action(CubeAction::LookAt(flat_cube::types::Face::Back));

        assert_eq!(
            status_line(&session),
            "facing: back  cursor: 1,0  moves: 1  seed: 42"
        );
    }

    #[test]
    fn cli_parses_show_actions() {
        let cli = Cli::try_parse_from(["flat-cube", "--seed", "7", "show", "rotateUp", "lookAtTop"])
            .unwrap();
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Some(Command::Show { actions }) => assert_eq!(actions, ["rotateUp", "lookAtTop"]),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
