pub mod board;
pub mod canonical_configs;
pub mod card;
pub mod command;
pub mod deal;
pub mod display;
pub mod error;
pub mod game;
pub mod moves;
pub mod stats;

use std::env;
use std::io;

use crate::error::FatalError;
use crate::game::GameState;

/// Entry point for the `twocolor_solitaire` binary.
///
/// This:
///   - Takes exactly one positional argument, the configuration file.
///   - Loads and validates the 26-card configuration, dealing it into
///     the fixed initial layout.
///   - Runs the interactive session over stdin until the game is won,
///     the player exits, or input ends.
///
/// Returns the process exit status: 0 for a completed session (won or
/// quit), 1 for a usage error, 3 for an invalid configuration. Fatal
/// errors print their own `[ERR]` line.
///
/// Example:
///   cargo run -- deal.txt
pub fn run() -> u8 {
    match run_game() {
        Ok(outcome) => {
            log::debug!("clean exit: {outcome:?}");
            0
        }
        Err(err) => {
            log::debug!("fatal: {err:?}");
            println!("{err}");
            err.exit_code()
        }
    }
}

/// Argument handling, load, deal, and the session itself.
fn run_game() -> Result<game::SessionOutcome, FatalError> {
    // Very small hand-rolled argument parser: one file name, nothing else.
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "solitaire".to_string());
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => return Err(FatalError::Usage { program }),
    };

    let cards = deal::load_configuration(&path)?;
    let board = deal::deal(&cards);

    let mut state = GameState::new(board);
    let stdin = io::stdin();
    Ok(game::play_session(&mut stdin.lock(), &mut state))
}
