//! Parsing one line of player input into a command.
//!
//! The grammar is deliberately tiny and case-insensitive:
//!
//! ```text
//! HELP
//! EXIT
//! MOVE <RED|BLACK> <rank> TO <pile 0-6>
//! ```
//!
//! Anything else is `Malformed`, which the session loop answers with an
//! invalid-command notice and a fresh prompt.

use crate::card::{Card, Color, Rank};
use crate::moves::MoveRequest;

/// One parsed line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the command summary.
    Help,
    /// End the session.
    Exit,
    /// Attempt a move.
    Move(MoveRequest),
    /// Anything the grammar does not cover.
    Malformed,
}

/// Parse a single input line.
///
/// The whole line is uppercased first, then split on whitespace. `HELP`
/// and `EXIT` must stand alone; a `MOVE` command needs its four operand
/// tokens in order, and tokens beyond the fifth are ignored.
pub fn parse_command(line: &str) -> Command {
    let upper = line.to_uppercase();
    let tokens: Vec<&str> = upper.split_whitespace().collect();

    match tokens.as_slice() {
        ["HELP"] => Command::Help,
        ["EXIT"] => Command::Exit,
        _ => parse_move(&tokens),
    }
}

/// Parse the `MOVE <color> <rank> TO <pile>` form, or `Malformed`.
fn parse_move(tokens: &[&str]) -> Command {
    if tokens.len() < 5 || tokens[0] != "MOVE" {
        return Command::Malformed;
    }
    let Some(color) = Color::parse_token(tokens[1]) else {
        return Command::Malformed;
    };
    let Some(rank) = Rank::parse_token(tokens[2]) else {
        return Command::Malformed;
    };
    if tokens[3] != "TO" {
        return Command::Malformed;
    }
    let destination = match tokens[4] {
        "0" => 0,
        "1" => 1,
        "2" => 2,
        "3" => 3,
        "4" => 4,
        "5" => 5,
        "6" => 6,
        _ => return Command::Malformed,
    };

    Command::Move(MoveRequest {
        card: Card::new(color, rank),
        destination,
    })
}
