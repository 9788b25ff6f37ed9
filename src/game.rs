//! Game state and the interactive session loop.
//!
//! The loop is strictly synchronous: print the board, then prompt, read
//! one line, dispatch it, and repeat. The only suspension point in the
//! whole program is the blocking read of one input line. All shared
//! state is the `GameState` owned by this loop; there is nothing to
//! lock and nothing running in the background.

use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::command::{parse_command, Command};
use crate::display::print_board;
use crate::moves::{attempt_move, MoveError, MoveRequest};
use crate::stats::SessionStats;

/// The prompt printed before each read.
pub const PROMPT: &str = "esp> ";

/// Notice for a line the grammar does not cover.
pub const INVALID_COMMAND_NOTICE: &str = "[INFO] Invalid command!";
/// Notice for a well-formed move the rules reject.
pub const INVALID_MOVE_NOTICE: &str = "[INFO] Invalid move command!";

/// The command summary printed for `help`.
pub const HELP_TEXT: &str = "possible command:\n \
     - move <color> <value> to <stacknumber>\n \
     - help\n \
     - exit";

/// How a session ended. Both outcomes are successful process exits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every non-deposit pile is empty.
    Won,
    /// The player entered `exit`, or input ended.
    Quit,
}

/// The complete state of one running game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub stats: SessionStats,
}

impl GameState {
    /// Wrap a freshly dealt board.
    pub fn new(board: Board) -> Self {
        GameState {
            board,
            stats: SessionStats::default(),
        }
    }

    /// Validate and apply one move, keeping the session counters current.
    pub fn attempt_move(&mut self, request: MoveRequest) -> Result<(), MoveError> {
        match attempt_move(&mut self.board, request) {
            Ok(()) => {
                self.stats.record_applied();
                Ok(())
            }
            Err(err) => {
                self.stats.record_rejected_move();
                Err(err)
            }
        }
    }

    /// True once the game is over: piles 0..=4 all empty.
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }
}

/// Run the interactive session over any line-oriented reader.
///
/// Prints the board once up front, then loops: win check, prompt, read,
/// dispatch. Successful moves reprint the board; rejected moves and
/// malformed lines print their one-line notice and leave the board as it
/// was. End-of-input is treated like `exit`.
pub fn play_session<R: BufRead>(input: &mut R, state: &mut GameState) -> SessionOutcome {
    print_board(&state.board);

    let outcome = loop {
        if state.is_won() {
            break SessionOutcome::Won;
        }

        print!("{PROMPT}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => break SessionOutcome::Quit,
            Ok(_) => {}
            Err(err) => {
                log::debug!("input ended with error: {err}");
                break SessionOutcome::Quit;
            }
        }

        match parse_command(&line) {
            Command::Help => println!("{HELP_TEXT}"),
            Command::Exit => break SessionOutcome::Quit,
            Command::Malformed => {
                state.stats.record_rejected_command();
                println!("{INVALID_COMMAND_NOTICE}");
            }
            Command::Move(request) => match state.attempt_move(request) {
                Ok(()) => print_board(&state.board),
                Err(err) => {
                    log::debug!("move {request:?} rejected: {err}");
                    println!("{INVALID_MOVE_NOTICE}");
                }
            },
        }
    };

    log::debug!("session over ({outcome:?}): {:?}", state.stats);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::board::holds_full_deck;
    use crate::canonical_configs;
    use crate::card::{Card, Color, Rank};
    use crate::deal;

    fn dealt_state(config: &str) -> GameState {
        let cards = deal::parse_configuration(config).expect("fixture is valid");
        GameState::new(deal::deal(&cards))
    }

    fn run_script(state: &mut GameState, script: &str) -> SessionOutcome {
        let mut input = Cursor::new(script.to_string());
        play_session(&mut input, state)
    }

    #[test]
    fn end_of_input_quits_cleanly() {
        let mut state = dealt_state(&canonical_configs::ordered_configuration());
        let before = state.board.clone();

        assert_eq!(run_script(&mut state, ""), SessionOutcome::Quit);
        assert_eq!(state.board, before);
    }

    #[test]
    fn exit_command_quits() {
        let mut state = dealt_state(&canonical_configs::ordered_configuration());
        assert_eq!(run_script(&mut state, "exit\n"), SessionOutcome::Quit);
    }

    #[test]
    fn help_and_garbage_leave_the_board_unchanged() {
        let mut state = dealt_state(&canonical_configs::ordered_configuration());
        let before = state.board.clone();

        let outcome = run_script(&mut state, "help\nshuffle please\nmove red a to 9\nexit\n");
        assert_eq!(outcome, SessionOutcome::Quit);
        assert_eq!(state.board, before);
        assert_eq!(state.stats.commands_rejected, 2);
        assert_eq!(state.stats.moves_applied, 0);
    }

    /// The ordered configuration deals a position with no legal move at
    /// all: everything exposed is black, and both Aces are buried.
    #[test]
    fn ordered_deal_rejects_every_attempt() {
        let mut state = dealt_state(&canonical_configs::ordered_configuration());
        let before = state.board.clone();

        let script = "move black 3 to 4\n\
                      move black k to 2\n\
                      move black a to 5\n\
                      exit\n";
        assert_eq!(run_script(&mut state, script), SessionOutcome::Quit);
        assert_eq!(state.board, before);
        assert_eq!(state.stats.moves_rejected, 3);
        assert_eq!(state.stats.moves_applied, 0);
    }

    /// Drive the winnable fixture through its opening and confirm the
    /// board tracks every applied move.
    #[test]
    fn winnable_opening_applies_moves() {
        let mut state = dealt_state(&canonical_configs::winnable_configuration());

        let script = "move red a to 5\n\
                      move red 2 to 5\n\
                      move black a to 6\n\
                      move red k to 1\n\
                      move black q to 1\n\
                      exit\n";
        assert_eq!(run_script(&mut state, script), SessionOutcome::Quit);
        assert_eq!(state.stats.moves_applied, 5);
        assert_eq!(state.stats.moves_rejected, 0);
        assert!(holds_full_deck(&state.board));
        assert_eq!(
            state.board.pile(5),
            &[
                Card::new(Color::Red, Rank::Ace),
                Card::new(Color::Red, Rank::Two)
            ]
        );
    }

    /// A one-card endgame: the single correct deposit move wins without
    /// any further input being read.
    #[test]
    fn win_is_detected_after_the_final_move() {
        let mut board = Board::new_empty();
        board.push_bottom(1, Card::new(Color::Red, Rank::Ace));
        let mut state = GameState::new(board);

        // No trailing `exit`: the win check must fire before another read.
        let outcome = run_script(&mut state, "move red a to 5\n");
        assert_eq!(outcome, SessionOutcome::Won);
        assert_eq!(state.stats.moves_applied, 1);
        assert!(state.is_won());
    }

    #[test]
    fn deposits_do_not_block_the_win() {
        let mut board = Board::new_empty();
        board.push_bottom(5, Card::new(Color::Red, Rank::Ace));
        board.push_bottom(6, Card::new(Color::Black, Rank::Ace));
        let mut state = GameState::new(board);

        // Won before any input is consumed.
        let outcome = run_script(&mut state, "exit\n");
        assert_eq!(outcome, SessionOutcome::Won);
    }
}
