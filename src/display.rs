//! Text rendering of the board.
//!
//! The board is drawn as a fixed two-line header naming the five playing
//! piles and the two deposits, followed by one row per depth level of the
//! deepest pile. Cells are three characters wide and separated by " | ".
//! Reserve cards above the reserve's bottom are drawn as a face-down
//! marker; every other card shows its color letter and rank symbol.
//!
//! Rendering is split into a `String`-building function plus a printing
//! wrapper so tests can assert on the exact text.

use crate::board::{Board, NUM_PILES, RESERVE_PILE};
use crate::card::Card;

/// The fixed column header row.
pub const BOARD_HEADER: &str = "0   | 1   | 2   | 3   | 4   | DEP | DEP";
/// The rule under the header, as wide as the header.
pub const BOARD_RULE: &str = "---------------------------------------";

/// Marker cell for a face-down reserve card.
const FACE_DOWN_CELL: &str = "X  ";
/// Cell for a depth a pile does not reach.
const EMPTY_CELL: &str = "   ";

/// Format a card label: color letter plus rank symbol, e.g. "RA", "B7",
/// "R10".
pub fn format_card(card: Card) -> String {
    card.short_str()
}

/// One three-character cell of the board body.
///
/// `depth` is the row index, 0 at the top. Within the reserve pile every
/// card above the bottom is face-down.
fn format_cell(board: &Board, pile: usize, depth: usize) -> String {
    let cards = board.pile(pile);
    if depth >= cards.len() {
        return EMPTY_CELL.to_string();
    }
    if pile == RESERVE_PILE && depth + 1 < cards.len() {
        return FACE_DOWN_CELL.to_string();
    }
    format!("{:<3}", format_card(cards[depth]))
}

/// Render the whole board as a multi-line string.
///
/// The body has one row per depth level, enough to cover the deepest
/// pile. A freshly dealt board therefore shows sixteen rows (the reserve
/// height); as the game progresses the body shrinks and grows with the
/// piles.
pub fn render_board(board: &Board) -> String {
    let mut s = String::new();
    s.push_str(BOARD_HEADER);
    s.push('\n');
    s.push_str(BOARD_RULE);
    s.push('\n');

    for depth in 0..board.max_depth() {
        for pile in 0..NUM_PILES {
            if pile > 0 {
                s.push_str(" | ");
            }
            s.push_str(&format_cell(board, pile, depth));
        }
        s.push('\n');
    }

    s
}

/// Print the board to stdout.
pub fn print_board(board: &Board) {
    print!("{}", render_board(board));
}
