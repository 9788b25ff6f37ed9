//! Move validation and application.
//!
//! This module defines the `MoveRequest` produced by the command
//! interpreter, the `MoveError` rejection reasons, and `attempt_move`,
//! which checks a request completely against the current board before
//! touching any pile. A rejected move leaves the board untouched; an
//! accepted move splices the run out of its source pile and onto the
//! destination in one step.

use thiserror::Error;

use crate::board::{is_deposit, Board, RESERVE_PILE};
use crate::card::Card;

/// A single requested move: which card, and onto which pile.
///
/// Constructed per command and discarded after it is applied or rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    /// The card the player named. The run below it moves with it on
    /// general moves.
    pub card: Card,
    /// Destination pile index 0..=6.
    pub destination: usize,
}

/// Why a well-formed move request was rejected.
///
/// The interactive surface prints one fixed notice for all of these; the
/// variants exist so logs and tests can tell the rules apart.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("card is already on pile {0}")]
    SamePile(usize),

    #[error("card is buried in the reserve pile")]
    BuriedReserve,

    #[error("cards never leave a deposit pile")]
    DepositSource,

    #[error("nothing may be moved onto the reserve pile")]
    ReserveDestination,

    #[error("the cards below do not form a movable run")]
    BrokenRun,

    #[error("only a King may be moved onto an empty pile")]
    NeedsKing,

    #[error("destination bottom does not continue the run")]
    BadPlacement,

    #[error("card is not exposed at the bottom of its pile")]
    NotExposed,

    #[error("only an Ace may open an empty deposit")]
    NeedsAce,

    #[error("deposit bottom does not continue the color run")]
    BadDepositPlacement,
}

/// True if the slice of cards (top-to-bottom) forms a strictly
/// descending, strictly alternating-color run that may move as a block.
///
/// Checked pair by pair: each card's immediate successor must be the
/// opposite color and exactly one rank lower.
pub fn is_valid_run(cards: &[Card]) -> bool {
    if cards.is_empty() {
        return false;
    }
    for pair in cards.windows(2) {
        let upper = pair[0]; // closer to the pile top
        let lower = pair[1]; // physically below it

        if upper.rank_number() != lower.rank_number() + 1 {
            return false;
        }
        if upper.color() == lower.color() {
            return false;
        }
    }
    true
}

/// True if a run led by `lead` may be placed under `bottom` on an open
/// tableau pile: opposite colors, and `bottom` exactly one rank higher.
#[inline]
fn continues_tableau(bottom: Card, lead: Card) -> bool {
    bottom.color() != lead.color() && bottom.rank_number() == lead.rank_number() + 1
}

/// True if `card` may be placed on a deposit whose bottom is `bottom`:
/// same color, and exactly one rank higher than `bottom`.
#[inline]
fn continues_deposit(bottom: Card, card: Card) -> bool {
    bottom.color() == card.color() && card.rank_number() == bottom.rank_number() + 1
}

/// Validate and apply a move request.
///
/// Checks run in a fixed order against the unmutated board:
/// 1. the destination must differ from the card's current pile;
/// 2. a reserve card may only move while it is the reserve's bottom;
/// 3. deposit piles are sinks — never a source;
/// 4. the reserve is never a destination;
/// 5. deposit destinations take a single exposed card, Ace first, then
///    same-color ascending;
/// 6. open tableau destinations take a valid run, King-led onto an empty
///    pile, otherwise continuing the destination's bottom card.
///
/// Only after every check passes is the run detached and appended.
pub fn attempt_move(board: &mut Board, request: MoveRequest) -> Result<(), MoveError> {
    let source = board
        .locate(request.card)
        .expect("every card is on exactly one pile");

    if request.destination == source {
        return Err(MoveError::SamePile(source));
    }
    if source == RESERVE_PILE && board.bottom(RESERVE_PILE) != Some(request.card) {
        return Err(MoveError::BuriedReserve);
    }
    if is_deposit(source) {
        return Err(MoveError::DepositSource);
    }
    if request.destination == RESERVE_PILE {
        return Err(MoveError::ReserveDestination);
    }

    if is_deposit(request.destination) {
        check_deposit_move(board, request)?;
    } else {
        check_tableau_move(board, request)?;
    }

    let run = board.detach_run(request.card);
    board.append_run(request.destination, run);
    Ok(())
}

/// Deposit rule: single exposed card only, Ace into an empty deposit,
/// same-color one-rank-up otherwise.
fn check_deposit_move(board: &Board, request: MoveRequest) -> Result<(), MoveError> {
    if board.run_below(request.card).len() != 1 {
        return Err(MoveError::NotExposed);
    }
    match board.bottom(request.destination) {
        None => {
            if request.card.rank_number() == 1 {
                Ok(())
            } else {
                Err(MoveError::NeedsAce)
            }
        }
        Some(bottom) => {
            if continues_deposit(bottom, request.card) {
                Ok(())
            } else {
                Err(MoveError::BadDepositPlacement)
            }
        }
    }
}

/// General rule for the open tableau piles 1..=4.
fn check_tableau_move(board: &Board, request: MoveRequest) -> Result<(), MoveError> {
    let run = board.run_below(request.card);
    if !is_valid_run(run) {
        return Err(MoveError::BrokenRun);
    }
    match board.bottom(request.destination) {
        None => {
            if request.card.rank_number() == 13 {
                Ok(())
            } else {
                Err(MoveError::NeedsKing)
            }
        }
        Some(bottom) => {
            if continues_tableau(bottom, request.card) {
                Ok(())
            } else {
                Err(MoveError::BadPlacement)
            }
        }
    }
}
