//! The seven piles of the game and the splice operations on them.
//!
//! A `Board` owns every card for the whole session. Each pile is an ordered
//! sequence with index 0 as the *top* (the first row the renderer draws)
//! and the last element as the *bottom* — the actively played end where
//! runs are picked up and attached.
//!
//! Pile roles:
//!   - pile 0: the reserve. Only its bottom card is ever playable; the
//!     cards above it stay face-down until exposed.
//!   - piles 1..=4: open tableau piles holding descending alternating-color
//!     runs.
//!   - piles 5..=6: deposit piles, each growing a single-color ascending
//!     run from the Ace. Cards never leave a deposit.

use crate::card::{Card, DECK_SIZE};

/// Total number of piles on the board.
pub const NUM_PILES: usize = 7;
/// Index of the reserve pile.
pub const RESERVE_PILE: usize = 0;
/// Index of the first deposit pile; piles below this are tableau piles.
pub const FIRST_DEPOSIT_PILE: usize = 5;

/// True for the two deposit pile indices.
#[inline]
pub fn is_deposit(pile: usize) -> bool {
    pile >= FIRST_DEPOSIT_PILE
}

/// The seven piles. See the module docs for pile roles.
///
/// Invariant: across all seven piles, every one of the 26 cards appears
/// exactly once. `detach_run`/`append_run` are always used as a pair by
/// the move engine, which preserves this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    piles: [Vec<Card>; NUM_PILES],
}

impl Board {
    /// Create a board with all seven piles empty.
    ///
    /// An empty board violates the 26-card partition invariant on its own;
    /// it is a staging value for the deal loader and for tests that build
    /// positions by hand.
    pub fn new_empty() -> Self {
        Board {
            piles: Default::default(),
        }
    }

    /// The cards of one pile, top first.
    #[inline]
    pub fn pile(&self, pile: usize) -> &[Card] {
        &self.piles[pile]
    }

    /// The top card of a pile (the first element), if any.
    #[inline]
    pub fn top(&self, pile: usize) -> Option<Card> {
        self.piles[pile].first().copied()
    }

    /// The bottom card of a pile (the playable end), if any.
    #[inline]
    pub fn bottom(&self, pile: usize) -> Option<Card> {
        self.piles[pile].last().copied()
    }

    /// Which pile currently holds `card`.
    ///
    /// A linear scan is fine here: seven piles, 26 cards total.
    pub fn locate(&self, card: Card) -> Option<usize> {
        self.position_of(card).map(|(pile, _)| pile)
    }

    /// The pile and depth index at which `card` currently sits.
    pub fn position_of(&self, card: Card) -> Option<(usize, usize)> {
        for (pile, cards) in self.piles.iter().enumerate() {
            if let Some(depth) = cards.iter().position(|&c| c == card) {
                return Some((pile, depth));
            }
        }
        None
    }

    /// The run from `card` down to the bottom of its pile, inclusive,
    /// ordered top to bottom. Empty if the card is not on the board.
    pub fn run_below(&self, card: Card) -> &[Card] {
        match self.position_of(card) {
            Some((pile, depth)) => &self.piles[pile][depth..],
            None => &[],
        }
    }

    /// Detach `card` and everything below it from its pile, returning the
    /// run ordered top to bottom. The pile's new bottom is whatever was
    /// above `card`.
    ///
    /// # Panics
    ///
    /// Panics if `card` is not on the board; the move engine only calls
    /// this after locating the card.
    pub fn detach_run(&mut self, card: Card) -> Vec<Card> {
        let (pile, depth) = self
            .position_of(card)
            .expect("detach_run: card is on the board");
        self.piles[pile].split_off(depth)
    }

    /// Attach a run (ordered top to bottom) under the current bottom of
    /// `pile`. If the pile is empty the run becomes the whole pile.
    pub fn append_run(&mut self, pile: usize, run: Vec<Card>) {
        self.piles[pile].extend(run);
    }

    /// Push a single card onto the bottom of a pile. Deal/test helper.
    pub fn push_bottom(&mut self, pile: usize, card: Card) {
        self.piles[pile].push(card);
    }

    /// True once every non-deposit pile is empty. The deposit piles need
    /// not be examined: cards only ever leave the other five piles by
    /// entering a deposit.
    pub fn is_won(&self) -> bool {
        self.piles[..FIRST_DEPOSIT_PILE].iter().all(|p| p.is_empty())
    }

    /// Every card on the board, pile by pile, top to bottom within each
    /// pile. Used by tests to check the 26-card partition invariant.
    pub fn flatten_cards(&self) -> Vec<Card> {
        self.piles.iter().flatten().copied().collect()
    }

    /// Total number of cards across all piles.
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(|p| p.len()).sum()
    }

    /// Height of the tallest pile.
    pub fn max_depth(&self) -> usize {
        self.piles.iter().map(|p| p.len()).max().unwrap_or(0)
    }
}

/// Check that `board` holds each of the 26 cards exactly once.
///
/// Test support: callers assert this after every mutation they exercise.
pub fn holds_full_deck(board: &Board) -> bool {
    let mut seen = [false; DECK_SIZE as usize];
    for card in board.flatten_cards() {
        let idx = card.index() as usize;
        if seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    seen.iter().all(|&b| b)
}
