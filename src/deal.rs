//! Configuration loading and the fixed initial deal.
//!
//! The configuration source is a plain text file of 26 non-blank lines,
//! each `<COLOR> <RANK>`. Loading validates every token and rejects
//! duplicates; any defect fails the whole load before a game starts.
//!
//! The deal itself is a fixed table, not a computed pattern: the file
//! order of the 26 cards maps onto the seven piles through hardcoded
//! index lists that reproduce the game's reference layout.

use std::fs;
use std::io;

use thiserror::Error;

use crate::board::Board;
use crate::card::{Card, Color, Rank, DECK_SIZE};

/// Number of cards a configuration must provide.
pub const DEAL_SIZE: usize = DECK_SIZE as usize;

/// Deck indices 0..RESERVE_SPAN form the reserve pile (pile 0) as one
/// ordered run: index 0 on top, index 15 at the bottom.
pub const RESERVE_SPAN: usize = 16;

/// Deck indices dealt into piles 1..=4, listed top to bottom per pile.
///
/// This interleaved triangle is a fixed constant of the game; it is not
/// derived from the deck size.
pub const TRIANGLE_DEAL: [&[usize]; 4] = [
    &[25],
    &[24, 21],
    &[23, 20, 18],
    &[22, 19, 17, 16],
];

/// Why a configuration failed to load.
///
/// All of these surface to the player as the same `[ERR] Invalid file!`
/// outcome; the variants exist for logging and tests. `line` fields are
/// 1-based line numbers in the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file could not be read: {0}")]
    Unreadable(#[from] io::Error),

    #[error("line {line}: expected `<COLOR> <RANK>`")]
    MalformedLine { line: usize },

    #[error("line {line}: unknown color token")]
    UnknownColor { line: usize },

    #[error("line {line}: unknown rank token")]
    UnknownRank { line: usize },

    #[error("line {line}: card appears twice")]
    DuplicateCard { line: usize },

    #[error("expected 26 cards, found {found}")]
    WrongCardCount { found: usize },
}

/// Read and parse a configuration file.
pub fn load_configuration(path: &str) -> Result<[Card; DEAL_SIZE], ConfigError> {
    let text = fs::read_to_string(path)?;
    parse_configuration(&text)
}

/// Parse configuration text into the 26 cards, in file order.
///
/// Blank (whitespace-only) lines are skipped and do not count toward the
/// 26. Each counted line must tokenize to exactly a color token and a
/// rank token; a third token invalidates the line. Parsing stops after
/// the 26th card, so trailing content is ignored.
pub fn parse_configuration(text: &str) -> Result<[Card; DEAL_SIZE], ConfigError> {
    let mut cards = [Card(0); DEAL_SIZE];
    let mut seen = [false; DEAL_SIZE];
    let mut count = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        if count == DEAL_SIZE {
            break;
        }
        if raw.trim().is_empty() {
            continue;
        }
        let line = idx + 1;

        let mut tokens = raw.split_whitespace();
        let color_tok = tokens.next().ok_or(ConfigError::MalformedLine { line })?;
        let rank_tok = tokens.next().ok_or(ConfigError::MalformedLine { line })?;
        if tokens.next().is_some() {
            return Err(ConfigError::MalformedLine { line });
        }

        let color =
            Color::parse_token(color_tok).ok_or(ConfigError::UnknownColor { line })?;
        let rank = Rank::parse_token(rank_tok).ok_or(ConfigError::UnknownRank { line })?;

        let card = Card::new(color, rank);
        if seen[card.index() as usize] {
            return Err(ConfigError::DuplicateCard { line });
        }
        seen[card.index() as usize] = true;

        cards[count] = card;
        count += 1;
    }

    if count < DEAL_SIZE {
        return Err(ConfigError::WrongCardCount { found: count });
    }

    log::debug!("configuration loaded: {DEAL_SIZE} cards");
    Ok(cards)
}

/// Arrange 26 loaded cards into the fixed initial layout.
///
/// - cards 0..=15 become the reserve pile, in order;
/// - piles 1..=4 are filled from `TRIANGLE_DEAL`;
/// - the two deposit piles start empty.
pub fn deal(cards: &[Card; DEAL_SIZE]) -> Board {
    let mut board = Board::new_empty();

    for &card in &cards[..RESERVE_SPAN] {
        board.push_bottom(0, card);
    }

    for (offset, indices) in TRIANGLE_DEAL.iter().enumerate() {
        for &deck_idx in indices.iter() {
            board.push_bottom(1 + offset, cards[deck_idx]);
        }
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::holds_full_deck;
    use crate::canonical_configs;
    use crate::card::full_deck;

    #[test]
    fn triangle_deal_covers_every_index_once() {
        let mut seen = [false; DEAL_SIZE];
        for i in 0..RESERVE_SPAN {
            seen[i] = true;
        }
        for indices in TRIANGLE_DEAL.iter() {
            for &i in indices.iter() {
                assert!(!seen[i], "deck index {i} dealt twice");
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn ordered_configuration_parses_in_file_order() {
        let text = canonical_configs::ordered_configuration();
        let cards = parse_configuration(&text).expect("canonical config is valid");
        assert_eq!(cards, full_deck());
    }

    /// The deal is deterministic: the same configuration always yields the
    /// same layout, and the layout matches the fixed tables exactly.
    #[test]
    fn deal_layout_matches_fixed_tables() {
        let text = canonical_configs::ordered_configuration();
        let cards = parse_configuration(&text).unwrap();
        let board = deal(&cards);

        assert!(holds_full_deck(&board));

        // Reserve: file order, card 0 on top, card 15 at the bottom.
        let reserve: Vec<Card> = cards[..RESERVE_SPAN].to_vec();
        assert_eq!(board.pile(0), reserve.as_slice());

        // Triangle piles, top to bottom.
        assert_eq!(board.pile(1), &[cards[25]]);
        assert_eq!(board.pile(2), &[cards[24], cards[21]]);
        assert_eq!(board.pile(3), &[cards[23], cards[20], cards[18]]);
        assert_eq!(board.pile(4), &[cards[22], cards[19], cards[17], cards[16]]);

        // Deposits start empty.
        assert!(board.pile(5).is_empty());
        assert!(board.pile(6).is_empty());
    }

    #[test]
    fn blank_lines_are_skipped_not_counted() {
        let text = canonical_configs::ordered_configuration();
        let padded: String = text
            .lines()
            .map(|l| format!("\n{l}\n   \n"))
            .collect();
        let cards = parse_configuration(&padded).expect("blank lines are ignored");
        assert_eq!(cards, full_deck());
    }

    #[test]
    fn trailing_lines_after_the_26th_card_are_ignored() {
        let mut text = canonical_configs::ordered_configuration();
        text.push_str("not a card line at all\n");
        assert!(parse_configuration(&text).is_ok());
    }

    #[test]
    fn short_configuration_fails_with_card_count() {
        let text = canonical_configs::short_configuration();
        match parse_configuration(&text) {
            Err(ConfigError::WrongCardCount { found }) => assert_eq!(found, DEAL_SIZE - 1),
            other => panic!("expected WrongCardCount, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_card_fails() {
        let text = canonical_configs::duplicate_configuration();
        assert!(matches!(
            parse_configuration(&text),
            Err(ConfigError::DuplicateCard { .. })
        ));
    }

    #[test]
    fn unknown_tokens_fail() {
        let text = canonical_configs::unknown_rank_configuration();
        assert!(matches!(
            parse_configuration(&text),
            Err(ConfigError::UnknownRank { .. })
        ));

        // Color tokens are matched as-is; lowercase is not accepted.
        let mut lower = String::from("red A\n");
        lower.push_str(&canonical_configs::ordered_configuration());
        assert!(matches!(
            parse_configuration(&lower),
            Err(ConfigError::UnknownColor { line: 1 })
        ));
    }

    #[test]
    fn trailing_token_invalidates_the_line() {
        let text = canonical_configs::trailing_token_configuration();
        assert!(matches!(
            parse_configuration(&text),
            Err(ConfigError::MalformedLine { .. })
        ));
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(
            parse_configuration(""),
            Err(ConfigError::WrongCardCount { found: 0 })
        ));
    }
}
