//! Canonical fixed 26-card configurations used in tests.
//!
//! Goals:
//!   * Provide a deterministic ordered configuration whose deal has **no
//!     legal move at all** (every exposed card is black, both Aces are
//!     buried), useful for exercising rejections.
//!   * Provide a configuration whose deal has a known multi-move opening
//!     touching every rule family (deposit Ace, deposit ascent,
//!     King-to-empty, tableau placement).
//!   * Provide malformed variants for the loader's failure paths.
//!
//! Fixtures are built from the card tables rather than spelled out as
//! string literals, and are validated by this module's own tests.

use crate::card::{full_deck, Card, Color, Rank};

/// One configuration line for a card: `<COLOR> <RANK>`.
fn config_line(card: Card) -> String {
    format!("{} {}\n", card.color().token(), card.rank().symbol())
}

/// The full deck in its fixed order: RED A..K, then BLACK A..K.
///
/// Dealt, this puts RED A..K plus BLACK A..3 into the reserve (bottom
/// card BLACK 3) and fills the triangle piles with the remaining black
/// cards — a position with no legal move.
pub fn ordered_configuration() -> String {
    full_deck().iter().map(|&c| config_line(c)).collect()
}

/// File order (top of the reserve first) for the winnable fixture.
///
/// The deal exposes, in particular:
///   - RED A alone on pile 1 (deposit opener),
///   - RED 2 at the bottom of pile 2 (deposit ascent),
///   - BLACK A at the bottom of the reserve,
///   - RED K at the bottom of pile 4, with BLACK Q right above it
///     (King-to-empty once pile 1 clears, then Queen onto the King).
const WINNABLE_ORDER: [(Color, Rank); 26] = [
    (Color::Red, Rank::Three),
    (Color::Red, Rank::Four),
    (Color::Red, Rank::Five),
    (Color::Red, Rank::Six),
    (Color::Red, Rank::Seven),
    (Color::Red, Rank::Eight),
    (Color::Red, Rank::Nine),
    (Color::Red, Rank::Ten),
    (Color::Red, Rank::Jack),
    (Color::Red, Rank::Queen),
    (Color::Black, Rank::Two),
    (Color::Black, Rank::Six),
    (Color::Black, Rank::Seven),
    (Color::Black, Rank::Eight),
    (Color::Black, Rank::King),
    (Color::Black, Rank::Ace),
    (Color::Red, Rank::King),
    (Color::Black, Rank::Queen),
    (Color::Black, Rank::Three),
    (Color::Black, Rank::Five),
    (Color::Black, Rank::Jack),
    (Color::Red, Rank::Two),
    (Color::Black, Rank::Four),
    (Color::Black, Rank::Ten),
    (Color::Black, Rank::Nine),
    (Color::Red, Rank::Ace),
];

/// A configuration with a known playable opening (see `WINNABLE_ORDER`).
pub fn winnable_configuration() -> String {
    WINNABLE_ORDER
        .iter()
        .map(|&(color, rank)| config_line(Card::new(color, rank)))
        .collect()
}

/// The ordered configuration with its last line removed: 25 cards.
pub fn short_configuration() -> String {
    let full = ordered_configuration();
    let mut lines: Vec<&str> = full.lines().collect();
    lines.pop();
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// The ordered configuration with its last card replaced by a repeat of
/// the first.
pub fn duplicate_configuration() -> String {
    let full = ordered_configuration();
    let mut lines: Vec<String> = full.lines().map(str::to_string).collect();
    lines.pop();
    lines.push("RED A".to_string());
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// The ordered configuration with one rank token replaced by garbage.
pub fn unknown_rank_configuration() -> String {
    ordered_configuration().replacen("RED Q", "RED 11", 1)
}

/// The ordered configuration with a meaningful third token on one line.
pub fn trailing_token_configuration() -> String {
    ordered_configuration().replacen("RED 4\n", "RED 4 extra\n", 1)
}
