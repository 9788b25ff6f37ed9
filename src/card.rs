//! Card, Color, and Rank types for the 26-card two-color deck.
//!
//! - `Card` is a compact 1-byte representation (0..=25).
//! - `Color` and `Rank` give human-readable structure on top of that.
//!
//! The deck used by this game has no suits: there are exactly two colors,
//! red and black, with one card per (color, rank) pair.

use core::fmt;

/// Number of colors in the deck.
pub const NUM_COLORS: u8 = 2;
/// Number of ranks per color.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in the deck.
pub const DECK_SIZE: u8 = NUM_COLORS * NUM_RANKS;

/// A playing card represented compactly as an index in 0..=25.
///
/// The mapping is:
/// ```text
/// index = color as u8 * 13 + rank as u8
/// ```
/// where `rank` is 0=Ace, 1=Two, ..., 12=King, and the red block comes
/// first. This matches the numeric card encoding used by the command
/// surface (red 1..=13, black 14..=26).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Card(pub u8);

/// The two colors in the deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Black = 1,
}

/// The thirteen ranks per color.
///
/// Note: Ace is treated as the lowest rank here (0), and you can use
/// `rank_number()` on `Card` to get 1..=13 as a convenience.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 12
}

impl Card {
    /// Create a new card from a color and rank.
    #[inline]
    pub fn new(color: Color, rank: Rank) -> Self {
        let c = color as u8;
        let r = rank as u8;
        debug_assert!(c < NUM_COLORS && r < NUM_RANKS);
        Card(c * NUM_RANKS + r)
    }

    /// Create a card from a raw index in 0..=25.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `index >= 26`.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        debug_assert!(index < DECK_SIZE);
        Card(index)
    }

    /// Return the raw 0..=25 index of this card.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Return the color of this card.
    #[inline]
    pub fn color(self) -> Color {
        Color::from_u8(self.0 / NUM_RANKS)
    }

    /// Return the rank of this card.
    #[inline]
    pub fn rank(self) -> Rank {
        Rank::from_u8(self.0 % NUM_RANKS)
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn rank_number(self) -> u8 {
        self.rank() as u8 + 1
    }

    /// Short string like "RA", "B7", "R10", "BK".
    ///
    /// This is the label the board renderer shows: color letter followed
    /// by the rank symbol, with ten spelled "10".
    pub fn short_str(self) -> String {
        format!("{}{}", self.color().short_char(), self.rank().symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_str())
    }
}

impl Color {
    /// Both colors in a fixed, reproducible order (red block first).
    pub const ALL: [Color; NUM_COLORS as usize] = [Color::Red, Color::Black];

    /// Construct a color from a small integer 0..=1.
    ///
    /// # Panics
    ///
    /// Panics if `v >= 2`.
    #[inline]
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Color::Red,
            1 => Color::Black,
            _ => panic!("invalid color: {v}"),
        }
    }

    /// Single-character representation: 'R' or 'B'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }

    /// The full uppercase token as it appears in configuration files and
    /// commands: "RED" or "BLACK".
    #[inline]
    pub fn token(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Black => "BLACK",
        }
    }

    /// Parse an uppercase color token.
    ///
    /// Accepts exactly "RED" or "BLACK". Callers dealing with user input
    /// uppercase the whole line first; configuration tokens are matched
    /// as-is.
    pub fn parse_token(token: &str) -> Option<Color> {
        match token {
            "RED" => Some(Color::Red),
            "BLACK" => Some(Color::Black),
            _ => None,
        }
    }
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Construct a rank from a small integer 0..=12.
    ///
    /// # Panics
    ///
    /// Panics if `v >= 13`.
    #[inline]
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Rank::Ace,
            1 => Rank::Two,
            2 => Rank::Three,
            3 => Rank::Four,
            4 => Rank::Five,
            5 => Rank::Six,
            6 => Rank::Seven,
            7 => Rank::Eight,
            8 => Rank::Nine,
            9 => Rank::Ten,
            10 => Rank::Jack,
            11 => Rank::Queen,
            12 => Rank::King,
            _ => panic!("invalid rank: {v}"),
        }
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// The rank symbol used on the board and in tokens: "A", "2".."9",
    /// "10", "J", "Q", "K".
    #[inline]
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Parse an uppercase rank token.
    ///
    /// Accepts exactly the symbols produced by `symbol()`.
    pub fn parse_token(token: &str) -> Option<Rank> {
        match token {
            "A" => Some(Rank::Ace),
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            _ => None,
        }
    }
}

/// Generate the full 26-card deck in a fixed order.
///
/// Colors follow `Color::ALL` order, and ranks follow `Rank::ALL` order.
pub fn full_deck() -> [Card; DECK_SIZE as usize] {
    let mut cards = [Card(0); DECK_SIZE as usize];
    let mut i = 0usize;
    for &color in Color::ALL.iter() {
        for &rank in Rank::ALL.iter() {
            cards[i] = Card::new(color, rank);
            i += 1;
        }
    }
    cards
}
