use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// The declaration order is the canonical suit-major order used when
/// building an unshuffled deck; changing it changes every derived deck,
/// so it is part of the replay protocol.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Spades suit (♠)
    Spades,
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and hand evaluation purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

/// Represents a single playing card with a suit and rank.
/// Cards are the fundamental unit of the duel: they appear in the deck,
/// in the drawn slot, and in the ten board columns.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Hearts, Diamonds, Clubs, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl fmt::Display for Card {
    /// Compact notation used by the CLI: `"Qh"`, `"10s"`, `"2c"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = match self.rank {
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Ten => "10",
            other => return write!(f, "{}{}", other as u8, suit_char(self.suit)),
        };
        write!(f, "{}{}", r, suit_char(self.suit))
    }
}

fn suit_char(s: Suit) -> char {
    match s {
        Suit::Hearts => 'h',
        Suit::Diamonds => 'd',
        Suit::Clubs => 'c',
        Suit::Spades => 's',
    }
}

impl FromStr for Card {
    type Err = String;

    /// Parses the compact notation accepted by the CLI (`"Qh"`, `"10s"`, `"ts"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() < 2 {
            return Err(format!("unrecognized card: {:?}", s));
        }
        let (rank_part, suit_part) = s.split_at(s.len() - 1);
        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            other => return Err(format!("unrecognized rank: {:?}", other)),
        };
        let suit = match suit_part.to_ascii_lowercase().as_str() {
            "h" => Suit::Hearts,
            "d" => Suit::Diamonds,
            "c" => Suit::Clubs,
            "s" => Suit::Spades,
            other => return Err(format!("unrecognized suit: {:?}", other)),
        };
        Ok(Card { suit, rank })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
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
        Rank::Ace,
    ]
}

/// The 52 cards in canonical order: suit-major, rank-minor.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
