// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// A Poker card.
///
/// A card is stored as its ordinal `suit * 13 + rank`, an integer in `0..52`
/// that identifies the card, equality, hashing and ordering all use the
/// ordinal so cards sort suit-major:
///
/// ```text
///   Spades   2..A =>  0..12
///   Diamonds 2..A => 13..25
///   Hearts   2..A => 26..38
///   Clubs    2..A => 39..51
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * Rank::COUNT + rank as u8)
    }

    /// Create a card from a suit index in `0..4` and a rank index in `0..13`.
    pub fn try_new(suit: u8, rank: u8) -> Result<Card> {
        match (Suit::try_from(suit), Rank::try_from(rank)) {
            (Ok(suit), Ok(rank)) => Ok(Card::new(rank, suit)),
            _ => Err(Error::InvalidCard { suit, rank }),
        }
    }

    /// This card ordinal, `suit * 13 + rank`.
    #[inline]
    pub const fn ordinal(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub const fn suit(&self) -> Suit {
        Suit::ALL[(self.0 / Rank::COUNT) as usize]
    }

    /// Returns the card rank.
    pub const fn rank(&self) -> Rank {
        Rank::ALL[(self.0 % Rank::COUNT) as usize]
    }
}

impl TryFrom<u8> for Card {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self> {
        if ordinal < Suit::COUNT * Rank::COUNT {
            Ok(Self(ordinal))
        } else {
            Err(Error::InvalidCard {
                suit: ordinal / Rank::COUNT,
                rank: ordinal % Rank::COUNT,
            })
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit(), self.rank())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit().symbol())
    }
}

impl FromStr for Card {
    type Err = Error;

    /// Parses the compact form `<rank><suit>`, for example `AS`, `10h` or `Td`.
    fn from_str(s: &str) -> Result<Self> {
        let err = || Error::ParseCard(s.to_string());

        let s = s.trim();
        let mut chars = s.chars();
        let suit = match chars.next_back().map(|c| c.to_ascii_uppercase()) {
            Some('S') => Suit::Spades,
            Some('D') => Suit::Diamonds,
            Some('H') => Suit::Hearts,
            Some('C') => Suit::Clubs,
            _ => return Err(err()),
        };

        let rank = match chars.as_str().to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(err()),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank, the Ace is the highest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: u8 = 13;

    /// All ranks from low to high, indexed by rank value.
    pub const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank index in `0..13`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Rank {
    type Error = Error;

    fn try_from(rank: u8) -> Result<Self> {
        Self::ALL
            .get(rank as usize)
            .copied()
            .ok_or(Error::InvalidRank(rank))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
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
            Rank::Ace => "A",
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Clubs suit.
    Clubs = 3,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: u8 = 4;

    /// All suits indexed by suit value.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Hearts, Suit::Clubs];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// The suit index in `0..4`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The one letter suit symbol.
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = Error;

    fn try_from(suit: u8) -> Result<Self> {
        Self::ALL
            .get(suit as usize)
            .copied()
            .ok_or(Error::InvalidSuit(suit))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
        };

        write!(f, "{suit}")
    }
}
