// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and strengths.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Rank};

use crate::{error::Result, ranks::Tally};

/// A poker hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// The categories in the order they are checked at showdown.
    pub const PRIORITY: [HandRank; 9] = [
        HandRank::StraightFlush,
        HandRank::FourOfAKind,
        HandRank::FullHouse,
        HandRank::Flush,
        HandRank::Straight,
        HandRank::ThreeOfAKind,
        HandRank::TwoPair,
        HandRank::OnePair,
        HandRank::HighCard,
    ];

    /// Checks this category in a 7 cards hand.
    ///
    /// Returns `None` if the hand doesn't have this category.
    pub fn check(self, cards: &[Card]) -> Result<Option<Strength>> {
        Ok(self.check_tally(&Tally::new(cards)?))
    }

    pub(crate) fn check_tally(self, tally: &Tally) -> Option<Strength> {
        match self {
            HandRank::StraightFlush => tally.straight_flush().map(Strength::Rank),
            HandRank::FourOfAKind => tally.four_of_a_kind().map(Strength::Rank),
            HandRank::FullHouse => tally.full_house().map(Strength::Rank),
            HandRank::Flush => tally.flush().map(Strength::Flush),
            HandRank::Straight => tally.straight().map(Strength::Rank),
            HandRank::ThreeOfAKind => tally.three_of_a_kind().map(Strength::Rank),
            HandRank::TwoPair => tally
                .two_pair()
                .map(|(high, low)| Strength::TwoPair(high, low)),
            HandRank::OnePair => tally.one_pair().map(Strength::Rank),
            HandRank::HighCard => tally.high_card().map(Strength::Rank),
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// The strength of a hand within its category.
///
/// Strengths of the same category compare lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strength {
    /// A single rank.
    Rank(Rank),
    /// The high and low pair.
    TwoPair(Rank, Rank),
    /// The five flush ranks from high to low.
    Flush([Rank; 5]),
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Rank(rank) => write!(f, "{rank}"),
            Strength::TwoPair(high, low) => write!(f, "{high}-{low}"),
            Strength::Flush(ranks) => {
                for (idx, rank) in ranks.iter().enumerate() {
                    if idx > 0 {
                        write!(f, "-")?;
                    }
                    write!(f, "{rank}")?;
                }
                Ok(())
            }
        }
    }
}

/// The best category of a hand and its strength.
///
/// Values are ordered by category first and then by strength, so the highest
/// value in a showdown belongs to a winning hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    strength: Strength,
}

impl HandValue {
    /// Evaluates a 7 cards hand.
    pub fn eval(cards: &[Card]) -> Result<Self> {
        Ok(Self::from_tally(&Tally::new(cards)?))
    }

    pub(crate) fn from_tally(tally: &Tally) -> Self {
        HandRank::PRIORITY
            .into_iter()
            .find_map(|rank| {
                rank.check_tally(tally)
                    .map(|strength| HandValue { rank, strength })
            })
            // Seven distinct cards with no single rank hold quads or a full house.
            .unwrap_or_else(|| HandValue {
                rank: HandRank::HighCard,
                strength: Strength::Rank(tally.top_rank()),
            })
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand strength within its category.
    pub fn strength(&self) -> Strength {
        self.strength
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank, self.strength)
    }
}
