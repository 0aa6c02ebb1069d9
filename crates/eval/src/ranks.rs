// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand category checkers.
//!
//! Each checker takes a 7 cards hand and returns the hand strength for its
//! category, or `None` if the category is not in the hand. Strengths are rank
//! indices with the Ace as the highest rank (see [Rank]):
//!
//! | Checker                  | Strength                                  |
//! |--------------------------|-------------------------------------------|
//! | [check_straight_flush]   | top rank of the suited 5 cards run        |
//! | [check_four_card]        | rank of the quads                         |
//! | [check_full_house]       | rank of the triple, needs an exact pair   |
//! | [check_flush]            | the 5 highest suited ranks, descending    |
//! | [check_straight]         | top rank of the 5 cards run               |
//! | [check_three_card]       | rank of the highest triple                |
//! | [check_two_pair]         | the two highest pair ranks, descending    |
//! | [check_one_pair]         | rank of the highest pair                  |
//! | [check_high_card]        | highest rank that appears once            |
//!
//! The Ace also plays below the deuce in a straight so that A-2-3-4-5 is a
//! five high straight.
use showdown_cards::{Card, Rank};

use crate::error::{Error, Result};

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 7;

/// Ranks and suits occupancy of a 7 cards hand.
#[derive(Debug, Clone)]
pub(crate) struct Tally {
    /// Number of cards for each rank.
    counts: [u8; 13],
    /// Bitmask of the ranks held in each suit.
    suits: [u16; 4],
}

impl Tally {
    /// Tallies a hand, fails if it doesn't have 7 distinct cards.
    pub(crate) fn new(cards: &[Card]) -> Result<Self> {
        if cards.len() != HAND_SIZE {
            return Err(Error::InvalidHandSize(cards.len()));
        }

        let mut seen = 0u64;
        let mut tally = Tally {
            counts: [0; 13],
            suits: [0; 4],
        };

        for card in cards {
            let bit = 1u64 << card.ordinal();
            if seen & bit != 0 {
                return Err(Error::DuplicateCard(*card));
            }
            seen |= bit;

            tally.counts[card.rank().index()] += 1;
            tally.suits[card.suit().index()] |= 1 << card.rank().index();
        }

        Ok(tally)
    }

    /// Bitmask of all the ranks in the hand.
    fn ranks_mask(&self) -> u16 {
        self.suits.iter().fold(0, |mask, suit| mask | suit)
    }

    /// Ranks with exactly `count` cards from high to low.
    fn with_count(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks()
            .rev()
            .filter(move |rank| self.counts[rank.index()] == count)
    }

    /// The highest rank in the hand.
    pub(crate) fn top_rank(&self) -> Rank {
        Rank::ranks()
            .rev()
            .find(|rank| self.counts[rank.index()] > 0)
            .unwrap_or(Rank::Deuce)
    }

    pub(crate) fn straight_flush(&self) -> Option<Rank> {
        self.suits.iter().filter_map(|&mask| top_of_run(mask)).max()
    }

    pub(crate) fn four_of_a_kind(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    pub(crate) fn full_house(&self) -> Option<Rank> {
        let triple = self.with_count(3).next()?;

        // Needs an exact pair, a second triple doesn't fill the house.
        self.with_count(2).next().map(|_| triple)
    }

    pub(crate) fn flush(&self) -> Option<[Rank; 5]> {
        let mask = self
            .suits
            .iter()
            .copied()
            .find(|mask| mask.count_ones() >= 5)?;

        let mut top = [Rank::Deuce; 5];
        let ranks = Rank::ranks().rev().filter(|rank| mask & (1 << rank.index()) != 0);
        for (slot, rank) in top.iter_mut().zip(ranks) {
            *slot = rank;
        }

        Some(top)
    }

    pub(crate) fn straight(&self) -> Option<Rank> {
        top_of_run(self.ranks_mask())
    }

    pub(crate) fn three_of_a_kind(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    pub(crate) fn two_pair(&self) -> Option<(Rank, Rank)> {
        let mut pairs = self.with_count(2);
        match (pairs.next(), pairs.next()) {
            (Some(high), Some(low)) => Some((high, low)),
            _ => None,
        }
    }

    pub(crate) fn one_pair(&self) -> Option<Rank> {
        self.with_count(2).next()
    }

    pub(crate) fn high_card(&self) -> Option<Rank> {
        self.with_count(1).next()
    }
}

/// Returns the top rank of the highest 5 cards run in a ranks bitmask.
fn top_of_run(mask: u16) -> Option<Rank> {
    // Slot 0 is the Ace below the deuce, slot i + 1 holds rank i.
    let slots = (mask << 1) | ((mask >> Rank::Ace.index()) & 1);

    let mut run = 0;
    for slot in (0..=Rank::COUNT as usize).rev() {
        if slots & (1 << slot) != 0 {
            run += 1;
            if run == 5 {
                // The run spans slots slot..slot + 4, the top slot holds rank slot + 3.
                return Some(Rank::ALL[slot + 3]);
            }
        } else {
            run = 0;
        }
    }

    None
}

/// Returns the top rank of a straight flush.
pub fn check_straight_flush(cards: &[Card]) -> Result<Option<Rank>> {
    Ok(Tally::new(cards)?.straight_flush())
}

/// Returns the rank of four cards of the same rank.
pub fn check_four_card(cards: &[Card]) -> Result<Option<Rank>> {
    Ok(Tally::new(cards)?.four_of_a_kind())
}

/// Returns the rank of the triple in a full house.
///
/// The hand needs a triple and an exact pair, a second triple doesn't count as
/// the pair. The pair is not part of the strength, two full houses with the
/// same triple are equal.
pub fn check_full_house(cards: &[Card]) -> Result<Option<Rank>> {
    Ok(Tally::new(cards)?.full_house())
}

/// Returns the five highest ranks of a flush in descending order.
pub fn check_flush(cards: &[Card]) -> Result<Option<[Rank; 5]>> {
    Ok(Tally::new(cards)?.flush())
}

/// Returns the top rank of a straight.
pub fn check_straight(cards: &[Card]) -> Result<Option<Rank>> {
    Ok(Tally::new(cards)?.straight())
}

/// Returns the rank of the highest three of a kind.
pub fn check_three_card(cards: &[Card]) -> Result<Option<Rank>> {
    Ok(Tally::new(cards)?.three_of_a_kind())
}

/// Returns the ranks of the two highest pairs, high pair first.
pub fn check_two_pair(cards: &[Card]) -> Result<Option<(Rank, Rank)>> {
    Ok(Tally::new(cards)?.two_pair())
}

/// Returns the rank of the highest pair.
pub fn check_one_pair(cards: &[Card]) -> Result<Option<Rank>> {
    Ok(Tally::new(cards)?.one_pair())
}

/// Returns the highest rank that appears only once.
pub fn check_high_card(cards: &[Card]) -> Result<Option<Rank>> {
    Ok(Tally::new(cards)?.high_card())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Parses a space separated list of cards.
    pub(crate) fn hand(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn four_card() {
        let cards = hand("3D 3H 3C JH AS 10D 3S");
        assert_eq!(check_four_card(&cards), Ok(Some(Rank::Trey)));
        assert_eq!(Rank::Trey.index(), 1);

        let cards = hand("3D 3H 3C JH AS 10D 2S");
        assert_eq!(check_four_card(&cards), Ok(None));
    }

    #[test]
    fn full_house() {
        let cards = hand("4D 5H 4C 5C AS 10D 4S");
        assert_eq!(check_full_house(&cards), Ok(Some(Rank::Four)));

        // Known simplification: two triples without a pair are not a full
        // house, the hand plays as three of a kind of the higher triple.
        let cards = hand("5D 5H 5C 4C 4S 4D AH");
        assert_eq!(check_full_house(&cards), Ok(None));
        assert_eq!(check_three_card(&cards), Ok(Some(Rank::Five)));

        // Quads and a triple, the quads decide.
        let cards = hand("5D 5H 5C 4C 4S 4D 4H");
        assert_eq!(check_full_house(&cards), Ok(None));
        assert_eq!(check_four_card(&cards), Ok(Some(Rank::Four)));

        let cards = hand("4D 5H 4C 6C AS 10D 4S");
        assert_eq!(check_full_house(&cards), Ok(None));
    }

    #[test]
    fn three_card() {
        let cards = hand("4D 5H 4C 5C AS 10D 4S");
        assert_eq!(check_three_card(&cards), Ok(Some(Rank::Four)));

        let cards = hand("4D 5H 4C 5C AS 10D QS");
        assert_eq!(check_three_card(&cards), Ok(None));
    }

    #[test]
    fn two_pair() {
        let cards = hand("4D 5H 4C 5C AS 10D QS");
        assert_eq!(check_two_pair(&cards), Ok(Some((Rank::Five, Rank::Four))));

        // Three pairs, the two highest count.
        let cards = hand("4D 5H 4C 5C AS 10D AH");
        assert_eq!(check_two_pair(&cards), Ok(Some((Rank::Ace, Rank::Five))));

        let cards = hand("4D 5H 4C 6C AS 10D QS");
        assert_eq!(check_two_pair(&cards), Ok(None));
    }

    #[test]
    fn one_pair() {
        let cards = hand("4D 5H 4C 5C AS 10D QS");
        assert_eq!(check_one_pair(&cards), Ok(Some(Rank::Five)));

        let cards = hand("4D 5H 4C 5C AS 10D AH");
        assert_eq!(check_one_pair(&cards), Ok(Some(Rank::Ace)));

        let cards = hand("4D 5H 7C 8C AS 10D QS");
        assert_eq!(check_one_pair(&cards), Ok(None));
    }

    #[test]
    fn high_card() {
        let cards = hand("4D 5H 4C 5C AS 10D QS");
        assert_eq!(check_high_card(&cards), Ok(Some(Rank::Ace)));

        let cards = hand("4D 5H 4C 5C AS 10D AH");
        assert_eq!(check_high_card(&cards), Ok(Some(Rank::Ten)));

        // Quads and trips leave no single card.
        let cards = hand("4D 4H 4C 4S AS AD AH");
        assert_eq!(check_high_card(&cards), Ok(None));
    }

    #[test]
    fn straight() {
        let cards = hand("4D 5H 6C 7C 8S 10D QS");
        assert_eq!(check_straight(&cards), Ok(Some(Rank::Eight)));
        assert_eq!(Rank::Eight.index(), 6);

        // The wheel is five high.
        let cards = hand("AD 2H 3C 4C 5S 10D QS");
        assert_eq!(check_straight(&cards), Ok(Some(Rank::Five)));

        // Broadway.
        let cards = hand("AD KH QC JC 10S 2D 3S");
        assert_eq!(check_straight(&cards), Ok(Some(Rank::Ace)));

        // The highest run wins on a six cards run.
        let cards = hand("AD 2H 3C 4C 5S 6D QS");
        assert_eq!(check_straight(&cards), Ok(Some(Rank::Six)));

        // No wrap around the Ace.
        let cards = hand("QD KH AC 2C 3S 8D 8S");
        assert_eq!(check_straight(&cards), Ok(None));

        let cards = hand("4D 5H 6C 7C 9S 10D QS");
        assert_eq!(check_straight(&cards), Ok(None));
    }

    #[test]
    fn straight_flush() {
        let cards = hand("4D 5H 6C 7C 8S 10D QS");
        assert_eq!(check_straight_flush(&cards), Ok(None));

        let cards = hand("AD 2D 3D 4D 5D 10D QS");
        assert_eq!(check_straight_flush(&cards), Ok(Some(Rank::Five)));

        // Top card of the 3-7 diamonds run.
        let cards = hand("3D 4D 5D 6D 7D 5H 6H");
        assert_eq!(check_straight_flush(&cards), Ok(Some(Rank::Seven)));
        assert_eq!(Rank::Seven.index(), 5);

        // A straight and a flush that don't overlap.
        let cards = hand("3D 4D 5D 6D 7H 9D 2C");
        assert_eq!(check_straight(&cards), Ok(Some(Rank::Seven)));
        assert!(check_flush(&cards).unwrap().is_some());
        assert_eq!(check_straight_flush(&cards), Ok(None));
    }

    #[test]
    fn flush() {
        let cards = hand("4D 5H 6C 7C 8S 10D QS");
        assert_eq!(check_flush(&cards), Ok(None));

        let cards = hand("AC 2C 3C 4C 5C 10D QC");
        assert_eq!(
            check_flush(&cards),
            Ok(Some([
                Rank::Ace,
                Rank::Queen,
                Rank::Five,
                Rank::Four,
                Rank::Trey
            ]))
        );

        // Seven suited cards, only the five highest count.
        let cards = hand("2H 4H 6H 8H 10H QH KH");
        assert_eq!(
            check_flush(&cards),
            Ok(Some([
                Rank::King,
                Rank::Queen,
                Rank::Ten,
                Rank::Eight,
                Rank::Six
            ]))
        );
    }

    #[test]
    fn invalid_hand_size() {
        let six = hand("4D 5H 6C 7C 8S 10D");
        assert_eq!(check_straight(&six), Err(Error::InvalidHandSize(6)));
        assert_eq!(check_high_card(&six), Err(Error::InvalidHandSize(6)));

        let eight = hand("4D 5H 6C 7C 8S 10D QS KS");
        assert_eq!(check_flush(&eight), Err(Error::InvalidHandSize(8)));
        assert_eq!(check_two_pair(&[]), Err(Error::InvalidHandSize(0)));
    }

    #[test]
    fn duplicate_card() {
        let cards = hand("4D 5H 6C 7C 8S 10D 4D");
        assert_eq!(
            check_one_pair(&cards),
            Err(Error::DuplicateCard("4D".parse().unwrap()))
        );
    }

    #[test]
    fn checkers_are_idempotent() {
        let cards = hand("AC 2C 3C 4C 5C 5D 5S");
        for _ in 0..3 {
            assert_eq!(check_straight_flush(&cards), Ok(Some(Rank::Five)));
            assert_eq!(check_three_card(&cards), Ok(Some(Rank::Five)));
            assert_eq!(check_high_card(&cards), Ok(Some(Rank::Ace)));
        }
    }
}
