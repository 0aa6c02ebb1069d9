// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A shuffled cards deck.
use log::trace;
use rand::prelude::*;

use crate::{
    card::{Card, Rank, Suit},
    error::{Error, Result},
};

/// A cards Deck.
///
/// Cards are drawn from the front of the remaining sequence in shuffle order,
/// a drawn card is never returned to the deck, use [Deck::reset] to get a new
/// full deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new deck shuffled with the thread local generator.
    pub fn new() -> Self {
        Self::new_and_shuffled(&mut rand::rng())
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Draws `n` cards from the top of the deck.
    ///
    /// Fails without changing the deck if there are less than `n` cards left.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>> {
        if n > self.cards.len() {
            return Err(Error::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Result<Card> {
        if self.cards.is_empty() {
            return Err(Error::InsufficientCards {
                requested: 1,
                remaining: 0,
            });
        }

        Ok(self.cards.remove(0))
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// The remaining cards in draw order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Discards this deck and returns a new full deck shuffled with the thread
    /// local generator.
    pub fn reset(self) -> Self {
        self.reset_with(&mut rand::rng())
    }

    /// Discards this deck and returns a new full deck shuffled with `rng`.
    pub fn reset_with<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        trace!("Reset deck with {} cards left", self.cards.len());
        Self::new_and_shuffled(rng)
    }
}

impl Default for Deck {
    /// A deck in canonical order, suit-major and rank-minor.
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    #[test]
    fn new_deck_has_all_cards() {
        let deck = Deck::new();
        assert_eq!(deck.len(), Deck::SIZE);

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn default_deck_is_canonical() {
        let deck = Deck::default();
        for (ordinal, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.ordinal() as usize, ordinal);
        }
    }

    #[test]
    fn draw_cards() {
        let mut deck = Deck::new();
        let top = deck.cards()[..11].to_vec();

        let first = deck.draw(1).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(deck.len(), 51);

        let next = deck.draw(10).unwrap();
        assert_eq!(next.len(), 10);
        assert_eq!(deck.len(), 41);

        // Cards come from the top in shuffle order.
        assert_eq!(first[0], top[0]);
        assert_eq!(&next[..], &top[1..]);

        assert!(deck.draw(0).unwrap().is_empty());
        assert_eq!(deck.len(), 41);
    }

    #[test]
    fn drawn_and_remaining_partition_the_deck() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let drawn = deck.draw(17).unwrap();

        let mut all = drawn.iter().copied().collect::<HashSet<_>>();
        all.extend(deck.cards().iter().copied());

        assert_eq!(drawn.len() + deck.len(), Deck::SIZE);
        assert_eq!(all.len(), Deck::SIZE);
        assert!(drawn.iter().all(|c| !deck.cards().contains(c)));
    }

    #[test]
    fn draw_too_many_cards() {
        let mut deck = Deck::new();
        deck.draw(30).unwrap();

        assert_eq!(
            deck.draw(35),
            Err(Error::InsufficientCards {
                requested: 35,
                remaining: 22
            })
        );
        assert_eq!(deck.len(), 22);

        assert_eq!(deck.draw(22).unwrap().len(), 22);
        assert!(deck.is_empty());
        assert_eq!(
            deck.deal(),
            Err(Error::InsufficientCards {
                requested: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn deal_card() {
        let mut deck = Deck::new();
        let top = deck.cards()[0];
        assert_eq!(deck.deal().unwrap(), top);
        assert_eq!(deck.len(), 51);
    }

    #[test]
    fn reset_deck() {
        let mut deck = Deck::new();
        deck.draw(40).unwrap();

        let deck = deck.reset();
        assert_eq!(deck.len(), Deck::SIZE);
        assert_eq!(deck.into_iter().collect::<HashSet<_>>().len(), Deck::SIZE);
    }

    #[test]
    fn seeded_decks_are_reproducible() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(d1.cards(), d2.cards());

        let d3 = d1.reset_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(d3.cards(), d2.cards());
    }
}
