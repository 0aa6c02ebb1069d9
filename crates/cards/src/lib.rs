// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.ordinal(), 2 * 13 + 12);
//!
//! // From suit and rank indices.
//! let c6 = Card::try_new(3, 4).unwrap();
//! assert_eq!(c6.to_string(), "Clubs 6");
//! assert!(Card::try_new(4, 0).is_err());
//! ```
//!
//! and a [Deck] type for shuffling and drawing cards:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new();
//! let hole = deck.draw(2).unwrap();
//! assert_eq!(hole.len(), 2);
//! assert_eq!(deck.len(), 50);
//!
//! // Drawn cards are gone until the deck is rebuilt.
//! let deck = deck.reset();
//! assert_eq!(deck.len(), 52);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;
mod error;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::{Error, Result};
