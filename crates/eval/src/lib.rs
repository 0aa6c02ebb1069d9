// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 7 cards hands. Each of the nine poker categories has
//! a checker in [ranks] that returns the hand strength in that category, and
//! [get_winners] settles a showdown by checking the categories from the
//! straight flush down to the high card:
//!
//! ```
//! # use showdown_eval::*;
//! let hands = ["3D 4D 5D 6D 7D 5H 6H", "3S 3D 3H 3C 4H 5H 6H"]
//!     .map(|h| h.split(' ').map(|c| c.parse::<Card>().unwrap()).collect::<Vec<_>>());
//!
//! // Straight flush beats four of a kind.
//! assert_eq!(get_winners(&hands).unwrap(), vec![0]);
//! assert_eq!(ranks::check_four_card(&hands[1]).unwrap(), Some(Rank::Trey));
//! ```
//!
//! To get the best category of a single hand use [HandValue]:
//!
//! ```
//! # use showdown_eval::*;
//! let mut deck = Deck::new();
//! let hand = deck.draw(7).unwrap();
//! let value = HandValue::eval(&hand).unwrap();
//! assert!(value.rank() >= HandRank::HighCard);
//! ```
//!
//! All the evaluator functions fail with [Error::InvalidHandSize] if a hand
//! doesn't have 7 cards. They also reject a hand that holds the same card
//! twice with [Error::DuplicateCard], such a hand can't be dealt from a
//! [Deck]:
//!
//! ```
//! # use showdown_eval::*;
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let hand = [ah; 7];
//! assert_eq!(HandValue::eval(&hand), Err(Error::DuplicateCard(ah)));
//! assert_eq!(get_winners(&[&hand[..6]]), Err(Error::InvalidHandSize(6)));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub mod ranks;
mod showdown;
mod value;

pub use error::{Error, Result};
pub use ranks::HAND_SIZE;
pub use showdown::get_winners;
pub use value::{HandRank, HandValue, Strength};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
