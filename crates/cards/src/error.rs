// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck errors.
use thiserror::Error;

/// Errors returned when building cards or drawing from a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Suit or rank out of range.
    #[error("invalid card suit={suit} rank={rank}")]
    InvalidCard {
        /// The requested suit index.
        suit: u8,
        /// The requested rank index.
        rank: u8,
    },
    /// Rank index out of range.
    #[error("invalid rank {0}")]
    InvalidRank(u8),
    /// Suit index out of range.
    #[error("invalid suit {0}")]
    InvalidSuit(u8),
    /// The deck has fewer cards than requested.
    #[error("cannot draw {requested} cards from a deck with {remaining} cards")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
    /// A card string that cannot be parsed.
    #[error("invalid card string {0:?}")]
    ParseCard(String),
}

/// Result type for cards operations.
pub type Result<T> = std::result::Result<T, Error>;
