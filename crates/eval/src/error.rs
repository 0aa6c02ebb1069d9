// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use showdown_cards::Card;

/// Errors returned when evaluating a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The hand does not have exactly 7 cards.
    #[error("invalid hand size {0}, a hand must have 7 cards")]
    InvalidHandSize(usize),
    /// The same card appears twice in a hand.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
}

/// Result type for evaluator operations.
pub type Result<T> = std::result::Result<T, Error>;
