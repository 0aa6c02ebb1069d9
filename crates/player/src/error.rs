// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player errors.
use thiserror::Error;

/// Errors returned when asking a player for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A model player was asked to act before a model was attached.
    #[error("model not configured")]
    ModelNotConfigured,
}

/// Result type for player operations.
pub type Result<T> = std::result::Result<T, Error>;
