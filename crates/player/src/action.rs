// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player actions and the information a player acts on.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::Card;

/// The kind of a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Fold the hand.
    Fold = 0,
    /// Call or check.
    Call = 1,
    /// Bet or raise.
    Raise = 2,
}

impl ActionKind {
    /// All action kinds indexed by their category.
    pub const ALL: [ActionKind; 3] = [ActionKind::Fold, ActionKind::Call, ActionKind::Raise];

    /// Gets an action kind from its category in `0..3`.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The action category in `0..3`.
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ActionKind::Fold => "Fold",
            ActionKind::Call => "Call",
            ActionKind::Raise => "Raise",
        };

        write!(f, "{kind}")
    }
}

/// A player action, the amount is a fraction of the player stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Action {
    kind: ActionKind,
    amount: f32,
}

impl Action {
    /// Creates an action, the amount is clamped to `[0, 1]`.
    pub fn new(kind: ActionKind, amount: f32) -> Self {
        let amount = if amount.is_nan() {
            0.0
        } else {
            amount.clamp(0.0, 1.0)
        };

        Self { kind, amount }
    }

    /// The action kind.
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// The action amount in `[0, 1]`.
    pub fn amount(&self) -> f32 {
        self.amount
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.kind, self.amount)
    }
}

/// What a player sees when it is asked to act.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Information {
    /// The player hole cards.
    pub hole: Vec<Card>,
    /// The community cards dealt so far.
    pub board: Vec<Card>,
    /// The player stack.
    pub stack: f64,
}
