// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker players.
//!
//! A [Player] is asked for an [Action] given the [Information] it can see,
//! an action has a kind (fold, call or raise) and an amount in `[0, 1]`:
//!
//! ```
//! # use showdown_player::*;
//! let mut player = RandomPlayer::new(100.0);
//! let action = player.action(&Information::default()).unwrap();
//! assert!((0.0..=1.0).contains(&action.amount()));
//!
//! // A model player needs a model before it can act.
//! let mut player = ModelPlayer::new(100.0);
//! assert_eq!(
//!     player.action(&Information::default()),
//!     Err(Error::ModelNotConfigured)
//! );
//!
//! player.attach(|_: &Information| Action::new(ActionKind::Call, 0.0));
//! assert_eq!(player.action(&Information::default()).unwrap().kind(), ActionKind::Call);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod action;
mod error;
mod model;
mod random;

pub use action::{Action, ActionKind, Information};
pub use error::{Error, Result};
pub use model::{Model, ModelPlayer};
pub use random::RandomPlayer;

/// The state every player carries.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// The player chips.
    pub stack: f64,
    /// The player is still in the game.
    pub alive: bool,
    /// The player is all in.
    pub all_in: bool,
}

impl PlayerState {
    /// Creates the state for a player with the given stack.
    pub fn new(stack: f64) -> Self {
        Self {
            stack,
            alive: true,
            all_in: false,
        }
    }
}

/// A Poker player.
pub trait Player {
    /// Gets the player action given the information it can see.
    fn action(&mut self, info: &Information) -> Result<Action>;

    /// The player state.
    fn state(&self) -> &PlayerState;

    /// The mutable player state.
    fn state_mut(&mut self) -> &mut PlayerState;

    /// The player stack.
    fn stack(&self) -> f64 {
        self.state().stack
    }

    /// Checks if the player is still in the game.
    fn is_alive(&self) -> bool {
        self.state().alive
    }

    /// Checks if the player is all in.
    fn is_all_in(&self) -> bool {
        self.state().all_in
    }
}
