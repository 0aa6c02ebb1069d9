// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A player driven by a decision model.
use log::debug;

use crate::{
    Action, Information, Player, PlayerState,
    error::{Error, Result},
};

/// A decision model that maps the player information to an action.
pub trait Model: Send + 'static {
    /// Computes an action given the player information.
    fn step(&mut self, info: &Information) -> Action;
}

impl<F> Model for F
where
    F: FnMut(&Information) -> Action + Send + 'static,
{
    fn step(&mut self, info: &Information) -> Action {
        self(info)
    }
}

/// A player that delegates its actions to a [Model].
pub struct ModelPlayer {
    state: PlayerState,
    model: Option<Box<dyn Model>>,
}

impl ModelPlayer {
    /// Creates a player without a model.
    pub fn new(stack: f64) -> Self {
        Self {
            state: PlayerState::new(stack),
            model: None,
        }
    }

    /// Attaches a model, replacing the current one.
    pub fn attach<M: Model>(&mut self, model: M) {
        self.model = Some(Box::new(model));
    }

    /// Checks if this player has a model.
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }
}

impl Player for ModelPlayer {
    fn action(&mut self, info: &Information) -> Result<Action> {
        let model = self.model.as_mut().ok_or(Error::ModelNotConfigured)?;
        let action = model.step(info);
        debug!("Model action {action}");
        Ok(action)
    }

    fn state(&self) -> &PlayerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }
}
