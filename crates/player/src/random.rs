// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A player that acts at random.
use rand::{prelude::*, rngs::StdRng};

use crate::{Action, ActionKind, Information, Player, PlayerState, error::Result};

/// A player that picks an action kind and an amount uniformly at random.
#[derive(Debug)]
pub struct RandomPlayer<R = StdRng> {
    state: PlayerState,
    rng: R,
}

impl RandomPlayer<StdRng> {
    /// Creates a random player seeded from the OS.
    pub fn new(stack: f64) -> Self {
        Self::with_rng(stack, StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a random player with the given generator.
    pub fn with_rng(stack: f64, rng: R) -> Self {
        Self {
            state: PlayerState::new(stack),
            rng,
        }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn action(&mut self, _info: &Information) -> Result<Action> {
        let kind = ActionKind::ALL[self.rng.random_range(0..ActionKind::ALL.len())];
        let amount = self.rng.random::<f32>();
        Ok(Action::new(kind, amount))
    }

    fn state(&self) -> &PlayerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut PlayerState {
        &mut self.state
    }
}
