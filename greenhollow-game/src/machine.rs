//! Canonical snapshot holder.
//!
//! The UI never mutates state directly: it dispatches actions here, one
//! at a time, and reads whatever snapshot is current. A rejected action
//! leaves the snapshot exactly as it was.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::EventError;
use crate::events::{Action, apply_action};
use crate::state::GameState;

pub struct GameMachine {
    state: GameState,
    rng: SmallRng,
}

impl GameMachine {
    /// Wrap an initial snapshot. The seed drives listing-identifier
    /// generation, so a fixed seed gives a fully deterministic machine.
    #[must_use]
    pub fn new(state: GameState, seed: u64) -> Self {
        Self {
            state,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Current snapshot. Callers may clone it and keep reading the clone
    /// while further actions are dispatched.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Apply an action at the given moment, replacing the snapshot on
    /// success.
    ///
    /// # Errors
    ///
    /// Surfaces the reducer's typed rejection; the snapshot is untouched
    /// and the caller is expected to localize and display the reason.
    pub fn dispatch(&mut self, action: &Action, now_ms: i64) -> Result<(), EventError> {
        match apply_action(&self.state, action, now_ms, &mut self.rng) {
            Ok(next) => {
                self.state = next;
                Ok(())
            }
            Err(err) => {
                log::warn!("action rejected ({}): {err}", err.translation_key());
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}
