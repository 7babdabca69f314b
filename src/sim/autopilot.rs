//! Demo player for headless runs and attract mode
//!
//! Waits until a choice is on screen, then answers right with probability
//! `accuracy` and otherwise hits a wrong choice. Each attempt is rolled once.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Session;
use super::tick::TickInput;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Chance of picking the right answer on each attempt (0-1)
    pub accuracy: f64,
    rng: Pcg32,
    /// (question index, lives) of the last attempt
    last_attempt: Option<(usize, u8)>,
}

impl Autopilot {
    pub fn new(accuracy: f64, seed: u64) -> Self {
        Self {
            accuracy: accuracy.clamp(0.0, 1.0),
            rng: Pcg32::seed_from_u64(seed),
            last_attempt: None,
        }
    }

    /// Decide this frame's input
    pub fn plan(&mut self, state: &Session) -> TickInput {
        let mut input = TickInput::default();
        if !state.is_running() || state.is_advancing() {
            return input;
        }

        // Wait until something has dropped into view
        if !state.active_objects().any(|o| o.pos.y >= 0.0) {
            return input;
        }

        let attempt = (state.current_question_index, state.lives);
        if self.last_attempt == Some(attempt) {
            return input;
        }
        self.last_attempt = Some(attempt);

        let target = if self.rng.random_bool(self.accuracy) {
            state.active_objects().find(|o| o.is_correct)
        } else {
            let wrong: Vec<_> = state.active_objects().filter(|o| !o.is_correct).collect();
            if wrong.is_empty() {
                None
            } else {
                Some(wrong[self.rng.random_range(0..wrong.len())])
            }
        };

        if let Some(obj) = target {
            input.selections.push(obj.id);
        }
        input
    }
}
