//! Deterministic session simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-driven ticks only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod grade;
pub mod round;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use grade::{Grade, accuracy};
pub use round::{select_round, share};
pub use spawn::{lane_x, spawn_answers};
pub use state::{AnswerObject, GameEvent, ObjectId, Outcome, Session, SessionPhase};
pub use tick::{Resolution, TickInput, boot, reset, select, tick};
