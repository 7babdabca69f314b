//! Quiz Invaders - A retro arcade quiz
//!
//! Core modules:
//! - `sim`: Deterministic session simulation (spawning, falling, answer resolution)
//! - `questions`: Question records and the CSV question source
//! - `settings`: Tunable game constants, persisted as JSON
//! - `web`: wasm-bindgen facade for browser hosts

pub mod error;
pub mod questions;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::QuestionError;
pub use questions::{QuestionRecord, parse_csv};
pub use settings::{OrderMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Nominal frame time (the host ticks once per animation frame)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Lives at the start of a session
    pub const MAX_LIVES: u8 = 3;
    /// Points awarded for a correct answer
    pub const CORRECT_REWARD: u64 = 100;
    /// Questions per session (0 = all)
    pub const DEFAULT_QUESTION_LIMIT: usize = 5;
    /// Question-count choices offered by the start screen
    pub const QUESTION_LIMIT_OPTIONS: [usize; 4] = [5, 10, 20, 0];

    /// Base fall speed (pixels per frame)
    pub const FALL_SPEED: f32 = 0.8;
    /// Random extra fall speed added per object, in [0, SPEED_JITTER)
    pub const SPEED_JITTER: f32 = 0.4;
    /// Spawn cadence hint for the UI (ms)
    pub const SPAWN_INTERVAL_MS: u32 = 2000;

    /// Objects spawn at least this far above the top edge
    pub const SPAWN_OFFSET: f32 = 100.0;
    /// Extra random spawn height so objects don't fall in lockstep
    pub const SPAWN_JITTER: f32 = 100.0;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    /// Left padding inside a lane
    pub const LANE_MARGIN: f32 = 10.0;
    /// Rendered width of an answer box (keeps the last lane on screen)
    pub const OBJECT_WIDTH: f32 = 200.0;

    /// Pause between a correct answer and the next question (seconds)
    pub const ADVANCE_DELAY: f32 = 0.6;
    /// How long CORRECT!/WRONG! stays on screen (seconds)
    pub const FEEDBACK_DURATION: f32 = 0.5;
}
