//! Game settings
//!
//! Persisted as JSON (LocalStorage on web, a plain file for the native runner).

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::QuestionError;

/// Order in which the round's questions are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderMode {
    #[default]
    Shuffle,
    Sequential,
}

impl OrderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderMode::Shuffle => "Shuffle",
            OrderMode::Sequential => "Sequential",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shuffle" | "random" => Some(OrderMode::Shuffle),
            "sequential" | "seq" => Some(OrderMode::Sequential),
            _ => None,
        }
    }
}

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Round ===
    /// Questions per session (0 = all)
    pub question_limit: usize,
    pub order: OrderMode,
    /// First question (0-based) of a sequential round, for playing a file in batches
    pub start_index: usize,

    // === Rules ===
    pub max_lives: u8,
    pub correct_reward: u64,

    // === Motion ===
    /// Base fall speed (pixels per tick)
    pub fall_speed: f32,
    /// Max random extra speed per object
    pub speed_jitter: f32,
    /// Spawn cadence hint for the UI (ms); the loop itself doesn't use it
    pub spawn_interval_ms: u32,

    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Pacing (seconds) ===
    pub advance_delay: f32,
    pub feedback_duration: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            question_limit: DEFAULT_QUESTION_LIMIT,
            order: OrderMode::Shuffle,
            start_index: 0,

            max_lives: MAX_LIVES,
            correct_reward: CORRECT_REWARD,

            fall_speed: FALL_SPEED,
            speed_jitter: SPEED_JITTER,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            advance_delay: ADVANCE_DELAY,
            feedback_duration: FEEDBACK_DURATION,
        }
    }
}

impl Settings {
    /// Settings with a different question limit
    pub fn with_question_limit(mut self, limit: usize) -> Self {
        self.question_limit = limit;
        self
    }

    /// Settings with a different sequential starting question
    pub fn with_start_index(mut self, start: usize) -> Self {
        self.start_index = start;
        self
    }

    /// Clamp values the game can't run with (a session needs at least one life)
    pub fn sanitized(mut self) -> Self {
        if self.max_lives == 0 {
            log::warn!("max_lives must be at least 1, using 1");
            self.max_lives = 1;
        }
        self
    }

    /// Update playfield size (host resized the game area)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.playfield_width = width.max(0.0);
        self.playfield_height = height.max(0.0);
    }

    /// Parse settings JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, QuestionError> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> Result<String, QuestionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "quiz_invaders_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from a JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self, QuestionError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.max_lives, 3);
        assert_eq!(settings.correct_reward, 100);
        assert_eq!(settings.question_limit, 5);
        assert_eq!(settings.order, OrderMode::Shuffle);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "question_limit": 0, "order": "Sequential" }"#).unwrap();
        assert_eq!(settings.question_limit, 0);
        assert_eq!(settings.order, OrderMode::Sequential);
        assert_eq!(settings.max_lives, MAX_LIVES);
        assert_eq!(settings.fall_speed, FALL_SPEED);
    }

    #[test]
    fn test_json_roundtrip_and_errors() {
        let settings = Settings::default().with_question_limit(10);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(QuestionError::Settings(_))
        ));
    }

    #[test]
    fn test_zero_lives_clamped_on_load() {
        let settings = Settings::from_json(r#"{ "max_lives": 0 }"#).unwrap();
        assert_eq!(settings.max_lives, 1);
        let settings = Settings::from_json(r#"{ "max_lives": 5 }"#).unwrap();
        assert_eq!(settings.max_lives, 5);
    }

    #[test]
    fn test_default_limit_is_offered() {
        assert!(QUESTION_LIMIT_OPTIONS.contains(&Settings::default().question_limit));
        assert_eq!(Settings::default().start_index, 0);
    }

    #[test]
    fn test_order_mode_from_str() {
        assert_eq!(OrderMode::from_str("SEQ"), Some(OrderMode::Sequential));
        assert_eq!(OrderMode::from_str("shuffle"), Some(OrderMode::Shuffle));
        assert_eq!(OrderMode::from_str("sideways"), None);
        assert_eq!(OrderMode::Sequential.as_str(), "Sequential");
    }
}
