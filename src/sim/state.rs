//! Session state and core simulation types
//!
//! Everything a round needs lives here; the host owns rendering and only
//! sees the `GameEvent`s queued on the session.

use std::sync::Arc;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grade::{Grade, accuracy};
use crate::questions::QuestionRecord;
use crate::settings::Settings;

/// Identifier of a spawned answer object
pub type ObjectId = u32;

/// How an ended session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every question was played through
    Completed,
    /// Lives ran out
    Failed,
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Start screen, nothing ticking
    NotStarted,
    /// Questions are being played
    Running,
    /// Round over, final grade shown
    Ended(Outcome),
}

/// One falling answer choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerObject {
    pub id: ObjectId,
    pub text: String,
    pub is_correct: bool,
    /// Horizontal slot (0-based)
    pub lane: usize,
    /// Top-left position; y grows downward
    pub pos: Vec2,
    /// Pixels per tick
    pub speed: f32,
    pub active: bool,
}

impl AnswerObject {
    /// Move down one tick
    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }

    /// Past the bottom edge of the playfield
    pub fn is_below(&self, bottom: f32) -> bool {
        self.pos.y > bottom
    }
}

/// Notifications for the presentation layer, drained once per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    ObjectSpawned {
        id: ObjectId,
        text: String,
        is_correct: bool,
        lane: usize,
        x: f32,
        y: f32,
    },
    ObjectMoved {
        id: ObjectId,
        y: f32,
    },
    ObjectRemoved {
        id: ObjectId,
    },
    /// CORRECT!/WRONG! flash
    Feedback {
        correct: bool,
    },
    HudUpdated {
        score: u64,
        lives: u8,
    },
    QuestionShown {
        index: usize,
        question: String,
    },
    /// The question's correct answer is missing from its choices
    DataInvalid {
        index: usize,
    },
    SessionEnded {
        grade: Grade,
        score: u64,
        completed: bool,
    },
}

/// Complete session state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: Settings,
    /// Seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: SessionPhase,
    /// The round, in play order
    pub active_questions: Vec<Arc<QuestionRecord>>,
    pub current_question_index: usize,
    pub score: u64,
    pub lives: u8,
    pub correct_count: usize,
    /// Answer objects of the current question (spawn order)
    pub objects: Vec<AnswerObject>,
    /// Seconds until the next question spawns after a correct answer
    pub advance_timer: Option<f32>,
    /// Seconds the feedback flash stays visible
    pub feedback_timer: f32,
    /// Ticks simulated since boot
    pub time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
    next_id: ObjectId,
}

impl Session {
    /// Create an idle session with the given settings and seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let settings = settings.sanitized();
        let lives = settings.max_lives;
        Self {
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: SessionPhase::NotStarted,
            active_questions: Vec::new(),
            current_question_index: 0,
            score: 0,
            lives,
            correct_count: 0,
            objects: Vec::new(),
            advance_timer: None,
            feedback_timer: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// ID the next spawned object will get
    pub(crate) fn peek_next_id(&self) -> ObjectId {
        self.next_id
    }

    /// Mark `count` IDs from `peek_next_id` as used
    pub(crate) fn reserve_ids(&mut self, count: usize) {
        self.next_id += count as ObjectId;
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            SessionPhase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Question currently on screen (None between rounds)
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        if !self.is_running() {
            return None;
        }
        self.active_questions
            .get(self.current_question_index)
            .map(|q| q.as_ref())
    }

    pub fn active_objects(&self) -> impl Iterator<Item = &AnswerObject> {
        self.objects.iter().filter(|o| o.active)
    }

    pub fn object(&self, id: ObjectId) -> Option<&AnswerObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Share of the round answered correctly (0 for an empty round)
    pub fn accuracy(&self) -> f64 {
        accuracy(self.correct_count, self.active_questions.len())
    }

    pub fn grade(&self) -> Grade {
        Grade::from_accuracy(self.accuracy())
    }

    /// Waiting out the pause after a correct answer
    pub fn is_advancing(&self) -> bool {
        self.advance_timer.is_some()
    }

    pub fn feedback_visible(&self) -> bool {
        self.feedback_timer > 0.0
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Pending events, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drop every answer object, telling the host about each
    pub(crate) fn clear_objects(&mut self) {
        for obj in std::mem::take(&mut self.objects) {
            self.events.push(GameEvent::ObjectRemoved { id: obj.id });
        }
    }

    pub(crate) fn emit_hud(&mut self) {
        self.emit(GameEvent::HudUpdated {
            score: self.score,
            lives: self.lives,
        });
    }

    pub(crate) fn emit_feedback(&mut self, correct: bool) {
        self.feedback_timer = self.settings.feedback_duration;
        self.emit(GameEvent::Feedback { correct });
    }
}
