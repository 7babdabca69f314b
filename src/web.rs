//! Browser bindings
//!
//! The page owns the DOM and the `requestAnimationFrame` loop. Per frame it
//! calls `tick(dt)`, then `drain_events()` and renders what changed.
//! Pointer-down/touch-start handlers call `select(id)` directly; the browser
//! event loop already serializes them with frame callbacks.

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::consts::QUESTION_LIMIT_OPTIONS;
use crate::questions::{QuestionRecord, parse_csv};
use crate::settings::Settings;
use crate::sim::{self, Resolution, Session, TickInput};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Quiz Invaders starting...");
}

/// A quiz session driven from JavaScript
#[wasm_bindgen]
pub struct WasmQuiz {
    session: Session,
    questions: Vec<Arc<QuestionRecord>>,
}

#[wasm_bindgen]
impl WasmQuiz {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Self {
        Self {
            session: Session::new(Settings::load(), seed),
            questions: Vec::new(),
        }
    }

    /// Replace the question pool; returns the number of questions loaded
    pub fn load_csv(&mut self, text: &str) -> Result<usize, JsValue> {
        let questions = parse_csv(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.questions = sim::share(questions);
        Ok(self.questions.len())
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// 0 plays every question
    pub fn set_question_limit(&mut self, limit: usize) {
        self.session.settings.question_limit = limit;
        self.session.settings.save();
    }

    /// Limits the question-count picker offers (0 = all)
    pub fn question_limit_options() -> Vec<u32> {
        QUESTION_LIMIT_OPTIONS.iter().map(|&n| n as u32).collect()
    }

    /// Play a sequential round from this question on
    pub fn set_start_index(&mut self, start: usize) {
        self.session.settings.start_index = start;
        self.session.settings.save();
    }

    /// Game area was resized
    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.settings.resize(width, height);
    }

    pub fn boot(&mut self) {
        sim::boot(&mut self.session, &self.questions);
    }

    pub fn reset(&mut self) {
        sim::reset(&mut self.session);
    }

    pub fn tick(&mut self, dt: f32) {
        sim::tick(&mut self.session, &TickInput::default(), dt);
    }

    /// Returns "Correct", "Wrong" or "Ignored"
    pub fn select(&mut self, id: u32) -> String {
        let resolution = sim::select(&mut self.session, id);
        match resolution {
            Resolution::Correct => "Correct",
            Resolution::Wrong => "Wrong",
            Resolution::Ignored => "Ignored",
        }
        .to_string()
    }

    /// Pending events as a JSON array
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        let events = self.session.drain_events();
        serde_json::to_string(&events).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn score(&self) -> u64 {
        self.session.score
    }

    pub fn lives(&self) -> u8 {
        self.session.lives
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn feedback_visible(&self) -> bool {
        self.session.feedback_visible()
    }

    /// Text of the question on screen, if any
    pub fn question_text(&self) -> Option<String> {
        self.session.current_question().map(|q| q.question.clone())
    }
}
