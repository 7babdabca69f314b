//! Session transitions and the per-frame tick
//!
//! The host calls `tick` once per animation frame and forwards pointer/touch
//! hits as object IDs. Nothing here schedules itself.

use std::sync::Arc;

use super::grade::Grade;
use super::round::select_round;
use super::spawn::spawn_answers;
use super::state::{GameEvent, ObjectId, Outcome, Session, SessionPhase};
use crate::questions::QuestionRecord;

/// Input collected since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Objects the player hit (pointer-down/touch-start), oldest first
    pub selections: Vec<ObjectId>,
    /// Abort back to the start screen
    pub abort: bool,
}

/// What a selection did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Stale or duplicate hit; nothing changed
    Ignored,
    Correct,
    Wrong,
}

/// Start (or restart) a session over `questions`
pub fn boot(state: &mut Session, questions: &[Arc<QuestionRecord>]) {
    state.clear_objects();
    state.score = 0;
    state.lives = state.settings.max_lives;
    state.current_question_index = 0;
    state.correct_count = 0;
    state.advance_timer = None;
    state.feedback_timer = 0.0;
    state.time_ticks = 0;

    let limit = state.settings.question_limit;
    let order = state.settings.order;
    let start = state.settings.start_index;
    state.active_questions = select_round(questions, limit, order, start, &mut state.rng);
    state.phase = SessionPhase::Running;

    log::info!(
        "Session started: {} of {} questions (limit {})",
        state.active_questions.len(),
        questions.len(),
        limit
    );

    state.emit_hud();
    next_question(state);
}

/// Abort to the start screen. In-flight objects and timers are dropped first
/// so a late tick finds nothing to revive.
pub fn reset(state: &mut Session) {
    state.advance_timer = None;
    state.feedback_timer = 0.0;
    state.clear_objects();
    state.phase = SessionPhase::NotStarted;
    log::info!("Session reset");
}

/// Resolve a hit on object `id`
pub fn select(state: &mut Session, id: ObjectId) -> Resolution {
    if !state.is_running() {
        return Resolution::Ignored;
    }
    let Some(obj) = state.objects.iter_mut().find(|o| o.id == id && o.active) else {
        return Resolution::Ignored;
    };
    obj.active = false;
    let is_correct = obj.is_correct;

    if is_correct {
        state.score += state.settings.correct_reward;
        state.correct_count += 1;
        state.emit_hud();
        state.emit_feedback(true);

        state.clear_objects();
        state.current_question_index += 1;
        state.advance_timer = Some(state.settings.advance_delay);
        log::debug!(
            "Correct ({}/{})",
            state.current_question_index,
            state.active_questions.len()
        );
        Resolution::Correct
    } else {
        state.emit_feedback(false);
        mistake(state);
        Resolution::Wrong
    }
}

/// Advance the session by one frame
pub fn tick(state: &mut Session, input: &TickInput, dt: f32) {
    if input.abort {
        reset(state);
        return;
    }

    // Ticks that arrive after the session ended are stale
    if !state.is_running() {
        return;
    }

    state.time_ticks += 1;
    if state.feedback_timer > 0.0 {
        state.feedback_timer = (state.feedback_timer - dt).max(0.0);
    }

    for &id in &input.selections {
        select(state, id);
        if !state.is_running() {
            return;
        }
    }

    // Paused between questions: nothing is on screen
    if let Some(remaining) = state.advance_timer {
        let remaining = remaining - dt;
        if remaining > 0.0 {
            state.advance_timer = Some(remaining);
        } else {
            state.advance_timer = None;
            next_question(state);
        }
        return;
    }

    let bottom = state.settings.playfield_height;
    let mut exited = Vec::new();
    let mut missed_correct = false;

    for obj in state.objects.iter_mut().filter(|o| o.active) {
        obj.fall();
        state.events.push(GameEvent::ObjectMoved {
            id: obj.id,
            y: obj.pos.y,
        });

        if obj.is_below(bottom) {
            obj.active = false;
            if obj.is_correct {
                missed_correct = true;
                break;
            }
            exited.push(obj.id);
        }
    }

    if !exited.is_empty() {
        state.objects.retain(|o| !exited.contains(&o.id));
        for id in exited {
            state.emit(GameEvent::ObjectRemoved { id });
        }
    }

    // Letting the right answer fall through counts as a wrong answer
    if missed_correct {
        log::debug!("Missed question {}", state.current_question_index + 1);
        state.emit_feedback(false);
        mistake(state);
        if state.is_running() {
            state.current_question_index += 1;
            next_question(state);
        }
    }
}

/// Lose a life; the session fails at zero
fn mistake(state: &mut Session) {
    state.lives = state.lives.saturating_sub(1);
    state.emit_hud();
    if state.lives == 0 {
        end_session(state, Outcome::Failed);
    }
}

/// Spawn the current question, or complete the session if none are left
fn next_question(state: &mut Session) {
    if !state.is_running() {
        return;
    }

    state.clear_objects();

    let index = state.current_question_index;
    let Some(record) = state.active_questions.get(index).cloned() else {
        end_session(state, Outcome::Completed);
        return;
    };

    state.emit(GameEvent::QuestionShown {
        index,
        question: record.question.clone(),
    });

    if !record.is_winnable() {
        log::warn!(
            "Question {} ({:?}) has no correct choice among {:?}",
            index + 1,
            record.question,
            record.answers
        );
        state.emit(GameEvent::DataInvalid { index });
    }

    let first_id = state.peek_next_id();
    let objects = spawn_answers(&record, &state.settings, &mut state.rng, first_id);
    state.reserve_ids(objects.len());
    for obj in &objects {
        state.emit(GameEvent::ObjectSpawned {
            id: obj.id,
            text: obj.text.clone(),
            is_correct: obj.is_correct,
            lane: obj.lane,
            x: obj.pos.x,
            y: obj.pos.y,
        });
    }
    state.objects = objects;
}

fn end_session(state: &mut Session, outcome: Outcome) {
    state.advance_timer = None;
    state.clear_objects();
    state.phase = SessionPhase::Ended(outcome);

    let grade: Grade = state.grade();
    log::info!(
        "Session ended ({:?}): score {}, {}/{} correct, grade {}",
        outcome,
        state.score,
        state.correct_count,
        state.active_questions.len(),
        grade.as_str()
    );
    state.emit(GameEvent::SessionEnded {
        grade,
        score: state.score,
        completed: outcome == Outcome::Completed,
    });
}
