//! Answer spawning: one falling object per choice

use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;

use super::state::{AnswerObject, ObjectId};
use crate::consts::*;
use crate::questions::QuestionRecord;
use crate::settings::Settings;

/// Left edge of `lane` out of `lanes`, kept inside the playfield
pub fn lane_x(lane: usize, lanes: usize, width: f32) -> f32 {
    let lane_width = width / lanes.max(1) as f32;
    let max_x = (width - OBJECT_WIDTH).max(0.0);
    (lane as f32 * lane_width + LANE_MARGIN).min(max_x)
}

/// Build the answer objects for one question.
///
/// Repeated choices are collapsed (first occurrence wins) so the correct
/// answer can only spawn once. IDs run from `first_id` upward.
pub fn spawn_answers<R: Rng + ?Sized>(
    record: &QuestionRecord,
    settings: &Settings,
    rng: &mut R,
    first_id: ObjectId,
) -> Vec<AnswerObject> {
    let mut answers: Vec<&str> = Vec::with_capacity(record.answers.len());
    for answer in &record.answers {
        if !answers.contains(&answer.as_str()) {
            answers.push(answer);
        }
    }
    answers.shuffle(rng);

    let lanes = answers.len();
    answers
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let y = -SPAWN_OFFSET - rng.random::<f32>() * SPAWN_JITTER;
            let speed = settings.fall_speed + rng.random::<f32>() * settings.speed_jitter;
            AnswerObject {
                id: first_id + i as ObjectId,
                text: text.to_string(),
                is_correct: text == record.correct,
                lane: i,
                pos: Vec2::new(lane_x(i, lanes, settings.playfield_width), y),
                speed,
                active: true,
            }
        })
        .collect()
}
