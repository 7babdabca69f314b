//! Final letter grade

use serde::{Deserialize, Serialize};

/// Letter grade from round accuracy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

/// Lower bounds, checked top-down
const THRESHOLDS: [(f64, Grade); 4] = [
    (0.95, Grade::S),
    (0.8, Grade::A),
    (0.6, Grade::B),
    (0.4, Grade::C),
];

impl Grade {
    pub fn from_accuracy(accuracy: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| accuracy >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::D)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

/// `correct / total`, or 0 when nothing was asked
pub fn accuracy(correct: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    }
}
