//! Question records and the CSV question source
//!
//! File format: a header row, then one question per row:
//! `question,correct,wrong1,wrong2,...`. Commas inside double quotes
//! do not split fields.

use serde::{Deserialize, Serialize};

use crate::error::QuestionError;

/// A single quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub correct: String,
    /// All choices, correct one included
    pub answers: Vec<String>,
}

impl QuestionRecord {
    pub fn new(
        question: impl Into<String>,
        correct: impl Into<String>,
        answers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            question: question.into(),
            correct: correct.into(),
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the correct answer can actually be picked
    pub fn is_winnable(&self) -> bool {
        self.answers.iter().any(|a| *a == self.correct)
    }

    /// Check the record invariant (`correct` is one of `answers`)
    pub fn validate(&self, row: usize) -> Result<(), QuestionError> {
        if self.is_winnable() {
            Ok(())
        } else {
            Err(QuestionError::DataInvalid {
                row,
                correct: self.correct.clone(),
            })
        }
    }
}

/// Validate every record, returning the problems found (records are kept)
pub fn validate_all(questions: &[QuestionRecord]) -> Vec<QuestionError> {
    questions
        .iter()
        .enumerate()
        .filter_map(|(i, q)| q.validate(i + 1).err())
        .collect()
}

/// Split one CSV line, honoring double quotes
fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Parse question CSV text
pub fn parse_csv(data: &str) -> Result<Vec<QuestionRecord>, QuestionError> {
    let rows: Vec<Vec<String>> = data
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect();

    if rows.len() < 2 {
        return Err(QuestionError::MissingRows { found: rows.len() });
    }

    let questions: Vec<QuestionRecord> = rows
        .into_iter()
        .skip(1)
        .filter(|row| row.len() >= 2)
        .map(|row| {
            let mut fields = row.into_iter();
            let question = fields.next().unwrap_or_default();
            let choices: Vec<String> = fields.collect();
            // An empty correct field is kept so validation can flag the record
            let correct = choices.first().cloned().unwrap_or_default();
            let answers = choices.into_iter().filter(|a| !a.is_empty()).collect();
            QuestionRecord {
                question,
                correct,
                answers,
            }
        })
        .collect();

    if questions.is_empty() {
        return Err(QuestionError::EmptyQuestionSet);
    }

    for err in validate_all(&questions) {
        log::warn!("{err}");
    }

    log::info!("Parsed {} questions", questions.len());
    Ok(questions)
}

/// Read and parse a question file
#[cfg(not(target_arch = "wasm32"))]
pub fn load_csv_file(path: impl AsRef<std::path::Path>) -> Result<Vec<QuestionRecord>, QuestionError> {
    let data = std::fs::read_to_string(path)?;
    parse_csv(&data)
}
