use core::fmt;

/// Errors from loading questions or settings.
#[derive(Debug)]
pub enum QuestionError {
    /// The CSV needs a header row and at least one data row.
    MissingRows { found: usize },
    /// No usable question survived parsing.
    EmptyQuestionSet,
    /// A record whose correct answer is not among its choices.
    DataInvalid { row: usize, correct: String },
    Io(std::io::Error),
    Settings(serde_json::Error),
}

impl fmt::Display for QuestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRows { found } => {
                write!(f, "question file needs a header and one data row, got {found} rows")
            }
            Self::EmptyQuestionSet => write!(f, "no usable questions"),
            Self::DataInvalid { row, correct } => {
                write!(f, "row {row}: correct answer {correct:?} is not among the choices")
            }
            Self::Io(err) => write!(f, "failed to read questions: {err}"),
            Self::Settings(err) => write!(f, "invalid settings: {err}"),
        }
    }
}

impl std::error::Error for QuestionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Settings(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuestionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for QuestionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Settings(err)
    }
}
