//! Error types for the quiz core.
//!
//! Only [`QuizError`] and [`ConfigError`] ever reach a caller. [`EvalError`]
//! is produced by partial candidate formulas and is absorbed by the
//! evaluator, which falls back to a flat curve instead of failing the render.

use thiserror::Error;

/// A candidate formula could not be evaluated at a sample point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The formula is not defined at `x` (e.g. log of a negative number).
    #[error("undefined at x = {x}: {reason}")]
    Undefined { x: f64, reason: String },
}

impl EvalError {
    pub fn undefined(x: f64, reason: impl Into<String>) -> Self {
        EvalError::Undefined { x, reason: reason.into() }
    }
}

/// Errors raised by session construction and answer submission.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The renderer submitted a letter that is not one of the current slots.
    #[error("invalid selection '{letter}': question {question_id} only has {slots} slots")]
    InvalidSelection { letter: char, question_id: u32, slots: usize },

    /// A character that is not a slot label at all.
    #[error("'{0}' is not a slot letter (expected A-Z)")]
    InvalidLetter(char),

    /// Authored question data breaks a structural invariant.
    #[error("question {id} is malformed: {reason}")]
    MalformedQuestion { id: u32, reason: String },

    /// A session needs at least one question.
    #[error("quiz has no questions")]
    EmptyQuiz,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating [`crate::QuizConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
