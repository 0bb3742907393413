//! Shared builder functions for authoring questions.
//!
//! Every bank module assembles the same pieces: formulas, candidates with
//! their asymptotes, and the final question. These helpers keep the bank
//! files down to the math.

use crate::quiz_engine::models::*;

/// One branch of a piecewise formula, covering `x < upto`.
pub fn piece(upto: f64, f: fn(f64) -> f64) -> Piece {
    Piece { upto, f }
}

/// Piecewise formula from branches ordered by `upto`.
pub fn piecewise(pieces: Vec<Piece>) -> Formula {
    debug_assert!(
        pieces.windows(2).all(|w| w[0].upto < w[1].upto),
        "piecewise branches must be ordered by upper bound"
    );
    Formula::Piecewise(pieces)
}

/// Build a candidate graph with its vertical and horizontal asymptotes.
pub fn candidate(formula: Formula, vertical: &[f64], horizontal: &[f64]) -> Candidate {
    Candidate {
        formula,
        vertical_asymptotes: vertical.to_vec(),
        breaks: Vec::new(),
        horizontal_asymptotes: horizontal.to_vec(),
        description: None,
    }
}

/// Mark holes or jumps that must not be drawn across.
pub fn with_breaks(mut c: Candidate, at: &[f64]) -> Candidate {
    c.breaks = at.to_vec();
    c
}

/// Attach the text shown when options are offered as descriptions.
pub fn described(mut c: Candidate, text: impl Into<String>) -> Candidate {
    c.description = Some(text.into());
    c
}

/// Assemble the final [`Question`].
pub fn question(
    id: u32, topic: QuestionTopic, domain: Domain,
    prompt: &str, caption: Option<&str>,
    correct: Candidate, distractors: Vec<Candidate>,
) -> Question {
    Question {
        id,
        topic,
        domain,
        prompt: prompt.to_string(),
        caption: caption.map(str::to_string),
        correct,
        distractors,
    }
}
