//! Authored questions grouped by topic.
//!
//! Each module exposes `questions()` returning its questions in authored
//! order. Ids are unique across the whole bank since they seed the option
//! shuffle.

/// 27–32
pub mod monotonicity;
/// 40–42
pub mod asymptotes;

use crate::quiz_engine::models::Question;

/// The full bank in authored order.
pub fn all_questions() -> Vec<Question> {
    let mut questions = monotonicity::questions();
    questions.extend(asymptotes::questions());
    questions
}
