//! Core quiz engine: sampling, option shuffling, and session state.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: candidates, questions, slot letters, views |
//! | `evaluator` | Samples a candidate into a curve with gap markers |
//! | `shuffler`  | Seeded Fisher-Yates assignment of candidates to slot letters |
//! | `helpers`   | Builder functions used by the question bank |
//! | `generator` | `generate_quiz()` — picks and orders questions for a session |
//! | `session`   | `QuizSession` — navigation, answer checking, views |
//! | `bank`      | Authored questions grouped by topic |

pub mod bank;
pub mod evaluator;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod session;
pub mod shuffler;

pub use generator::generate_quiz;
pub use models::{
    AnswerCheck, AnswerState, Candidate, Curve, DisplaySlot, Domain, Formula,
    OptionView, Piece, Question, QuestionTopic, QuestionView, QuizRequest,
    SamplePoint, SlotLetter, TopicSelector, OPTIONS_PER_QUESTION,
};
pub use session::{validate_questions, QuestionSource, QuizSession};
pub use shuffler::{option_seed, SlotAssignment};
