//! # calculus_graph_quiz
//!
//! The core of a "match the graph" calculus quiz.
//!
//! Each question states properties of a function (values at points, sign of
//! the derivative on intervals, asymptotes and limits). The learner sees four
//! candidate graphs or descriptions, one correct and three distractors, and
//! picks a slot letter.
//!
//! ## How it works
//!
//! 1. Build a [`QuizSession`] from a [`QuizRequest`] (questions drawn from the
//!    built-in bank) or from your own list of [`Question`]s.
//! 2. Call [`QuizSession::current_view`] — every candidate is sampled over the
//!    question's domain with gaps at discontinuities, and the options are
//!    placed into slots A–D by a shuffle seeded from the question id.
//! 3. Feed clicks back with [`QuizSession::select_answer`],
//!    [`QuizSession::advance`], [`QuizSession::retreat`] and
//!    [`QuizSession::new_session`].
//!
//! ## Key properties
//!
//! - **Stable answer key**: the same question always puts the same candidate
//!   in the same slot, no matter how often it is re-rendered.
//! - **Never crashes on bad content**: a candidate that fails to evaluate is
//!   drawn as a flat placeholder and logged.
//! - **Answer hidden until chosen**: a [`QuestionView`] only carries the
//!   correct letter once a selection has been recorded.
//!
//! ## Quick start
//!
//! ```rust
//! use calculus_graph_quiz::{QuizConfig, QuizRequest, QuizSession, SlotLetter, TopicSelector};
//!
//! let request = QuizRequest {
//!     topic: TopicSelector::All,
//!     rng_seed: Some(7),
//!     shuffle_order: true,
//!     limit: Some(3),
//! };
//! let mut session = QuizSession::from_request(request, QuizConfig::default()).unwrap();
//!
//! let view = session.current_view();
//! println!("Q{}: {}", view.question_id, view.prompt);
//! assert!(view.result.is_none());
//!
//! session.select_answer(SlotLetter::B).unwrap();
//! let check = session.check_answer().unwrap();
//! println!("correct answer: {}", check.correct_letter);
//!
//! session.advance();
//! assert!(session.check_answer().is_none());
//! ```

pub mod config;
pub mod error;
pub mod quiz_engine;
pub mod render_adapter;

pub use config::QuizConfig;
pub use error::{ConfigError, EvalError, QuizError};
pub use quiz_engine::{
    generate_quiz, AnswerCheck, AnswerState, Candidate, Curve, Domain, Formula,
    OptionView, Question, QuestionTopic, QuestionView, QuizRequest, QuizSession,
    SamplePoint, SlotAssignment, SlotLetter, TopicSelector,
};
pub use render_adapter::to_render_payload;

#[cfg(test)]
mod tests;
