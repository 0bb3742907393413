use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{EvalError, QuizError};

/// Every question shows one correct candidate and this many options in total.
pub const OPTIONS_PER_QUESTION: usize = 4;

// ---------------------------------------------------------------------------
// Candidate primitives
// ---------------------------------------------------------------------------

/// One branch of a piecewise formula, used for `x < upto`.
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    pub upto: f64,
    pub f: fn(f64) -> f64,
}

/// How a candidate computes `y` from `x`.
#[derive(Debug, Clone)]
pub enum Formula {
    /// Closed form. Non-finite output means "undefined here".
    Closed(fn(f64) -> f64),
    /// Pieces ordered by `upto`; the last one should use `f64::INFINITY`.
    Piecewise(Vec<Piece>),
    /// Partial function that reports where it is not defined.
    Checked(fn(f64) -> Result<f64, EvalError>),
}

impl Formula {
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Formula::Closed(f) => Ok(f(x)),
            Formula::Piecewise(pieces) => pieces
                .iter()
                .find(|p| x < p.upto)
                .or_else(|| pieces.last())
                .map(|p| (p.f)(x))
                .ok_or_else(|| EvalError::undefined(x, "piecewise formula has no pieces")),
            Formula::Checked(f) => f(x),
        }
    }
}

/// A selectable graph (and optional text description) for one question.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub formula: Formula,
    pub vertical_asymptotes: Vec<f64>,
    /// Removable holes and jump discontinuities. The sample nearest each one
    /// is always blanked, whatever the grid.
    pub breaks: Vec<f64>,
    /// Reference lines only; never evaluated.
    pub horizontal_asymptotes: Vec<f64>,
    pub description: Option<String>,
}

impl Candidate {
    pub fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        self.formula.eval(x)
    }
}

/// Closed sampling interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Domain { min, max }
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionTopic {
    /// Values, sign of f' on intervals, where f' is zero or does not exist.
    Monotonicity,
    /// Rational functions: vertical/horizontal asymptotes and limits.
    Asymptotes,
}

impl fmt::Display for QuestionTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionTopic::Monotonicity => write!(f, "Monotonicity & Critical Points"),
            QuestionTopic::Asymptotes   => write!(f, "Asymptotes & Limits"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Question {
    pub id: u32,
    pub topic: QuestionTopic,
    pub domain: Domain,
    /// LaTeX statement of the function's properties.
    pub prompt: String,
    /// Second-language caption shown under the prompt.
    pub caption: Option<String>,
    pub correct: Candidate,
    pub distractors: Vec<Candidate>,
}

impl Question {
    /// Number of display slots this question needs.
    pub fn option_count(&self) -> usize {
        self.distractors.len() + 1
    }

    /// Candidate by combined index: 0 is the correct one, then distractors.
    pub fn candidate(&self, index: usize) -> Option<&Candidate> {
        match index {
            0 => Some(&self.correct),
            i => self.distractors.get(i - 1),
        }
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.option_count() != OPTIONS_PER_QUESTION {
            return Err(QuizError::MalformedQuestion {
                id: self.id,
                reason: format!(
                    "expected {} distractors, found {}",
                    OPTIONS_PER_QUESTION - 1,
                    self.distractors.len()
                ),
            });
        }
        if !self.domain.is_valid() {
            return Err(QuizError::MalformedQuestion {
                id: self.id,
                reason: format!("empty or non-finite domain [{}, {}]", self.domain.min, self.domain.max),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

/// Display label of a slot: index 0 is `A`, 1 is `B`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub struct SlotLetter(u8);

impl SlotLetter {
    pub const A: SlotLetter = SlotLetter(0);
    pub const B: SlotLetter = SlotLetter(1);
    pub const C: SlotLetter = SlotLetter(2);
    pub const D: SlotLetter = SlotLetter(3);

    pub fn from_index(index: usize) -> Option<Self> {
        (index < 26).then(|| SlotLetter(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl TryFrom<char> for SlotLetter {
    type Error = QuizError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(SlotLetter(upper as u8 - b'A'))
        } else {
            Err(QuizError::InvalidLetter(c))
        }
    }
}

impl From<SlotLetter> for char {
    fn from(letter: SlotLetter) -> char {
        letter.as_char()
    }
}

impl fmt::Display for SlotLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySlot {
    pub letter: SlotLetter,
    /// Index into `[correct, distractors...]`.
    pub candidate: usize,
}

// ---------------------------------------------------------------------------
// Request / view types
// ---------------------------------------------------------------------------

/// Which topics a generated quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicSelector {
    All,
    Only(QuestionTopic),
}

impl From<QuestionTopic> for TopicSelector {
    fn from(t: QuestionTopic) -> Self {
        TopicSelector::Only(t)
    }
}

impl TopicSelector {
    pub fn matches(self, topic: QuestionTopic) -> bool {
        match self {
            TopicSelector::All     => true,
            TopicSelector::Only(t) => t == topic,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub topic: TopicSelector,
    /// `None` draws the question order from entropy.
    pub rng_seed: Option<u64>,
    /// Keep the authored order when false.
    pub shuffle_order: bool,
    pub limit: Option<usize>,
}

impl QuizRequest {
    /// Every topic, shuffled from entropy, no limit.
    pub fn new(topic: impl Into<TopicSelector>) -> Self {
        Self {
            topic: topic.into(),
            rng_seed: None,
            shuffle_order: true,
            limit: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerState {
    Unanswered,
    Answered(SlotLetter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCheck {
    pub selected: SlotLetter,
    pub correct_letter: SlotLetter,
    pub is_correct: bool,
}

/// One sample; `y == None` is a gap the renderer must not bridge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub points: Vec<SamplePoint>,
    /// The candidate failed to evaluate and this is the flat placeholder.
    pub fell_back: bool,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn gap_count(&self) -> usize {
        self.points.iter().filter(|p| p.y.is_none()).count()
    }

    /// The sample whose x is closest to `x`.
    pub fn nearest(&self, x: f64) -> Option<&SamplePoint> {
        self.points
            .iter()
            .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionView {
    pub letter: SlotLetter,
    pub curve: Curve,
    pub description: Option<String>,
    pub vertical_asymptotes: Vec<f64>,
    pub horizontal_asymptotes: Vec<f64>,
}

/// Everything the renderer needs for the current question.
///
/// `result` stays `None` until an answer is recorded, so the correct slot is
/// never visible before the learner commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub question_id: u32,
    pub topic: QuestionTopic,
    pub position: usize,
    pub total: usize,
    pub prompt: String,
    pub caption: Option<String>,
    pub domain: Domain,
    pub options: Vec<OptionView>,
    pub state: AnswerState,
    pub result: Option<AnswerCheck>,
    pub can_advance: bool,
    pub can_retreat: bool,
}
