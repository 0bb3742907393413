use std::collections::{BTreeMap, HashSet};

use tracing::{debug, error, info, warn};

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::quiz_engine::{
    evaluator,
    generator::generate_quiz,
    models::{AnswerCheck, AnswerState, OptionView, Question, QuestionView, QuizRequest, SlotLetter},
    shuffler::SlotAssignment,
};

/// A quiz set needs at least one question, every question well formed, and
/// ids unique since they seed the option order.
pub fn validate_questions(questions: &[Question]) -> Result<(), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::EmptyQuiz);
    }
    let mut seen = HashSet::new();
    for q in questions {
        q.validate()?;
        if !seen.insert(q.id) {
            return Err(QuizError::MalformedQuestion {
                id: q.id,
                reason: "duplicate question id in quiz set".to_string(),
            });
        }
    }
    Ok(())
}

/// Where a session's questions come from, and so what "new quiz" does.
#[derive(Debug, Clone)]
pub enum QuestionSource {
    /// An explicit list; a new session keeps it and starts over.
    Fixed,
    /// Drawn from the bank; a new session draws again with the next seed.
    Generated(QuizRequest),
}

/// Navigable quiz state for one learner.
///
/// Every navigation clears the current selection; an earlier answer is not
/// restored when coming back to a question.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
    last_selection: Option<SlotLetter>,
    /// Outcome of the latest answer per position, for the score.
    results: BTreeMap<usize, bool>,
    config: QuizConfig,
    source: QuestionSource,
    round: u64,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>, config: QuizConfig) -> Result<Self, QuizError> {
        Self::build(questions, config, QuestionSource::Fixed)
    }

    pub fn from_request(request: QuizRequest, config: QuizConfig) -> Result<Self, QuizError> {
        let questions = generate_quiz(&request);
        Self::build(questions, config, QuestionSource::Generated(request))
    }

    fn build(questions: Vec<Question>, config: QuizConfig, source: QuestionSource) -> Result<Self, QuizError> {
        config.validate()?;
        validate_questions(&questions)?;
        info!(count = questions.len(), "quiz session started");
        Ok(QuizSession {
            questions,
            position: 0,
            last_selection: None,
            results: BTreeMap::new(),
            config,
            source,
            round: 0,
        })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.position]
    }

    pub fn last_selection(&self) -> Option<SlotLetter> {
        self.last_selection
    }

    pub fn state(&self) -> AnswerState {
        match self.last_selection {
            Some(letter) => AnswerState::Answered(letter),
            None         => AnswerState::Unanswered,
        }
    }

    /// Record (or replace) the learner's choice for the current question.
    pub fn select_answer(&mut self, letter: SlotLetter) -> Result<(), QuizError> {
        let question = self.current_question();
        let assignment = SlotAssignment::for_question(question);
        if !assignment.contains(letter) {
            error!(%letter, question_id = question.id, "selection outside the slot alphabet");
            return Err(QuizError::InvalidSelection {
                letter: letter.as_char(),
                question_id: question.id,
                slots: assignment.len(),
            });
        }

        let is_correct = letter == assignment.correct_letter();
        debug!(%letter, question_id = question.id, is_correct, "answer selected");
        self.last_selection = Some(letter);
        self.results.insert(self.position, is_correct);
        Ok(())
    }

    /// Compare the recorded selection with the answer key. `None` while
    /// unanswered.
    pub fn check_answer(&self) -> Option<AnswerCheck> {
        let selected = self.last_selection?;
        let correct_letter = SlotAssignment::for_question(self.current_question()).correct_letter();
        Some(AnswerCheck {
            selected,
            correct_letter,
            is_correct: selected == correct_letter,
        })
    }

    pub fn can_advance(&self) -> bool {
        self.position + 1 < self.questions.len()
    }

    pub fn can_retreat(&self) -> bool {
        self.position > 0
    }

    /// Move to the next question. Returns `false` (and does nothing) at the end.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.move_to(self.position + 1);
        true
    }

    /// Move to the previous question. Returns `false` (and does nothing) at
    /// the start.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.move_to(self.position - 1);
        true
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.questions.len() {
            return false;
        }
        self.move_to(index);
        true
    }

    fn move_to(&mut self, index: usize) {
        debug!(from = self.position, to = index, "navigate");
        self.position = index;
        self.last_selection = None;
    }

    /// Start over: redraw generated questions, reset position, selection
    /// and score.
    pub fn new_session(&mut self) {
        if let QuestionSource::Generated(request) = &self.source {
            self.round += 1;
            let mut next = request.clone();
            next.rng_seed = request.rng_seed.map(|seed| seed.wrapping_add(self.round));
            let questions = generate_quiz(&next);
            match validate_questions(&questions) {
                Ok(()) => self.questions = questions,
                Err(err) => warn!(%err, "regenerated quiz rejected, keeping the previous questions"),
            }
        }
        self.position = 0;
        self.last_selection = None;
        self.results.clear();
        info!(round = self.round, count = self.questions.len(), "new quiz session");
    }

    /// Number of questions whose latest answer was correct.
    pub fn score(&self) -> usize {
        self.results.values().filter(|&&ok| ok).count()
    }

    /// Everything the renderer draws for the current question.
    pub fn current_view(&self) -> QuestionView {
        let question = self.current_question();
        let assignment = SlotAssignment::for_question(question);

        let options = assignment
            .slots()
            .iter()
            .filter_map(|slot| {
                let candidate = question.candidate(slot.candidate)?;
                Some(OptionView {
                    letter: slot.letter,
                    curve: evaluator::sample(candidate, question.domain, &self.config),
                    description: candidate.description.clone(),
                    vertical_asymptotes: candidate.vertical_asymptotes.clone(),
                    horizontal_asymptotes: candidate.horizontal_asymptotes.clone(),
                })
            })
            .collect();

        QuestionView {
            question_id: question.id,
            topic: question.topic,
            position: self.position,
            total: self.questions.len(),
            prompt: question.prompt.clone(),
            caption: question.caption.clone(),
            domain: question.domain,
            options,
            state: self.state(),
            result: self.check_answer(),
            can_advance: self.can_advance(),
            can_retreat: self.can_retreat(),
        }
    }
}
