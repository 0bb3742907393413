use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::models::{DisplaySlot, Question, SlotLetter};

/// Seed for a question's option order.
///
/// Only the stable question id goes in, so re-rendering the same question
/// always lands the answer in the same slot.
pub fn option_seed(question_id: u32) -> u64 {
    u64::from(question_id)
}

/// Slot → candidate bijection for one question instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAssignment {
    slots: Vec<DisplaySlot>,
    correct: SlotLetter,
}

impl SlotAssignment {
    /// Shuffle `count` candidates (index 0 is the correct one) into slots.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0 or more than 26, the size of the `A`–`Z`
    /// alphabet. [`Question::validate`] keeps authored questions at
    /// [`OPTIONS_PER_QUESTION`](crate::quiz_engine::models::OPTIONS_PER_QUESTION).
    pub fn with_seed(count: usize, seed: u64) -> Self {
        assert!((1..=26).contains(&count), "slot count {count} outside A-Z");

        let mut rng = StdRng::seed_from_u64(seed);
        let mut order: Vec<usize> = (0..count).collect();

        // Fisher-Yates shuffle
        for i in (1..order.len()).rev() {
            let j = rng.gen_range(0..=i);
            order.swap(i, j);
        }

        let slots: Vec<DisplaySlot> = order
            .into_iter()
            .enumerate()
            .filter_map(|(i, candidate)| {
                SlotLetter::from_index(i).map(|letter| DisplaySlot { letter, candidate })
            })
            .collect();
        let correct = slots
            .iter()
            .find(|s| s.candidate == 0)
            .map(|s| s.letter)
            .unwrap_or(SlotLetter::A);

        SlotAssignment { slots, correct }
    }

    pub fn for_question(question: &Question) -> Self {
        Self::with_seed(question.option_count(), option_seed(question.id))
    }

    /// Slots in letter order.
    pub fn slots(&self) -> &[DisplaySlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, letter: SlotLetter) -> bool {
        letter.index() < self.slots.len()
    }

    pub fn candidate_at(&self, letter: SlotLetter) -> Option<usize> {
        self.slots.get(letter.index()).map(|s| s.candidate)
    }

    pub fn correct_letter(&self) -> SlotLetter {
        self.correct
    }
}
