use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::quiz_engine::{
    bank,
    models::{Question, QuizRequest},
};

/// Build the question list for a new session.
///
/// Filters the bank by topic, then optionally shuffles the order and keeps
/// the first `limit` questions. Option order inside each question does not
/// depend on this seed.
pub fn generate_quiz(request: &QuizRequest) -> Vec<Question> {
    let mut questions: Vec<Question> = bank::all_questions()
        .into_iter()
        .filter(|q| request.topic.matches(q.topic))
        .collect();

    if request.shuffle_order {
        let mut rng: StdRng = match request.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        // Fisher-Yates shuffle
        for i in (1..questions.len()).rev() {
            let j = rng.gen_range(0..=i);
            questions.swap(i, j);
        }
    }

    if let Some(limit) = request.limit {
        questions.truncate(limit);
    }

    debug!(
        count = questions.len(),
        seed = ?request.rng_seed,
        "generated quiz: {:?}",
        questions.iter().map(|q| q.id).collect::<Vec<_>>()
    );
    questions
}
