//! Crate-level tests for `calculus_graph_quiz`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Shuffle | Same question → same bijection; full alphabet; one correct slot |
//! | Sampling | Gaps at declared asymptotes; idempotence; `x/(x²-1)` scenario; fallback |
//! | Bank | Every question validates; ids unique; no candidate falls back |
//! | Session | Navigation bounds; two-question round trip; re-render stability |

use std::collections::HashSet;

use crate::config::QuizConfig;
use crate::error::EvalError;
use crate::quiz_engine::{
    bank,
    evaluator::sample,
    helpers::candidate,
    option_seed, AnswerState, Domain, Formula, Question, QuizSession, SlotAssignment, SlotLetter,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn all_candidates(q: &Question) -> impl Iterator<Item = &crate::Candidate> {
    (0..q.option_count()).filter_map(move |i| q.candidate(i))
}

fn letters(n: usize) -> Vec<SlotLetter> {
    (0..n).filter_map(SlotLetter::from_index).collect()
}

/// Smallest question id whose correct candidate lands in `letter`.
fn id_with_correct_slot(letter: SlotLetter) -> u32 {
    (1..=1000u32)
        .find(|&id| SlotAssignment::with_seed(4, option_seed(id)).correct_letter() == letter)
        .expect("some id in 1..=1000 puts the answer in every slot")
}

fn bank_question(id: u32) -> Question {
    bank::all_questions().into_iter().find(|q| q.id == id).unwrap()
}

// ── shuffle ──────────────────────────────────────────────────────────────────

#[test]
fn shuffle_is_identical_across_invocations() {
    for q in bank::all_questions() {
        let a = SlotAssignment::for_question(&q);
        let b = SlotAssignment::for_question(&q);
        assert_eq!(a, b, "assignment changed between calls for question {}", q.id);
    }
}

#[test]
fn shuffle_uses_full_alphabet_with_one_correct_slot() {
    for q in bank::all_questions() {
        let a = SlotAssignment::for_question(&q);
        let seen: Vec<SlotLetter> = a.slots().iter().map(|s| s.letter).collect();
        assert_eq!(seen, letters(4), "question {}", q.id);

        let candidates: HashSet<usize> = a.slots().iter().map(|s| s.candidate).collect();
        assert_eq!(candidates.len(), 4, "duplicate candidate in question {}", q.id);

        let correct = a.slots().iter().filter(|s| s.candidate == 0).count();
        assert_eq!(correct, 1, "question {} must have exactly one correct slot", q.id);
    }
}

#[test]
fn shuffle_seed_ignores_candidate_values() {
    // Swapping the correct formula for a different one must not move the slot.
    let original = bank_question(27);
    let mut edited = original.clone();
    edited.correct = candidate(Formula::Closed(|x| x + 1000.0), &[], &[]);
    assert_eq!(
        SlotAssignment::for_question(&original),
        SlotAssignment::for_question(&edited)
    );
}

// ── sampling ─────────────────────────────────────────────────────────────────

#[test]
fn every_declared_asymptote_has_a_gap_at_or_next_to_it() {
    let config = QuizConfig::default();
    for q in bank::all_questions() {
        for c in all_candidates(&q) {
            let curve = sample(c, q.domain, &config);
            for &a in c.vertical_asymptotes.iter().filter(|&&a| q.domain.contains(a)) {
                let nearest = curve.nearest(a).unwrap();
                assert!(
                    nearest.y.is_none(),
                    "question {}: sample at x = {} next to asymptote {a} is {:?}",
                    q.id, nearest.x, nearest.y
                );
            }
        }
    }
}

#[test]
fn every_declared_break_has_a_gap_at_default_sampling() {
    let config = QuizConfig::default();
    for q in bank::all_questions() {
        for c in all_candidates(&q) {
            let curve = sample(c, q.domain, &config);
            for &b in c.breaks.iter().filter(|&&b| q.domain.contains(b)) {
                let nearest = curve.nearest(b).unwrap();
                assert!(
                    nearest.y.is_none(),
                    "question {}: break at {b} drawn through x = {} ({:?})",
                    q.id, nearest.x, nearest.y
                );
            }
        }
    }
}

#[test]
fn sampling_is_idempotent() {
    let config = QuizConfig::default();
    for q in bank::all_questions() {
        for c in all_candidates(&q) {
            assert_eq!(sample(c, q.domain, &config), sample(c, q.domain, &config));
        }
    }
}

#[test]
fn rational_scenario_zero_at_origin_gaps_at_poles() {
    let c = candidate(Formula::Closed(|x| x / (x * x - 1.0)), &[-1.0, 1.0], &[0.0]);
    let curve = sample(&c, Domain::new(-6.0, 6.0), &QuizConfig::default());

    let origin = curve.nearest(0.0).unwrap();
    assert_eq!(origin.x, 0.0);
    assert_eq!(origin.y, Some(0.0));

    for a in [-1.0, 1.0] {
        let left = curve.points.iter().filter(|p| p.x <= a).last().unwrap();
        let right = curve.points.iter().find(|p| p.x >= a).unwrap();
        assert!(left.y.is_none(), "sample left of {a} at x = {} is {:?}", left.x, left.y);
        assert!(right.y.is_none(), "sample right of {a} at x = {} is {:?}", right.x, right.y);
    }
}

#[test]
fn broken_candidate_falls_back_to_full_flat_curve() {
    let broken = candidate(
        Formula::Checked(|x| Err(EvalError::undefined(x, "always fails"))),
        &[],
        &[],
    );
    let config = QuizConfig::default();
    let curve = sample(&broken, Domain::new(-6.0, 6.0), &config);
    assert!(curve.fell_back);
    assert_eq!(curve.len(), config.sample_count);
    assert!(curve.points.iter().all(|p| p.y == Some(0.0)));
}

// ── bank ─────────────────────────────────────────────────────────────────────

#[test]
fn every_bank_question_validates() {
    for q in bank::all_questions() {
        q.validate().unwrap_or_else(|e| panic!("{e}"));
    }
}

#[test]
fn bank_ids_are_unique() {
    let qs = bank::all_questions();
    let ids: HashSet<u32> = qs.iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), qs.len());
}

#[test]
fn no_bank_candidate_falls_back() {
    let config = QuizConfig::default();
    for q in bank::all_questions() {
        for (i, c) in all_candidates(&q).enumerate() {
            assert!(
                !sample(c, q.domain, &config).fell_back,
                "question {} candidate {i} failed to evaluate",
                q.id
            );
        }
    }
}

// ── session ──────────────────────────────────────────────────────────────────

#[test]
fn navigation_is_a_no_op_at_the_bounds() {
    let mut s = QuizSession::new(bank::all_questions(), QuizConfig::default()).unwrap();
    assert!(!s.retreat());
    assert_eq!(s.position(), 0);

    while s.advance() {}
    let last = s.len() - 1;
    assert_eq!(s.position(), last);
    assert!(!s.advance());
    assert_eq!(s.position(), last);
}

#[test]
fn two_question_round_trip() {
    let b_id = id_with_correct_slot(SlotLetter::B);
    let mut first = bank_question(40);
    first.id = b_id;
    let mut second = bank_question(27);
    second.id = b_id + 1000;

    let mut s = QuizSession::new(vec![first, second], QuizConfig::default()).unwrap();
    s.select_answer(SlotLetter::try_from('B').unwrap()).unwrap();
    let check = s.check_answer().unwrap();
    assert!(check.is_correct);
    assert_eq!(check.correct_letter, SlotLetter::B);

    assert!(s.advance());
    assert_eq!(s.state(), AnswerState::Unanswered);
    assert_eq!(s.last_selection(), None);

    assert!(s.retreat());
    assert_eq!(s.position(), 0);
    assert_eq!(s.state(), AnswerState::Unanswered);
    assert!(s.check_answer().is_none());
}

#[test]
fn wrong_answer_reports_the_correct_letter() {
    let c_id = id_with_correct_slot(SlotLetter::C);
    let mut q = bank_question(41);
    q.id = c_id;
    let mut s = QuizSession::new(vec![q], QuizConfig::default()).unwrap();
    s.select_answer(SlotLetter::A).unwrap();
    let check = s.check_answer().unwrap();
    assert!(!check.is_correct);
    assert_eq!(check.selected, SlotLetter::A);
    assert_eq!(check.correct_letter, SlotLetter::C);
}

#[test]
fn rerender_after_unrelated_interaction_keeps_slots() {
    let config = QuizConfig { sample_count: 101, ..QuizConfig::default() };
    let mut s = QuizSession::new(bank::all_questions(), config).unwrap();
    let before = s.current_view();
    s.advance();
    s.retreat();
    s.select_answer(SlotLetter::D).unwrap();
    let after = s.current_view();

    assert_eq!(before.question_id, after.question_id);
    for (x, y) in before.options.iter().zip(after.options.iter()) {
        assert_eq!(x.letter, y.letter);
        assert_eq!(x.curve, y.curve);
    }
    let correct = after.result.unwrap().correct_letter;
    assert_eq!(correct, SlotAssignment::for_question(s.current_question()).correct_letter());
}

#[test]
fn view_hides_answer_until_selected() {
    let mut s = QuizSession::new(bank::all_questions(), QuizConfig::default()).unwrap();
    let view = s.current_view();
    assert_eq!(view.state, AnswerState::Unanswered);
    assert!(view.result.is_none());
    assert_eq!(view.options.len(), 4);

    s.select_answer(SlotLetter::A).unwrap();
    let view = s.current_view();
    assert_eq!(view.state, AnswerState::Answered(SlotLetter::A));
    assert!(view.result.is_some());
}

#[test]
fn slot_letter_parsing() {
    assert_eq!(SlotLetter::try_from('b').unwrap(), SlotLetter::B);
    assert_eq!(SlotLetter::D.as_char(), 'D');
    assert!(SlotLetter::try_from('7').is_err());
    assert_eq!(serde_json::to_string(&SlotLetter::C).unwrap(), "\"C\"");
}
