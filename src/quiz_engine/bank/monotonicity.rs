//! Questions 27–32: sketch a graph from point values, the sign of f′ on
//! intervals, and where f′ is zero or does not exist.
//!
//! Distractors each break exactly one stated property: a reflected curve,
//! a corner where the derivative should exist (or the reverse), or a shape
//! that ignores one interval.

use crate::quiz_engine::{
    helpers::{candidate, piece, piecewise, question, with_breaks},
    models::{Formula, Domain, Question, QuestionTopic},
};

const CAPTION: &str = "أي رسم بياني يحقق جميع الشروط؟";

pub fn questions() -> Vec<Question> {
    vec![q27(), q28(), q29(), q30(), q31(), q32()]
}

/// Decreasing, rising on (0, 2), decreasing again; smooth turning points.
fn q27() -> Question {
    let correct = candidate(Formula::Closed(|x| -x.powi(3) + 3.0 * x * x + 1.0), &[], &[]);

    // Mirror image: f(0) = 5, f(2) = 1 with the monotonicity reversed.
    let flipped = candidate(Formula::Closed(|x| x.powi(3) - 3.0 * x * x + 5.0), &[], &[]);
    // Same signs of f' but corners at 0 and 2.
    let sharp = candidate(
        piecewise(vec![
            piece(0.0, |x| 1.0 - 2.0 * x),
            piece(2.0, |x| 1.0 + 2.0 * x),
            piece(f64::INFINITY, |x| 5.0 - 2.0 * (x - 2.0)),
        ]),
        &[],
        &[],
    );
    // Passes through both points but never turns.
    let monotone = candidate(Formula::Closed(|x| 0.25 * x.powi(3) + x + 1.0), &[], &[]);

    question(
        27, QuestionTopic::Monotonicity, Domain::new(-2.0, 4.0),
        r"f(0)=1, \quad f(2)=5, \\ f'(x) < 0 \text{ for } x < 0 \text{ and } x > 2, \\ f'(x) > 0 \text{ for } 0 < x < 2",
        Some(CAPTION),
        correct, vec![flipped, sharp, monotone],
    )
}

/// Smooth minimum at -1, corner maximum at 2.
fn q28() -> Question {
    let correct = candidate(
        piecewise(vec![
            piece(2.0, |x| 1.0 + 4.0 / 9.0 * (x + 1.0).powi(2)),
            piece(f64::INFINITY, |x| 5.0 - 2.0 * (x - 2.0)),
        ]),
        &[],
        &[],
    );

    // Cubic with f'(-1) = f'(2) = 0: the maximum is smooth.
    let smooth = candidate(
        Formula::Closed(|x| -8.0 / 9.0 * (x.powi(3) / 3.0 - x * x / 2.0 - 2.0 * x) + 55.0 / 27.0),
        &[],
        &[],
    );
    // Corner at the minimum too, so f'(-1) does not exist.
    let sharp_min = candidate(
        piecewise(vec![
            piece(2.0, |x| 1.0 + 4.0 / 3.0 * (x + 1.0).abs()),
            piece(f64::INFINITY, |x| 5.0 - 2.0 * (x - 2.0)),
        ]),
        &[],
        &[],
    );
    let line = candidate(Formula::Closed(|x| -x + 3.0), &[], &[]);

    question(
        28, QuestionTopic::Monotonicity, Domain::new(-4.0, 5.0),
        r"f(-1)=1, \quad f(2)=5, \\ f'(x) < 0 \text{ for } x < -1 \text{ and } x > 2, \\ f'(x) > 0 \text{ for } -1 < x < 2, \\ f'(-1)=0, \quad f'(2) \text{ does not exist}",
        Some(CAPTION),
        correct, vec![smooth, sharp_min, line],
    )
}

/// Vertical asymptote at 0, smooth maximum f(3) = 0.
fn q29() -> Question {
    let correct = candidate(
        piecewise(vec![
            piece(0.0, |x| 1.0 / x),
            piece(f64::INFINITY, |x| -(x - 3.0).powi(2) / x),
        ]),
        &[0.0],
        &[],
    );

    // Reflected across the x-axis: a minimum at 3 instead.
    let min = candidate(
        piecewise(vec![
            piece(0.0, |x| -1.0 / x),
            piece(f64::INFINITY, |x| (x - 3.0).powi(2) / x),
        ]),
        &[0.0],
        &[],
    );
    // Only a removable hole at 0, no asymptote.
    let hole = with_breaks(
        candidate(
            Formula::Closed(|x| if x == 0.0 { f64::NAN } else { -(x - 3.0).powi(2) }),
            &[],
            &[],
        ),
        &[0.0],
    );
    let shifted = candidate(
        piecewise(vec![
            piece(3.0, |x| (x - 3.0).powi(2) + 3.0),
            piece(f64::INFINITY, |x| -(x - 3.0) + 3.0),
        ]),
        &[3.0],
        &[],
    );

    question(
        29, QuestionTopic::Monotonicity, Domain::new(-6.0, 8.0),
        r"f(3)=0, \quad f'(3)=0, \\ f'(x) < 0 \text{ for } x < 0 \text{ and } x > 3, \\ f'(x) > 0 \text{ for } 0 < x < 3, \\ f(0) \text{ and } f'(0) \text{ do not exist}",
        Some(CAPTION),
        correct, vec![min, hole, shifted],
    )
}

/// Minimum f(1) = 0 rising towards the horizontal asymptote y = 2.
fn q30() -> Question {
    let correct = candidate(
        Formula::Closed(|x| 2.0 * (x - 1.0).powi(2) / (1.0 + (x - 1.0).powi(2))),
        &[],
        &[2.0],
    );

    let max = candidate(
        Formula::Closed(|x| -2.0 * (x - 1.0).powi(2) / (1.0 + (x - 1.0).powi(2))),
        &[],
        &[-2.0],
    );
    // Decays back to 0 instead of approaching 2.
    let ha0 = candidate(
        Formula::Closed(|x| 2.0 * (x - 1.0).powi(2) / (1.0 + (x - 1.0).powi(4))),
        &[],
        &[0.0],
    );
    let shifted = candidate(
        Formula::Closed(|x| 2.0 * (x + 1.0).powi(2) / (1.0 + (x + 1.0).powi(2))),
        &[],
        &[2.0],
    );

    question(
        30, QuestionTopic::Monotonicity, Domain::new(-4.0, 6.0),
        r"f(1)=0, \quad \lim_{x \to \infty} f(x) = 2, \\ f'(x) < 0 \text{ for } x < 1, \\ f'(x) > 0 \text{ for } x > 1, \quad f'(1)=0",
        Some(CAPTION),
        correct, vec![max, ha0, shifted],
    )
}

/// Corner minimum at -1, flat inflection at 2.
fn q31() -> Question {
    let correct = candidate(
        piecewise(vec![
            piece(-1.0, |x| -2.0 * (x + 1.0)),
            piece(0.0, |x| 2.0 * (1.0 - x * x)),
            piece(f64::INFINITY, |x| 2.0 * ((2.0 - x) / 2.0).powi(3)),
        ]),
        &[],
        &[],
    );

    // Turns into a local maximum at 2 instead of flattening out.
    let max_at_2 = candidate(
        piecewise(vec![
            piece(-1.0, |x| -2.0 * (x + 1.0)),
            piece(0.0, |x| 2.0 * (1.0 - x * x)),
            piece(1.0, |x| 2.0 * (1.0 - x).powi(2)),
            piece(f64::INFINITY, |x| -(x - 1.0) * (x - 3.0)),
        ]),
        &[],
        &[],
    );
    // Rounded minimum, so f'(-1) = 0.
    let smooth_min = candidate(
        piecewise(vec![
            piece(0.0, |x| 2.0 * (x + 1.0).powi(2)),
            piece(f64::INFINITY, |x| 2.0 * ((2.0 - x) / 2.0).powi(3)),
        ]),
        &[],
        &[],
    );
    let parabola = candidate(Formula::Closed(|x| (x + 1.0) * (x - 2.0)), &[], &[]);

    question(
        31, QuestionTopic::Monotonicity, Domain::new(-4.0, 5.0),
        r"f(-1)=f(2)=0, \\ f'(x) < 0 \text{ for } x < -1 \text{ and } 0 < x < 2 \text{ and } x > 2, \\ f'(x) > 0 \text{ for } -1 < x < 0, \\ f'(-1) \text{ does not exist}, \quad f'(2)=0",
        Some(CAPTION),
        correct, vec![max_at_2, smooth_min, parabola],
    )
}

/// Flat inflection at 0, jump down at 1, maximum f(3) = -1.
fn q32() -> Question {
    let correct = with_breaks(
        candidate(
            piecewise(vec![
                piece(1.0, |x| x.powi(3)),
                piece(f64::INFINITY, |x| -1.0 - (x - 3.0).powi(2) / 4.0),
            ]),
            &[],
            &[],
        ),
        &[1.0],
    );

    // Minimum at 0 instead of a flat inflection.
    let min_0 = with_breaks(
        candidate(
            piecewise(vec![
                piece(1.0, |x| x * x),
                piece(f64::INFINITY, |x| -1.0 - (x - 3.0).powi(2) / 4.0),
            ]),
            &[],
            &[],
        ),
        &[1.0],
    );
    // Continuous and differentiable at 1.
    let smooth_1 = candidate(
        piecewise(vec![
            piece(1.0, |x| x.powi(3)),
            piece(f64::INFINITY, |x| 1.0 + 3.0 * (x - 1.0) - 0.75 * (x - 1.0).powi(2)),
        ]),
        &[],
        &[],
    );
    let parabola = candidate(Formula::Closed(|x| -x * x + 3.0 * x), &[], &[]);

    question(
        32, QuestionTopic::Monotonicity, Domain::new(-3.0, 6.0),
        r"f(0)=0, \quad f(3)=-1, \\ f'(x) < 0 \text{ for } x > 3, \\ f'(x) > 0 \text{ for } x < 0 \text{ and } 0 < x < 1 \text{ and } 1 < x < 3, \\ f'(0)=0, \quad f'(1) \text{ does not exist}, \quad f'(3)=0",
        Some(CAPTION),
        correct, vec![min_0, smooth_1, parabola],
    )
}
