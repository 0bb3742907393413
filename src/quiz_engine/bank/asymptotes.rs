//! Questions 40–42: rational functions identified by their asymptotes.
//!
//! Every candidate carries a text description as well, so these questions
//! can be shown either as graphs or as "pick the matching description".

use crate::quiz_engine::{
    helpers::{candidate, described, question},
    models::{Domain, Formula, Question, QuestionTopic},
};

const CAPTION: &str = "حدد الدالة من خطوط التقارب";

pub fn questions() -> Vec<Question> {
    vec![q40(), q41(), q42()]
}

fn q40() -> Question {
    let correct = described(
        candidate(Formula::Closed(|x| x / (x * x - 1.0)), &[-1.0, 1.0], &[0.0]),
        "Vertical asymptotes x = -1 and x = 1, horizontal asymptote y = 0, decreasing on every interval, passes through the origin",
    );
    // Sign flip: increasing on every interval.
    let flipped = described(
        candidate(Formula::Closed(|x| -x / (x * x - 1.0)), &[-1.0, 1.0], &[0.0]),
        "Vertical asymptotes x = -1 and x = 1, horizontal asymptote y = 0, increasing on every interval",
    );
    let even = described(
        candidate(Formula::Closed(|x| x * x / (x * x - 1.0)), &[-1.0, 1.0], &[1.0]),
        "Vertical asymptotes x = -1 and x = 1, horizontal asymptote y = 1, symmetric about the y-axis",
    );
    let no_vertical = described(
        candidate(Formula::Closed(|x| x / (x * x + 1.0)), &[], &[0.0]),
        "No vertical asymptotes, horizontal asymptote y = 0, maximum at x = 1",
    );

    question(
        40, QuestionTopic::Asymptotes, Domain::new(-6.0, 6.0),
        r"\lim_{x \to \pm 1} |f(x)| = \infty, \quad \lim_{x \to \pm\infty} f(x) = 0, \\ f(0)=0, \quad f'(x) < 0 \text{ for } x \neq \pm 1",
        Some(CAPTION),
        correct, vec![flipped, even, no_vertical],
    )
}

fn q41() -> Question {
    let correct = described(
        candidate(Formula::Closed(|x| 2.0 * x / (x - 2.0)), &[2.0], &[2.0]),
        "Vertical asymptote x = 2, horizontal asymptote y = 2, passes through the origin",
    );
    let wrong_vertical = described(
        candidate(Formula::Closed(|x| 2.0 * x / (x + 2.0)), &[-2.0], &[2.0]),
        "Vertical asymptote x = -2, horizontal asymptote y = 2, passes through the origin",
    );
    let wrong_horizontal = described(
        candidate(Formula::Closed(|x| x / (x - 2.0)), &[2.0], &[1.0]),
        "Vertical asymptote x = 2, horizontal asymptote y = 1, passes through the origin",
    );
    let flipped = described(
        candidate(Formula::Closed(|x| -2.0 * x / (x - 2.0)), &[2.0], &[-2.0]),
        "Vertical asymptote x = 2, horizontal asymptote y = -2, passes through the origin",
    );

    question(
        41, QuestionTopic::Asymptotes, Domain::new(-6.0, 8.0),
        r"f(0)=0, \quad \lim_{x \to 2} |f(x)| = \infty, \\ \lim_{x \to \pm\infty} f(x) = 2",
        Some(CAPTION),
        correct, vec![wrong_vertical, wrong_horizontal, flipped],
    )
}

fn q42() -> Question {
    let correct = described(
        candidate(Formula::Closed(|x| x * x / (x * x - 4.0)), &[-2.0, 2.0], &[1.0]),
        "Vertical asymptotes x = -2 and x = 2, horizontal asymptote y = 1, local maximum f(0) = 0",
    );
    let no_vertical = described(
        candidate(Formula::Closed(|x| x * x / (x * x + 4.0)), &[], &[1.0]),
        "No vertical asymptotes, horizontal asymptote y = 1, minimum f(0) = 0",
    );
    let flipped = described(
        candidate(Formula::Closed(|x| -x * x / (x * x - 4.0)), &[-2.0, 2.0], &[-1.0]),
        "Vertical asymptotes x = -2 and x = 2, horizontal asymptote y = -1, local minimum f(0) = 0",
    );
    let odd = described(
        candidate(Formula::Closed(|x| x / (x * x - 4.0)), &[-2.0, 2.0], &[0.0]),
        "Vertical asymptotes x = -2 and x = 2, horizontal asymptote y = 0, symmetric about the origin",
    );

    question(
        42, QuestionTopic::Asymptotes, Domain::new(-6.0, 6.0),
        r"f(0)=0, \quad f'(0)=0, \\ \lim_{x \to \pm 2} |f(x)| = \infty, \quad \lim_{x \to \pm\infty} f(x) = 1",
        Some(CAPTION),
        correct, vec![no_vertical, flipped, odd],
    )
}
