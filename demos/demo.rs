//! Walk through a short quiz in the terminal.
//!
//! Run with: `cargo run --example demo`
//!
//! Set `RUST_LOG=calculus_graph_quiz=debug` to watch navigation and answer
//! events. Sampling settings come from `CALCQUIZ_*` environment variables
//! when present.
//!
//! For each question the demo prints the prompt, a one-line sketch of every
//! option (sample count, gaps, asymptotes), answers "B", and shows the
//! result the renderer would receive.

use calculus_graph_quiz::{
    to_render_payload, QuestionView, QuizConfig, QuizRequest, QuizSession, SlotLetter,
    TopicSelector,
};
use tracing_subscriber::EnvFilter;

fn print_view(view: &QuestionView) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}/{}] Question {} — {}", view.position + 1, view.total, view.question_id, view.topic);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {}", view.prompt);
    if let Some(caption) = &view.caption {
        println!("  {caption}");
    }
    println!("  x ∈ [{}, {}]", view.domain.min, view.domain.max);
    println!();
    for option in &view.options {
        let curve = &option.curve;
        println!(
            "  {})  {} samples, {} gaps, VA {:?}, HA {:?}{}",
            option.letter,
            curve.len(),
            curve.gap_count(),
            option.vertical_asymptotes,
            option.horizontal_asymptotes,
            if curve.fell_back { "  (placeholder)" } else { "" },
        );
        if let Some(text) = &option.description {
            println!("       {text}");
        }
    }
    if let Some(result) = view.result {
        let mark = if result.is_correct { "✓" } else { "✗" };
        println!();
        println!("  {mark} picked {}, correct answer {}", result.selected, result.correct_letter);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = QuizConfig::from_env()?;
    let request = QuizRequest {
        topic: TopicSelector::All,
        rng_seed: Some(2024),
        shuffle_order: true,
        limit: Some(4),
    };
    let mut session = QuizSession::from_request(request, config)?;

    loop {
        print_view(&session.current_view());
        session.select_answer(SlotLetter::B)?;
        print_view(&session.current_view());
        if !session.advance() {
            break;
        }
    }
    println!("Score: {}/{}", session.score(), session.len());

    session.new_session();
    let payload = to_render_payload(&session.current_view());
    println!(
        "New quiz starts with question {} ({} options in the render payload)",
        payload["question_id"],
        payload["options"].as_array().map_or(0, Vec::len),
    );
    Ok(())
}
