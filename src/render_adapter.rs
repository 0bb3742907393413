use serde_json::{json, Value};

use crate::quiz_engine::models::{Curve, Domain, OptionView, QuestionView};

/// Split a curve into parallel `x` / `y` arrays; gaps become `null` so the
/// plotting layer breaks the line there.
fn xy_arrays(curve: &Curve) -> (Value, Value) {
    let xs = curve.points.iter().map(|p| json!(p.x)).collect();
    let ys = curve
        .points
        .iter()
        .map(|p| p.y.map_or(Value::Null, |y| json!(y)))
        .collect();
    (Value::Array(xs), Value::Array(ys))
}

/// Dashed guide lines for the asymptotes that fall inside the domain.
fn guides(option: &OptionView, domain: Domain) -> Value {
    let vertical = option
        .vertical_asymptotes
        .iter()
        .filter(|&&a| domain.contains(a))
        .map(|&a| json!({ "kind": "vertical", "x": a }));
    let horizontal = option
        .horizontal_asymptotes
        .iter()
        .map(|&h| json!({ "kind": "horizontal", "y": h }));
    Value::Array(vertical.chain(horizontal).collect())
}

fn option_trace(option: &OptionView, domain: Domain) -> Value {
    let (x, y) = xy_arrays(&option.curve);
    json!({
        "letter": option.letter.to_string(),
        "x": x,
        "y": y,
        "description": option.description,
        "guides": guides(option, domain),
        "placeholder": option.curve.fell_back,
    })
}

/// Map a [`QuestionView`] to the JSON object the plotting front end reads.
///
/// The `result` block is `null` until the learner has answered.
pub fn to_render_payload(view: &QuestionView) -> Value {
    let options: Vec<Value> = view.options.iter().map(|o| option_trace(o, view.domain)).collect();
    let result = view.result.map_or(Value::Null, |r| {
        json!({
            "selected": r.selected.to_string(),
            "correct": r.correct_letter.to_string(),
            "is_correct": r.is_correct,
        })
    });

    json!({
        "question_id": view.question_id,
        "topic": view.topic.to_string(),
        "progress": { "position": view.position + 1, "total": view.total },
        "prompt": { "latex": view.prompt, "caption": view.caption },
        "x_range": [view.domain.min, view.domain.max],
        "options": options,
        "answered": view.result.is_some(),
        "result": result,
        "navigation": { "next": view.can_advance, "previous": view.can_retreat },
    })
}
