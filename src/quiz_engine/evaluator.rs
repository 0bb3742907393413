//! Turns a candidate into a plottable [`Curve`].
//!
//! Masking is a heuristic, not a root finder: any consecutive pair that jumps
//! by more than the threshold is broken, which also blanks a sample or two on
//! legitimately steep curves.

use tracing::warn;

use crate::config::QuizConfig;
use crate::quiz_engine::models::{Candidate, Curve, Domain, SamplePoint};

/// `n` evenly spaced points over `[min, max]`, both endpoints exact.
pub fn grid(domain: Domain, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![domain.min],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let t = i as f64 / last;
                    domain.min * (1.0 - t) + domain.max * t
                })
                .collect()
        }
    }
}

fn nearest_index(xs: &[f64], target: f64) -> Option<usize> {
    xs.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - target).abs().total_cmp(&(*b - target).abs()))
        .map(|(i, _)| i)
}

/// Sample `candidate` over `domain` using the config's count and threshold.
///
/// Never fails: if the formula reports an error anywhere, the result is a
/// flat zero curve of full length with `fell_back` set.
pub fn sample(candidate: &Candidate, domain: Domain, config: &QuizConfig) -> Curve {
    let xs = grid(domain, config.sample_count);

    let raw = match xs.iter().map(|&x| candidate.evaluate(x)).collect::<Result<Vec<f64>, _>>() {
        Ok(ys) => ys,
        Err(err) => {
            warn!(%err, "candidate failed to evaluate, drawing a flat placeholder");
            return Curve {
                points: xs.into_iter().map(|x| SamplePoint { x, y: Some(0.0) }).collect(),
                fell_back: true,
            };
        }
    };

    let mut ys: Vec<Option<f64>> = raw.iter().map(|&y| y.is_finite().then_some(y)).collect();

    // Decide every jump from the unmasked values, then blank the first
    // sample of each offending pair.
    for (i, pair) in raw.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        if a.is_finite() && b.is_finite() && (b - a).abs() > config.jump_threshold {
            ys[i] = None;
        }
    }

    if config.mask_declared_asymptotes && xs.len() >= 2 {
        let step = (domain.max - domain.min) / (xs.len() - 1) as f64;
        let reach = step * (1.0 + 1e-9);
        for &a in candidate.vertical_asymptotes.iter().filter(|&&a| domain.contains(a)) {
            for (x, y) in xs.iter().zip(ys.iter_mut()) {
                if (x - a).abs() <= reach {
                    *y = None;
                }
            }
        }
    }

    for &b in candidate.breaks.iter().filter(|&&b| domain.contains(b)) {
        if let Some(i) = nearest_index(&xs, b) {
            ys[i] = None;
        }
    }

    Curve {
        points: xs.into_iter().zip(ys).map(|(x, y)| SamplePoint { x, y }).collect(),
        fell_back: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use crate::quiz_engine::helpers::{candidate, piece, piecewise, with_breaks};
    use crate::quiz_engine::models::Formula;

    fn cfg(n: usize) -> QuizConfig {
        QuizConfig { sample_count: n, ..QuizConfig::default() }
    }

    #[test]
    fn grid_hits_both_endpoints_and_midpoint() {
        let xs = grid(Domain::new(-6.0, 6.0), 801);
        assert_eq!(xs.len(), 801);
        assert_eq!(xs[0], -6.0);
        assert_eq!(xs[400], 0.0);
        assert_eq!(xs[800], 6.0);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn smooth_curve_has_no_gaps() {
        let c = candidate(Formula::Closed(|x| x * x), &[], &[]);
        let curve = sample(&c, Domain::new(-2.0, 2.0), &cfg(101));
        assert_eq!(curve.gap_count(), 0);
        assert!(!curve.fell_back);
    }

    #[test]
    fn large_jump_masks_first_sample_of_pair() {
        let c = candidate(piecewise(vec![piece(0.0, |_| 0.0), piece(f64::INFINITY, |_| 100.0)]), &[], &[]);
        let curve = sample(&c, Domain::new(-1.0, 1.0), &cfg(5));
        // x = -1, -0.5, 0, 0.5, 1: the jump sits between -0.5 and 0.
        let gaps: Vec<bool> = curve.points.iter().map(|p| p.y.is_none()).collect();
        assert_eq!(gaps, vec![false, true, false, false, false]);
    }

    #[test]
    fn nan_hole_is_a_gap_without_spreading() {
        let c = candidate(Formula::Closed(|x| if x == 0.0 { f64::NAN } else { x }), &[], &[]);
        let curve = sample(&c, Domain::new(-1.0, 1.0), &cfg(5));
        assert_eq!(curve.gap_count(), 1);
        assert_eq!(curve.points[2].y, None);
    }

    #[test]
    fn hole_off_the_grid_still_blanks_nearest_sample() {
        // Step 0.0175 on [-6, 8]: no sample lands on 0.
        let c = with_breaks(
            candidate(Formula::Closed(|x| if x == 0.0 { f64::NAN } else { -(x - 3.0).powi(2) }), &[], &[]),
            &[0.0],
        );
        let curve = sample(&c, Domain::new(-6.0, 8.0), &cfg(801));
        assert!(curve.points.iter().all(|p| p.x != 0.0));
        assert_eq!(curve.gap_count(), 1);
        assert_eq!(curve.nearest(0.0).unwrap().y, None);
    }

    #[test]
    fn small_jump_at_declared_break_is_not_bridged() {
        let c = with_breaks(
            candidate(piecewise(vec![piece(1.0, |_| 1.0), piece(f64::INFINITY, |_| -2.0)]), &[], &[]),
            &[1.0],
        );
        let curve = sample(&c, Domain::new(-3.0, 6.0), &cfg(801));
        let left = curve.points.iter().filter(|p| p.x < 1.0).last().unwrap();
        let right = curve.points.iter().find(|p| p.x >= 1.0).unwrap();
        assert!(left.y.is_none() || right.y.is_none(), "jump at x = 1 is drawn as a stroke");
    }

    #[test]
    fn declared_asymptote_masking_can_be_disabled() {
        // Gentle enough that the jump rule alone never fires.
        let c = candidate(Formula::Closed(|x| x), &[0.05], &[]);
        let off = QuizConfig { mask_declared_asymptotes: false, ..cfg(41) };
        assert_eq!(sample(&c, Domain::new(-1.0, 1.0), &off).gap_count(), 0);
        assert!(sample(&c, Domain::new(-1.0, 1.0), &cfg(41)).gap_count() >= 2);
    }

    #[test]
    fn checked_error_falls_back_to_flat_curve() {
        let c = candidate(
            Formula::Checked(|x| if x > 0.5 { Err(EvalError::undefined(x, "boom")) } else { Ok(x) }),
            &[],
            &[],
        );
        let curve = sample(&c, Domain::new(0.0, 1.0), &cfg(11));
        assert!(curve.fell_back);
        assert_eq!(curve.len(), 11);
        assert!(curve.points.iter().all(|p| p.y == Some(0.0)));
    }
}
