//! Threshold search for the clipping bounds.
//!
//! Finds a floor `a` and ceiling `b = a * eta / 2` such that clipping the
//! weight vector against them implies exactly `target` output particles:
//! a weight below the floor counts `w / a` expected copies, a weight above
//! the ceiling counts `w / b` copies, and everything between counts one.
//!
//! The search is a randomized selection over two coupled candidate sets,
//! structurally similar to quickselect: each iteration draws a pivot from
//! the larger set, evaluates the implied count in one pass, and discards the
//! half of each set the pivot ruled out. Expected total work is linear in
//! the input size.

use log::{debug, trace};

use super::errors::ChopthinError;
use crate::common::rng::Rng;

/// Clipping bounds produced by the threshold search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Floor below which weights are chopped.
    pub lower: f64,
    /// Ceiling above which weights are thinned; always `lower * eta / 2`.
    pub upper: f64,
}

/// Solve for the clipping bounds that make the implied output count hit
/// `target`.
///
/// # Arguments
/// * `rng` - Generator used for pivot selection
/// * `weights` - Unnormalized input weights, at least one strictly positive
/// * `target` - Number of particles the resampling pass must emit
/// * `eta` - Dispersion parameter, >= 4 (validated by the caller)
///
/// # Returns
/// The bounds, with `upper = lower * eta / 2`.
///
/// # Errors
/// [`ChopthinError::NoPositiveWeights`] if no positive mass remains when a
/// non-positive pivot is drawn; [`ChopthinError::DegenerateResample`] if the
/// closed-form fallback yields a non-positive floor.
pub fn solve_bounds(
    rng: &mut impl Rng,
    weights: &[f64],
    target: usize,
    eta: f64,
) -> Result<Bounds, ChopthinError> {
    let target_f = target as f64;

    // Candidate sets: vl holds weights whose relation to the final floor is
    // still undetermined, vu the same for the ceiling.
    let mut vl: Vec<f64> = weights.to_vec();
    let mut vu: Vec<f64> = weights.to_vec();

    // Mass and counts already resolved against the final bounds:
    // sl = sum of weights known to lie at or below the floor,
    // cm = count known to lie above the floor,
    // su = sum of weights known to lie at or above the ceiling,
    // cu = count known to lie at or above the ceiling.
    let mut sl = 0.0;
    let mut su = 0.0;
    let mut cm = 0usize;
    let mut cu = 0usize;

    let mut lower = None;
    let mut iterations = 0usize;

    while !vl.is_empty() || !vu.is_empty() {
        iterations += 1;

        // Pivot from the larger candidate set (ties toward vl); the partner
        // bound is derived through b = a * eta / 2. An empty set is never
        // drawn from: the larger of the two is non-empty here.
        let (a, b) = if vl.len() >= vu.len() {
            let pivot = vl[(rng.rand() * vl.len() as f64) as usize];
            (pivot, pivot * eta / 2.0)
        } else {
            let pivot = vu[(rng.rand() * vu.len() as f64) as usize];
            (2.0 * pivot / eta, pivot)
        };

        // One pass over each set: low mass and mid count against the floor
        // candidate, high mass and count against the ceiling candidate.
        let mut sl_tmp = 0.0;
        let mut cm_tmp = 0usize;
        for &w in &vl {
            if w <= a {
                sl_tmp += w;
            } else {
                cm_tmp += 1;
            }
        }
        let mut su_tmp = 0.0;
        let mut cu_tmp = 0usize;
        for &w in &vu {
            if w >= b {
                su_tmp += w;
                cu_tmp += 1;
            }
        }

        let h = if a <= 0.0 {
            // A non-positive pivot can never be the true floor. Only legal
            // while positive mass remains above the ceiling; otherwise the
            // input has no usable weights.
            if su + su_tmp <= 0.0 {
                return Err(ChopthinError::NoPositiveWeights);
            }
            target_f + 1.0
        } else {
            (cm + cm_tmp) as f64 - (cu + cu_tmp) as f64
                + (sl + sl_tmp) / a
                + (su + su_tmp) / b
        };

        trace!(
            "iteration {}: pivot floor {:.6e}, implied count {:.3}, |vl| {}, |vu| {}",
            iterations,
            a,
            h,
            vl.len(),
            vu.len()
        );

        if h == target_f {
            lower = Some(a);
            break;
        }

        if h > target_f {
            // Too many implied particles: the floor lies above this pivot.
            // Everything at or below it is settled low mass; everything at
            // or below the derived ceiling can no longer end up high.
            sl += sl_tmp;
            vl.retain(|&w| w > a);
            vu.retain(|&w| w > b);
        } else {
            // Too few: the floor lies below this pivot. Weights at or above
            // the ceiling are settled high; weights at or above the pivot
            // are settled mid-or-high.
            su += su_tmp;
            cu += cu_tmp;
            let kept = vl.len();
            vl.retain(|&w| w < a);
            cm += kept - vl.len();
            vu.retain(|&w| w < b);
        }
    }

    let lower = match lower {
        Some(a) => {
            debug!("threshold search hit the target count after {} iterations", iterations);
            a
        }
        None => {
            // Both sets exhausted without an exact hit (floating-point /
            // integer mismatch near the boundary): closed-form solution of
            // target = sl/a + (cm - cu) + 2*su/(eta*a).
            let a = (sl + 2.0 * su / eta) / (target_f - cm as f64 + cu as f64);
            debug!(
                "threshold search exhausted after {} iterations, closed-form floor {:.6e}",
                iterations, a
            );
            if !(a > 0.0 && a.is_finite()) {
                return Err(ChopthinError::DegenerateResample {
                    context: format!("closed-form floor {} is not positive", a),
                });
            }
            a
        }
    };

    Ok(Bounds {
        lower,
        upper: lower * eta / 2.0,
    })
}
