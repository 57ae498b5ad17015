//! Curve input assembly.
//!
//! Merges the observation lists of several sources into one [`CurveInput`]:
//! observations whose tenors lie within `epsilon` of a cluster's shortest
//! tenor compete, and the one with the lowest priority number wins (first
//! seen on ties). The winner keeps its own tenor.

use log::debug;
use zerocurve_config::DEFAULT_TENOR_EPSILON;

use crate::error::{CurveError, CurveResult};
use crate::observation::{CurveInput, RateObservation};

/// Minimum number of observations a curve needs.
pub const MIN_CURVE_POINTS: usize = 2;

/// Assembles `point_sets` with the default one-day tenor epsilon.
///
/// # Errors
///
/// Returns `InsufficientData` if fewer than two observations survive.
pub fn assemble(point_sets: &[Vec<RateObservation>]) -> CurveResult<CurveInput> {
    assemble_with_epsilon(point_sets, DEFAULT_TENOR_EPSILON)
}

/// Assembles `point_sets`, treating tenors within `epsilon` years as equal.
///
/// `epsilon = 0.0` merges exact matches only.
///
/// # Errors
///
/// Returns `InvalidObservation` for a negative or non-finite epsilon and
/// `InsufficientData` if fewer than two observations survive.
pub fn assemble_with_epsilon(
    point_sets: &[Vec<RateObservation>],
    epsilon: f64,
) -> CurveResult<CurveInput> {
    if !(epsilon.is_finite() && epsilon >= 0.0) {
        return Err(CurveError::invalid_observation(format!(
            "tenor epsilon must be a non-negative number, got {epsilon}"
        )));
    }

    // (first-seen index, observation), stable-sorted by tenor
    let mut candidates: Vec<(usize, RateObservation)> =
        point_sets.iter().flatten().copied().enumerate().collect();
    candidates.sort_by(|(_, a), (_, b)| a.tenor_years().total_cmp(&b.tenor_years()));

    let mut survivors: Vec<RateObservation> = Vec::with_capacity(candidates.len());
    let mut cluster_start = 0;

    while cluster_start < candidates.len() {
        let anchor = candidates[cluster_start].1.tenor_years();
        let cluster_end = candidates[cluster_start..]
            .iter()
            .position(|(_, obs)| obs.tenor_years() - anchor > epsilon)
            .map_or(candidates.len(), |offset| cluster_start + offset);

        let cluster = &candidates[cluster_start..cluster_end];
        if let Some((_, winner)) = cluster
            .iter()
            .min_by_key(|(seen, obs)| (obs.priority(), *seen))
        {
            if cluster.len() > 1 {
                debug!(
                    "tenor collision at {anchor:.4}y: kept {} quote, dropped {}",
                    winner.source(),
                    cluster.len() - 1
                );
            }
            survivors.push(*winner);
        }

        cluster_start = cluster_end;
    }

    if survivors.len() < MIN_CURVE_POINTS {
        return Err(CurveError::insufficient_data(
            MIN_CURVE_POINTS,
            survivors.len(),
        ));
    }

    CurveInput::from_sorted(survivors)
}
