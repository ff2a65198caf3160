//! Exhaustive resistor pair search over a [`ResistanceCatalog`].
//!
//! Every ordered pair `(R1, R2)` from the catalog cross-product is scored by
//! the relative error of its output voltage against the target. The catalog
//! is small and fixed (97 values, 9 409 pairs), so the search is a plain
//! O(N²) scan with no pruning.
//!
//! Two entry points share the scoring:
//!
//! - [`search`] keeps pairs under an error threshold, sorts them by error
//!   and truncates to `max_results`.
//! - [`best_single`] returns the single minimum-error pair, unfiltered.
//!
//! Ties keep catalog iteration order: smaller R1 index first, then smaller
//! R2 index.

use serde::Serialize;

use crate::catalog::ResistanceCatalog;
use crate::core::{DividerError, DividerInput};
use crate::math;

/// Default upper bound (exclusive) on a retained candidate's error.
pub const DEFAULT_ERROR_THRESHOLD_PCT: f64 = 5.0;

/// Default length of a ranked result set.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Tuning for [`search`].
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOptions {
    pub error_threshold_pct: f64,
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            error_threshold_pct: DEFAULT_ERROR_THRESHOLD_PCT,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// A catalog pair with its derived output voltage and error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidatePair {
    pub r1: f64,
    pub r2: f64,
    pub actual_vout: f64,
    pub error_pct: f64,
}

impl CandidatePair {
    fn score(input: &DividerInput, r1: f64, r2: f64) -> Self {
        let actual_vout = math::vout(input.vin(), r1, r2);
        Self {
            r1,
            r2,
            actual_vout,
            error_pct: math::error_pct(actual_vout, input.vout()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Ordered pairs scored.
    pub pairs_evaluated: usize,
    /// Pairs under the threshold before truncation.
    pub within_threshold: usize,
}

/// Candidates ascending by error, at most `max_results` long.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResultSet {
    pub candidates: Vec<CandidatePair>,
    pub stats: SearchStats,
}

impl RankedResultSet {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn best(&self) -> Option<&CandidatePair> {
        self.candidates.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidatePair> {
        self.candidates.iter()
    }
}

impl<'a> IntoIterator for &'a RankedResultSet {
    type Item = &'a CandidatePair;
    type IntoIter = std::slice::Iter<'a, CandidatePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// Every ordered pair of the catalog, R1-major.
fn scored_pairs<'a>(
    input: &'a DividerInput,
    catalog: &'a ResistanceCatalog,
) -> impl Iterator<Item = CandidatePair> + 'a {
    catalog
        .iter()
        .flat_map(move |r1| catalog.iter().map(move |r2| CandidatePair::score(input, r1, r2)))
}

/// Rank catalog pairs whose error is below `options.error_threshold_pct`.
///
/// An empty result means no pair meets the threshold; it is not an error.
pub fn search(
    vin: f64,
    vout: f64,
    catalog: &ResistanceCatalog,
    options: &SearchOptions,
) -> Result<RankedResultSet, DividerError> {
    let input = DividerInput::new(vin, vout)?;
    let mut stats = SearchStats::default();

    let mut retained: Vec<CandidatePair> = Vec::new();
    for candidate in scored_pairs(&input, catalog) {
        stats.pairs_evaluated += 1;
        if candidate.error_pct < options.error_threshold_pct {
            retained.push(candidate);
        }
    }
    stats.within_threshold = retained.len();

    // sort_by is stable: equal errors keep catalog order
    retained.sort_by(|a, b| a.error_pct.total_cmp(&b.error_pct));
    retained.truncate(options.max_results);

    tracing::debug!(
        "Pair search vin={} vout={}: {} evaluated, {} within {}%, best error {:?}",
        vin,
        vout,
        stats.pairs_evaluated,
        stats.within_threshold,
        options.error_threshold_pct,
        retained.first().map(|c| c.error_pct)
    );

    Ok(RankedResultSet {
        candidates: retained,
        stats,
    })
}

/// The minimum-error pair with no threshold applied.
///
/// The first pair encountered wins among equal errors.
pub fn best_single(
    vin: f64,
    vout: f64,
    catalog: &ResistanceCatalog,
) -> Result<CandidatePair, DividerError> {
    let input = DividerInput::new(vin, vout)?;
    let mut best: Option<CandidatePair> = None;
    for candidate in scored_pairs(&input, catalog) {
        if best.is_none_or(|current| candidate.error_pct < current.error_pct) {
            best = Some(candidate);
        }
    }
    // ResistanceCatalog is never empty
    best.ok_or(DividerError::EmptyCatalog)
}
