//! Core divider computations shared by the CLI and any other front end.
//! No presentation or UI state.

use serde::Serialize;

use crate::catalog::ResistanceCatalog;
use crate::ideal::{self, IdealPair};
use crate::manual::{self, ManualEvaluation};
use crate::search::{self, RankedResultSet, SearchOptions};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DividerError {
    #[error("{}", range_message(.vin, .vout))]
    InvalidRange { vin: f64, vout: f64 },
    #[error("Resistance catalog is empty")]
    EmptyCatalog,
    #[error("Resistance catalog is not strictly ascending at index {index}")]
    UnsortedCatalog { index: usize },
    #[error("Resistance catalog value {value} at index {index} is not a positive number")]
    NonPositiveValue { index: usize, value: f64 },
    #[error("{0} ohm is not a standard catalog value")]
    NotInCatalog(f64),
}

fn range_message(vin: &f64, vout: &f64) -> String {
    if *vout > 0.0 {
        format!(
            "Input voltage must be greater than output voltage for a voltage divider \
             (vin={}V, vout={}V)",
            vin, vout
        )
    } else {
        format!(
            "Output voltage must be positive for a voltage divider (vin={}V, vout={}V)",
            vin, vout
        )
    }
}

/// Supply and target voltages for a divider. Constructed only through
/// [`DividerInput::new`], which enforces `vin > vout > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DividerInput {
    vin: f64,
    vout: f64,
}

impl DividerInput {
    pub fn new(vin: f64, vout: f64) -> Result<Self, DividerError> {
        // written so that NaN also fails
        if !(vout > 0.0 && vin > vout) {
            return Err(DividerError::InvalidRange { vin, vout });
        }
        Ok(Self { vin, vout })
    }

    pub fn vin(&self) -> f64 {
        self.vin
    }

    pub fn vout(&self) -> f64 {
        self.vout
    }

    /// Target ratio R2 / (R1 + R2).
    pub fn ratio(&self) -> f64 {
        self.vout / self.vin
    }
}

/// Automatic mode: ideal pair plus ranked catalog suggestions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutomaticResult {
    pub input: DividerInput,
    pub ideal: IdealPair,
    pub suggestions: RankedResultSet,
}

/// Manual mode: a chosen pair and what it produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManualResult {
    pub vin: f64,
    pub target_vout: f64,
    pub r1: f64,
    pub r2: f64,
    pub evaluation: ManualEvaluation,
}

/// Core divider API used by the CLI.
pub struct DividerCore;

impl DividerCore {
    /// Ideal resistor pair and the best catalog pairs for `input`.
    pub fn automatic(
        catalog: &ResistanceCatalog,
        input: DividerInput,
        options: &SearchOptions,
    ) -> Result<AutomaticResult, DividerError> {
        let ideal = ideal::solve(input.vin(), input.vout())?;
        let suggestions = search::search(input.vin(), input.vout(), catalog, options)?;
        tracing::info!(
            "Automatic divider {}V -> {}V: ideal R1={} R2={}, {} suggestions",
            input.vin(),
            input.vout(),
            ideal.r1,
            ideal.r2,
            suggestions.len()
        );
        Ok(AutomaticResult {
            input,
            ideal,
            suggestions,
        })
    }

    /// Evaluate `(r1, r2)` on `vin` against `target_vout`.
    pub fn manual(vin: f64, target_vout: f64, r1: f64, r2: f64) -> ManualResult {
        let evaluation = manual::evaluate(vin, r1, r2, Some(target_vout));
        tracing::info!(
            "Manual divider R1={} R2={} on {}V: {}V",
            r1,
            r2,
            vin,
            evaluation.actual_vout
        );
        ManualResult {
            vin,
            target_vout,
            r1,
            r2,
            evaluation,
        }
    }
}
