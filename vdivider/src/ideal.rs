//! Ideal (non-discretized) divider resistors.

use serde::Serialize;

use crate::core::{DividerError, DividerInput};

/// Fixed R2 used for the ideal pair. Arbitrary mid-catalog magnitude; it
/// does not take part in the catalog search.
pub const REFERENCE_R2: f64 = 10_000.0;

/// Theoretical resistor pair for a divider ratio. R1 is rounded to the
/// nearest ohm and need not be a catalog value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealPair {
    pub r1: f64,
    pub r2: f64,
}

impl IdealPair {
    /// Ratio R1/R2 implied by the pair.
    pub fn ratio(&self) -> f64 {
        self.r1 / self.r2
    }
}

/// Solve for R1 with R2 fixed at [`REFERENCE_R2`].
///
/// `f64::round` rounds half away from zero.
pub fn solve(vin: f64, vout: f64) -> Result<IdealPair, DividerError> {
    DividerInput::new(vin, vout)?;
    let ratio = vin / vout - 1.0;
    Ok(IdealPair {
        r1: (ratio * REFERENCE_R2).round(),
        r2: REFERENCE_R2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_5v_to_3v3() {
        let pair = solve(5.0, 3.3).unwrap();
        assert_eq!(pair.r2, 10_000.0);
        assert_eq!(pair.r1, 5_152.0);
    }

    #[test]
    fn test_solve_half() {
        let pair = solve(10.0, 5.0).unwrap();
        assert_eq!(pair.r1, 10_000.0);
        assert_eq!(pair.ratio(), 1.0);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 1.03125 / 1.0 - 1 = 0.03125 exactly, so r1 lands on 312.5
        assert_eq!(solve(1.03125, 1.0).unwrap().r1, 313.0);
        assert_eq!(solve(5.0, 4.0).unwrap().r1, 2_500.0);
    }

    #[test]
    fn test_invalid_range() {
        assert!(matches!(
            solve(5.0, 5.0),
            Err(DividerError::InvalidRange { .. })
        ));
        assert!(matches!(
            solve(3.0, 5.0),
            Err(DividerError::InvalidRange { .. })
        ));
        assert!(matches!(
            solve(5.0, 0.0),
            Err(DividerError::InvalidRange { .. })
        ));
    }
}
