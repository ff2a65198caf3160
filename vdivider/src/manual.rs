//! Evaluation of a caller-chosen resistor pair.

use serde::Serialize;

use crate::math;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ManualEvaluation {
    pub actual_vout: f64,
    /// Omitted when no target, or a zero target, was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_pct: Option<f64>,
}

/// Output voltage of `(r1, r2)` on `vin`, with the error against
/// `target_vout` when one is given.
pub fn evaluate(vin: f64, r1: f64, r2: f64, target_vout: Option<f64>) -> ManualEvaluation {
    let actual_vout = math::vout(vin, r1, r2);
    ManualEvaluation {
        actual_vout,
        error_pct: target_vout.and_then(|target| math::error_pct_checked(actual_vout, target)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_pair_exact() {
        let eval = evaluate(5.0, 10_000.0, 10_000.0, Some(2.5));
        assert_eq!(eval.actual_vout, 2.5);
        assert_eq!(eval.error_pct, Some(0.0));
    }

    #[test]
    fn test_no_target() {
        let eval = evaluate(5.0, 10_000.0, 4_700.0, None);
        assert!((eval.actual_vout - 5.0 * 4_700.0 / 14_700.0).abs() < 1e-12);
        assert_eq!(eval.error_pct, None);
    }

    #[test]
    fn test_zero_target_omits_error() {
        let eval = evaluate(5.0, 10_000.0, 4_700.0, Some(0.0));
        assert_eq!(eval.error_pct, None);
    }

    #[test]
    fn test_error_against_target() {
        // 12V over 1k/1k gives 6V; target 5V is 20% off
        let eval = evaluate(12.0, 1_000.0, 1_000.0, Some(5.0));
        assert_eq!(eval.actual_vout, 6.0);
        assert!((eval.error_pct.unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_serialization_skips_missing_error() {
        let eval = evaluate(5.0, 10_000.0, 10_000.0, None);
        let json = serde_json::to_value(eval).unwrap();
        assert_eq!(json["actual_vout"], 2.5);
        assert!(json.get("error_pct").is_none());
    }
}
