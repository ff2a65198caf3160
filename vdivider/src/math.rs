//! Divider arithmetic.

/// Output voltage of a two-resistor divider, `vin * R2 / (R1 + R2)`.
///
/// The ratio is formed before scaling so that proportional pairs
/// (47/91, 470/910, ...) yield bit-identical outputs.
pub fn vout(vin: f64, r1: f64, r2: f64) -> f64 {
    debug_assert!(r1 + r2 > 0.0);
    vin * (r2 / (r1 + r2))
}

/// Relative deviation of `actual` from `target`, in percent.
///
/// Must not be called with a zero target; see [`error_pct_checked`].
pub fn error_pct(actual: f64, target: f64) -> f64 {
    debug_assert!(target != 0.0);
    ((actual - target) / target).abs() * 100.0
}

/// [`error_pct`], or `None` when the target is zero.
pub fn error_pct_checked(actual: f64, target: f64) -> Option<f64> {
    if target == 0.0 {
        None
    } else {
        Some(error_pct(actual, target))
    }
}
