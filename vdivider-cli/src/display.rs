//! Display formatting for resistances and voltages.

/// `4700.0` -> `"4.70kΩ"`, `2_200_000.0` -> `"2.20MΩ"`, `470.0` -> `"470Ω"`.
pub fn resistance(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.2}MΩ", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.2}kΩ", value / 1_000.0)
    } else {
        format!("{}Ω", value)
    }
}

/// Voltage with `places` decimals and a `V` suffix.
pub fn voltage(value: f64, places: usize) -> String {
    format!("{:.*}V", places, value)
}

pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}
