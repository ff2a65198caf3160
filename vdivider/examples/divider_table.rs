//! Print the ideal pair and best standard pairs for a divider.

use vdivider::prelude::*;

fn main() -> Result<(), DividerError> {
    let mut args = std::env::args().skip(1);
    let vin: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5.0);
    let vout: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3.3);

    let catalog = ResistanceCatalog::standard();
    let input = match DividerInput::new(vin, vout) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: cargo run --example divider_table [VIN] [VOUT]");
            std::process::exit(1);
        }
    };

    let result = DividerCore::automatic(&catalog, input, &SearchOptions::default())?;

    println!("Divider {}V -> {}V", vin, vout);
    println!("Ideal: R1 = {} ohm, R2 = {} ohm", result.ideal.r1, result.ideal.r2);
    println!();

    if result.suggestions.is_empty() {
        println!("No standard pair within 5% of target.");
        return Ok(());
    }

    println!("{:>8} {:>8} {:>10} {:>8}", "R1", "R2", "Vout", "Error");
    for pair in &result.suggestions {
        println!(
            "{:>8} {:>8} {:>9.3}V {:>7.2}%",
            pair.r1, pair.r2, pair.actual_vout, pair.error_pct
        );
    }
    Ok(())
}
