//! VDivider CLI - voltage divider resistor calculator from the command line.

mod display;

use clap::{Parser, Subcommand, ValueEnum};
use std::process;
use tracing_subscriber::EnvFilter;
use vdivider::{
    AutomaticResult, DividerError, DividerSession, ManualResult, Mode, ResistanceCatalog,
    SearchOptions, Selection, SessionView,
};

#[derive(Parser)]
#[command(name = "vdivider")]
#[command(about = "Voltage divider resistor calculator (E24 series)", long_about = None)]
#[command(version)]
struct Cli {
    /// Log to stderr (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate ideal resistors and the best standard resistor pairs
    Auto {
        /// Input (supply) voltage
        #[arg(long, value_name = "VOLTS")]
        vin: f64,

        /// Desired output voltage
        #[arg(long, value_name = "VOLTS")]
        vout: f64,

        /// Only list pairs with an error below this percentage
        #[arg(long, value_name = "PCT", default_value_t = vdivider::search::DEFAULT_ERROR_THRESHOLD_PCT)]
        threshold: f64,

        /// Maximum number of pairs to list
        #[arg(long, value_name = "N", default_value_t = vdivider::search::DEFAULT_MAX_RESULTS)]
        max_results: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Evaluate a chosen resistor pair (best pair is suggested when omitted)
    Manual {
        /// Input (supply) voltage
        #[arg(long, value_name = "VOLTS")]
        vin: f64,

        /// Desired output voltage
        #[arg(long, value_name = "VOLTS")]
        vout: f64,

        /// R1 in ohms (must be a standard value)
        #[arg(long, value_name = "OHMS")]
        r1: Option<f64>,

        /// R2 in ohms (must be a standard value)
        #[arg(long, value_name = "OHMS")]
        r2: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List the standard resistor values
    Catalog {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripting
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = ResistanceCatalog::standard();

    let exit_code = match cli.command {
        Commands::Auto {
            vin,
            vout,
            threshold,
            max_results,
            format,
        } => {
            let options = SearchOptions {
                error_threshold_pct: threshold,
                max_results,
            };
            handle_auto(&catalog, vin, vout, options, format)
        }
        Commands::Manual {
            vin,
            vout,
            r1,
            r2,
            format,
        } => handle_manual(&catalog, vin, vout, r1, r2, format),
        Commands::Catalog { format } => handle_catalog(&catalog, format),
    };

    process::exit(exit_code);
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_auto(
    catalog: &ResistanceCatalog,
    vin: f64,
    vout: f64,
    options: SearchOptions,
    format: OutputFormat,
) -> i32 {
    let threshold = options.error_threshold_pct;
    let session = DividerSession::new(catalog, vin, vout).with_options(options);
    tracing::debug!("Automatic search within {}%", threshold);
    render(&session, threshold, format)
}

fn handle_manual(
    catalog: &ResistanceCatalog,
    vin: f64,
    vout: f64,
    r1: Option<f64>,
    r2: Option<f64>,
    format: OutputFormat,
) -> i32 {
    let mut session = DividerSession::new(catalog, vin, vout);
    session.set_mode(Mode::Manual);

    if let Some(r1) = r1 {
        if let Err(e) = session.select_r1(r1) {
            tracing::debug!("Rejected manual R1 selection {}", r1);
            return report(e);
        }
    }
    if let Some(r2) = r2 {
        if let Err(e) = session.select_r2(r2) {
            tracing::debug!("Rejected manual R2 selection {}", r2);
            return report(e);
        }
    }

    render(&session, vdivider::search::DEFAULT_ERROR_THRESHOLD_PCT, format)
}

fn render(session: &DividerSession<'_>, threshold: f64, format: OutputFormat) -> i32 {
    let view = match session.view() {
        Ok(view) => view,
        Err(e) => return report(e),
    };

    match (view, format) {
        (SessionView::Automatic(result), OutputFormat::Human) => {
            output_auto_human(&result, threshold);
            0
        }
        (SessionView::Manual(result), OutputFormat::Human) => {
            output_manual_human(&result, session.selection());
            0
        }
        (SessionView::Automatic(result), OutputFormat::Json) => print_json(&result),
        (SessionView::Manual(result), OutputFormat::Json) => print_json(&result),
    }
}

fn handle_catalog(catalog: &ResistanceCatalog, format: OutputFormat) -> i32 {
    match format {
        OutputFormat::Human => {
            println!("Standard resistor values (E24, {} values):\n", catalog.len());
            for row in catalog.values().chunks(8) {
                let line: Vec<String> = row
                    .iter()
                    .map(|&v| format!("{:>9}", display::resistance(v)))
                    .collect();
                println!("  {}", line.join(" "));
            }
            0
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "series": "E24",
                "count": catalog.len(),
                "values": catalog.values(),
            });
            print_json(&output)
        }
    }
}

fn report(e: DividerError) -> i32 {
    eprintln!("Error: {}", e);
    1
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize output: {}", e);
            1
        }
    }
}

fn output_auto_human(result: &AutomaticResult, threshold: f64) {
    let vin = result.input.vin();
    let vout = result.input.vout();

    println!("\nDivider: {}V -> {}", vin, display::voltage(vout, 2));
    println!("{}", "─".repeat(60));

    println!("\n  Calculated Values:");
    println!("    R1: {}", display::resistance(result.ideal.r1));
    println!("    R2: {}", display::resistance(result.ideal.r2));

    print_circuit(vin, result.ideal.r1, result.ideal.r2, vout);

    let suggestions = &result.suggestions;
    if suggestions.is_empty() {
        println!(
            "\n  No standard resistor combination within {}% of target",
            threshold
        );
    } else {
        println!("\n  Standard Resistor Combinations:");
        println!(
            "    {:<10} {:<10} {:<16} {}",
            "R1", "R2", "Output Voltage", "Error"
        );
        for pair in suggestions {
            println!(
                "    {:<10} {:<10} {:<16} {}",
                display::resistance(pair.r1),
                display::resistance(pair.r2),
                display::voltage(pair.actual_vout, 3),
                display::percent(pair.error_pct)
            );
        }
        if suggestions.stats.within_threshold > suggestions.len() {
            println!(
                "    ({} pairs within {}%, showing {})",
                suggestions.stats.within_threshold,
                threshold,
                suggestions.len()
            );
        }
    }

    print_formula();
}

fn output_manual_human(result: &ManualResult, selection: Selection) {
    let source = match selection {
        Selection::UserOverridden(_) => "selected",
        Selection::AutoSelected(_) => "suggested",
        Selection::Unselected => "default",
    };

    println!(
        "\nDivider: {}V, target {}",
        result.vin,
        display::voltage(result.target_vout, 2)
    );
    println!("{}", "─".repeat(60));

    println!("\n  Selected Resistors ({}):", source);
    println!("    R1: {}", display::resistance(result.r1));
    println!("    R2: {}", display::resistance(result.r2));
    println!(
        "    Output Voltage: {}",
        display::voltage(result.evaluation.actual_vout, 3)
    );
    if let Some(error) = result.evaluation.error_pct {
        println!("    Error from target: {}", display::percent(error));
    }

    print_circuit(result.vin, result.r1, result.r2, result.evaluation.actual_vout);
    print_formula();
}

fn print_circuit(vin: f64, r1: f64, r2: f64, vout: f64) {
    println!();
    println!("    +{}V", vin);
    println!("     │");
    println!("    [R1: {}]", display::resistance(r1));
    println!("     │");
    println!("     ├── +{}", display::voltage(vout, 2));
    println!("     │");
    println!("    [R2: {}]", display::resistance(r2));
    println!("     │");
    println!("    GND");
}

fn print_formula() {
    println!("\n  Vout = Vin × (R2 / (R1 + R2))");
}
