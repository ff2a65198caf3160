//! VDivider - two-resistor voltage divider calculator
//!
//! Given an input voltage and a desired output voltage, this library derives
//! the ideal resistor ratio and searches the E24 standard series for the
//! real resistor pairs that come closest to it. A chosen pair can also be
//! evaluated directly.
//!
//! # Quick Start
//!
//! ```
//! use vdivider::{DividerCore, DividerInput, ResistanceCatalog, SearchOptions};
//!
//! let catalog = ResistanceCatalog::standard();
//! let input = DividerInput::new(5.0, 3.3)?;
//! let result = DividerCore::automatic(&catalog, input, &SearchOptions::default())?;
//!
//! for pair in &result.suggestions {
//!     println!("R1={} R2={} -> {:.3}V ({:.2}%)", pair.r1, pair.r2, pair.actual_vout, pair.error_pct);
//! }
//! # Ok::<(), vdivider::DividerError>(())
//! ```
//!
//! # Features
//!
//! - **Automatic mode**: ideal R1 for a fixed 10 kΩ R2, plus ranked catalog pairs
//! - **Manual mode**: output voltage and error of a chosen pair
//! - **Session**: mode and selection state for interactive front ends

pub mod catalog;
pub mod core;
pub mod ideal;
pub mod manual;
pub mod math;
pub mod search;
pub mod session;

// Re-export main types
pub use catalog::ResistanceCatalog;
pub use crate::core::{AutomaticResult, DividerCore, DividerError, DividerInput, ManualResult};
pub use ideal::{IdealPair, REFERENCE_R2};
pub use manual::ManualEvaluation;
pub use search::{best_single, search, CandidatePair, RankedResultSet, SearchOptions, SearchStats};
pub use session::{DividerSession, Mode, ResistorPair, Selection, SessionView};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        DividerCore, DividerError, DividerInput, DividerSession, Mode, ResistanceCatalog,
        SearchOptions, SessionView,
    };
}
