//! Front-end state for an interactive divider calculator.
//!
//! Tracks the current inputs, calculation mode and manual resistor
//! selection, and decides when the selection is reseeded from the catalog.
//! The user's own pick is never replaced by a reseed until the target
//! voltage or the mode changes.
//!
//! ```
//! use vdivider::{DividerSession, Mode, ResistanceCatalog, SessionView};
//!
//! let catalog = ResistanceCatalog::standard();
//! let mut session = DividerSession::new(&catalog, 5.0, 3.3);
//! session.set_mode(Mode::Manual);
//! session.select_r2(10_000.0)?;
//!
//! if let SessionView::Manual(result) = session.view()? {
//!     println!("{}V", result.evaluation.actual_vout);
//! }
//! # Ok::<(), vdivider::DividerError>(())
//! ```

use serde::Serialize;

use crate::catalog::ResistanceCatalog;
use crate::core::{AutomaticResult, DividerCore, DividerError, DividerInput, ManualResult};
use crate::search::{self, SearchOptions};

/// Pair shown in manual mode before anything has been selected.
pub const DEFAULT_MANUAL_PAIR: ResistorPair = ResistorPair {
    r1: 10_000.0,
    r2: 4_700.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResistorPair {
    pub r1: f64,
    pub r2: f64,
}

/// Manual-mode resistor selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    /// Seeded from the best catalog pair.
    AutoSelected(ResistorPair),
    /// Picked by the user; survives input voltage changes.
    UserOverridden(ResistorPair),
}

impl Selection {
    pub fn pair(&self) -> Option<ResistorPair> {
        match self {
            Selection::Unselected => None,
            Selection::AutoSelected(pair) | Selection::UserOverridden(pair) => Some(*pair),
        }
    }

    pub fn is_user_overridden(&self) -> bool {
        matches!(self, Selection::UserOverridden(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionView {
    Automatic(AutomaticResult),
    Manual(ManualResult),
}

pub struct DividerSession<'a> {
    catalog: &'a ResistanceCatalog,
    vin: f64,
    vout: f64,
    mode: Mode,
    options: SearchOptions,
    selection: Selection,
}

impl<'a> DividerSession<'a> {
    pub fn new(catalog: &'a ResistanceCatalog, vin: f64, vout: f64) -> Self {
        Self {
            catalog,
            vin,
            vout,
            mode: Mode::Automatic,
            options: SearchOptions::default(),
            selection: Selection::Unselected,
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn input_voltage(&self) -> f64 {
        self.vin
    }

    pub fn target_voltage(&self) -> f64 {
        self.vout
    }

    /// Pair manual mode would evaluate right now.
    pub fn current_pair(&self) -> ResistorPair {
        self.selection.pair().unwrap_or(DEFAULT_MANUAL_PAIR)
    }

    /// Switch modes. Any user override is dropped; entering manual mode
    /// reseeds the selection.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.clear_override();
        if mode == Mode::Manual {
            self.reseed();
        }
    }

    pub fn set_input_voltage(&mut self, vin: f64) {
        self.vin = vin;
        if self.mode == Mode::Manual {
            self.reseed();
        }
    }

    /// A new target drops any user override.
    pub fn set_target_voltage(&mut self, vout: f64) {
        self.vout = vout;
        self.clear_override();
        if self.mode == Mode::Manual {
            self.reseed();
        }
    }

    pub fn select_r1(&mut self, r1: f64) -> Result<(), DividerError> {
        self.require_member(r1)?;
        let pair = self.current_pair();
        self.selection = Selection::UserOverridden(ResistorPair { r1, ..pair });
        Ok(())
    }

    pub fn select_r2(&mut self, r2: f64) -> Result<(), DividerError> {
        self.require_member(r2)?;
        let pair = self.current_pair();
        self.selection = Selection::UserOverridden(ResistorPair { r2, ..pair });
        Ok(())
    }

    /// Results for the current mode. Fails with `InvalidRange` in either
    /// mode when the input voltage does not exceed the target. Manual mode
    /// also accepts a zero target and then omits the error.
    pub fn view(&self) -> Result<SessionView, DividerError> {
        match self.mode {
            Mode::Automatic => {
                let input = DividerInput::new(self.vin, self.vout).inspect_err(|e| {
                    tracing::debug!("Automatic view rejected: {}", e);
                })?;
                DividerCore::automatic(self.catalog, input, &self.options).map(SessionView::Automatic)
            }
            Mode::Manual => {
                if !(self.vout >= 0.0 && self.vin > self.vout) {
                    let e = DividerError::InvalidRange {
                        vin: self.vin,
                        vout: self.vout,
                    };
                    tracing::debug!("Manual view rejected: {}", e);
                    return Err(e);
                }
                let pair = self.current_pair();
                Ok(SessionView::Manual(DividerCore::manual(
                    self.vin, self.vout, pair.r1, pair.r2,
                )))
            }
        }
    }

    fn require_member(&self, value: f64) -> Result<(), DividerError> {
        if self.catalog.contains(value) {
            Ok(())
        } else {
            Err(DividerError::NotInCatalog(value))
        }
    }

    fn clear_override(&mut self) {
        if let Selection::UserOverridden(pair) = self.selection {
            self.selection = Selection::AutoSelected(pair);
        }
    }

    fn reseed(&mut self) {
        if self.selection.is_user_overridden() {
            return;
        }
        match search::best_single(self.vin, self.vout, self.catalog) {
            Ok(best) => {
                tracing::debug!("Seeded manual pair R1={} R2={}", best.r1, best.r2);
                self.selection = Selection::AutoSelected(ResistorPair {
                    r1: best.r1,
                    r2: best.r2,
                });
            }
            Err(e) => tracing::debug!("Manual pair not reseeded: {}", e),
        }
    }
}
