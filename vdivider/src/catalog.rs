//! Standard resistor value catalog.
//!
//! The catalog is the discrete domain both divider resistors are drawn from.
//! It is built once and only ever read afterwards.

use crate::core::DividerError;

/// E24 mantissas written as two-digit values (10 = 1.0, 91 = 9.1).
pub const E24_MANTISSAS: [f64; 24] = [
    10.0, 11.0, 12.0, 13.0, 15.0, 16.0, 18.0, 20.0, 22.0, 24.0, 27.0, 30.0, 33.0, 36.0, 39.0,
    43.0, 47.0, 51.0, 56.0, 62.0, 68.0, 75.0, 82.0, 91.0,
];

/// Decade multipliers applied to [`E24_MANTISSAS`] for the standard catalog.
const DECADES: [f64; 4] = [1.0, 10.0, 100.0, 1_000.0];

/// Closing value of the standard catalog (100 kΩ).
const CATALOG_CEILING: f64 = 100_000.0;

/// Ordered, duplicate-free set of allowed resistances in ohms.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistanceCatalog {
    values: Vec<f64>,
}

impl ResistanceCatalog {
    /// Build a catalog from caller-supplied values.
    ///
    /// Values must be finite, positive and strictly ascending.
    pub fn new(values: Vec<f64>) -> Result<Self, DividerError> {
        if values.is_empty() {
            return Err(DividerError::EmptyCatalog);
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(DividerError::NonPositiveValue { index, value });
            }
            if index > 0 && value <= values[index - 1] {
                return Err(DividerError::UnsortedCatalog { index });
            }
        }
        Ok(Self { values })
    }

    /// The fixed E24 catalog from 10 Ω to 100 kΩ (97 values).
    pub fn standard() -> Self {
        let mut values: Vec<f64> = DECADES
            .iter()
            .flat_map(|decade| E24_MANTISSAS.iter().map(move |m| m * decade))
            .collect();
        values.push(CATALOG_CEILING);
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> f64 {
        self.values[0]
    }

    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Position of `value` in the catalog, if it is a member.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        self.values
            .binary_search_by(|probe| probe.total_cmp(&value))
            .ok()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.index_of(value).is_some()
    }
}

impl Default for ResistanceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a ResistanceCatalog {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
