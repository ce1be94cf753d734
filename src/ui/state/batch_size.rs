// SPDX-License-Identifier: MPL-2.0
//! Reveal batch size domain type.
//!
//! This module provides a type-safe wrapper for the number of catalog items
//! the gallery reveals per request.

use crate::config::{DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE, MIN_BATCH_SIZE};

/// Number of items revealed per "expand" request.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–12 items).
///
/// # Example
///
/// ```
/// use folio::ui::state::BatchSize;
///
/// let batch = BatchSize::new(4);
/// assert_eq!(batch.value(), 4);
///
/// // Values outside range are clamped
/// let too_small = BatchSize::new(0);
/// assert_eq!(too_small.value(), 1); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSize(usize);

impl BatchSize {
    /// Creates a new batch size, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self(DEFAULT_BATCH_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(BatchSize::new(0).value(), MIN_BATCH_SIZE);
        assert_eq!(BatchSize::new(500).value(), MAX_BATCH_SIZE);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(BatchSize::new(1).value(), 1);
        assert_eq!(BatchSize::new(6).value(), 6);
        assert_eq!(BatchSize::new(12).value(), 12);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(BatchSize::default().value(), DEFAULT_BATCH_SIZE);
    }
}
