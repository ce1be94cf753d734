// SPDX-License-Identifier: MPL-2.0
//! Artificial latency applied before a reveal batch lands.

use crate::config::{DEFAULT_REVEAL_DELAY_MS, MAX_REVEAL_DELAY_MS};
use std::time::Duration;

/// Delay between an "expand" request and the batch appearing, in milliseconds.
///
/// Zero means reveals complete synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealDelay(u64);

impl RevealDelay {
    /// Creates a new delay, clamping to the supported maximum.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.min(MAX_REVEAL_DELAY_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0 == 0
    }
}

impl Default for RevealDelay {
    fn default() -> Self {
        Self(DEFAULT_REVEAL_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_maximum() {
        assert_eq!(RevealDelay::new(60_000).millis(), MAX_REVEAL_DELAY_MS);
    }

    #[test]
    fn zero_is_immediate() {
        assert!(RevealDelay::new(0).is_immediate());
        assert!(!RevealDelay::default().is_immediate());
    }

    #[test]
    fn as_duration_converts_correctly() {
        assert_eq!(
            RevealDelay::new(250).as_duration(),
            Duration::from_millis(250)
        );
    }
}
