// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Reveal batch size and simulated reveal latency

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of certificates revealed per "expand" request.
pub const DEFAULT_BATCH_SIZE: usize = 2;

/// Minimum reveal batch size.
pub const MIN_BATCH_SIZE: usize = 1;

/// Maximum reveal batch size.
pub const MAX_BATCH_SIZE: usize = 12;

/// Default delay before a reveal batch lands (milliseconds).
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 800;

/// Maximum reveal delay (milliseconds).
pub const MAX_REVEAL_DELAY_MS: u64 = 5_000;

const _: () = {
    assert!(MIN_BATCH_SIZE >= 1);
    assert!(DEFAULT_BATCH_SIZE >= MIN_BATCH_SIZE);
    assert!(DEFAULT_BATCH_SIZE <= MAX_BATCH_SIZE);
    assert!(DEFAULT_REVEAL_DELAY_MS <= MAX_REVEAL_DELAY_MS);
};
