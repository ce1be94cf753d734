// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Validated value types shared by the gallery and the settings file.

pub mod batch_size;
pub mod reveal_delay;

// Re-export commonly used types for convenience
pub use batch_size::BatchSize;
pub use reveal_delay::RevealDelay;
