// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the certificate gallery.
//!
//! Each sub-component has its own state, Message, Effect, and handle() method.
//! `component.rs` orchestrates them.
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── disclosure - Incremental reveal of the catalog
//!     └── preview    - Fullscreen preview and page resources
//! ```

pub mod disclosure;
pub mod preview;
