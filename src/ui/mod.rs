// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`pages`] - Static home, projects and experiences pages
//! - [`gallery`] - Certificate gallery with incremental reveal and preview
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Validated gallery settings (batch size, reveal delay)
//! - [`widgets`] - Custom Iced widgets (spinner, scroll guard)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with language and theme switches

pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod pages;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
