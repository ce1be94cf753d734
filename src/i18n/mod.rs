// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The active
//! locale is taken from the `--lang` flag, then the config file, then the
//! operating system, and falls back to `en-US`.

pub mod fluent;
