// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Screen;
use crate::ui::gallery::component;
use crate::ui::navbar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(component::Message),
    /// Hide the startup warning banner.
    DismissWarning,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
///
/// The `--config-dir` override is not carried here: `main` records it with
/// [`super::paths::init_cli_override`] before the application boots.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Screen to open on startup.
    pub screen: Option<Screen>,
}
