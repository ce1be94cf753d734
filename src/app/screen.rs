// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use std::fmt;
use std::str::FromStr;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    About,
    Projects,
    Experiences,
    Certificates,
}

impl Screen {
    /// Navbar order.
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::About,
        Screen::Projects,
        Screen::Experiences,
        Screen::Certificates,
    ];

    /// Name accepted on the command line.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::About => "about",
            Screen::Projects => "projects",
            Screen::Experiences => "experiences",
            Screen::Certificates => "certificates",
        }
    }

    /// Fluent key of the navbar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Screen::Home => "navbar-home",
            Screen::About => "navbar-about",
            Screen::Projects => "navbar-projects",
            Screen::Experiences => "navbar-experiences",
            Screen::Certificates => "navbar-certificates",
        }
    }
}

/// Returned when a screen name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScreen(pub String);

impl fmt::Display for UnknownScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown screen '{}'", self.0)
    }
}

impl std::error::Error for UnknownScreen {}

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Screen::ALL
            .into_iter()
            .find(|screen| screen.slug() == wanted)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}
