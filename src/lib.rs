// SPDX-License-Identifier: MPL-2.0
//! `folio` is a personal portfolio built with the Iced GUI framework.
//!
//! Alongside the home, projects and experiences pages it hosts a certificate
//! gallery that reveals its catalog in batches and opens any card in a
//! fullscreen preview. Text is localized with Fluent and preferences persist
//! to a TOML file.

#![doc(html_root_url = "https://docs.rs/folio/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
