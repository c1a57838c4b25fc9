// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a small art gallery built with the Iced GUI framework.
//!
//! It cycles through a fixed collection of four artworks, with Previous/Next
//! navigation and separate layouts for portrait and landscape windows. The
//! crate also demonstrates internationalization with Fluent and user
//! preference management.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
