// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Artwork titles, captions, descriptions and button labels all live in the
//! embedded `.ftl` files, addressed by artwork index.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Fallback to the default locale when a message is missing

pub mod fluent;
