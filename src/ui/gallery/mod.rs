// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: one artwork at a time with Previous/Next navigation.
//!
//! - [`component`] - State, messages and the wrapping transitions
//! - [`layout`] - Pure `(index, orientation)` to layout mapping
//! - [`view`] - Iced widgets for a layout
//! - [`assets`] - Embedded artwork images

pub mod assets;
pub mod component;
pub mod layout;
pub mod view;

pub use component::{Event, Message, State, ViewEnv};
