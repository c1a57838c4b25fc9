// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window constants.
//!
//! # Categories
//!
//! - **Window**: Default and minimum window dimensions
//! - **Locale**: Fallback language

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width. Narrower than tall so the gallery opens in portrait.
pub const DEFAULT_WINDOW_WIDTH: f32 = 420.0;

/// Default window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config nor the OS select one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
};
