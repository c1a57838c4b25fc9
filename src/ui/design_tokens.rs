// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid) plus gallery gutters
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use art_space::ui::design_tokens::{palette, spacing, typography};

let padding = spacing::MD; // 16px
let title_size = typography::ARTWORK_TITLE;
assert!(title_size > typography::ARTWORK_CAPTION);
let _ = palette::WHITE;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_50: Color = Color::from_rgb(0.95, 0.95, 0.95);

    // Frame colors
    pub const WALNUT: Color = Color::from_rgb(0.35, 0.24, 0.16);
    pub const IVORY: Color = Color::from_rgb(0.96, 0.94, 0.89);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units

    /// Inner gutter between the two navigation buttons in portrait.
    pub const BUTTON_GUTTER: f32 = 50.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Edge length of the artwork image, sized so the framed artwork fits
    /// the default portrait window.
    pub const ARTWORK: f32 = 300.0;

    /// Matting between the artwork and its frame.
    pub const ARTWORK_MATTING: f32 = 30.0;

    pub const BUTTON_HEIGHT: f32 = 40.0;

    /// Maximum width of the description tooltip before wrapping.
    pub const TOOLTIP_MAX_WIDTH: f32 = 280.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Artwork title, the most prominent text on screen.
    pub const ARTWORK_TITLE: f32 = 40.0;

    /// Artist and year caption under the title.
    pub const ARTWORK_CAPTION: f32 = 20.0;

    /// Button labels.
    pub const BODY_LG: f32 = 16.0;

    /// Tooltips and secondary text.
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Picture frame around the artwork.
    pub const WIDTH_FRAME: f32 = 5.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::BUTTON_GUTTER > spacing::MD);

    // Sizing validation
    assert!(sizing::ARTWORK > sizing::ARTWORK_MATTING * 2.0);

    // Typography validation
    assert!(typography::ARTWORK_TITLE > typography::ARTWORK_CAPTION);
    assert!(typography::ARTWORK_CAPTION > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY_SM);

    // Border validation
    assert!(border::WIDTH_FRAME > border::WIDTH_SM);
};
