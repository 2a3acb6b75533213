// SPDX-License-Identifier: MPL-2.0
//! Colors, spacing and sizes shared by the booking screens.
//!
//! Screens never hard-code a pixel or color value; they pick one of the
//! scales below so cards, forms and toasts line up on the same 4px grid.
//!
//! ```
//! use travel_desk::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color { a: opacity::OVERLAY_STRONG, ..palette::BLACK };
//! let card_padding = spacing::MD;
//! # let _ = (backdrop, card_padding);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand blue: navbar, primary buttons, prices
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    // Toast severities and booking status badges
    pub const ERROR_400: Color = Color::from_rgb(0.937, 0.361, 0.345);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const ERROR_600: Color = Color::from_rgb(0.776, 0.157, 0.157);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Toast and card backgrounds.
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    /// Login, register and booking forms.
    pub const FORM_WIDTH: f32 = 420.0;
    /// Result lists and booking details.
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
    /// Right-hand price block on travel option cards.
    pub const PRICE_COLUMN_WIDTH: f32 = 140.0;

    /// Scroll-to-top button (44x44 touch target).
    pub const FLOATING_BUTTON: f32 = 44.0;
}

pub mod typography {
    /// Page headings.
    pub const TITLE_LG: f32 = 30.0;
    /// App name, prices, countdown.
    pub const TITLE_MD: f32 = 20.0;
    /// Card and section headers.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Field hints, secondary labels.
    pub const BODY_SM: f32 = 13.0;
    /// Status badges, timestamps.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Pill shape for status badges.
    pub const FULL: f32 = 9999.0;
}

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

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::LG > spacing::MD);
    assert!(opacity::SURFACE > opacity::OVERLAY_STRONG && opacity::SURFACE < opacity::OPAQUE);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_SM > typography::CAPTION);
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::FORM_WIDTH);
    assert!(sizing::FORM_WIDTH > sizing::TOAST_WIDTH);
};
