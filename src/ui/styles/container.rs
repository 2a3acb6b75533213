// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::format::StatusTone;
use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for forms and detail sections.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Result and booking cards.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Top navigation bar. Gains a shadow once the page is scrolled.
pub fn toolbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;
        container::Style {
            background: Some(Background::Color(Color::from_rgba(
                base.r,
                base.g,
                base.b,
                if scrolled { opacity::OPAQUE } else { opacity::SURFACE },
            ))),
            shadow: if scrolled { shadow::MD } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Accent color for a status tone.
#[must_use]
pub fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Success => palette::SUCCESS_500,
        StatusTone::Warning => palette::WARNING_500,
        StatusTone::Danger => palette::ERROR_500,
        StatusTone::Secondary => palette::GRAY_400,
    }
}

/// Colored banner or badge for a booking status.
pub fn status_banner(tone: StatusTone) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let color = tone_color(tone);
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..color
            })),
            border: Border {
                color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            text_color: Some(color),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_toolbar_has_shadow() {
        let flat = toolbar(false)(&Theme::Light);
        let raised = toolbar(true)(&Theme::Light);
        assert_eq!(flat.shadow, shadow::NONE);
        assert_eq!(raised.shadow, shadow::MD);
    }

    #[test]
    fn status_banner_uses_tone_color() {
        let style = status_banner(StatusTone::Danger)(&Theme::Dark);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert_eq!(style.text_color, Some(palette::ERROR_500));
    }
}
