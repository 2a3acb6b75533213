// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, radius};
use iced::widget::text_input::{Status, Style};
use iced::{Border, Theme};

/// Form field style. Required fields left blank get a danger border.
pub fn field(invalid: bool) -> impl Fn(&Theme, Status) -> Style {
    move |theme: &Theme, status: Status| {
        let palette = theme.extended_palette();

        let mut style = match status {
            Status::Active | Status::Hovered => Style {
                background: palette.background.base.color.into(),
                border: Border {
                    color: palette.background.strong.color,
                    width: border::WIDTH_SM,
                    radius: radius::SM.into(),
                },
                icon: palette.background.weak.text,
                placeholder: palette.background.strong.text,
                value: palette.background.base.text,
                selection: palette.primary.weak.color,
            },
            Status::Focused { .. } => Style {
                background: palette.background.base.color.into(),
                border: Border {
                    color: palette.primary.strong.color,
                    width: border::WIDTH_SM,
                    radius: radius::SM.into(),
                },
                icon: palette.background.weak.text,
                placeholder: palette.background.strong.text,
                value: palette.background.base.text,
                selection: palette.primary.weak.color,
            },
            Status::Disabled => Style {
                background: palette.background.weak.color.into(),
                border: Border {
                    color: palette.background.strong.color,
                    width: border::WIDTH_SM,
                    radius: radius::SM.into(),
                },
                icon: palette.background.strong.text,
                placeholder: palette.background.strong.text,
                value: palette.background.strong.text,
                selection: palette.background.weak.color,
            },
        };

        if invalid {
            style.border.color = palette.danger.base.color;
        }

        style
    }
}
