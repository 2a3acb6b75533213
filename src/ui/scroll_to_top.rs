// SPDX-License-Identifier: MPL-2.0
//! Floating "back to top" button for the page scrollable.

use crate::config::defaults::SCROLL_TO_TOP_OFFSET;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{button, operation, Container, Id, Text};
use iced::{alignment, Element, Length, Task};

/// Id of the scrollable wrapping every screen.
pub const PAGE_SCROLLABLE: &str = "page-scrollable";

/// Whether the button shows for a content offset.
#[must_use]
pub fn is_visible(offset_y: f32) -> bool {
    offset_y > SCROLL_TO_TOP_OFFSET
}

/// Snaps the page scrollable back to the top.
pub fn scroll_to_top<T>() -> Task<T> {
    operation::snap_to(
        Id::new(PAGE_SCROLLABLE),
        RelativeOffset { x: 0.0, y: 0.0 },
    )
}

/// Button anchored bottom-left, clear of the toast column.
pub fn view<'a, Message: Clone + 'a>(on_press: Message) -> Element<'a, Message> {
    let arrow = button(
        Container::new(Text::new("↑").size(typography::TITLE_MD))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(on_press)
    .width(Length::Fixed(sizing::FLOATING_BUTTON))
    .height(Length::Fixed(sizing::FLOATING_BUTTON))
    .style(styles::button::floating);

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_only_past_threshold() {
        assert!(!is_visible(0.0));
        assert!(!is_visible(300.0));
        assert!(is_visible(301.0));
    }

    #[test]
    fn view_renders() {
        let _element: Element<'_, ()> = view(());
    }
}
