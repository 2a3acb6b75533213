// SPDX-License-Identifier: MPL-2.0
//! Inline panel for screens whose content failed to load.
//!
//! ```ignore
//! ErrorDisplay::new("Failed to load booking details")
//!     .message("Not found.")
//!     .retry(Message::Retry)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, rule, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

const PANEL_MAX_WIDTH: f32 = 500.0;

/// Load failure with an optional retry and backend field errors.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: String,
    message: Option<String>,
    details: Vec<String>,
    show_details: bool,
    retry: Option<Message>,
    toggle_details: Option<Message>,
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            details: Vec::new(),
            show_details: false,
            retry: None,
            toggle_details: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Field-level messages, listed one per line when expanded.
    pub fn details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    pub fn retry(mut self, message: Message) -> Self {
        self.retry = Some(message);
        self
    }

    /// Without this the details stay hidden even when present.
    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details = Some(message);
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let danger = |_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        };

        let mut content = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .push(Text::new(self.title).size(typography::TITLE_MD).style(danger));

        if let Some(message) = self.message {
            content = content.push(Text::new(message).size(typography::BODY));
        }

        let mut actions = Row::new().spacing(spacing::SM);
        if let Some(retry) = self.retry {
            actions = actions.push(
                button(Text::new("Retry"))
                    .on_press(retry)
                    .style(styles::button::primary),
            );
        }
        let toggle = self.toggle_details.filter(|_| !self.details.is_empty());
        if let Some(toggle) = toggle {
            let label = if self.show_details {
                "Hide details"
            } else {
                "Show details"
            };
            actions = actions.push(
                button(Text::new(label).size(typography::BODY_SM))
                    .on_press(toggle)
                    .style(styles::button::secondary),
            );
            if self.show_details {
                content = self.details.into_iter().fold(
                    content.push(rule::horizontal(1)),
                    |column, detail| {
                        column.push(Text::new(format!("• {detail}")).size(typography::CAPTION))
                    },
                );
            }
        }
        content = content.push(actions);

        let row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .push(Text::new("✕").size(typography::TITLE_LG).style(danger))
            .push(content);

        Container::new(row)
            .width(Length::Fill)
            .max_width(PANEL_MAX_WIDTH)
            .padding(spacing::LG)
            .style(styles::container::card)
            .into()
    }
}

/// Centers an error panel horizontally.
pub fn centered_error_view<Message: Clone + 'static>(
    display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(display.view())
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
        ToggleDetails,
    }

    #[test]
    fn builder_collects_parts() {
        let display = ErrorDisplay::new("Failed to load booking details")
            .message("Not found.")
            .details(vec!["id: invalid".into()])
            .retry(TestMessage::Retry)
            .on_toggle_details(TestMessage::ToggleDetails);

        assert_eq!(display.title, "Failed to load booking details");
        assert_eq!(display.retry, Some(TestMessage::Retry));
        assert_eq!(display.details, vec!["id: invalid".to_string()]);
        assert!(!display.show_details);

        let _element = display.details_visible(true).view();
    }

    #[test]
    fn renders_without_optional_parts() {
        let _element = ErrorDisplay::<TestMessage>::new("Failed to load bookings").view();
    }
}
