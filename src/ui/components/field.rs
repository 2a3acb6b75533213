// SPDX-License-Identifier: MPL-2.0
//! Labeled text input used by every form.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{text_input, Column, Text};
use iced::{Element, Length};

/// Configuration for a labeled input.
pub struct Field<'a, Message> {
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    invalid: bool,
    secure: bool,
    hint: Option<String>,
    on_input: Box<dyn Fn(String) -> Message + 'a>,
    on_submit: Option<Message>,
}

impl<'a, Message: Clone + 'a> Field<'a, Message> {
    pub fn new(
        label: &'a str,
        value: &'a str,
        on_input: impl Fn(String) -> Message + 'a,
    ) -> Self {
        Self {
            label,
            placeholder: "",
            value,
            invalid: false,
            secure: false,
            hint: None,
            on_input: Box::new(on_input),
            on_submit: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Marks the field as a blank required field.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Small line of feedback under the input.
    pub fn hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint;
        self
    }

    pub fn on_submit(mut self, message: Message) -> Self {
        self.on_submit = Some(message);
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let mut input = text_input(self.placeholder, self.value)
            .on_input(self.on_input)
            .secure(self.secure)
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(styles::input::field(self.invalid));

        if let Some(message) = self.on_submit {
            input = input.on_submit(message);
        }

        let mut column = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(self.label).size(typography::BODY_SM))
            .push(input);

        if let Some(hint) = self.hint {
            column = column.push(Text::new(hint).size(typography::CAPTION));
        }

        column.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Changed(String),
        Submit,
    }

    #[test]
    fn field_renders_with_all_options() {
        let _element: Element<'_, TestMessage> = Field::new("Source", "Delhi", TestMessage::Changed)
            .placeholder("From")
            .invalid(true)
            .secure(false)
            .hint(Some("Required".into()))
            .on_submit(TestMessage::Submit)
            .view();
    }
}
