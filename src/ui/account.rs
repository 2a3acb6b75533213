// SPDX-License-Identifier: MPL-2.0
//! Sign-in and registration screen.
//!
//! Registration shows a live password strength meter and flags a mismatched
//! confirmation as soon as it is typed.

use crate::domain::NewAccount;
use crate::forms::{FormError, LoginForm, PasswordStrength, RegisterForm};
use crate::ui::components::Field;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, text, Column, Container, Row, Text},
    Color, Element, Length, Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Login,
    Register,
}

/// Which registration input an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Username,
    Email,
    Password,
    Password2,
    FirstName,
    LastName,
    PhoneNumber,
}

impl RegisterField {
    /// Field name as reported by required-field validation.
    fn name(self) -> &'static str {
        match self {
            RegisterField::Username => "username",
            RegisterField::Email => "email",
            RegisterField::Password => "password",
            RegisterField::Password2 => "password2",
            RegisterField::FirstName => "first_name",
            RegisterField::LastName => "last_name",
            RegisterField::PhoneNumber => "phone_number",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RegisterField::Username => "Username",
            RegisterField::Email => "Email",
            RegisterField::Password => "Password",
            RegisterField::Password2 => "Confirm password",
            RegisterField::FirstName => "First name",
            RegisterField::LastName => "Last name",
            RegisterField::PhoneNumber => "Phone number",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    mode: Mode,
    login: LoginForm,
    register: RegisterForm,
    invalid: Vec<&'static str>,
    submitting: bool,
}

impl State {
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Clears the password fields after a completed request.
    pub fn clear_secrets(&mut self) {
        self.login.password.clear();
        self.register.password.clear();
        self.register.password2.clear();
    }

    /// Switches to sign-in with the username just registered.
    pub fn registered(&mut self) {
        self.login.username = self.register.username.trim().to_string();
        self.register = RegisterForm::default();
        self.mode = Mode::Login;
        self.submitting = false;
    }

    fn register_field_mut(&mut self, field: RegisterField) -> &mut String {
        let form = &mut self.register;
        match field {
            RegisterField::Username => &mut form.username,
            RegisterField::Email => &mut form.email,
            RegisterField::Password => &mut form.password,
            RegisterField::Password2 => &mut form.password2,
            RegisterField::FirstName => &mut form.first_name,
            RegisterField::LastName => &mut form.last_name,
            RegisterField::PhoneNumber => &mut form.phone_number,
        }
    }

    fn register_value(&self, field: RegisterField) -> &str {
        let form = &self.register;
        match field {
            RegisterField::Username => &form.username,
            RegisterField::Email => &form.email,
            RegisterField::Password => &form.password,
            RegisterField::Password2 => &form.password2,
            RegisterField::FirstName => &form.first_name,
            RegisterField::LastName => &form.last_name,
            RegisterField::PhoneNumber => &form.phone_number,
        }
    }

    fn is_invalid(&self, name: &str) -> bool {
        self.invalid.iter().any(|field| *field == name)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SwitchMode(Mode),
    UsernameChanged(String),
    PasswordChanged(String),
    RegisterChanged(RegisterField, String),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Login { username: String, password: String },
    Register(NewAccount),
    Invalid(FormError),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SwitchMode(mode) => {
            state.mode = mode;
            state.invalid.clear();
            Event::None
        }
        Message::UsernameChanged(value) => {
            state.login.username = value;
            Event::None
        }
        Message::PasswordChanged(value) => {
            state.login.password = value;
            Event::None
        }
        Message::RegisterChanged(field, value) => {
            *state.register_field_mut(field) = value;
            Event::None
        }
        Message::Submit if state.submitting => Event::None,
        Message::Submit => {
            let result = match state.mode {
                Mode::Login => state
                    .login
                    .credentials()
                    .map(|(username, password)| Event::Login { username, password }),
                Mode::Register => state.register.submit().map(Event::Register),
            };
            match result {
                Ok(event) => {
                    state.invalid.clear();
                    state.submitting = true;
                    event
                }
                Err(err) => {
                    state.invalid = match &err {
                        FormError::MissingFields(fields) => fields.clone(),
                        _ => Vec::new(),
                    };
                    Event::Invalid(err)
                }
            }
        }
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let tab = |label: &'static str, mode: Mode| {
        let style = if state.mode == mode {
            styles::button::selected
        } else {
            styles::button::secondary
        };
        button(Text::new(label))
            .on_press(Message::SwitchMode(mode))
            .style(style)
    };

    let tabs = Row::new()
        .spacing(spacing::XS)
        .push(tab("Sign in", Mode::Login))
        .push(tab("Register", Mode::Register));

    let (title, body) = match state.mode {
        Mode::Login => ("Welcome back", login_view(state)),
        Mode::Register => ("Create an account", register_view(state)),
    };

    let submit_label = match (state.mode, state.submitting) {
        (_, true) => "Please wait…",
        (Mode::Login, false) => "Sign in",
        (Mode::Register, false) => "Register",
    };
    let submit = button(Text::new(submit_label))
        .on_press_maybe((!state.submitting).then_some(Message::Submit))
        .width(Length::Fill)
        .style(styles::button::primary);

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(tabs)
            .push(Text::new(title).size(typography::TITLE_LG))
            .push(body)
            .push(submit),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .style(styles::container::panel);

    Container::new(card)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .into()
}

fn login_view(state: &State) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(
            Field::new("Username", &state.login.username, Message::UsernameChanged)
                .invalid(state.is_invalid("username"))
                .on_submit(Message::Submit)
                .view(),
        )
        .push(
            Field::new("Password", &state.login.password, Message::PasswordChanged)
                .secure(true)
                .invalid(state.is_invalid("password"))
                .on_submit(Message::Submit)
                .view(),
        )
        .into()
}

fn register_view(state: &State) -> Element<'_, Message> {
    let form = &state.register;
    let input = |field| register_input(state, field);

    let names = Row::new()
        .spacing(spacing::SM)
        .push(input(RegisterField::FirstName).view())
        .push(input(RegisterField::LastName).view());

    let strength = (!form.password.is_empty()).then(|| form.strength());
    let mismatch = form.mismatch().map(|err| err.to_string());

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(input(RegisterField::Username).view())
        .push(input(RegisterField::Email).view())
        .push(names)
        .push(input(RegisterField::PhoneNumber).view())
        .push(input(RegisterField::Password).secure(true).view());

    if let Some(strength) = strength {
        column = column.push(strength_meter(strength));
    }

    column
        .push(
            input(RegisterField::Password2)
                .secure(true)
                .hint(mismatch)
                .on_submit(Message::Submit)
                .view(),
        )
        .into()
}

fn register_input(state: &State, field: RegisterField) -> Field<'_, Message> {
    Field::new(field.label(), state.register_value(field), move |v| {
        Message::RegisterChanged(field, v)
    })
    .invalid(state.is_invalid(field.name()))
}

fn strength_color(strength: PasswordStrength) -> Color {
    match strength.class() {
        "weak" => palette::ERROR_500,
        "medium" => palette::WARNING_500,
        _ => palette::SUCCESS_500,
    }
}

fn strength_meter<'a>(strength: PasswordStrength) -> Element<'a, Message> {
    let color = strength_color(strength);
    Text::new(format!("Password strength: {}", strength.label()))
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
        .into()
}
