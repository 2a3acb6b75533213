// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation.
//!
//! Shows the app name, one entry per top-level screen and a hamburger menu
//! with the account actions. The bar is raised with a shadow once the page
//! content is scrolled past [`NAVBAR_SCROLLED_OFFSET`].

use crate::app::Screen;
use crate::config::defaults::NAVBAR_SCROLLED_OFFSET;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub screen: Screen,
    pub menu_open: bool,
    pub scrolled: bool,
    /// Display name of the signed-in user.
    pub user: Option<String>,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    OpenSearch,
    OpenBookings,
    OpenAccount,
    Logout,
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
    Logout,
    CycleTheme,
}

/// Whether the bar should render as scrolled for a content offset.
#[must_use]
pub fn is_scrolled(offset_y: f32) -> bool {
    offset_y > NAVBAR_SCROLLED_OFFSET
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::OpenSearch => {
            *menu_open = false;
            Event::Navigate(Screen::Search)
        }
        Message::OpenBookings => {
            *menu_open = false;
            Event::Navigate(Screen::Bookings)
        }
        Message::OpenAccount => {
            *menu_open = false;
            Event::Navigate(Screen::Account)
        }
        Message::Logout => {
            *menu_open = false;
            Event::Logout
        }
        Message::CycleTheme => Event::CycleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext) -> Element<'a, Message> {
    let title = Text::new("Travel Desk").size(typography::TITLE_MD);

    let nav_button = |label: &'a str, target: Screen, message: Message| {
        let active = ctx.screen == target
            || (target == Screen::Bookings && ctx.screen == Screen::BookingDetails);
        let style = if active {
            styles::button::selected
        } else {
            styles::button::secondary
        };
        button(Text::new(label)).on_press(message).style(style)
    };

    let theme_button = button(Text::new(format!("Theme: {}", ctx.theme_mode.label())))
        .on_press(Message::CycleTheme)
        .style(styles::button::secondary);

    let menu_label = ctx.user.as_deref().unwrap_or("Menu");
    let menu_button = button(Text::new(format!("☰ {menu_label}")))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::secondary);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(nav_button("Search", Screen::Search, Message::OpenSearch))
        .push(nav_button("My Bookings", Screen::Bookings, Message::OpenBookings))
        .push(theme_button)
        .push(menu_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar(ctx.scrolled))
        .into()
}

/// Dropdown with the account actions.
fn build_dropdown<'a>(ctx: &ViewContext) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    if ctx.user.is_some() {
        menu_column = menu_column.push(build_menu_item("Log out", Message::Logout));
    } else {
        menu_column = menu_column.push(build_menu_item("Sign in / Register", Message::OpenAccount));
    }
    menu_column = menu_column.push(build_menu_item("Close", Message::CloseMenu));

    let menu = Container::new(menu_column)
        .padding(spacing::XS)
        .width(Length::Fixed(220.0))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        });

    Container::new(menu)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding([0.0, spacing::SM])
        .into()
}

fn build_menu_item<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(menu_item_style)
        .into()
}

/// Style function for menu items.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(menu_open: bool, user: Option<&str>) -> ViewContext {
        ViewContext {
            screen: Screen::Search,
            menu_open,
            scrolled: false,
            user: user.map(str::to_string),
            theme_mode: ThemeMode::System,
        }
    }

    #[test]
    fn navbar_view_renders() {
        let _element = view(ctx(false, None));
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let _element = view(ctx(true, Some("Asha Rao")));
        let _element = view(ctx(true, None));
    }

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert_eq!(event, Event::None);

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn menu_items_close_menu_and_emit_event() {
        let mut menu_open = true;
        assert_eq!(
            update(Message::OpenBookings, &mut menu_open),
            Event::Navigate(Screen::Bookings)
        );
        assert!(!menu_open);

        menu_open = true;
        assert_eq!(update(Message::Logout, &mut menu_open), Event::Logout);
        assert!(!menu_open);

        menu_open = true;
        assert_eq!(
            update(Message::OpenAccount, &mut menu_open),
            Event::Navigate(Screen::Account)
        );
    }

    #[test]
    fn theme_toggle_keeps_menu_state() {
        let mut menu_open = true;
        assert_eq!(update(Message::CycleTheme, &mut menu_open), Event::CycleTheme);
        assert!(menu_open);
    }
}
