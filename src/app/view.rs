// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Every screen renders inside one page scrollable under the navbar. Toasts
//! and the scroll-to-top button float above it.

use super::{Message, Screen};
use crate::domain::User;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::scroll_to_top::{self, PAGE_SCROLLABLE};
use crate::ui::theming::ThemeMode;
use crate::ui::{account, booking_details, booking_form, bookings, search};
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub menu_open: bool,
    pub scroll_offset: f32,
    pub user: Option<&'a User>,
    pub search: &'a search::State,
    pub booking_form: Option<&'a booking_form::State>,
    pub bookings: &'a bookings::State,
    pub booking_details: &'a booking_details::State,
    pub account: &'a account::State,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        screen: ctx.screen,
        menu_open: ctx.menu_open,
        scrolled: navbar::is_scrolled(ctx.scroll_offset),
        user: ctx.user.map(User::display_name),
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let page: Element<'_, Message> = match ctx.screen {
        Screen::Search => search::view(ctx.search).map(Message::Search),
        Screen::BookingForm => match ctx.booking_form {
            Some(state) => booking_form::view(state).map(Message::BookingForm),
            None => Container::new(Text::new("Pick a travel option to book.").size(typography::BODY_LG))
                .padding(spacing::LG)
                .into(),
        },
        Screen::Bookings => bookings::view(ctx.bookings).map(Message::Bookings),
        Screen::BookingDetails => {
            booking_details::view(ctx.booking_details).map(Message::BookingDetails)
        }
        Screen::Account => account::view(ctx.account).map(Message::Account),
    };

    let page_scrollable = Scrollable::new(Container::new(page).width(Length::Fill))
        .id(Id::new(PAGE_SCROLLABLE))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset().y));

    let body = Column::new()
        .push(navbar_view)
        .push(page_scrollable)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(body);

    if scroll_to_top::is_visible(ctx.scroll_offset) {
        stack = stack.push(scroll_to_top::view(Message::ScrollToTop));
    }

    stack
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .into()
}
