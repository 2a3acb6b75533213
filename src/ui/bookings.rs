// SPDX-License-Identifier: MPL-2.0
//! "My Bookings" screen: the signed-in user's bookings, newest first as the
//! backend returns them.

use crate::domain::{Booking, BookingStatus};
use crate::format::{format_date, format_date_time, format_price_inr, status_color};
use crate::ui::components::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

pub const NO_BOOKINGS: &str = "You have no bookings yet.";

#[derive(Debug, Clone, Default)]
pub struct State {
    bookings: Option<Vec<Booking>>,
    loading: bool,
    error: Option<String>,
}

impl State {
    /// Marks the list as loading. Existing rows stay visible.
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_bookings(&mut self, bookings: Vec<Booking>) {
        self.bookings = Some(bookings);
        self.loading = false;
        self.error = None;
    }

    pub fn load_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    #[must_use]
    pub fn bookings(&self) -> Option<&[Booking]> {
        self.bookings.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    View(u64),
    Cancel(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Refresh,
    Open(u64),
    Cancel(u64),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Refresh => Event::Refresh,
        Message::View(id) => Event::Open(id),
        Message::Cancel(id) => Event::Cancel(id),
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let refresh = button(Text::new("Refresh"))
        .on_press_maybe((!state.loading).then_some(Message::Refresh))
        .style(styles::button::secondary);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new("My Bookings").size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .push(refresh);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header);

    if let Some(message) = &state.error {
        content = content.push(centered_error_view(
            ErrorDisplay::new("Failed to load bookings")
                .message(message.clone())
                .retry(Message::Refresh),
        ));
    }

    match state.bookings.as_deref() {
        Some([]) => content = content.push(Text::new(NO_BOOKINGS).size(typography::BODY_LG)),
        Some(bookings) => {
            for booking in bookings {
                content = content.push(booking_row(booking));
            }
        }
        None if state.loading => content = content.push(Text::new("Loading bookings…")),
        None => {}
    }

    Container::new(content).center_x(Length::Fill).into()
}

fn booking_row(booking: &Booking) -> Element<'_, Message> {
    let option = &booking.travel_option;
    let tone = status_color(booking.status);

    let badge = Container::new(Text::new(booking.status.to_string()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::status_banner(tone));

    let summary = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(Text::new(format!("{} → {}", option.source, option.destination)).size(typography::TITLE_SM))
                .push(badge),
        )
        .push(
            Text::new(format!(
                "{} · {} · {} seat(s)",
                option.operator_name,
                format_date_time(&option.departure_date, &option.departure_time),
                booking.number_of_seats,
            ))
            .size(typography::BODY_SM),
        )
        .push(
            Text::new(format!(
                "Ref {} · booked {}",
                booking.reference_number,
                format_date(&booking.booking_date)
            ))
            .size(typography::CAPTION),
        );

    let mut actions = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::PRICE_COLUMN_WIDTH))
        .push(Text::new(format_price_inr(booking.total_price.value())).size(typography::TITLE_MD))
        .push(
            button(Text::new("View"))
                .on_press(Message::View(booking.booking_id))
                .style(styles::button::primary),
        );

    if booking.status == BookingStatus::Confirmed {
        actions = actions.push(
            button(Text::new("Cancel"))
                .on_press(Message::Cancel(booking.booking_id))
                .style(styles::button::danger),
        );
    }

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(summary)
            .push(actions),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::fixtures::booking_json;

    fn booking(id: u64, status: &str) -> Booking {
        serde_json::from_value(booking_json(id, status)).unwrap()
    }

    #[test]
    fn messages_map_to_events() {
        assert_eq!(update(Message::Refresh), Event::Refresh);
        assert_eq!(update(Message::View(4)), Event::Open(4));
        assert_eq!(update(Message::Cancel(4)), Event::Cancel(4));
    }

    #[test]
    fn loading_lifecycle() {
        let mut state = State::default();
        state.start_loading();
        assert!(state.is_loading());

        state.load_failed("Authentication credentials were not provided.".into());
        assert!(!state.is_loading());
        assert!(state.bookings().is_none());

        state.start_loading();
        state.set_bookings(vec![booking(1, "confirmed")]);
        assert!(!state.is_loading());
        assert_eq!(state.bookings().map(<[_]>::len), Some(1));
    }

    #[test]
    fn view_renders_every_state() {
        let mut state = State::default();
        drop(view(&state));
        state.start_loading();
        drop(view(&state));
        state.load_failed("Network down".into());
        drop(view(&state));
        state.set_bookings(vec![booking(1, "confirmed"), booking(2, "cancelled")]);
        drop(view(&state));
        state.set_bookings(Vec::new());
        drop(view(&state));
    }
}
