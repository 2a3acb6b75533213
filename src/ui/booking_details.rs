// SPDX-License-Identifier: MPL-2.0
//! Booking details screen.
//!
//! Shows the status banner, travel information, price summary and passenger
//! list of one booking. Confirmed bookings get a live countdown to departure
//! and can be cancelled after an inline confirmation.

use crate::domain::{Booking, BookingStatus, Passenger};
use crate::format::{
    countdown_text, departure, format_date, format_date_time, format_duration, format_price_inr,
    status_color, NOT_AVAILABLE,
};
use crate::ui::components::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::NaiveDateTime;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

pub const LOAD_FAILED: &str = "Failed to load booking details";
pub const MISSING_ID: &str = "No booking ID provided";

#[derive(Debug, Clone, PartialEq, Eq)]
struct LoadError {
    title: &'static str,
    message: Option<String>,
    details: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    booking_id: Option<u64>,
    booking: Option<Booking>,
    loading: bool,
    error: Option<LoadError>,
    show_details: bool,
    confirming_cancel: bool,
    countdown: Option<String>,
}

impl State {
    /// Points the screen at a booking. Returns the id to fetch, or `None`
    /// after recording the missing-id error.
    pub fn open(&mut self, booking_id: Option<u64>) -> Option<u64> {
        *self = State {
            booking_id,
            ..State::default()
        };
        match booking_id {
            Some(id) => {
                self.loading = true;
                Some(id)
            }
            None => {
                self.error = Some(LoadError {
                    title: MISSING_ID,
                    message: None,
                    details: Vec::new(),
                });
                None
            }
        }
    }

    pub fn set_booking(&mut self, booking: Booking, now: NaiveDateTime) {
        self.booking_id = Some(booking.booking_id);
        self.booking = Some(booking);
        self.loading = false;
        self.error = None;
        self.confirming_cancel = false;
        self.tick(now);
    }

    /// Records a failed fetch with the backend's reason, if it gave one.
    pub fn load_failed(&mut self, message: String, details: Vec<String>) {
        self.loading = false;
        self.booking = None;
        self.countdown = None;
        self.error = Some(LoadError {
            title: LOAD_FAILED,
            message: Some(message),
            details,
        });
    }

    /// Recomputes the countdown for confirmed bookings.
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.countdown = self
            .booking
            .as_ref()
            .filter(|booking| booking.status.is_confirmed())
            .and_then(|booking| departure(&booking.travel_option))
            .map(|moment| countdown_text(moment, now));
    }

    /// Whether a once-per-second tick is needed.
    #[must_use]
    pub fn needs_countdown(&self) -> bool {
        self.booking
            .as_ref()
            .is_some_and(|booking| booking.status.is_confirmed())
    }

    #[must_use]
    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    #[must_use]
    pub fn booking_id(&self) -> Option<u64> {
        self.booking_id
    }

    #[must_use]
    pub fn countdown(&self) -> Option<&str> {
        self.countdown.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    Retry,
    ToggleDetails,
    Cancel,
    ConfirmCancel,
    KeepBooking,
    Download,
    Share,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Back,
    Reload(u64),
    Cancel(u64),
    Download(u64),
    Share(u64),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back => Event::Back,
        Message::Retry => state.booking_id.map_or(Event::None, |id| {
            state.loading = true;
            state.error = None;
            Event::Reload(id)
        }),
        Message::ToggleDetails => {
            state.show_details = !state.show_details;
            Event::None
        }
        Message::Cancel => {
            state.confirming_cancel = state.needs_countdown();
            Event::None
        }
        Message::KeepBooking => {
            state.confirming_cancel = false;
            Event::None
        }
        Message::ConfirmCancel => {
            state.confirming_cancel = false;
            state
                .booking
                .as_ref()
                .filter(|booking| booking.status.is_confirmed())
                .map_or(Event::None, |booking| Event::Cancel(booking.booking_id))
        }
        Message::Download => state.booking_id.map_or(Event::None, Event::Download),
        Message::Share => state.booking_id.map_or(Event::None, Event::Share),
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let back = button(Text::new("← My Bookings"))
        .on_press(Message::Back)
        .style(styles::button::secondary);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(back);

    if let Some(error) = &state.error {
        let mut display = ErrorDisplay::new(error.title)
            .details(error.details.clone())
            .details_visible(state.show_details)
            .on_toggle_details(Message::ToggleDetails);
        if let Some(message) = &error.message {
            display = display.message(message.clone());
        }
        if state.booking_id.is_some() {
            display = display.retry(Message::Retry);
        }
        content = content.push(centered_error_view(display));
    } else if let Some(booking) = &state.booking {
        content = content
            .push(status_banner(booking, state.countdown.as_deref()))
            .push(travel_section(booking))
            .push(summary_section(booking))
            .push(passenger_section(booking))
            .push(actions(booking, state.confirming_cancel));
    } else if state.loading {
        content = content.push(Text::new("Loading booking…"));
    }

    Container::new(content).center_x(Length::Fill).into()
}

fn status_banner<'a>(booking: &'a Booking, countdown: Option<&'a str>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new(booking.status.to_string()).size(typography::TITLE_MD))
        .push(Text::new(format!("Ref {}", booking.reference_number)).size(typography::BODY_SM))
        .push(Space::new().width(Length::Fill));

    if let Some(countdown) = countdown {
        row = row.push(Text::new(format!("Departs in {countdown}")).size(typography::BODY_LG));
    }

    Container::new(row)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::status_banner(status_color(booking.status)))
        .into()
}

fn section<'a>(title: &'a str, body: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(body),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn info_row<'a>(label: &'a str, value: String) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(label)
                .size(typography::BODY_SM)
                .width(Length::Fixed(sizing::PRICE_COLUMN_WIDTH)),
        )
        .push(Text::new(value).size(typography::BODY))
}

fn travel_section(booking: &Booking) -> Element<'_, Message> {
    let option = &booking.travel_option;
    let arrival = match (&option.arrival_date, &option.arrival_time) {
        (Some(date), Some(time)) => format_date_time(date, time),
        _ => NOT_AVAILABLE.to_string(),
    };

    section(
        "Travel Information",
        Column::new()
            .spacing(spacing::XXS)
            .push(info_row("Operator", option.operator_name.clone()))
            .push(info_row("Type", option.travel_type.to_string()))
            .push(info_row(
                "Route",
                format!("{} → {}", option.source, option.destination),
            ))
            .push(info_row(
                "Departure",
                format_date_time(&option.departure_date, &option.departure_time),
            ))
            .push(info_row("Arrival", arrival))
            .push(info_row("Duration", format_duration(option.duration.as_deref()))),
    )
}

fn summary_section(booking: &Booking) -> Element<'_, Message> {
    section(
        "Booking Summary",
        Column::new()
            .spacing(spacing::XXS)
            .push(info_row("Booked on", format_date(&booking.booking_date)))
            .push(info_row("Seats", booking.number_of_seats.to_string()))
            .push(info_row(
                "Price per seat",
                format_price_inr(booking.travel_option.price.value()),
            ))
            .push(info_row(
                "Total",
                format_price_inr(booking.total_price.value()),
            )),
    )
}

fn or_not_available(value: Option<&String>) -> String {
    value
        .filter(|text| !text.is_empty())
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn passenger_card(index: usize, passenger: &Passenger) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(format!("Passenger {}", index + 1)).size(typography::BODY_LG))
        .push(info_row("Name", or_not_available(passenger.name.as_ref())))
        .push(info_row("Age", or_not_available(passenger.age.as_ref())))
        .push(info_row("ID", or_not_available(passenger.id_number.as_ref())))
        .push(info_row(
            "Special requirements",
            passenger
                .special_requirements
                .clone()
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| "None".to_string()),
        ))
        .into()
}

fn passenger_section(booking: &Booking) -> Element<'_, Message> {
    let passengers = booking.passenger_details.as_deref().unwrap_or_default();
    let body = if passengers.is_empty() {
        Column::new().push(Text::new("No passenger details available").size(typography::BODY))
    } else {
        passengers
            .iter()
            .enumerate()
            .fold(Column::new().spacing(spacing::SM), |column, (index, passenger)| {
                column.push(passenger_card(index, passenger))
            })
    };
    section("Passengers", body)
}

fn actions(booking: &Booking, confirming_cancel: bool) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::SM).align_y(Vertical::Center);

    if booking.status == BookingStatus::Confirmed {
        if confirming_cancel {
            row = row
                .push(Text::new("Cancel this booking?").size(typography::BODY))
                .push(
                    button(Text::new("Yes, cancel"))
                        .on_press(Message::ConfirmCancel)
                        .style(styles::button::danger),
                )
                .push(
                    button(Text::new("Keep booking"))
                        .on_press(Message::KeepBooking)
                        .style(styles::button::secondary),
                );
        } else {
            row = row.push(
                button(Text::new("Cancel Booking"))
                    .on_press(Message::Cancel)
                    .style(styles::button::danger),
            );
        }
    }

    row = row
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("Download Ticket"))
                .on_press(Message::Download)
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new("Share"))
                .on_press(Message::Share)
                .style(styles::button::primary),
        );

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::fixtures::booking_json;
    use crate::format::{parse_date_time, DEPARTED};

    fn booking(status: &str) -> Booking {
        serde_json::from_value(booking_json(11, status)).unwrap()
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        parse_date_time(date, time).unwrap()
    }

    #[test]
    fn open_without_id_records_error() {
        let mut state = State::default();
        assert_eq!(state.open(None), None);
        assert_eq!(
            state.error.as_ref().map(|error| error.title),
            Some(MISSING_ID)
        );
        assert_eq!(update(&mut state, Message::Retry), Event::None);
    }

    #[test]
    fn open_with_id_starts_loading() {
        let mut state = State::default();
        assert_eq!(state.open(Some(11)), Some(11));
        assert!(state.is_loading());
    }

    #[test]
    fn failed_load_keeps_backend_reason_and_can_retry() {
        let mut state = State::default();
        state.open(Some(11));
        state.load_failed("Not found.".into(), Vec::new());

        let error = state.error.clone().unwrap();
        assert_eq!(error.title, LOAD_FAILED);
        assert_eq!(error.message.as_deref(), Some("Not found."));

        assert_eq!(update(&mut state, Message::Retry), Event::Reload(11));
        assert!(state.is_loading());
    }

    #[test]
    fn countdown_only_for_confirmed_bookings() {
        let now = at("2026-11-02", "16:00:00");
        let mut state = State::default();

        state.set_booking(booking("confirmed"), now);
        assert!(state.needs_countdown());
        assert_eq!(state.countdown(), Some("30m 0s"));

        state.tick(at("2026-11-02", "16:30:00"));
        assert_eq!(state.countdown(), Some(DEPARTED));

        state.set_booking(booking("pending"), now);
        assert!(!state.needs_countdown());
        assert_eq!(state.countdown(), None);
    }

    #[test]
    fn cancel_requires_confirmation() {
        let now = at("2026-10-18", "10:00:00");
        let mut state = State::default();
        state.set_booking(booking("confirmed"), now);

        assert_eq!(update(&mut state, Message::Cancel), Event::None);
        assert!(state.confirming_cancel);
        assert_eq!(update(&mut state, Message::KeepBooking), Event::None);
        assert!(!state.confirming_cancel);

        update(&mut state, Message::Cancel);
        assert_eq!(update(&mut state, Message::ConfirmCancel), Event::Cancel(11));
    }

    #[test]
    fn cancelled_booking_cannot_be_cancelled_again() {
        let mut state = State::default();
        state.set_booking(booking("cancelled"), at("2026-10-18", "10:00:00"));
        update(&mut state, Message::Cancel);
        assert!(!state.confirming_cancel);
        assert_eq!(update(&mut state, Message::ConfirmCancel), Event::None);
    }

    #[test]
    fn share_and_download_target_current_booking() {
        let mut state = State::default();
        state.set_booking(booking("confirmed"), at("2026-10-18", "10:00:00"));
        assert_eq!(update(&mut state, Message::Share), Event::Share(11));
        assert_eq!(update(&mut state, Message::Download), Event::Download(11));
    }

    #[test]
    fn missing_passenger_fields_show_placeholder() {
        assert_eq!(or_not_available(None), NOT_AVAILABLE);
        assert_eq!(or_not_available(Some(&String::new())), NOT_AVAILABLE);
        assert_eq!(or_not_available(Some(&"Asha".to_string())), "Asha");
    }

    #[test]
    fn view_renders_every_state() {
        let mut state = State::default();
        state.open(None);
        drop(view(&state));

        state.open(Some(11));
        drop(view(&state));

        state.load_failed("Not found.".into(), vec!["id: invalid".into()]);
        update(&mut state, Message::ToggleDetails);
        drop(view(&state));

        state.set_booking(booking("confirmed"), at("2026-10-18", "10:00:00"));
        update(&mut state, Message::Cancel);
        drop(view(&state));
    }
}
