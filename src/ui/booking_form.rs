// SPDX-License-Identifier: MPL-2.0
//! Booking form screen: seat count and one row per passenger.

use crate::domain::NewBooking;
use crate::format::{format_date_time, format_price_inr, NOT_AVAILABLE};
use crate::forms::booking::{BookingForm, PassengerField};
use crate::forms::FormError;
use crate::ui::components::Field;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

#[derive(Debug, Clone)]
pub struct State {
    form: BookingForm,
    submitting: bool,
}

impl State {
    #[must_use]
    pub fn new(form: BookingForm) -> Self {
        Self {
            form,
            submitting: false,
        }
    }

    #[must_use]
    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Re-enables the form after the request finished.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SeatsChanged(String),
    PassengerChanged(usize, PassengerField, String),
    Submit,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Back,
    Submit(NewBooking),
    Invalid(FormError),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SeatsChanged(seats) => {
            state.form.set_seats(seats);
            Event::None
        }
        Message::PassengerChanged(index, field, value) => {
            state.form.set_passenger(index, field, value);
            Event::None
        }
        Message::Submit if state.submitting => Event::None,
        Message::Submit => match state.form.submit() {
            Ok(booking) => {
                state.submitting = true;
                Event::Submit(booking)
            }
            Err(err) => Event::Invalid(err),
        },
        Message::Back => Event::Back,
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let form = &state.form;
    let option = &form.travel_option;

    let back = button(Text::new("← Back to search"))
        .on_press(Message::Back)
        .style(styles::button::secondary);

    let trip = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(&option.operator_name).size(typography::TITLE_SM))
            .push(
                Text::new(format!("{} → {}", option.source, option.destination))
                    .size(typography::BODY_LG),
            )
            .push(
                Text::new(format!(
                    "Departs {} · {} per seat · {} seats available",
                    format_date_time(&option.departure_date, &option.departure_time),
                    format_price_inr(option.price.value()),
                    option.available_seats,
                ))
                .size(typography::BODY_SM),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card);

    let seats = Field::new("Number of seats", &form.seats, Message::SeatsChanged)
        .placeholder("1")
        .view();

    let passengers = form.passengers.iter().enumerate().fold(
        Column::new().spacing(spacing::SM),
        |column, (index, row)| {
            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Bottom)
                    .push(
                        Text::new(format!("{}.", index + 1))
                            .size(typography::BODY),
                    )
                    .push(
                        Field::new("Passenger name", &row.name, move |v| {
                            Message::PassengerChanged(index, PassengerField::Name, v)
                        })
                        .view(),
                    )
                    .push(
                        Container::new(
                            Field::new("Age", &row.age, move |v| {
                                Message::PassengerChanged(index, PassengerField::Age, v)
                            })
                            .view(),
                        )
                        .width(Length::Fixed(sizing::PRICE_COLUMN_WIDTH)),
                    ),
            )
        },
    );

    let total = form
        .total_price()
        .map_or_else(|| NOT_AVAILABLE.to_string(), format_price_inr);

    let submit_label = if state.submitting {
        "Booking…"
    } else {
        "Confirm Booking"
    };

    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(format!("Total: {total}")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(submit_label))
                .on_press_maybe((!state.submitting).then_some(Message::Submit))
                .style(styles::button::primary),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(back)
        .push(Text::new("Book your trip").size(typography::TITLE_LG))
        .push(trip)
        .push(seats)
        .push(Text::new("Passenger details").size(typography::TITLE_SM))
        .push(passengers)
        .push(footer);

    Container::new(content).center_x(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::travel::fixtures::travel_option_json;

    fn state() -> State {
        State::new(BookingForm::new(
            serde_json::from_value(travel_option_json(7)).unwrap(),
        ))
    }

    #[test]
    fn seat_changes_resize_rows() {
        let mut state = state();
        update(&mut state, Message::SeatsChanged("3".into()));
        assert_eq!(state.form().passengers.len(), 3);
    }

    #[test]
    fn incomplete_form_is_rejected_without_submitting() {
        let mut state = state();
        let event = update(&mut state, Message::Submit);
        assert_eq!(event, Event::Invalid(FormError::IncompletePassengers));
        assert!(!state.is_submitting());
    }

    #[test]
    fn complete_form_submits_once() {
        let mut state = state();
        update(
            &mut state,
            Message::PassengerChanged(0, PassengerField::Name, "Asha".into()),
        );
        update(
            &mut state,
            Message::PassengerChanged(0, PassengerField::Age, "34".into()),
        );

        let Event::Submit(booking) = update(&mut state, Message::Submit) else {
            panic!("expected a submission");
        };
        assert_eq!(booking.travel_option, 7);
        assert!(state.is_submitting());

        assert_eq!(update(&mut state, Message::Submit), Event::None);
        state.finish_submit();
        assert!(!state.is_submitting());
    }

    #[test]
    fn view_renders() {
        let mut state = state();
        update(&mut state, Message::SeatsChanged("2".into()));
        drop(view(&state));
        update(&mut state, Message::SeatsChanged("x".into()));
        drop(view(&state));
    }
}
