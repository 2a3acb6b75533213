// SPDX-License-Identifier: MPL-2.0
//! Travel search screen: filter inputs and result cards.

use crate::domain::{SearchQuery, TravelOption, TravelType};
use crate::format::{format_date_time, format_duration, format_price_inr};
use crate::forms::{validate_required, FormError, Validation};
use crate::ui::components::Field;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, Column, Container, Row, Space, Text},
    Element, Length,
};
use std::fmt;

/// Shown when a search comes back empty.
pub const NO_RESULTS: &str = "No travel options found.";

/// Travel type choice, including "any".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    Any,
    Only(TravelType),
}

impl TypeFilter {
    pub const ALL: [TypeFilter; 4] = [
        TypeFilter::Any,
        TypeFilter::Only(TravelType::Flight),
        TypeFilter::Only(TravelType::Train),
        TypeFilter::Only(TravelType::Bus),
    ];

    fn travel_type(self) -> Option<TravelType> {
        match self {
            TypeFilter::Any => None,
            TypeFilter::Only(travel_type) => Some(travel_type),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::Any => f.write_str("All Types"),
            TypeFilter::Only(TravelType::Flight) => f.write_str("Flight"),
            TypeFilter::Only(TravelType::Train) => f.write_str("Train"),
            TypeFilter::Only(TravelType::Bus) => f.write_str("Bus"),
            TypeFilter::Only(TravelType::Other) => f.write_str("Other"),
        }
    }
}

/// Which query input an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
    Source,
    Destination,
    DateFrom,
    DateTo,
    MinPrice,
    MaxPrice,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub query: SearchQuery,
    validation: Validation,
    /// `None` until the first search completes.
    results: Option<Vec<TravelOption>>,
    searching: bool,
}

impl State {
    /// Stores search results and clears the busy flag.
    pub fn set_results(&mut self, results: Vec<TravelOption>) {
        self.results = Some(results);
        self.searching = false;
    }

    /// Clears the busy flag after a failed search. Earlier results stay.
    pub fn search_failed(&mut self) {
        self.searching = false;
    }

    #[must_use]
    pub fn results(&self) -> Option<&[TravelOption]> {
        self.results.as_deref()
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    fn type_filter(&self) -> TypeFilter {
        self.query
            .travel_type
            .map_or(TypeFilter::Any, TypeFilter::Only)
    }

    fn field_mut(&mut self, field: QueryField) -> &mut String {
        match field {
            QueryField::Source => &mut self.query.source,
            QueryField::Destination => &mut self.query.destination,
            QueryField::DateFrom => &mut self.query.date_from,
            QueryField::DateTo => &mut self.query.date_to,
            QueryField::MinPrice => &mut self.query.min_price,
            QueryField::MaxPrice => &mut self.query.max_price,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TypeSelected(TypeFilter),
    FieldChanged(QueryField, String),
    Submit,
    Clear,
    Book(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Search(SearchQuery),
    Invalid(FormError),
    Book(TravelOption),
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TypeSelected(filter) => {
            state.query.travel_type = filter.travel_type();
            Event::None
        }
        Message::FieldChanged(field, value) => {
            *state.field_mut(field) = value;
            Event::None
        }
        Message::Submit => {
            state.validation = validate_required(&[
                ("source", state.query.source.as_str()),
                ("destination", state.query.destination.as_str()),
            ]);
            match state.validation.clone().into_result() {
                Ok(()) => {
                    state.searching = true;
                    Event::Search(state.query.clone())
                }
                Err(err) => Event::Invalid(err),
            }
        }
        Message::Clear => {
            *state = State::default();
            Event::None
        }
        Message::Book(travel_id) => state
            .results
            .iter()
            .flatten()
            .find(|option| option.travel_id == travel_id)
            .cloned()
            .map_or(Event::None, Event::Book),
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let title = Text::new("Find your journey").size(typography::TITLE_LG);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(build_filters(state));

    if state.searching {
        content = content.push(Text::new("Searching…").size(typography::BODY));
    }

    match state.results.as_deref() {
        Some([]) => {
            content = content.push(Text::new(NO_RESULTS).size(typography::BODY_LG));
        }
        Some(results) => {
            content = content.push(
                Text::new(format!("{} options", results.len())).size(typography::BODY_SM),
            );
            for option in results {
                content = content.push(result_card(option));
            }
        }
        None => {}
    }

    Container::new(content).width(Length::Fill).center_x(Length::Fill).into()
}

fn build_filters(state: &State) -> Element<'_, Message> {
    let invalid = |name: &str| state.validation.is_invalid(name);

    let type_picker = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new("Travel type").size(typography::BODY_SM))
        .push(
            pick_list(TypeFilter::ALL, Some(state.type_filter()), Message::TypeSelected)
                .padding(spacing::XS)
                .width(Length::Fill),
        );

    let route = Row::new()
        .spacing(spacing::SM)
        .push(type_picker)
        .push(
            Field::new("From", &state.query.source, |v| {
                Message::FieldChanged(QueryField::Source, v)
            })
            .placeholder("Source city")
            .invalid(invalid("source"))
            .on_submit(Message::Submit)
            .view(),
        )
        .push(
            Field::new("To", &state.query.destination, |v| {
                Message::FieldChanged(QueryField::Destination, v)
            })
            .placeholder("Destination city")
            .invalid(invalid("destination"))
            .on_submit(Message::Submit)
            .view(),
        );

    let refine = Row::new()
        .spacing(spacing::SM)
        .push(
            Field::new("From date", &state.query.date_from, |v| {
                Message::FieldChanged(QueryField::DateFrom, v)
            })
            .placeholder("YYYY-MM-DD")
            .view(),
        )
        .push(
            Field::new("To date", &state.query.date_to, |v| {
                Message::FieldChanged(QueryField::DateTo, v)
            })
            .placeholder("YYYY-MM-DD")
            .view(),
        )
        .push(
            Field::new("Min price", &state.query.min_price, |v| {
                Message::FieldChanged(QueryField::MinPrice, v)
            })
            .placeholder("₹")
            .view(),
        )
        .push(
            Field::new("Max price", &state.query.max_price, |v| {
                Message::FieldChanged(QueryField::MaxPrice, v)
            })
            .placeholder("₹")
            .view(),
        );

    let search_button = button(Text::new("Search"))
        .on_press_maybe((!state.searching).then_some(Message::Submit))
        .style(styles::button::primary);
    let clear_button = button(Text::new("Clear"))
        .on_press(Message::Clear)
        .style(styles::button::secondary);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(Space::new().width(Length::Fill))
        .push(clear_button)
        .push(search_button);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(route)
            .push(refine)
            .push(actions),
    )
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}

fn result_card(option: &TravelOption) -> Element<'_, Message> {
    let heading = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(&option.operator_name).size(typography::TITLE_SM))
        .push(Text::new(option.travel_type.to_string()).size(typography::CAPTION));

    let route = Text::new(format!("{} → {}", option.source, option.destination))
        .size(typography::BODY_LG);

    let schedule = Text::new(format!(
        "Departs {} · {}",
        format_date_time(&option.departure_date, &option.departure_time),
        format_duration(option.duration.as_deref()),
    ))
    .size(typography::BODY_SM);

    let seats = Text::new(format!("{} seats available", option.available_seats))
        .size(typography::CAPTION);

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(heading)
        .push(route)
        .push(schedule)
        .push(seats);

    let book_button = button(Text::new("Book Now"))
        .on_press_maybe((option.available_seats > 0).then_some(Message::Book(option.travel_id)))
        .style(styles::button::primary);

    let pricing = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::PRICE_COLUMN_WIDTH))
        .push(Text::new(format_price_inr(option.price.value())).size(typography::TITLE_MD))
        .push(book_button);

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(details)
            .push(pricing),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}
