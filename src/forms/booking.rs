// SPDX-License-Identifier: MPL-2.0
//! Booking form: a seat count and one passenger row per seat.

use super::FormError;
use crate::domain::{NewBooking, NewPassenger, TravelOption};
use crate::error::Error;

/// Shown when a booking fails without a readable reason.
pub const BOOKING_FAILED: &str = "Booking failed. Please try again.";

/// One passenger row as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassengerRow {
    pub name: String,
    pub age: String,
}

/// Which passenger field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerField {
    Name,
    Age,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub travel_option: TravelOption,
    pub seats: String,
    pub passengers: Vec<PassengerRow>,
}

impl BookingForm {
    /// Starts a form for one seat.
    #[must_use]
    pub fn new(travel_option: TravelOption) -> Self {
        Self {
            travel_option,
            seats: "1".to_string(),
            passengers: vec![PassengerRow::default()],
        }
    }

    /// Updates the seat text. Rows follow the count once it parses and fits
    /// the available seats; typed rows are kept when growing and truncated
    /// when shrinking.
    pub fn set_seats(&mut self, seats: String) {
        if let Some(count) = self.parse_seats(&seats) {
            self.passengers
                .resize_with(count as usize, PassengerRow::default);
        }
        self.seats = seats;
    }

    pub fn set_passenger(&mut self, index: usize, field: PassengerField, value: String) {
        if let Some(row) = self.passengers.get_mut(index) {
            match field {
                PassengerField::Name => row.name = value,
                PassengerField::Age => row.age = value,
            }
        }
    }

    /// Total for the current seat count, if it is valid.
    #[must_use]
    pub fn total_price(&self) -> Option<f64> {
        self.parse_seats(&self.seats).map(|count| self.travel_option.price.value() * f64::from(count))
    }

    /// Validates the form and builds the request payload.
    pub fn submit(&self) -> Result<NewBooking, FormError> {
        let count = self.parse_seats(&self.seats).ok_or(FormError::InvalidSeatCount)?;

        let rows = self
            .passengers
            .get(..count as usize)
            .ok_or(FormError::IncompletePassengers)?;

        let passenger_details = rows
            .iter()
            .map(|row| {
                let name = row.name.trim();
                let age = row.age.trim();
                if name.is_empty() || age.is_empty() {
                    Err(FormError::IncompletePassengers)
                } else {
                    Ok(NewPassenger {
                        name: name.to_string(),
                        age: age.to_string(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewBooking {
            travel_option: self.travel_option.travel_id,
            number_of_seats: count,
            passenger_details,
        })
    }

    /// A positive count no larger than the seats still available.
    fn parse_seats(&self, text: &str) -> Option<u32> {
        let available = self.travel_option.available_seats;
        text.trim()
            .parse::<u32>()
            .ok()
            .filter(|count| (1..=available).contains(count))
    }
}

/// Toast text for a failed booking.
///
/// Older backends leaked Python reprs such as
/// `[ErrorDetail(string='Not enough seats', code='invalid')]`; the quoted
/// string is pulled out of those.
#[must_use]
pub fn failure_message(error: &Error) -> String {
    let message = error.user_message();
    if message.is_empty() {
        return BOOKING_FAILED.to_string();
    }
    if message.contains("ErrorDetail") {
        if let Some(detail) = error_detail_string(&message) {
            return detail.to_string();
        }
    }
    message
}

fn error_detail_string(message: &str) -> Option<&str> {
    let start = message.find("string='")? + "string='".len();
    let rest = &message[start..];
    let end = rest.find('\'')?;
    (end > 0).then(|| &rest[..end])
}
