// SPDX-License-Identifier: MPL-2.0
//! Bookings and the passengers travelling on them.

use super::amount::Amount;
use super::travel::TravelOption;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Unknown => "unknown",
        }
    }

    /// Only confirmed bookings can be cancelled or counted down.
    #[must_use]
    pub fn is_confirmed(self) -> bool {
        self == BookingStatus::Confirmed
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

/// Passenger entry as stored by the backend. Every field is optional
/// because the record is free-form JSON on the server side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub age: Option<String>,
    #[serde(default)]
    pub id_number: Option<String>,
    #[serde(default)]
    pub special_requirements: Option<String>,
}

/// Ages were historically posted as strings; accept numbers too.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

/// A booking as returned by the detail and list endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Booking {
    pub booking_id: u64,
    pub reference_number: String,
    pub travel_option: TravelOption,
    pub number_of_seats: u32,
    #[serde(default)]
    pub passenger_details: Option<Vec<Passenger>>,
    pub total_price: Amount,
    /// ISO 8601 timestamp.
    pub booking_date: String,
    pub status: BookingStatus,
}

/// Passenger row collected by the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPassenger {
    pub name: String,
    pub age: String,
}

/// Payload for `POST /api/bookings/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBooking {
    pub travel_option: u64,
    pub number_of_seats: u32,
    pub passenger_details: Vec<NewPassenger>,
}


#[cfg(test)]
mod tests {
    use super::fixtures::booking_json;
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_booking_detail() {
        let booking: Booking = serde_json::from_value(booking_json(11, "confirmed")).unwrap();
        assert_eq!(booking.booking_id, 11);
        assert!(booking.status.is_confirmed());
        assert_eq!(booking.total_price.value(), 4900.0);

        let passengers = booking.passenger_details.unwrap();
        assert_eq!(passengers[0].age.as_deref(), Some("34"));
        assert_eq!(passengers[1].age.as_deref(), Some("36"));
        assert_eq!(passengers[1].id_number, None);
    }

    #[test]
    fn unknown_status_is_tolerated() {
        let booking: Booking = serde_json::from_value(booking_json(1, "refunded")).unwrap();
        assert_eq!(booking.status, BookingStatus::Unknown);
        assert!(!booking.status.is_confirmed());
    }

    #[test]
    fn missing_passenger_details_decode_as_none() {
        let mut value = booking_json(1, "pending");
        value.as_object_mut().unwrap().remove("passenger_details");
        let booking: Booking = serde_json::from_value(value).unwrap();
        assert!(booking.passenger_details.is_none());
    }

    #[test]
    fn new_booking_serializes_backend_shape() {
        let booking = NewBooking {
            travel_option: 7,
            number_of_seats: 1,
            passenger_details: vec![NewPassenger {
                name: "Asha".into(),
                age: "34".into(),
            }],
        };
        assert_eq!(
            serde_json::to_value(&booking).unwrap(),
            json!({
                "travel_option": 7,
                "number_of_seats": 1,
                "passenger_details": [{"name": "Asha", "age": "34"}]
            })
        );
    }

    #[test]
    fn status_displays_uppercase() {
        assert_eq!(BookingStatus::Cancelled.to_string(), "CANCELLED");
    }
}
