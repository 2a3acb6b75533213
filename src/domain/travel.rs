// SPDX-License-Identifier: MPL-2.0
//! Travel options offered by operators and the search query that finds them.

use super::amount::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    Flight,
    Train,
    Bus,
    #[serde(other)]
    Other,
}

impl TravelType {
    pub const ALL: [TravelType; 3] = [TravelType::Flight, TravelType::Train, TravelType::Bus];

    /// Value used in query strings and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TravelType::Flight => "flight",
            TravelType::Train => "train",
            TravelType::Bus => "bus",
            TravelType::Other => "other",
        }
    }
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

/// A bookable departure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelOption {
    pub travel_id: u64,
    #[serde(rename = "type")]
    pub travel_type: TravelType,
    pub operator_name: String,
    pub source: String,
    pub destination: String,
    /// `YYYY-MM-DD`
    pub departure_date: String,
    /// `HH:MM[:SS]`
    pub departure_time: String,
    #[serde(default)]
    pub arrival_date: Option<String>,
    #[serde(default)]
    pub arrival_time: Option<String>,
    /// Django duration text, e.g. `"05:30:00"` or `"1 02:00:00"`.
    #[serde(default)]
    pub duration: Option<String>,
    pub price: Amount,
    pub available_seats: u32,
    #[serde(default)]
    pub total_seats: Option<u32>,
}

/// Filters accepted by the search endpoint. Blank fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub travel_type: Option<TravelType>,
    pub source: String,
    pub destination: String,
    pub date_from: String,
    pub date_to: String,
    pub min_price: String,
    pub max_price: String,
}

impl SearchQuery {
    /// Query-string pairs in the order the backend documents them.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let travel_type = self
            .travel_type
            .map(|t| t.as_str().to_string())
            .unwrap_or_default();

        [
            ("type", travel_type),
            ("source", self.source.clone()),
            ("destination", self.destination.clone()),
            ("date_from", self.date_from.clone()),
            ("date_to", self.date_to.clone()),
            ("min_price", self.min_price.clone()),
            ("max_price", self.max_price.clone()),
        ]
        .into_iter()
        .map(|(key, value)| (key, value.trim().to_string()))
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}
