// SPDX-License-Identifier: MPL-2.0
//! Domain layer - the records exchanged with the booking backend.
//!
//! Types here only depend on `serde` so they can be decoded straight from
//! the backend's JSON and tested without a running client.
//!
//! # Modules
//!
//! - [`travel`]: Travel options and search queries
//!   ([`TravelOption`](travel::TravelOption), [`SearchQuery`](travel::SearchQuery))
//! - [`booking`]: Bookings and passengers
//!   ([`Booking`](booking::Booking), [`NewBooking`](booking::NewBooking))
//! - [`amount`]: Decimal amounts sent as strings ([`Amount`](amount::Amount))
//! - [`listing`]: Bare or paginated list responses
//! - [`user`]: Accounts, registration and login acknowledgements

pub mod amount;
pub mod booking;
pub mod listing;
pub mod travel;
pub mod user;

pub use amount::Amount;
pub use booking::{Booking, BookingStatus, NewBooking, NewPassenger, Passenger};
pub use listing::Listing;
pub use travel::{SearchQuery, TravelOption, TravelType};
pub use user::{Acknowledgement, LoginResponse, NewAccount, User};
