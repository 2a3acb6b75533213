// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Search,
    BookingForm,
    Bookings,
    BookingDetails,
    Account,
}

impl Screen {
    /// Window title suffix for the screen.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Screen::Search => "Search",
            Screen::BookingForm => "New Booking",
            Screen::Bookings => "My Bookings",
            Screen::BookingDetails => "Booking Details",
            Screen::Account => "Account",
        }
    }
}
