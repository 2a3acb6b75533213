// SPDX-License-Identifier: MPL-2.0
//! Typed operations of the booking backend.
//!
//! Each method is one [`Gateway`] round trip. Rejections surface as
//! [`Error::Rejected`] with the normalized message; a success body that does
//! not match the expected shape surfaces as [`Error::Decode`].

use crate::domain::{
    Acknowledgement, Booking, Listing, LoginResponse, NewAccount, NewBooking, SearchQuery,
    TravelOption,
};
use crate::error::{Error, Result};
use crate::gateway::{Gateway, RequestOptions};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use url::form_urlencoded;

pub const LOGIN: &str = "/api/login/";
pub const LOGOUT: &str = "/api/logout/";
pub const REGISTER: &str = "/api/register/";
pub const BOOKINGS: &str = "/api/bookings/";
pub const TRAVEL_SEARCH: &str = "/api/travel-search/";

#[must_use]
pub fn booking_endpoint(id: u64) -> String {
    format!("{BOOKINGS}{id}/")
}

#[must_use]
pub fn cancel_endpoint(id: u64) -> String {
    format!("{BOOKINGS}{id}/cancel/")
}

/// Search endpoint with the non-blank filters as query string.
#[must_use]
pub fn search_endpoint(query: &SearchQuery) -> String {
    let pairs = query.to_pairs();
    if pairs.is_empty() {
        return TRAVEL_SEARCH.to_string();
    }
    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{TRAVEL_SEARCH}?{encoded}")
}

/// Client for the booking endpoints.
#[derive(Debug, Clone)]
pub struct BookingApi {
    gateway: Gateway,
}

impl BookingApi {
    #[must_use]
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    #[must_use]
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Shareable link to a booking's details page.
    #[must_use]
    pub fn booking_url(&self, id: u64) -> String {
        let base = self.gateway.base_url().as_str().trim_end_matches('/');
        format!("{base}/booking-details/?id={id}")
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<TravelOption>> {
        let listing: Listing<TravelOption> = self
            .call(&search_endpoint(query), RequestOptions::get())
            .await?;
        Ok(listing.into_vec())
    }

    /// Creates a booking. Returns the backend's echo of the stored payload.
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Value> {
        self.call(BOOKINGS, RequestOptions::post().json(booking)?)
            .await
    }

    pub async fn cancel_booking(&self, id: u64) -> Result<Acknowledgement> {
        self.call(&cancel_endpoint(id), RequestOptions::post()).await
    }

    pub async fn fetch_booking(&self, id: u64) -> Result<Booking> {
        self.call(&booking_endpoint(id), RequestOptions::get()).await
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        let listing: Listing<Booking> = self.call(BOOKINGS, RequestOptions::get()).await?;
        Ok(listing.into_vec())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let credentials = json!({"username": username, "password": password});
        self.call(LOGIN, RequestOptions::post().json(&credentials)?)
            .await
    }

    pub async fn logout(&self) -> Result<Acknowledgement> {
        self.call(LOGOUT, RequestOptions::post()).await
    }

    /// Creates an account. Returns the backend's echo of the stored profile.
    pub async fn register(&self, account: &NewAccount) -> Result<Value> {
        self.call(REGISTER, RequestOptions::post().json(account)?)
            .await
    }

    async fn call<T: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> Result<T> {
        let body = self.gateway.request(endpoint, options).await?.into_result()?;
        serde_json::from_value(body).map_err(|err| {
            log::warn!("{endpoint}: unexpected response shape: {err}");
            Error::from(err)
        })
    }
}
