// SPDX-License-Identifier: MPL-2.0
//! List responses, bare or paginated.

use serde::Deserialize;

/// List endpoints return either a bare array or a paginated envelope,
/// depending on the backend's pagination settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page { results: Vec<T> },
    List(Vec<T>),
}

impl<T> Listing<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Page { results } | Listing::List(results) => results,
        }
    }
}
