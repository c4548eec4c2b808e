//! Filter model for the page directory.
//!
//! A [`PageFilter`] is an immutable value describing the active server-side query.
//! Every UI interaction produces a new value; equality between the old and the new
//! value decides whether the pagination state has to be reset.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::CountryCode;

/// Sentinel used by the country selector for "no country constraint".
pub const ALL_COUNTRIES: &str = "All";

/// Country dimension of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryScope {
    /// Match every country.
    #[default]
    All,
    /// Match pages whose `country` equals the code.
    Only(CountryCode),
}

impl CountryScope {
    /// Parses the selector value: `"All"` (any case) or an empty string mean
    /// [`CountryScope::All`], anything else becomes a country code.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_COUNTRIES) {
            Self::All
        } else {
            Self::Only(CountryCode::new(trimmed))
        }
    }

    pub fn code(&self) -> Option<&CountryCode> {
        match self {
            Self::All => None,
            Self::Only(code) => Some(code),
        }
    }
}

impl FromStr for CountryScope {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for CountryScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_COUNTRIES),
            Self::Only(code) => write!(f, "{code}"),
        }
    }
}

/// Active server-side filter: country AND free-text name substring.
///
/// An empty search term means "no constraint on the name". The reach toggle is
/// deliberately not part of this value, see [`crate::page::ReachFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PageFilter {
    country: CountryScope,
    search_term: String,
}

impl PageFilter {
    pub fn new(country: CountryScope, search_term: impl Into<String>) -> Self {
        Self {
            country,
            search_term: search_term.into(),
        }
    }

    /// The unconstrained filter (`All` countries, empty search).
    pub fn all() -> Self {
        Self::default()
    }

    pub fn country(&self) -> &CountryScope {
        &self.country
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns a new filter with only the country replaced.
    pub fn with_country(&self, country: CountryScope) -> Self {
        Self {
            country,
            search_term: self.search_term.clone(),
        }
    }

    /// Returns a new filter with only the search term replaced.
    pub fn with_search_term(&self, search_term: impl Into<String>) -> Self {
        Self {
            country: self.country.clone(),
            search_term: search_term.into(),
        }
    }

    /// The name needle, if the search dimension is constrained.
    pub fn name_needle(&self) -> Option<&str> {
        if self.search_term.is_empty() {
            None
        } else {
            Some(&self.search_term)
        }
    }
}
