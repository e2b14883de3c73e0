//! The search provider interface consumed by lookups and normalization.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::point::Coordinate;

/// A single geocoding query, forward or reverse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchQuery {
    /// Forward geocode a free-text address.
    Address(String),
    /// Reverse geocode a coordinate pair.
    Coordinates(Coordinate),
}

impl From<&str> for SearchQuery {
    fn from(address: &str) -> Self {
        SearchQuery::Address(address.to_string())
    }
}

impl From<Coordinate> for SearchQuery {
    fn from(coordinates: Coordinate) -> Self {
        SearchQuery::Coordinates(coordinates)
    }
}

/// One provider-returned result.
///
/// Results arrive ordered by relevance; consumers that want a single answer
/// take the first element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable address, when the provider supplies one.
    pub address: Option<String>,
}

impl SearchResult {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Coordinates of this result.
    pub fn coordinates(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A geocoding result source.
///
/// Implementations resolve forward (address) and reverse (coordinate)
/// queries. An empty list means "no match" and is never an error; transport
/// concerns such as timeouts and retries belong to the implementation, which
/// reports failures as empty result lists.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Vec<SearchResult>;
}
