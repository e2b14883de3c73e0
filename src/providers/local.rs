//! In-memory geocoding backend for unit testing and local development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::point::Coordinate;
use crate::provider::{Geocoder, SearchQuery, SearchResult};

/// Tolerance for matching reverse-lookup fixtures.
const COORDINATE_EPSILON: f64 = 1e-6;

/// A [`Geocoder`] backed by registered fixtures.
///
/// Forward fixtures are keyed by the exact address string; reverse fixtures
/// match any query within [`COORDINATE_EPSILON`] degrees of the registered
/// origin. Unregistered queries resolve to an empty result list, the same
/// contract a network provider presents for "not found".
#[derive(Default)]
pub struct LocalGeocoder {
    forward: HashMap<String, Vec<SearchResult>>,
    reverse: Vec<(Coordinate, Vec<SearchResult>)>,
    searches: AtomicUsize,
}

impl LocalGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register results for a forward (address) query.
    pub fn with_address(mut self, address: impl Into<String>, results: Vec<SearchResult>) -> Self {
        self.forward.insert(address.into(), results);
        self
    }

    /// Register results for a reverse (coordinate) query.
    pub fn with_coordinates(mut self, origin: Coordinate, results: Vec<SearchResult>) -> Self {
        self.reverse.push((origin, results));
        self
    }

    /// Number of `search` calls served so far.
    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for LocalGeocoder {
    async fn search(&self, query: &SearchQuery) -> Vec<SearchResult> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        match query {
            SearchQuery::Address(address) => {
                self.forward.get(address).cloned().unwrap_or_default()
            }
            SearchQuery::Coordinates(coordinates) => self
                .reverse
                .iter()
                .find(|(origin, _)| {
                    (origin.latitude.value() - coordinates.latitude.value()).abs()
                        < COORDINATE_EPSILON
                        && (origin.longitude.value() - coordinates.longitude.value()).abs()
                            < COORDINATE_EPSILON
                })
                .map(|(_, results)| results.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LocalGeocoder;
    use crate::point::Coordinate;
    use crate::provider::{Geocoder, SearchQuery, SearchResult};

    #[tokio::test]
    async fn test_forward_fixture_hit() {
        let provider = LocalGeocoder::new()
            .with_address("Madison Square Garden", vec![SearchResult::new(40.7505, -73.9934)]);

        let results = provider
            .search(&SearchQuery::Address("Madison Square Garden".into()))
            .await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].latitude, 40.7505);
    }

    #[tokio::test]
    async fn test_unregistered_queries_resolve_empty() {
        let provider = LocalGeocoder::new();

        let forward = provider.search(&SearchQuery::Address("nowhere".into())).await;
        let reverse = provider
            .search(&SearchQuery::Coordinates(Coordinate::new(0.0, 0.0)))
            .await;
        assert!(forward.is_empty());
        assert!(reverse.is_empty());
    }

    #[tokio::test]
    async fn test_reverse_fixture_matches_within_tolerance() {
        let provider = LocalGeocoder::new().with_coordinates(
            Coordinate::new(40.7505, -73.9934),
            vec![SearchResult::new(40.7505, -73.9934).with_address("4 Pennsylvania Plaza")],
        );

        let nearby = Coordinate::new(40.75050000001, -73.99340000001);
        let results = provider.search(&SearchQuery::Coordinates(nearby)).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].address.as_deref(), Some("4 Pennsylvania Plaza"));

        let far = Coordinate::new(40.76, -73.99);
        assert!(provider.search(&SearchQuery::Coordinates(far)).await.is_empty());
    }

    #[tokio::test]
    async fn test_search_count_tracks_calls() {
        let provider = LocalGeocoder::new();
        assert_eq!(provider.search_count(), 0);

        provider.search(&SearchQuery::Address("a".into())).await;
        provider.search(&SearchQuery::Address("b".into())).await;
        assert_eq!(provider.search_count(), 2);
    }
}
