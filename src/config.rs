//! Per-entity-type geocoding configuration.

use std::fmt;
use std::sync::Arc;

use crate::provider::{Geocoder, SearchResult};

/// Result handler invoked with the entity and the full provider result
/// sequence. Which element(s) to use is the handler's choice, not the
/// dispatcher's.
pub type LookupHandler<E> = Arc<dyn Fn(&mut E, &[SearchResult]) + Send + Sync>;

/// Lookup configuration attached once per entity type and shared, read-only,
/// across all instances.
///
/// Cheap to clone: handlers and the provider are reference-counted. The
/// field names are carried for diagnostics; field *access* goes through the
/// entity's [`Geocoded`](crate::entity::Geocoded) implementation.
pub struct GeocoderConfig<E> {
    /// Name of the latitude field.
    pub latitude_field: &'static str,
    /// Name of the longitude field.
    pub longitude_field: &'static str,
    /// Name of the address field.
    pub address_field: &'static str,
    /// Forward (address to coordinates) lookups enabled.
    pub geocode: bool,
    /// Reverse (coordinates to address) lookups enabled.
    pub reverse_geocode: bool,
    /// Handler for forward lookup results, when registered.
    pub geocode_handler: Option<LookupHandler<E>>,
    /// Handler for reverse lookup results, when registered.
    pub reverse_handler: Option<LookupHandler<E>>,
    /// Search provider used for lookups and address-point normalization.
    pub geocoder: Arc<dyn Geocoder>,
}

impl<E> GeocoderConfig<E> {
    /// Create a configuration with both lookup directions disabled and the
    /// default field names.
    pub fn new(geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            latitude_field: "latitude",
            longitude_field: "longitude",
            address_field: "address",
            geocode: false,
            reverse_geocode: false,
            geocode_handler: None,
            reverse_handler: None,
            geocoder,
        }
    }

    /// Enable forward geocoding from the named address field.
    pub fn geocoded_by(mut self, address_field: &'static str) -> Self {
        self.address_field = address_field;
        self.geocode = true;
        self
    }

    /// Enable reverse geocoding from the named coordinate fields.
    pub fn reverse_geocoded_by(
        mut self,
        latitude_field: &'static str,
        longitude_field: &'static str,
    ) -> Self {
        self.latitude_field = latitude_field;
        self.longitude_field = longitude_field;
        self.reverse_geocode = true;
        self
    }

    /// Register the handler that consumes forward lookup results.
    pub fn with_geocode_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut E, &[SearchResult]) + Send + Sync + 'static,
    {
        self.geocode_handler = Some(Arc::new(handler));
        self
    }

    /// Register the handler that consumes reverse lookup results.
    pub fn with_reverse_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut E, &[SearchResult]) + Send + Sync + 'static,
    {
        self.reverse_handler = Some(Arc::new(handler));
        self
    }
}

impl<E> Clone for GeocoderConfig<E> {
    fn clone(&self) -> Self {
        Self {
            latitude_field: self.latitude_field,
            longitude_field: self.longitude_field,
            address_field: self.address_field,
            geocode: self.geocode,
            reverse_geocode: self.reverse_geocode,
            geocode_handler: self.geocode_handler.clone(),
            reverse_handler: self.reverse_handler.clone(),
            geocoder: self.geocoder.clone(),
        }
    }
}

impl<E> fmt::Debug for GeocoderConfig<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocoderConfig")
            .field("latitude_field", &self.latitude_field)
            .field("longitude_field", &self.longitude_field)
            .field("address_field", &self.address_field)
            .field("geocode", &self.geocode)
            .field("reverse_geocode", &self.reverse_geocode)
            .field("geocode_handler", &self.geocode_handler.is_some())
            .field("reverse_handler", &self.reverse_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::GeocoderConfig;
    use crate::providers::LocalGeocoder;

    struct Venue;

    #[test]
    fn test_new_config_disables_both_directions() {
        let config: GeocoderConfig<Venue> = GeocoderConfig::new(Arc::new(LocalGeocoder::new()));
        assert!(!config.geocode);
        assert!(!config.reverse_geocode);
        assert_eq!(config.latitude_field, "latitude");
        assert_eq!(config.longitude_field, "longitude");
        assert_eq!(config.address_field, "address");
    }

    #[test]
    fn test_geocoded_by_enables_forward_only() {
        let config: GeocoderConfig<Venue> =
            GeocoderConfig::new(Arc::new(LocalGeocoder::new())).geocoded_by("street_address");
        assert!(config.geocode);
        assert!(!config.reverse_geocode);
        assert_eq!(config.address_field, "street_address");
    }

    #[test]
    fn test_directions_enable_independently() {
        let config: GeocoderConfig<Venue> = GeocoderConfig::new(Arc::new(LocalGeocoder::new()))
            .geocoded_by("street_address")
            .reverse_geocoded_by("lat", "lng");
        assert!(config.geocode);
        assert!(config.reverse_geocode);
        assert_eq!(config.latitude_field, "lat");
        assert_eq!(config.longitude_field, "lng");
    }

    #[test]
    fn test_debug_reports_handler_presence() {
        let config: GeocoderConfig<Venue> = GeocoderConfig::new(Arc::new(LocalGeocoder::new()))
            .with_geocode_handler(|_venue, _results| {});
        let printed = format!("{config:?}");
        assert!(printed.contains("geocode_handler: true"));
        assert!(printed.contains("reverse_handler: false"));
    }
}
