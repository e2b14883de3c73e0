//! Geospatial behavior mixed into data-model objects.
//!
//! [`Geocoded`] is the minimal, object-safe capability: read access to the
//! coordinate and address fields. [`Geocodable`] layers the distance and
//! bearing conveniences, the `geocode`/`reverse_geocode` hook points, and
//! the lookup dispatcher on top of it.

use async_trait::async_trait;
use log::debug;

use crate::calc;
use crate::config::{GeocoderConfig, LookupHandler};
use crate::error::{Error, Result};
use crate::point::{Coordinate, Point};
use crate::provider::SearchQuery;
use crate::units::{BearingOptions, DistanceUnit};

/// Direction of a geocoding lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupDirection {
    /// Address to coordinates.
    Forward,
    /// Coordinates to address.
    Reverse,
}

/// Read access to the coordinate and address fields of a record.
///
/// The required methods are the Rust rendition of "configured field name":
/// implementing them wires the entity's persisted fields into the
/// geospatial machinery.
pub trait Geocoded: Send + Sync {
    /// Current values of the two coordinate-bearing fields.
    fn coordinate_fields(&self) -> (Option<f64>, Option<f64>);

    /// Current value of the address field.
    fn address_field(&self) -> Option<String>;

    /// Whether both coordinate fields hold a value.
    fn is_geocoded(&self) -> bool {
        let (latitude, longitude) = self.coordinate_fields();
        latitude.is_some() && longitude.is_some()
    }

    /// Coordinates of the record, read fresh from the fields. No range
    /// checks are applied.
    fn coordinates(&self) -> Option<Coordinate> {
        match self.coordinate_fields() {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        }
    }
}

/// Distance and bearing conveniences plus the lookup dispatcher.
///
/// The convenience methods never fail for "not geocoded" or "point
/// unresolvable": they degrade to `None`, reserving errors for programmer
/// errors such as a missing entity-type setup. [`calc`] is the strict,
/// error-raising layer underneath for callers that want it.
#[async_trait]
pub trait Geocodable: Geocoded {
    /// Lookup configuration attached to this entity type.
    fn geocoder_config(&self) -> &GeocoderConfig<Self>
    where
        Self: Sized;

    /// Distance from this record to `point`, in `unit`.
    ///
    /// `None` when this record is not geocoded or `point` cannot be
    /// resolved; no computation or provider call happens in the former case.
    async fn distance_to(&self, point: Point<'_>, unit: DistanceUnit) -> Option<f64>
    where
        Self: Sized,
    {
        let us = self.coordinates()?;
        let them = self.resolve_point(point).await?;
        Some(calc::distance_between(us, them, unit))
    }

    /// Distance from `point` to this record.
    ///
    /// Equal to [`distance_to`](Geocodable::distance_to) by symmetry of
    /// great-circle distance; provided for call-site symmetry with
    /// [`bearing_from`](Geocodable::bearing_from).
    async fn distance_from(&self, point: Point<'_>, unit: DistanceUnit) -> Option<f64>
    where
        Self: Sized,
    {
        let us = self.coordinates()?;
        let them = self.resolve_point(point).await?;
        Some(calc::distance_between(them, us, unit))
    }

    /// Initial bearing from this record toward `point`.
    async fn bearing_to(&self, point: Point<'_>, options: BearingOptions) -> Option<f64>
    where
        Self: Sized,
    {
        let us = self.coordinates()?;
        let them = self.resolve_point(point).await?;
        Some(calc::bearing_between(us, them, options))
    }

    /// Initial bearing from `point` toward this record.
    async fn bearing_from(&self, point: Point<'_>, options: BearingOptions) -> Option<f64>
    where
        Self: Sized,
    {
        let us = self.coordinates()?;
        let them = self.resolve_point(point).await?;
        Some(calc::bearing_between(them, us, options))
    }

    /// Resolve a polymorphic point through this type's configured provider,
    /// degrading normalization failures to `None`.
    async fn resolve_point(&self, point: Point<'_>) -> Option<Coordinate>
    where
        Self: Sized,
    {
        let provider = self.geocoder_config().geocoder.clone();
        calc::normalize(point, provider.as_ref()).await.ok()
    }

    /// Resolve coordinates for this record's address and assign them.
    ///
    /// Returns the resolved pair on success. The default body fails with
    /// [`Error::NotImplemented`]; entity-type setup supplies the
    /// field-assigning override, typically by running
    /// [`lookup`](Geocodable::lookup) with an assignment handler.
    async fn geocode(&mut self) -> Result<Coordinate>
    where
        Self: Sized,
    {
        Err(Error::NotImplemented("geocode"))
    }

    /// Resolve an address for this record's coordinates and assign it.
    ///
    /// Returns the resolved address on success. The default body fails with
    /// [`Error::NotImplemented`]; see [`geocode`](Geocodable::geocode).
    async fn reverse_geocode(&mut self) -> Result<String>
    where
        Self: Sized,
    {
        Err(Error::NotImplemented("reverse_geocode"))
    }

    /// Look up geographic data for this record and route the results.
    ///
    /// The dispatcher short-circuits, in order, when the direction is
    /// disabled in the configuration, when the record lacks the field the
    /// query is built from, and when the provider returns no results. A
    /// non-empty result sequence is routed to exactly one handler: the
    /// configuration handler for the direction when registered, else the
    /// caller-supplied `handler`, else nobody. Never both.
    async fn lookup(&mut self, direction: LookupDirection, handler: Option<LookupHandler<Self>>)
    where
        Self: Sized,
    {
        let config = self.geocoder_config().clone();
        let (enabled, config_handler) = match direction {
            LookupDirection::Forward => (config.geocode, config.geocode_handler.clone()),
            LookupDirection::Reverse => (config.reverse_geocode, config.reverse_handler.clone()),
        };
        if !enabled {
            debug!("skipping {direction:?} lookup: direction not enabled");
            return;
        }

        let query = match direction {
            LookupDirection::Forward => match self.address_field() {
                Some(address) if !address.trim().is_empty() => SearchQuery::Address(address),
                _ => {
                    debug!(
                        "skipping forward lookup: no value in `{}`",
                        config.address_field
                    );
                    return;
                }
            },
            LookupDirection::Reverse => match self.coordinates() {
                Some(coordinates) => SearchQuery::Coordinates(coordinates),
                None => {
                    debug!(
                        "skipping reverse lookup: `{}`/`{}` not populated",
                        config.latitude_field, config.longitude_field
                    );
                    return;
                }
            },
        };

        let results = config.geocoder.search(&query).await;
        if results.is_empty() {
            debug!("{direction:?} lookup returned no results");
            return;
        }

        if let Some(handler) = config_handler {
            handler(self, &results);
        } else if let Some(handler) = handler {
            handler(self, &results);
        }
    }

    /// Run [`lookup`](Geocodable::lookup) to completion outside an async
    /// context.
    fn lookup_blocking(
        &mut self,
        direction: LookupDirection,
        handler: Option<LookupHandler<Self>>,
    ) -> Result<()>
    where
        Self: Sized,
    {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| Error::Runtime(format!("failed to create async runtime: {e}")))?;
        runtime.block_on(self.lookup(direction, handler));
        Ok(())
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod entity_tests;
