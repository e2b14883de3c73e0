//! # geocodable
//!
//! Geospatial behavior for data-model objects.
//!
//! This crate augments record types with geocoding lookups, great-circle
//! distance and bearing math, and nearby-object queries, without owning the
//! persistence layer or the network search provider behind them.
//!
//! ## Features
//!
//! - Great-circle distance and initial bearing with unit and precision
//!   selection
//! - Normalization of heterogeneous points (coordinate pairs, geocoded
//!   records, free-text addresses) into a canonical pair
//! - A lookup dispatcher that routes provider results to exactly one
//!   handler, with deterministic short-circuiting
//! - Proximity-query delegation with guaranteed self-exclusion
//! - An in-memory provider backend for unit testing and local development
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use geocodable::{
//!     DistanceUnit, Geocodable, Geocoded, GeocoderConfig, LocalGeocoder, Point,
//! };
//!
//! struct Venue {
//!     latitude: Option<f64>,
//!     longitude: Option<f64>,
//!     street_address: Option<String>,
//!     config: GeocoderConfig<Venue>,
//! }
//!
//! impl Geocoded for Venue {
//!     fn coordinate_fields(&self) -> (Option<f64>, Option<f64>) {
//!         (self.latitude, self.longitude)
//!     }
//!     fn address_field(&self) -> Option<String> {
//!         self.street_address.clone()
//!     }
//! }
//!
//! impl Geocodable for Venue {
//!     fn geocoder_config(&self) -> &GeocoderConfig<Venue> {
//!         &self.config
//!     }
//! }
//!
//! // Distance from a geocoded venue to an address, in miles.
//! let miles = venue
//!     .distance_to(Point::Address("Portland, OR"), DistanceUnit::Miles)
//!     .await;
//! ```

pub mod calc;
pub mod config;
pub mod entity;
pub mod error;
pub mod near;
pub mod point;
pub mod provider;
pub mod providers;
pub mod units;

pub use config::{GeocoderConfig, LookupHandler};
pub use entity::{Geocodable, Geocoded, LookupDirection};
pub use error::{Error, Result};
pub use near::{NearOptions, NearbyQuery, NearbysArgs, DEFAULT_NEARBY_RADIUS};
pub use point::{Coordinate, Point};
pub use provider::{Geocoder, SearchQuery, SearchResult};
pub use providers::LocalGeocoder;
pub use units::{AngleUnit, BearingOptions, DistanceUnit, EARTH_RADIUS};
