//! Coordinate pairs and the polymorphic point argument.

use std::fmt;

use qtty::Degrees;
use serde::{Deserialize, Serialize};

use crate::entity::Geocoded;

/// A (latitude, longitude) pair in signed decimal degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180]; neither is
/// enforced here. Out-of-range values propagate into the math downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: Degrees,
    pub longitude: Degrees,
}

impl Coordinate {
    /// Create a coordinate pair from raw degree values.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Coordinate::new(latitude, longitude)
    }
}

/// The point argument accepted by distance, bearing, and normalization calls.
///
/// A point can be given as a raw coordinate pair, as a reference to a
/// geocodable object (usable while it is geocoded), or as a free-text address
/// resolved through the search provider.
#[derive(Clone, Copy)]
pub enum Point<'a> {
    /// Raw (latitude, longitude) pair.
    Pair(f64, f64),
    /// A geocodable object contributing its current coordinates.
    Entity(&'a dyn Geocoded),
    /// A free-text address.
    Address(&'a str),
}

impl fmt::Debug for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Pair(latitude, longitude) => {
                f.debug_tuple("Pair").field(latitude).field(longitude).finish()
            }
            Point::Entity(entity) => f.debug_tuple("Entity").field(&entity.coordinate_fields()).finish(),
            Point::Address(address) => f.debug_tuple("Address").field(address).finish(),
        }
    }
}

impl From<(f64, f64)> for Point<'_> {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Point::Pair(latitude, longitude)
    }
}

impl From<[f64; 2]> for Point<'_> {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Point::Pair(latitude, longitude)
    }
}

impl From<Coordinate> for Point<'_> {
    fn from(coordinate: Coordinate) -> Self {
        Point::Pair(coordinate.latitude.value(), coordinate.longitude.value())
    }
}

impl<'a> From<&'a str> for Point<'a> {
    fn from(address: &'a str) -> Self {
        Point::Address(address)
    }
}
