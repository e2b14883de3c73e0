//! Great-circle calculations and point normalization.
//!
//! The distance and bearing functions are pure; [`normalize`] is the one
//! entry point that may reach the search provider, when the point is a
//! free-text address.

use qtty::{Deg, Rad, Radians};

use crate::error::{Error, Result};
use crate::point::{Coordinate, Point};
use crate::provider::{Geocoder, SearchQuery};
use crate::units::{AngleUnit, BearingOptions, DistanceUnit};

/// Great-circle distance between two points, in `unit`.
///
/// Haversine form: symmetric in its arguments and zero for coincident
/// points, independent of unit.
pub fn distance_between(from: Coordinate, to: Coordinate, unit: DistanceUnit) -> f64 {
    let lat1 = from.latitude.to::<Rad>().value();
    let lon1 = from.longitude.to::<Rad>().value();
    let lat2 = to.latitude.to::<Rad>().value();
    let lon2 = to.longitude.to::<Rad>().value();

    let half_dlat = (lat2 - lat1) / 2.0;
    let half_dlon = (lon2 - lon1) / 2.0;
    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
    // Clamp against floating-point overshoot near antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    c * unit.earth_radius()
}

/// Initial compass bearing from `from` toward `to`.
///
/// 0 points north, increasing clockwise; the result lies in [0, 360) degrees
/// (or [0, 2π) radians). Not symmetric: the reciprocal bearing differs by
/// roughly 180°. Coincident points yield 0.
pub fn bearing_between(from: Coordinate, to: Coordinate, options: BearingOptions) -> f64 {
    let lat1 = from.latitude.to::<Rad>().value();
    let lon1 = from.longitude.to::<Rad>().value();
    let lat2 = to.latitude.to::<Rad>().value();
    let lon2 = to.longitude.to::<Rad>().value();

    let dlon = lon2 - lon1;
    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    let bearing = Radians::new(y.atan2(x)).wrap_pos();

    let value = match options.unit {
        AngleUnit::Degrees => bearing.to::<Deg>().value(),
        AngleUnit::Radians => bearing.value(),
    };
    match options.precision {
        Some(places) => {
            let scale = 10f64.powi(places as i32);
            (value * scale).round() / scale
        }
        None => value,
    }
}

/// Normalize a polymorphic point into a coordinate pair.
///
/// Raw pairs pass through untouched; geocodable entities contribute their
/// current coordinates; free-text addresses resolve through `geocoder`,
/// taking the first result as most relevant.
///
/// Fails with [`Error::InvalidPoint`] for an entity that is not currently
/// geocoded, and with [`Error::UnresolvableAddress`] for an address the
/// provider returns nothing for.
pub async fn normalize(point: Point<'_>, geocoder: &dyn Geocoder) -> Result<Coordinate> {
    match point {
        Point::Pair(latitude, longitude) => Ok(Coordinate::new(latitude, longitude)),
        Point::Entity(entity) => entity
            .coordinates()
            .ok_or_else(|| Error::InvalidPoint("entity is not geocoded".to_string())),
        Point::Address(address) => {
            let query = SearchQuery::Address(address.to_string());
            let results = geocoder.search(&query).await;
            match results.first() {
                Some(best) => Ok(best.coordinates()),
                None => Err(Error::UnresolvableAddress(address.to_string())),
            }
        }
    }
}
