//! Unit selectors for distance and bearing calculations.

use qtty::{Kilometers, Mile};
use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the great-circle formulas.
pub const EARTH_RADIUS: Kilometers = Kilometers::new(6371.0);

/// Unit a computed distance (or a query radius) is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    /// Earth radius expressed in this unit.
    pub fn earth_radius(self) -> f64 {
        match self {
            Self::Miles => EARTH_RADIUS.to::<Mile>().value(),
            Self::Kilometers => EARTH_RADIUS.value(),
        }
    }
}

/// Unit a computed bearing is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

/// Options for bearing calculations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BearingOptions {
    /// Unit of the returned angle.
    pub unit: AngleUnit,
    /// Decimal places to round the result to, when set.
    pub precision: Option<u32>,
}
