//! Proximity queries delegated to the persistence layer.

use log::warn;

use crate::entity::Geocoded;
use crate::units::DistanceUnit;

/// Radius used by `nearbys` when none is given.
pub const DEFAULT_NEARBY_RADIUS: f64 = 20.0;

/// Options forwarded to the persistence layer's proximity query.
#[derive(Debug, Clone, PartialEq)]
pub struct NearOptions<K> {
    /// Unit the radius is expressed in.
    pub units: DistanceUnit,
    /// Key of a record to leave out of the results.
    pub exclude: Option<K>,
    /// Maximum number of records to return.
    pub limit: Option<usize>,
}

impl<K> Default for NearOptions<K> {
    fn default() -> Self {
        Self {
            units: DistanceUnit::default(),
            exclude: None,
            limit: None,
        }
    }
}

/// Argument forms accepted by `nearbys`.
#[derive(Debug, Clone, PartialEq)]
pub enum NearbysArgs<K> {
    /// The options form.
    Options(NearOptions<K>),
    /// Legacy bare-unit form, coerced into the options form with a logged
    /// deprecation warning.
    Units(DistanceUnit),
}

impl<K> Default for NearbysArgs<K> {
    fn default() -> Self {
        NearbysArgs::Options(NearOptions::default())
    }
}

impl<K> From<NearOptions<K>> for NearbysArgs<K> {
    fn from(options: NearOptions<K>) -> Self {
        NearbysArgs::Options(options)
    }
}

impl<K> From<DistanceUnit> for NearbysArgs<K> {
    fn from(units: DistanceUnit) -> Self {
        NearbysArgs::Units(units)
    }
}

/// Coerce the accepted argument forms into options, warning on the legacy
/// one.
fn normalize_args<K>(args: NearbysArgs<K>) -> NearOptions<K> {
    match args {
        NearbysArgs::Options(options) => options,
        NearbysArgs::Units(units) => {
            warn!(
                "passing a bare unit to nearbys is deprecated; pass NearOptions {{ units, .. }} instead"
            );
            NearOptions {
                units,
                ..NearOptions::default()
            }
        }
    }
}

/// Entity types whose persistence layer supplies a proximity query.
pub trait NearbyQuery: Geocoded + Sized {
    /// Identity used for self-exclusion.
    type Key: Clone + PartialEq + Send + Sync;

    fn key(&self) -> Self::Key;

    /// Records within `radius` of `origin`, per the persistence layer.
    fn near(origin: &Self, radius: f64, options: NearOptions<Self::Key>) -> Vec<Self>;

    /// Nearby records within [`DEFAULT_NEARBY_RADIUS`].
    fn nearbys(&self, args: impl Into<NearbysArgs<Self::Key>>) -> Vec<Self> {
        self.nearbys_within(DEFAULT_NEARBY_RADIUS, args)
    }

    /// Nearby records within `radius`. Empty when this record is not
    /// geocoded, with no query issued.
    ///
    /// The query always excludes the record itself, regardless of any
    /// exclude the caller passed.
    fn nearbys_within(&self, radius: f64, args: impl Into<NearbysArgs<Self::Key>>) -> Vec<Self> {
        if !self.is_geocoded() {
            return Vec::new();
        }
        let mut options = normalize_args(args.into());
        options.exclude = Some(self.key());
        Self::near(self, radius, options)
    }
}
