//! Points on the map.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::GeocodeError;
use crate::coordinate::GeographicCoordinate;

/// Fractional digits kept in the elevation, matching the coordinate scale.
const SCALE: u32 = 16;

/// A point on the map: a latitude, a longitude and an elevation.
///
/// All three fields are always present; locations built without an
/// explicit elevation sit at zero elevation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicLocation {
    latitude: GeographicCoordinate,
    longitude: GeographicCoordinate,
    elevation: Decimal,
}

impl GeographicLocation {
    /// Creates a location from raw coordinate values at zero elevation.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinate`] if `latitude` or
    /// `longitude` is not a valid coordinate value.
    pub fn from_values(latitude: f64, longitude: f64) -> Result<Self, GeocodeError> {
        Self::from_values_with_elevation(latitude, longitude, 0.0)
    }

    /// Creates a location from raw coordinate values and an elevation.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinate`] if `latitude` or
    /// `longitude` is not a valid coordinate value, or if `elevation` is
    /// not finite.
    pub fn from_values_with_elevation(
        latitude: f64,
        longitude: f64,
        elevation: f64,
    ) -> Result<Self, GeocodeError> {
        let latitude = GeographicCoordinate::latitude_from_f64(latitude)?;
        let longitude = GeographicCoordinate::longitude_from_f64(longitude)?;
        if !elevation.is_finite() {
            return Err(GeocodeError::InvalidCoordinate {
                message: format!("[{elevation}] is not a finite elevation"),
            });
        }
        let elevation = elevation
            .to_string()
            .parse::<Decimal>()
            .map_err(|e| GeocodeError::InvalidCoordinate {
                message: format!("[{elevation}] is not a valid elevation: {e}"),
            })?;

        Ok(Self::from_coordinates_with_elevation(
            latitude, longitude, elevation,
        ))
    }

    /// Creates a location from pre-validated coordinates at zero elevation.
    #[must_use]
    pub fn from_coordinates(
        latitude: GeographicCoordinate,
        longitude: GeographicCoordinate,
    ) -> Self {
        Self::from_coordinates_with_elevation(latitude, longitude, Decimal::ZERO)
    }

    /// Creates a location from pre-validated coordinates and an elevation.
    #[must_use]
    pub fn from_coordinates_with_elevation(
        latitude: GeographicCoordinate,
        longitude: GeographicCoordinate,
        elevation: Decimal,
    ) -> Self {
        Self {
            latitude,
            longitude,
            elevation: elevation
                .round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven),
        }
    }

    /// Returns the latitude of this location.
    #[must_use]
    pub const fn latitude(&self) -> &GeographicCoordinate {
        &self.latitude
    }

    /// Returns the longitude of this location.
    #[must_use]
    pub const fn longitude(&self) -> &GeographicCoordinate {
        &self.longitude
    }

    /// Returns the elevation of this location.
    #[must_use]
    pub const fn elevation(&self) -> Decimal {
        self.elevation
    }
}

impl fmt::Display for GeographicLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "latitude: {{{}}}, longitude: {{{}}}, elevation: \"{}\"",
            self.latitude,
            self.longitude,
            self.elevation.normalize()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::CardinalDirection;

    #[test]
    fn creates_location_from_values() {
        let location = GeographicLocation::from_values(37.422782, -122.085099).unwrap();

        assert_eq!(
            location.latitude().value(),
            "37.422782".parse::<Decimal>().unwrap()
        );
        assert_eq!(
            location.longitude().value(),
            "-122.085099".parse::<Decimal>().unwrap()
        );
        assert_eq!(location.elevation(), Decimal::ZERO);
        assert_eq!(
            location.latitude().cardinal_direction(),
            CardinalDirection::North
        );
        assert_eq!(
            location.longitude().cardinal_direction(),
            CardinalDirection::West
        );
    }

    #[test]
    fn creates_location_with_elevation() {
        let location =
            GeographicLocation::from_values_with_elevation(47.4984, 19.0405, 96.5).unwrap();

        assert_eq!(location.elevation(), "96.5".parse::<Decimal>().unwrap());
    }

    #[test]
    fn rejects_invalid_coordinate_values() {
        assert!(GeographicLocation::from_values(90.1, 0.0).is_err());
        assert!(GeographicLocation::from_values(0.0, -180.1).is_err());
        assert!(GeographicLocation::from_values_with_elevation(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn creates_location_from_coordinates() {
        let location = GeographicLocation::from_coordinates(
            GeographicCoordinate::EQUATOR,
            GeographicCoordinate::PRIME_MERIDIAN,
        );

        assert_eq!(location.latitude(), &GeographicCoordinate::EQUATOR);
        assert_eq!(location.longitude(), &GeographicCoordinate::PRIME_MERIDIAN);
        assert_eq!(location.elevation(), Decimal::ZERO);
    }

    #[test]
    fn locations_with_equal_fields_are_equal() {
        let first = GeographicLocation::from_values(1.5, 2.5).unwrap();
        let second = GeographicLocation::from_values_with_elevation(1.5, 2.5, 0.0).unwrap();

        assert_eq!(first, second);
    }
}
