//! Validated geographic coordinates.
//!
//! A [`GeographicCoordinate`] is a single latitude or longitude stored both
//! as an exact decimal value and as a degrees/minutes/seconds/milliseconds
//! angle with a cardinal direction. The two representations are kept
//! mutually consistent: reassembling the angle reproduces the decimal value
//! within the fixed rounding precision.
//!
//! Decimal values are kept at a scale of 16 fractional digits with
//! half-even rounding. That scale is load-bearing: it is what makes
//! repeated decimal ⇄ angle round-trips stable.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::GeocodeError;

/// The southernmost valid latitude, in degrees.
pub const MIN_LATITUDE: i32 = -90;
/// The northernmost valid latitude, in degrees.
pub const MAX_LATITUDE: i32 = 90;
/// The westernmost valid longitude, in degrees.
pub const MIN_LONGITUDE: i32 = -180;
/// The easternmost valid longitude, in degrees.
pub const MAX_LONGITUDE: i32 = 180;

/// The largest valid minute of a degree.
pub const MAX_MINUTES: u32 = 59;
/// The largest valid second of a minute.
pub const MAX_SECONDS: u32 = 59;
/// The largest valid millisecond of a second.
pub const MAX_MILLIS: u32 = 999;

const MINUTES_PER_DEGREE: u32 = 60;
const SECONDS_PER_MINUTE: u32 = 60;
const MILLIS_PER_SECOND: u32 = 1000;
const MILLIS_PER_DEGREE: u32 = 3_600_000;

/// Fractional digits kept in every stored decimal value.
const SCALE: u32 = 16;

const NINETY: Decimal = Decimal::from_parts(90, 0, 0, false, 0);
const NEG_NINETY: Decimal = Decimal::from_parts(90, 0, 0, true, 0);
const ONE_EIGHTY: Decimal = Decimal::from_parts(180, 0, 0, false, 0);
const NEG_ONE_EIGHTY: Decimal = Decimal::from_parts(180, 0, 0, true, 0);

/// The two coordinate axes of the geographic coordinate system.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GeographicCoordinateType {
    /// Angular distance of a point north or south of the Equator,
    /// between -90 and 90 degrees.
    Latitude,
    /// Angular distance of a point east or west of the Prime Meridian,
    /// between -180 and 180 degrees.
    Longitude,
}

impl GeographicCoordinateType {
    /// Returns the smallest decimal value valid for this axis.
    #[must_use]
    pub const fn min_value(self) -> Decimal {
        match self {
            Self::Latitude => NEG_NINETY,
            Self::Longitude => NEG_ONE_EIGHTY,
        }
    }

    /// Returns the largest decimal value valid for this axis.
    #[must_use]
    pub const fn max_value(self) -> Decimal {
        match self {
            Self::Latitude => NINETY,
            Self::Longitude => ONE_EIGHTY,
        }
    }

    /// Returns the largest whole degree valid for this axis.
    #[must_use]
    pub const fn max_degrees(self) -> u32 {
        match self {
            Self::Latitude => 90,
            Self::Longitude => 180,
        }
    }

    /// Checks whether `value` lies within this axis' legal range.
    #[must_use]
    pub fn is_valid_value(self, value: Decimal) -> bool {
        value >= self.min_value() && value <= self.max_value()
    }

    /// Checks whether the given angle is legal for this axis.
    ///
    /// Degrees equal to the axis maximum are allowed only when the minutes,
    /// seconds and milliseconds are all zero, so that e.g. 90°0'0.001" does
    /// not validate as a latitude.
    #[must_use]
    pub const fn is_valid_angle(self, degrees: u32, minutes: u32, seconds: u32, millis: u32) -> bool {
        if degrees < self.max_degrees() {
            minutes <= MAX_MINUTES && seconds <= MAX_SECONDS && millis <= MAX_MILLIS
        } else {
            degrees == self.max_degrees() && minutes == 0 && seconds == 0 && millis == 0
        }
    }
}

/// The cardinal direction of a coordinate.
///
/// Besides the four main directions there is a variant for the Equator,
/// which is neither north nor south, and one for the Prime Meridian, which
/// is neither east nor west. The zero variants occur exactly when the
/// coordinate value is zero.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CardinalDirection {
    /// North of the Equator.
    North,
    /// On the Equator.
    ZeroLatitudeDegree,
    /// South of the Equator.
    South,
    /// East of the Prime Meridian.
    East,
    /// On the Prime Meridian.
    ZeroLongitudeDegree,
    /// West of the Prime Meridian.
    West,
}

impl CardinalDirection {
    /// Returns the coordinate axis this direction belongs to.
    #[must_use]
    pub const fn coordinate_type(self) -> GeographicCoordinateType {
        match self {
            Self::North | Self::ZeroLatitudeDegree | Self::South => {
                GeographicCoordinateType::Latitude
            }
            Self::East | Self::ZeroLongitudeDegree | Self::West => {
                GeographicCoordinateType::Longitude
            }
        }
    }

    /// Returns `true` for the Equator and Prime Meridian variants.
    #[must_use]
    pub const fn is_zero_direction(self) -> bool {
        matches!(self, Self::ZeroLatitudeDegree | Self::ZeroLongitudeDegree)
    }

    const fn is_negative(self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}

/// A single validated latitude or longitude.
///
/// The decimal value and the angle decomposition are derived from each
/// other at construction time and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicCoordinate {
    value: Decimal,
    degrees: u32,
    minutes: u32,
    seconds: u32,
    millis: u32,
    cardinal_direction: CardinalDirection,
}

impl GeographicCoordinate {
    /// The latitude of the Equator.
    pub const EQUATOR: Self = Self {
        value: Decimal::ZERO,
        degrees: 0,
        minutes: 0,
        seconds: 0,
        millis: 0,
        cardinal_direction: CardinalDirection::ZeroLatitudeDegree,
    };

    /// The longitude of the Prime Meridian.
    pub const PRIME_MERIDIAN: Self = Self {
        value: Decimal::ZERO,
        degrees: 0,
        minutes: 0,
        seconds: 0,
        millis: 0,
        cardinal_direction: CardinalDirection::ZeroLongitudeDegree,
    };

    pub(crate) const SOUTH_POLE: Self = Self {
        value: NEG_NINETY,
        degrees: 90,
        minutes: 0,
        seconds: 0,
        millis: 0,
        cardinal_direction: CardinalDirection::South,
    };

    pub(crate) const NORTH_POLE: Self = Self {
        value: NINETY,
        degrees: 90,
        minutes: 0,
        seconds: 0,
        millis: 0,
        cardinal_direction: CardinalDirection::North,
    };

    pub(crate) const WESTERNMOST: Self = Self {
        value: NEG_ONE_EIGHTY,
        degrees: 180,
        minutes: 0,
        seconds: 0,
        millis: 0,
        cardinal_direction: CardinalDirection::West,
    };

    pub(crate) const EASTERNMOST: Self = Self {
        value: ONE_EIGHTY,
        degrees: 180,
        minutes: 0,
        seconds: 0,
        millis: 0,
        cardinal_direction: CardinalDirection::East,
    };

    /// Creates a latitude from an exact decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinate`] if `value` is outside
    /// the [-90, 90] range.
    pub fn latitude_from_decimal(value: Decimal) -> Result<Self, GeocodeError> {
        Self::from_decimal(value, GeographicCoordinateType::Latitude)
    }

    /// Creates a longitude from an exact decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinate`] if `value` is outside
    /// the [-180, 180] range.
    pub fn longitude_from_decimal(value: Decimal) -> Result<Self, GeocodeError> {
        Self::from_decimal(value, GeographicCoordinateType::Longitude)
    }

    /// Creates a latitude from a floating point value.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinate`] if `value` is not
    /// finite or is outside the [-90, 90] range.
    pub fn latitude_from_f64(value: f64) -> Result<Self, GeocodeError> {
        Self::from_f64(value, GeographicCoordinateType::Latitude)
    }

    /// Creates a longitude from a floating point value.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinate`] if `value` is not
    /// finite or is outside the [-180, 180] range.
    pub fn longitude_from_f64(value: f64) -> Result<Self, GeocodeError> {
        Self::from_f64(value, GeographicCoordinateType::Longitude)
    }

    /// Creates a latitude from a textual decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinate`] if `value` is not a
    /// decimal number or is outside the [-90, 90] range.
    pub fn latitude_from_str(value: &str) -> Result<Self, GeocodeError> {
        Self::from_str(value, GeographicCoordinateType::Latitude)
    }

    /// Creates a longitude from a textual decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinate`] if `value` is not a
    /// decimal number or is outside the [-180, 180] range.
    pub fn longitude_from_str(value: &str) -> Result<Self, GeocodeError> {
        Self::from_str(value, GeographicCoordinateType::Longitude)
    }

    /// Creates a coordinate from an angle and a cardinal direction.
    ///
    /// The coordinate axis is taken from the direction: north, south and
    /// the Equator build a latitude; east, west and the Prime Meridian
    /// build a longitude.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidCoordinate`] if the angle components
    /// and the direction do not compose a valid coordinate: a zero
    /// direction with a non-zero angle, degrees beyond the axis maximum,
    /// a non-zero sub-component at exactly the maximum degree, or minutes,
    /// seconds or milliseconds outside their natural ranges.
    pub fn from_angle(
        degrees: u32,
        minutes: u32,
        seconds: u32,
        millis: u32,
        cardinal_direction: CardinalDirection,
    ) -> Result<Self, GeocodeError> {
        let coordinate_type = cardinal_direction.coordinate_type();

        let valid = if cardinal_direction.is_zero_direction() {
            degrees == 0 && minutes == 0 && seconds == 0 && millis == 0
        } else {
            coordinate_type.is_valid_angle(degrees, minutes, seconds, millis)
        };
        if !valid {
            return Err(GeocodeError::InvalidCoordinate {
                message: format!(
                    "{degrees}\u{b0}{minutes}'{seconds}.{millis:03}\" {cardinal_direction} \
                     is not a valid {coordinate_type} angle"
                ),
            });
        }

        let sub_degree_millis =
            i64::from((minutes * SECONDS_PER_MINUTE + seconds) * MILLIS_PER_SECOND + millis);
        let fraction = (Decimal::from(sub_degree_millis) / Decimal::from(MILLIS_PER_DEGREE))
            .round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven);
        let mut value = Decimal::from(degrees) + fraction;
        if cardinal_direction.is_negative() {
            value = -value;
        }

        Ok(Self {
            value,
            degrees,
            minutes,
            seconds,
            millis,
            cardinal_direction,
        })
    }

    fn from_decimal(
        value: Decimal,
        coordinate_type: GeographicCoordinateType,
    ) -> Result<Self, GeocodeError> {
        if !coordinate_type.is_valid_value(value) {
            return Err(GeocodeError::InvalidCoordinate {
                message: format!("[{value}] is not a valid {coordinate_type} value"),
            });
        }

        let value = value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven);
        let abs = value.abs();
        let degrees = abs.trunc();
        let minutes_decimal = (abs - degrees) * Decimal::from(MINUTES_PER_DEGREE);
        let minutes = minutes_decimal.trunc();
        let seconds_decimal = (minutes_decimal - minutes) * Decimal::from(SECONDS_PER_MINUTE);
        let seconds = seconds_decimal.trunc();
        let millis = ((seconds_decimal - seconds) * Decimal::from(MILLIS_PER_SECOND)).trunc();

        let cardinal_direction = if value.is_zero() {
            match coordinate_type {
                GeographicCoordinateType::Latitude => CardinalDirection::ZeroLatitudeDegree,
                GeographicCoordinateType::Longitude => CardinalDirection::ZeroLongitudeDegree,
            }
        } else if value.is_sign_positive() {
            match coordinate_type {
                GeographicCoordinateType::Latitude => CardinalDirection::North,
                GeographicCoordinateType::Longitude => CardinalDirection::East,
            }
        } else {
            match coordinate_type {
                GeographicCoordinateType::Latitude => CardinalDirection::South,
                GeographicCoordinateType::Longitude => CardinalDirection::West,
            }
        };

        Ok(Self {
            value,
            degrees: whole(degrees),
            minutes: whole(minutes),
            seconds: whole(seconds),
            millis: whole(millis),
            cardinal_direction,
        })
    }

    fn from_f64(
        value: f64,
        coordinate_type: GeographicCoordinateType,
    ) -> Result<Self, GeocodeError> {
        if !value.is_finite() {
            return Err(GeocodeError::InvalidCoordinate {
                message: format!("[{value}] is not a finite {coordinate_type} value"),
            });
        }

        // Going through the float's shortest round-trip decimal form keeps
        // the digits the provider actually sent, instead of the float's
        // full binary expansion.
        Self::from_str(&value.to_string(), coordinate_type)
    }

    fn from_str(
        value: &str,
        coordinate_type: GeographicCoordinateType,
    ) -> Result<Self, GeocodeError> {
        let decimal = value
            .parse::<Decimal>()
            .map_err(|e| GeocodeError::InvalidCoordinate {
                message: format!("[{value}] is not a valid {coordinate_type} value: {e}"),
            })?;

        Self::from_decimal(decimal, coordinate_type)
    }

    /// Returns the exact decimal value of this coordinate.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the value of this coordinate as a floating point number.
    #[must_use]
    pub fn value_f64(&self) -> f64 {
        self.value.to_f64().unwrap_or_default()
    }

    /// Returns the degree part of the angle this coordinate represents:
    /// 0 to 90 for a latitude, 0 to 180 for a longitude.
    #[must_use]
    pub const fn degrees(&self) -> u32 {
        self.degrees
    }

    /// Returns the minute part of the angle, 0 to 59.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns the second part of the angle, 0 to 59.
    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Returns the millisecond part of the angle, 0 to 999.
    #[must_use]
    pub const fn millis(&self) -> u32 {
        self.millis
    }

    /// Returns the cardinal direction of this coordinate.
    ///
    /// Positive latitudes are north, negative ones south; positive
    /// longitudes are east, negative ones west. A zero value maps to
    /// [`CardinalDirection::ZeroLatitudeDegree`] or
    /// [`CardinalDirection::ZeroLongitudeDegree`] depending on the axis.
    #[must_use]
    pub const fn cardinal_direction(&self) -> CardinalDirection {
        self.cardinal_direction
    }

    /// Returns the coordinate axis of this coordinate.
    #[must_use]
    pub const fn coordinate_type(&self) -> GeographicCoordinateType {
        self.cardinal_direction.coordinate_type()
    }
}

impl fmt::Display for GeographicCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value: \"{}\", degrees: \"{}\", minutes: \"{}\", seconds: \"{}\", millis: \"{}\", \
             cardinalDirection: \"{}\"",
            self.value.normalize(),
            self.degrees,
            self.minutes,
            self.seconds,
            self.millis,
            self.cardinal_direction
        )
    }
}

// Decomposition intermediates are bounded by the range validation that
// precedes them, so the narrowing never actually saturates.
fn whole(value: Decimal) -> u32 {
    value.to_u32().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn creates_latitude_from_decimal() {
        let latitude =
            GeographicCoordinate::latitude_from_decimal(dec("1.0341677777777778")).unwrap();

        assert_eq!(latitude.value(), dec("1.0341677777777778"));
        assert_eq!(latitude.degrees(), 1);
        assert_eq!(latitude.minutes(), 2);
        assert_eq!(latitude.seconds(), 3);
        assert_eq!(latitude.millis(), 4);
        assert_eq!(latitude.cardinal_direction(), CardinalDirection::North);
    }

    #[test]
    fn creates_longitude_from_decimal() {
        let longitude =
            GeographicCoordinate::longitude_from_decimal(dec("1.0341677777777778")).unwrap();

        assert_eq!(longitude.value(), dec("1.0341677777777778"));
        assert_eq!(longitude.degrees(), 1);
        assert_eq!(longitude.minutes(), 2);
        assert_eq!(longitude.seconds(), 3);
        assert_eq!(longitude.millis(), 4);
        assert_eq!(longitude.cardinal_direction(), CardinalDirection::East);
    }

    #[test]
    fn creates_coordinate_from_f64() {
        let latitude = GeographicCoordinate::latitude_from_f64(1.0341677777777778).unwrap();

        assert_eq!(latitude.value(), dec("1.0341677777777778"));
        assert_eq!(latitude.degrees(), 1);
        assert_eq!(latitude.minutes(), 2);
        assert_eq!(latitude.seconds(), 3);
        assert_eq!(latitude.millis(), 4);
        assert_eq!(latitude.cardinal_direction(), CardinalDirection::North);
    }

    #[test]
    fn creates_coordinate_from_str() {
        let longitude = GeographicCoordinate::longitude_from_str("1.0341677777777778").unwrap();

        assert_eq!(longitude.value(), dec("1.0341677777777778"));
        assert_eq!(longitude.cardinal_direction(), CardinalDirection::East);
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(matches!(
            GeographicCoordinate::latitude_from_str("not a number"),
            Err(GeocodeError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn creates_coordinate_from_angle() {
        let coordinate =
            GeographicCoordinate::from_angle(1, 2, 3, 4, CardinalDirection::North).unwrap();

        assert_eq!(coordinate.value(), dec("1.0341677777777778"));
        assert_eq!(coordinate.degrees(), 1);
        assert_eq!(coordinate.minutes(), 2);
        assert_eq!(coordinate.seconds(), 3);
        assert_eq!(coordinate.millis(), 4);
        assert_eq!(coordinate.cardinal_direction(), CardinalDirection::North);
    }

    #[test]
    fn south_and_west_angles_yield_negative_values() {
        let south = GeographicCoordinate::from_angle(1, 2, 3, 4, CardinalDirection::South).unwrap();
        let west = GeographicCoordinate::from_angle(1, 2, 3, 4, CardinalDirection::West).unwrap();

        assert_eq!(south.value(), dec("-1.0341677777777778"));
        assert_eq!(west.value(), dec("-1.0341677777777778"));
    }

    #[test]
    fn zero_values_use_zero_directions() {
        let latitude = GeographicCoordinate::latitude_from_f64(0.0).unwrap();
        let longitude = GeographicCoordinate::longitude_from_f64(0.0).unwrap();

        assert_eq!(
            latitude.cardinal_direction(),
            CardinalDirection::ZeroLatitudeDegree
        );
        assert_eq!(
            longitude.cardinal_direction(),
            CardinalDirection::ZeroLongitudeDegree
        );
        assert_eq!(latitude, GeographicCoordinate::EQUATOR);
        assert_eq!(longitude, GeographicCoordinate::PRIME_MERIDIAN);
    }

    #[test]
    fn equator_and_prime_meridian_differ() {
        assert_ne!(
            GeographicCoordinate::EQUATOR,
            GeographicCoordinate::PRIME_MERIDIAN
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(GeographicCoordinate::latitude_from_f64(90.1).is_err());
        assert!(GeographicCoordinate::latitude_from_f64(-90.1).is_err());
        assert!(GeographicCoordinate::longitude_from_f64(180.1).is_err());
        assert!(GeographicCoordinate::longitude_from_f64(-180.1).is_err());
        assert!(GeographicCoordinate::latitude_from_decimal(Decimal::from(91)).is_err());
        assert!(GeographicCoordinate::longitude_from_decimal(Decimal::from(181)).is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(GeographicCoordinate::latitude_from_f64(f64::NAN).is_err());
        assert!(GeographicCoordinate::longitude_from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(GeographicCoordinate::latitude_from_f64(90.0).is_ok());
        assert!(GeographicCoordinate::latitude_from_f64(-90.0).is_ok());
        assert!(GeographicCoordinate::longitude_from_f64(180.0).is_ok());
        assert!(GeographicCoordinate::longitude_from_f64(-180.0).is_ok());
    }

    #[test]
    fn max_degrees_require_zero_subcomponents() {
        assert!(GeographicCoordinate::from_angle(90, 0, 0, 0, CardinalDirection::North).is_ok());
        assert!(GeographicCoordinate::from_angle(90, 0, 0, 1, CardinalDirection::North).is_err());
        assert!(GeographicCoordinate::from_angle(90, 1, 0, 0, CardinalDirection::South).is_err());
        assert!(GeographicCoordinate::from_angle(91, 0, 0, 0, CardinalDirection::North).is_err());
        assert!(GeographicCoordinate::from_angle(180, 0, 0, 0, CardinalDirection::East).is_ok());
        assert!(GeographicCoordinate::from_angle(180, 0, 0, 1, CardinalDirection::West).is_err());
        assert!(GeographicCoordinate::from_angle(181, 0, 0, 0, CardinalDirection::East).is_err());
    }

    #[test]
    fn rejects_out_of_range_angle_components() {
        assert!(GeographicCoordinate::from_angle(1, 60, 0, 0, CardinalDirection::North).is_err());
        assert!(GeographicCoordinate::from_angle(1, 0, 60, 0, CardinalDirection::North).is_err());
        assert!(GeographicCoordinate::from_angle(1, 0, 0, 1000, CardinalDirection::North).is_err());
    }

    #[test]
    fn zero_directions_require_zero_angles() {
        assert!(
            GeographicCoordinate::from_angle(0, 0, 0, 0, CardinalDirection::ZeroLatitudeDegree)
                .is_ok()
        );
        assert!(
            GeographicCoordinate::from_angle(1, 0, 0, 0, CardinalDirection::ZeroLatitudeDegree)
                .is_err()
        );
        assert!(
            GeographicCoordinate::from_angle(0, 0, 1, 0, CardinalDirection::ZeroLongitudeDegree)
                .is_err()
        );
    }

    #[test]
    fn decomposition_round_trips_within_one_milli_of_arc() {
        let tolerance = Decimal::ONE / Decimal::from(MILLIS_PER_DEGREE);

        for value in [
            "0",
            "1.0341677777777778",
            "-1.0341677777777778",
            "37.422782",
            "-122.085099",
            "89.9999999999999999",
            "90",
            "-90",
        ] {
            let latitude_value = dec(value);
            if !GeographicCoordinateType::Latitude.is_valid_value(latitude_value) {
                continue;
            }
            let coordinate = GeographicCoordinate::latitude_from_decimal(latitude_value).unwrap();
            let rebuilt = GeographicCoordinate::from_angle(
                coordinate.degrees(),
                coordinate.minutes(),
                coordinate.seconds(),
                coordinate.millis(),
                coordinate.cardinal_direction(),
            )
            .unwrap();

            let difference = (coordinate.value() - rebuilt.value()).abs();
            assert!(
                difference <= tolerance,
                "round-trip of {value} drifted by {difference}"
            );
        }
    }

    #[test]
    fn coordinates_with_equal_fields_are_equal() {
        let first = GeographicCoordinate::latitude_from_f64(47.4984).unwrap();
        let second = GeographicCoordinate::latitude_from_str("47.4984").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn formats_coordinate() {
        let coordinate = GeographicCoordinate::latitude_from_f64(1.0341677777777778).unwrap();

        assert_eq!(
            coordinate.to_string(),
            "value: \"1.0341677777777778\", degrees: \"1\", minutes: \"2\", seconds: \"3\", \
             millis: \"4\", cardinalDirection: \"NORTH\""
        );
    }

    #[test]
    fn direction_knows_its_axis() {
        assert_eq!(
            CardinalDirection::North.coordinate_type(),
            GeographicCoordinateType::Latitude
        );
        assert_eq!(
            CardinalDirection::ZeroLatitudeDegree.coordinate_type(),
            GeographicCoordinateType::Latitude
        );
        assert_eq!(
            CardinalDirection::West.coordinate_type(),
            GeographicCoordinateType::Longitude
        );
        assert_eq!(
            CardinalDirection::ZeroLongitudeDegree.coordinate_type(),
            GeographicCoordinateType::Longitude
        );
    }
}
