//! Rectangular areas on the map.

use std::fmt;

use serde::Serialize;

use crate::location::GeographicLocation;

/// A rectangle on the map described by its south-west and north-east
/// corners.
///
/// The corners are taken as given: no check is made that the south-west
/// corner actually lies south-west of the north-east corner, since
/// provider responses are free to describe areas crossing the antimeridian
/// that way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicArea {
    south_west_corner: GeographicLocation,
    north_east_corner: GeographicLocation,
}

impl GeographicArea {
    /// Creates an area from its two corner locations.
    #[must_use]
    pub const fn new(
        south_west_corner: GeographicLocation,
        north_east_corner: GeographicLocation,
    ) -> Self {
        Self {
            south_west_corner,
            north_east_corner,
        }
    }

    /// Returns the south-west corner of this area.
    #[must_use]
    pub const fn south_west_corner(&self) -> &GeographicLocation {
        &self.south_west_corner
    }

    /// Returns the north-east corner of this area.
    #[must_use]
    pub const fn north_east_corner(&self) -> &GeographicLocation {
        &self.north_east_corner
    }
}

impl fmt::Display for GeographicArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "southWestCorner: {{{}}}, northEastCorner: {{{}}}",
            self.south_west_corner, self.north_east_corner
        )
    }
}
