//! Geographic information about a geocoded result.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::area::GeographicArea;
use crate::coordinate::GeographicCoordinate;
use crate::location::GeographicLocation;

/// How precisely a geocoded location is known.
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
pub enum LocationType {
    /// A precise street-address location.
    Rooftop,
    /// Interpolated between two precise points, such as along a road.
    RangeInterpolated,
    /// The geometric center of a polyline or polygon result.
    GeometricCenter,
    /// An approximate location.
    Approximate,
}

/// The geographic description of a geocoded result: its point location,
/// a precision classification, the recommended display viewport and a
/// bounding box.
///
/// Built through [`Geometry::builder`]; the builder fills in any part that
/// is not explicitly set:
///
/// - the location type defaults to [`LocationType::Approximate`];
/// - the viewport defaults to the largest possible area on the map;
/// - the bounds default to the viewport when one was supplied, and to a
///   zero-sized rectangle at (0, 0) otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    location: GeographicLocation,
    location_type: LocationType,
    viewport: GeographicArea,
    bounds: GeographicArea,
}

impl Geometry {
    /// Creates a builder for a geometry at the given location.
    #[must_use]
    pub const fn builder(location: GeographicLocation) -> GeometryBuilder {
        GeometryBuilder {
            location,
            location_type: None,
            viewport: None,
            bounds: None,
        }
    }

    /// Returns the location described by this geometry.
    #[must_use]
    pub const fn location(&self) -> &GeographicLocation {
        &self.location
    }

    /// Returns how precisely the location is known.
    #[must_use]
    pub const fn location_type(&self) -> LocationType {
        self.location_type
    }

    /// Returns the recommended viewport for displaying the location.
    #[must_use]
    pub const fn viewport(&self) -> &GeographicArea {
        &self.viewport
    }

    /// Returns the bounding box that fully contains the result.
    ///
    /// The bounds may legitimately differ from the viewport: a city can
    /// include outlying territory that should not be shown by default.
    #[must_use]
    pub const fn bounds(&self) -> &GeographicArea {
        &self.bounds
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "location: {{{}}}, locationType: \"{}\", viewport: {{{}}}, bounds: {{{}}}",
            self.location, self.location_type, self.viewport, self.bounds
        )
    }
}

/// Staged builder for [`Geometry`].
#[derive(Debug, Clone)]
pub struct GeometryBuilder {
    location: GeographicLocation,
    location_type: Option<LocationType>,
    viewport: Option<GeographicArea>,
    bounds: Option<GeographicArea>,
}

impl GeometryBuilder {
    /// Sets the precision classification of the location.
    #[must_use]
    pub fn location_type(mut self, location_type: LocationType) -> Self {
        self.location_type = Some(location_type);
        self
    }

    /// Sets the recommended viewport.
    ///
    /// If no bounds have been set yet, the bounds are set to the same area,
    /// so a geometry with only a viewport reports matching bounds. Bounds
    /// set before the viewport are left untouched.
    #[must_use]
    pub fn viewport(mut self, viewport: GeographicArea) -> Self {
        if self.bounds.is_none() {
            self.bounds = Some(viewport.clone());
        }
        self.viewport = Some(viewport);
        self
    }

    /// Sets the bounding box.
    #[must_use]
    pub fn bounds(mut self, bounds: GeographicArea) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Builds the geometry, applying the documented defaults for any part
    /// that was not set.
    #[must_use]
    pub fn build(self) -> Geometry {
        let location_type = self.location_type.unwrap_or(LocationType::Approximate);
        let viewport = self.viewport.unwrap_or_else(full_map);
        let bounds = self.bounds.unwrap_or_else(zero_area);

        Geometry {
            location: self.location,
            location_type,
            viewport,
            bounds,
        }
    }
}

/// The largest area representable on a map.
fn full_map() -> GeographicArea {
    GeographicArea::new(
        GeographicLocation::from_coordinates(
            GeographicCoordinate::SOUTH_POLE,
            GeographicCoordinate::WESTERNMOST,
        ),
        GeographicLocation::from_coordinates(
            GeographicCoordinate::NORTH_POLE,
            GeographicCoordinate::EASTERNMOST,
        ),
    )
}

/// A zero-sized rectangle at the Equator/Prime Meridian intersection.
fn zero_area() -> GeographicArea {
    let origin = GeographicLocation::from_coordinates(
        GeographicCoordinate::EQUATOR,
        GeographicCoordinate::PRIME_MERIDIAN,
    );

    GeographicArea::new(origin.clone(), origin)
}
