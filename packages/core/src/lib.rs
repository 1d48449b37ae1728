#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geocoding domain model.
//!
//! Immutable value objects describing the result of geocoding an address
//! or looking up a location:
//!
//! - [`GeographicCoordinate`] — a single validated latitude or longitude
//!   stored both as an exact decimal and as a
//!   degrees/minutes/seconds/milliseconds decomposition.
//! - [`GeographicLocation`] — a point on the map (latitude, longitude,
//!   elevation).
//! - [`GeographicArea`] — a rectangle described by two corner locations.
//! - [`Geometry`] — a location plus its precision classification, the
//!   recommended display viewport and a bounding box.
//! - [`AddressComponent`] / [`GeocodedAddress`] — the labeled fragments of
//!   a formatted address and the full per-result aggregate.
//! - [`GeocodeResponse`] — status plus the ordered list of geocoded
//!   addresses produced by a provider response parser.
//!
//! All coordinate arithmetic is done with [`rust_decimal::Decimal`] at a
//! fixed scale of 16 fractional digits with half-even rounding, so that
//! decomposing a value into an angle and reassembling it is stable.
//!
//! Every type is constructed through a builder or factory function that
//! validates its invariants up front and is never mutated afterwards, so
//! values can be shared freely across threads.

pub mod address_component;
pub mod area;
pub mod coordinate;
pub mod geocoded_address;
pub mod geometry;
pub mod location;
pub mod response;

pub use address_component::{AddressComponent, AddressComponentType};
pub use area::GeographicArea;
pub use coordinate::{CardinalDirection, GeographicCoordinate, GeographicCoordinateType};
pub use geocoded_address::GeocodedAddress;
pub use geometry::{Geometry, LocationType};
pub use location::GeographicLocation;
pub use response::{GeocodeResponse, GeocodeStatus};

use thiserror::Error;

/// Errors raised while constructing domain values or interpreting a
/// provider response.
///
/// All three kinds are fatal to the operation that raised them: a value
/// object either satisfies every invariant or is not constructed at all,
/// and a response either parses completely or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// A numeric value or angle does not describe a valid geographic
    /// coordinate for its axis.
    #[error("invalid coordinate: {message}")]
    InvalidCoordinate {
        /// Description of the validation failure.
        message: String,
    },

    /// A mandatory field was absent from a provider response.
    #[error("mandatory field [{field}] is missing from the response")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The response document could not be interpreted.
    #[error("response parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },
}
