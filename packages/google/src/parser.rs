//! The JSON-to-domain-model mapping for geocode responses.

use std::io::Read;

use log::{error, warn};
use serde_json::Value;

use geocoder_core::{
    AddressComponent, AddressComponentType, GeocodeError, GeocodeResponse, GeocodeStatus,
    GeocodedAddress, GeographicArea, GeographicLocation, Geometry, LocationType,
};

const FIELD_STATUS: &str = "status";
const FIELD_RESULTS: &str = "results";
const FIELD_TYPES: &str = "types";
const FIELD_FORMATTED_ADDRESS: &str = "formatted_address";
const FIELD_ADDRESS_COMPONENTS: &str = "address_components";
const FIELD_GEOMETRY: &str = "geometry";
const FIELD_LOCATION: &str = "location";
const FIELD_LOCATION_TYPE: &str = "location_type";
const FIELD_VIEWPORT: &str = "viewport";
const FIELD_BOUNDS: &str = "bounds";
const FIELD_LAT: &str = "lat";
const FIELD_LNG: &str = "lng";
const FIELD_SOUTHWEST: &str = "southwest";
const FIELD_NORTHEAST: &str = "northeast";
const FIELD_LONG_NAME: &str = "long_name";
const FIELD_SHORT_NAME: &str = "short_name";

/// Parses a geocode response from a reader holding one JSON document.
///
/// `query_string` is the address or "lat, lng" text the response answers;
/// it is threaded through unchanged into the returned aggregate.
///
/// # Errors
///
/// Returns [`GeocodeError::Parse`] if the document cannot be read or is
/// not valid JSON, or if the `status` or a `location_type` value is
/// unrecognized; [`GeocodeError::MissingField`] if a contractually
/// required field is absent; [`GeocodeError::InvalidCoordinate`] if a
/// coordinate value is out of range.
pub fn parse_reader(
    query_string: &str,
    reader: impl Read,
) -> Result<GeocodeResponse, GeocodeError> {
    let root: Value = serde_json::from_reader(reader)
        .map_err(|e| parse_error(format!("malformed geocode response: {e}")))?;

    parse_value(query_string, &root)
}

/// Parses a geocode response from a string holding one JSON document.
///
/// # Errors
///
/// See [`parse_reader`].
pub fn parse_str(query_string: &str, json: &str) -> Result<GeocodeResponse, GeocodeError> {
    let root: Value = serde_json::from_str(json)
        .map_err(|e| parse_error(format!("malformed geocode response: {e}")))?;

    parse_value(query_string, &root)
}

/// Parses a geocode response from an already-parsed JSON tree.
///
/// # Errors
///
/// See [`parse_reader`].
pub fn parse_value(query_string: &str, root: &Value) -> Result<GeocodeResponse, GeocodeError> {
    let status = parse_status(require(root, FIELD_STATUS)?)?;
    let results = as_array(require(root, FIELD_RESULTS)?, FIELD_RESULTS)?;

    let mut builder = GeocodeResponse::builder(query_string).status(status);
    for result in results {
        builder = builder.add_address(parse_geocoded_address(result)?);
    }

    Ok(builder.build())
}

fn parse_status(value: &Value) -> Result<GeocodeStatus, GeocodeError> {
    let status = as_str(value, FIELD_STATUS)?;

    status
        .to_uppercase()
        .parse()
        .map_err(|_| parse_error(format!("unrecognized geocode status [{status}]")))
}

fn parse_geocoded_address(result: &Value) -> Result<GeocodedAddress, GeocodeError> {
    let types = require(result, FIELD_TYPES)?;
    let formatted_address = require(result, FIELD_FORMATTED_ADDRESS)?;
    let components = require(result, FIELD_ADDRESS_COMPONENTS)?;
    let geometry = require(result, FIELD_GEOMETRY)?;

    Ok(
        GeocodedAddress::builder(as_str(formatted_address, FIELD_FORMATTED_ADDRESS)?)
            .add_address_types(parse_address_component_types(types, FIELD_TYPES)?)
            .add_address_components(parse_address_components(components)?)
            .geometry(parse_geometry(geometry)?)
            .build(),
    )
}

/// Maps a `types` array onto the known vocabulary, dropping entries the
/// vocabulary does not list.
fn parse_address_component_types(
    value: &Value,
    field: &'static str,
) -> Result<Vec<AddressComponentType>, GeocodeError> {
    let mut types = Vec::new();
    for entry in as_array(value, field)? {
        let tag = as_str(entry, field)?;
        match tag.to_uppercase().parse() {
            Ok(address_component_type) => types.push(address_component_type),
            Err(_) => warn!("unknown address component type [{tag}] has been found, ignoring it"),
        }
    }

    Ok(types)
}

fn parse_address_components(value: &Value) -> Result<Vec<AddressComponent>, GeocodeError> {
    let mut components = Vec::new();
    for component in as_array(value, FIELD_ADDRESS_COMPONENTS)? {
        let long_name = require(component, FIELD_LONG_NAME)?;
        let short_name = require(component, FIELD_SHORT_NAME)?;
        let types = parse_address_component_types(require(component, FIELD_TYPES)?, FIELD_TYPES)?;

        // A component without a single recognized type cannot satisfy the
        // non-empty type invariant; the whole component is dropped rather
        // than failing the surrounding result.
        let Some((first, rest)) = types.split_first() else {
            warn!(
                "address component [{}] carries no recognized types, dropping it",
                as_str(long_name, FIELD_LONG_NAME)?
            );
            continue;
        };

        components.push(
            AddressComponent::builder(*first)
                .add_types(rest.iter().copied())
                .long_name(as_str(long_name, FIELD_LONG_NAME)?)
                .short_name(as_str(short_name, FIELD_SHORT_NAME)?)
                .build(),
        );
    }

    Ok(components)
}

fn parse_geometry(value: &Value) -> Result<Geometry, GeocodeError> {
    let location = parse_location(require(value, FIELD_LOCATION)?)?;
    let location_type = parse_location_type(require(value, FIELD_LOCATION_TYPE)?)?;
    let viewport = parse_area(require(value, FIELD_VIEWPORT)?)?;

    let mut builder = Geometry::builder(location)
        .location_type(location_type)
        .viewport(viewport);
    if let Some(bounds) = value.get(FIELD_BOUNDS) {
        builder = builder.bounds(parse_area(bounds)?);
    }

    Ok(builder.build())
}

fn parse_location_type(value: &Value) -> Result<LocationType, GeocodeError> {
    let location_type = as_str(value, FIELD_LOCATION_TYPE)?;

    location_type
        .to_uppercase()
        .parse()
        .map_err(|_| parse_error(format!("unrecognized location type [{location_type}]")))
}

fn parse_area(value: &Value) -> Result<GeographicArea, GeocodeError> {
    let south_west = parse_location(require(value, FIELD_SOUTHWEST)?)?;
    let north_east = parse_location(require(value, FIELD_NORTHEAST)?)?;

    Ok(GeographicArea::new(south_west, north_east))
}

fn parse_location(value: &Value) -> Result<GeographicLocation, GeocodeError> {
    let latitude = as_f64(require(value, FIELD_LAT)?, FIELD_LAT)?;
    let longitude = as_f64(require(value, FIELD_LNG)?, FIELD_LNG)?;

    GeographicLocation::from_values(latitude, longitude)
}

fn require<'a>(value: &'a Value, field: &'static str) -> Result<&'a Value, GeocodeError> {
    value.get(field).ok_or_else(|| {
        error!("mandatory field [{field}] is missing from the response");
        GeocodeError::MissingField { field }
    })
}

fn as_array<'a>(value: &'a Value, field: &'static str) -> Result<&'a Vec<Value>, GeocodeError> {
    value
        .as_array()
        .ok_or_else(|| parse_error(format!("field [{field}] is not an array")))
}

fn as_str<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, GeocodeError> {
    value
        .as_str()
        .ok_or_else(|| parse_error(format!("field [{field}] is not a string")))
}

fn as_f64(value: &Value, field: &'static str) -> Result<f64, GeocodeError> {
    value
        .as_f64()
        .ok_or_else(|| parse_error(format!("field [{field}] is not a number")))
}

fn parse_error(message: String) -> GeocodeError {
    error!("{message}");
    GeocodeError::Parse { message }
}
