//! The aggregate a geocoding provider's response parser produces.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::geocoded_address::GeocodedAddress;

/// The outcome a geocoding provider reports for a request.
///
/// The status drives caller control flow, so a parser must never guess at
/// an unrecognized status value.
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
pub enum GeocodeStatus {
    /// The request was malformed, usually a missing address or location.
    InvalidRequest,
    /// The request succeeded and at least one result was returned.
    Ok,
    /// The request quota has been exhausted.
    OverQueryLimit,
    /// The provider refused to serve the request.
    RequestDenied,
    /// The request succeeded but matched no known address.
    ZeroResults,
}

/// The parsed result of one geocoding request: the provider's status and
/// the geocoded addresses, in the order the provider returned them, along
/// with the query string that produced them.
///
/// Two responses are equal when their status and addresses agree; the
/// query string is carried for the caller's benefit and does not take part
/// in equality or hashing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResponse {
    query_string: String,
    status: GeocodeStatus,
    addresses: Vec<GeocodedAddress>,
}

impl GeocodeResponse {
    /// Creates a builder for a response to the given query.
    #[must_use]
    pub fn builder(query_string: impl Into<String>) -> GeocodeResponseBuilder {
        GeocodeResponseBuilder {
            query_string: query_string.into(),
            status: GeocodeStatus::InvalidRequest,
            addresses: Vec::new(),
        }
    }

    /// Returns the address or "lat, lng" text this response answers.
    #[must_use]
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// Returns the provider-reported outcome of the request.
    #[must_use]
    pub const fn status(&self) -> GeocodeStatus {
        self.status
    }

    /// Returns the geocoded addresses in provider order.
    #[must_use]
    pub fn addresses(&self) -> &[GeocodedAddress] {
        &self.addresses
    }
}

impl PartialEq for GeocodeResponse {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status && self.addresses == other.addresses
    }
}

impl Eq for GeocodeResponse {}

impl Hash for GeocodeResponse {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.status.hash(state);
        self.addresses.hash(state);
    }
}

impl fmt::Display for GeocodeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addresses = self
            .addresses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("}, {");
        let addresses = if addresses.is_empty() {
            String::new()
        } else {
            format!("{{{addresses}}}")
        };

        write!(
            f,
            "queryString: \"{}\", geocodeStatus: \"{}\", geocodedAddresses: [{addresses}]",
            self.query_string, self.status
        )
    }
}

/// Staged builder for [`GeocodeResponse`].
#[derive(Debug, Clone)]
pub struct GeocodeResponseBuilder {
    query_string: String,
    status: GeocodeStatus,
    addresses: Vec<GeocodedAddress>,
}

impl GeocodeResponseBuilder {
    /// Sets the provider-reported status. A builder that never sets one
    /// reports [`GeocodeStatus::InvalidRequest`].
    #[must_use]
    pub fn status(mut self, status: GeocodeStatus) -> Self {
        self.status = status;
        self
    }

    /// Appends a geocoded address.
    #[must_use]
    pub fn add_address(mut self, address: GeocodedAddress) -> Self {
        self.addresses.push(address);
        self
    }

    /// Appends every given geocoded address, preserving their order.
    #[must_use]
    pub fn add_addresses(
        mut self,
        addresses: impl IntoIterator<Item = GeocodedAddress>,
    ) -> Self {
        self.addresses.extend(addresses);
        self
    }

    /// Builds the response.
    #[must_use]
    pub fn build(self) -> GeocodeResponse {
        GeocodeResponse {
            query_string: self.query_string,
            status: self.status,
            addresses: self.addresses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_invalid_request() {
        let response = GeocodeResponse::builder("some query").build();

        assert_eq!(response.status(), GeocodeStatus::InvalidRequest);
        assert!(response.addresses().is_empty());
        assert_eq!(response.query_string(), "some query");
    }

    #[test]
    fn preserves_address_order() {
        let response = GeocodeResponse::builder("query")
            .status(GeocodeStatus::Ok)
            .add_address(GeocodedAddress::builder("first").build())
            .add_address(GeocodedAddress::builder("second").build())
            .build();

        let formatted: Vec<_> = response
            .addresses()
            .iter()
            .map(GeocodedAddress::formatted_address)
            .collect();
        assert_eq!(formatted, ["first", "second"]);
    }

    #[test]
    fn query_string_does_not_take_part_in_equality() {
        let first = GeocodeResponse::builder("first query")
            .status(GeocodeStatus::ZeroResults)
            .build();
        let second = GeocodeResponse::builder("second query")
            .status(GeocodeStatus::ZeroResults)
            .build();

        assert_eq!(first, second);
    }

    #[test]
    fn status_and_addresses_take_part_in_equality() {
        let ok = GeocodeResponse::builder("query")
            .status(GeocodeStatus::Ok)
            .build();
        let denied = GeocodeResponse::builder("query")
            .status(GeocodeStatus::RequestDenied)
            .build();

        assert_ne!(ok, denied);
    }

    #[test]
    fn parses_provider_status_values() {
        assert_eq!(
            "OVER_QUERY_LIMIT".parse::<GeocodeStatus>().unwrap(),
            GeocodeStatus::OverQueryLimit
        );
        assert_eq!("OK".parse::<GeocodeStatus>().unwrap(), GeocodeStatus::Ok);
        assert!("PARTIALLY_OK".parse::<GeocodeStatus>().is_err());
    }
}
