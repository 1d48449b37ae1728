//! The full result of geocoding one address or location.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::address_component::{AddressComponent, AddressComponentType};
use crate::coordinate::GeographicCoordinate;
use crate::geometry::Geometry;
use crate::location::GeographicLocation;

/// The result of geocoding a single address: the formatted address text,
/// its semantic types, the address components grouped by type, the
/// geometry of the result and a partial-match flag.
///
/// A component carrying several types is listed under every one of them;
/// components sharing a type keep their insertion order. A type appears as
/// a key only when at least one component carries it, so the per-type
/// lists are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedAddress {
    formatted_address: String,
    address_types: BTreeSet<AddressComponentType>,
    components_by_type: BTreeMap<AddressComponentType, Vec<AddressComponent>>,
    geometry: Geometry,
    partial_match: bool,
}

impl GeocodedAddress {
    /// Creates a builder for a result with the given formatted address.
    #[must_use]
    pub fn builder(formatted_address: impl Into<String>) -> GeocodedAddressBuilder {
        GeocodedAddressBuilder {
            formatted_address: formatted_address.into(),
            address_types: BTreeSet::new(),
            components_by_type: BTreeMap::new(),
            geometry: None,
            partial_match: false,
        }
    }

    /// Returns the human-readable address of this result.
    #[must_use]
    pub fn formatted_address(&self) -> &str {
        &self.formatted_address
    }

    /// Returns the semantic types of this result in canonical order.
    pub fn address_types(&self) -> impl Iterator<Item = AddressComponentType> + '_ {
        self.address_types.iter().copied()
    }

    /// Checks whether any component of this result carries the given type.
    #[must_use]
    pub fn has_address_component(&self, address_component_type: AddressComponentType) -> bool {
        self.components_by_type.contains_key(&address_component_type)
    }

    /// Returns the components carrying the given type, in the order they
    /// were added, or an empty slice when no component carries it.
    #[must_use]
    pub fn address_components_of_type(
        &self,
        address_component_type: AddressComponentType,
    ) -> &[AddressComponent] {
        self.components_by_type
            .get(&address_component_type)
            .map_or(&[], Vec::as_slice)
    }

    /// Returns every distinct component of this result, walking the types
    /// in canonical order. A component listed under several types is
    /// yielded once.
    pub fn address_components(&self) -> impl Iterator<Item = &AddressComponent> {
        let mut seen: Vec<&AddressComponent> = Vec::new();

        self.components_by_type
            .values()
            .flatten()
            .filter(move |component| {
                if seen.contains(component) {
                    false
                } else {
                    seen.push(component);
                    true
                }
            })
    }

    /// Returns the geometry of this result.
    #[must_use]
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns whether the provider could only partially match the
    /// requested address.
    #[must_use]
    pub const fn is_partial_match(&self) -> bool {
        self.partial_match
    }
}

impl fmt::Display for GeocodedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let address_types = self
            .address_types
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\", \"");
        let address_types = if address_types.is_empty() {
            String::new()
        } else {
            format!("\"{address_types}\"")
        };

        let components = self
            .address_components()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("}, {");
        let components = if components.is_empty() {
            String::new()
        } else {
            format!("{{{components}}}")
        };

        write!(
            f,
            "formattedAddress: \"{}\", addressTypes: [{address_types}], \
             addressComponents: [{components}], geometry: {{{}}}, partialMatch: \"{}\"",
            self.formatted_address, self.geometry, self.partial_match
        )
    }
}

/// Staged builder for [`GeocodedAddress`].
#[derive(Debug, Clone)]
pub struct GeocodedAddressBuilder {
    formatted_address: String,
    address_types: BTreeSet<AddressComponentType>,
    components_by_type: BTreeMap<AddressComponentType, Vec<AddressComponent>>,
    geometry: Option<Geometry>,
    partial_match: bool,
}

impl GeocodedAddressBuilder {
    /// Adds a semantic type to the result. Duplicates collapse into one.
    #[must_use]
    pub fn add_address_type(mut self, address_type: AddressComponentType) -> Self {
        self.address_types.insert(address_type);
        self
    }

    /// Adds every given semantic type.
    #[must_use]
    pub fn add_address_types(
        mut self,
        address_types: impl IntoIterator<Item = AddressComponentType>,
    ) -> Self {
        self.address_types.extend(address_types);
        self
    }

    /// Adds an address component, registering it under every type it
    /// carries.
    #[must_use]
    pub fn add_address_component(mut self, address_component: AddressComponent) -> Self {
        for address_component_type in address_component.types() {
            self.components_by_type
                .entry(address_component_type)
                .or_default()
                .push(address_component.clone());
        }
        self
    }

    /// Adds every given address component.
    #[must_use]
    pub fn add_address_components(
        self,
        address_components: impl IntoIterator<Item = AddressComponent>,
    ) -> Self {
        address_components
            .into_iter()
            .fold(self, Self::add_address_component)
    }

    /// Sets the geometry of the result.
    #[must_use]
    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Marks the result as a partial match.
    #[must_use]
    pub fn partial_match(mut self) -> Self {
        self.partial_match = true;
        self
    }

    /// Builds the geocoded address. A result built without a geometry is
    /// placed at the Equator/Prime Meridian intersection with default
    /// geometry settings.
    #[must_use]
    pub fn build(self) -> GeocodedAddress {
        let geometry = self.geometry.unwrap_or_else(|| {
            Geometry::builder(GeographicLocation::from_coordinates(
                GeographicCoordinate::EQUATOR,
                GeographicCoordinate::PRIME_MERIDIAN,
            ))
            .build()
        });

        GeocodedAddress {
            formatted_address: self.formatted_address,
            address_types: self.address_types,
            components_by_type: self.components_by_type,
            geometry,
            partial_match: self.partial_match,
        }
    }
}
