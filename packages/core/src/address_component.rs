//! Labeled fragments of a formatted address.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The semantic tags a geocoding provider attaches to addresses and
/// address components.
///
/// The canonical `Ord` ordering of the variants is the display ordering
/// used wherever component types are listed.
///
/// The provider's vocabulary grows over time; parsers are expected to drop
/// tags that are not listed here rather than fail.
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
pub enum AddressComponentType {
    /// First-order civil entity below country level (e.g. a US state).
    #[serde(rename = "ADMINISTRATIVE_AREA_LEVEL_1")]
    #[strum(serialize = "ADMINISTRATIVE_AREA_LEVEL_1")]
    AdministrativeAreaLevel1,
    /// Second-order civil entity below country level (e.g. a US county).
    #[serde(rename = "ADMINISTRATIVE_AREA_LEVEL_2")]
    #[strum(serialize = "ADMINISTRATIVE_AREA_LEVEL_2")]
    AdministrativeAreaLevel2,
    /// Third-order civil entity below country level.
    #[serde(rename = "ADMINISTRATIVE_AREA_LEVEL_3")]
    #[strum(serialize = "ADMINISTRATIVE_AREA_LEVEL_3")]
    AdministrativeAreaLevel3,
    Airport,
    BusStation,
    Church,
    CityHall,
    /// Commonly used alternative name for the entity.
    ColloquialArea,
    Country,
    Courthouse,
    /// A place that has not yet been categorized more precisely.
    Establishment,
    Floor,
    Health,
    Hospital,
    /// A major intersection, usually of two major roads.
    Intersection,
    Library,
    /// An incorporated city or town.
    Locality,
    LocalGovernmentOffice,
    Museum,
    /// A prominent natural feature.
    NaturalFeature,
    Neighborhood,
    Park,
    PlaceOfWorship,
    /// A named point of interest.
    PointOfInterest,
    /// A political entity; usually accompanies another tag.
    Political,
    PostBox,
    PostalCode,
    PostalCodePrefix,
    PostalTown,
    PostOffice,
    /// A named location, usually a building or collection of buildings.
    Premise,
    Room,
    /// A named route such as "US 101".
    Route,
    School,
    /// A precise street address.
    StreetAddress,
    StreetNumber,
    /// A first-order civil entity below a locality.
    Sublocality,
    /// A first-order entity below a named premise, such as an apartment.
    Subpremise,
    SubwayStation,
    TrainStation,
    TransitStation,
    University,
}

/// One labeled fragment of a formatted address, such as the country or the
/// postal code, with a long and a short display name.
///
/// Every component carries at least one [`AddressComponentType`]; the
/// builder requires the first type at construction time, which makes the
/// non-empty invariant structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponent {
    types: BTreeSet<AddressComponentType>,
    long_name: String,
    short_name: String,
}

impl AddressComponent {
    /// Creates a builder for a component carrying the given type.
    #[must_use]
    pub fn builder(address_component_type: AddressComponentType) -> AddressComponentBuilder {
        AddressComponentBuilder {
            types: BTreeSet::from([address_component_type]),
            long_name: String::new(),
            short_name: String::new(),
        }
    }

    /// Returns the semantic types of this component in canonical order.
    pub fn types(&self) -> impl Iterator<Item = AddressComponentType> + '_ {
        self.types.iter().copied()
    }

    /// Checks whether this component carries the given type.
    #[must_use]
    pub fn has_type(&self, address_component_type: AddressComponentType) -> bool {
        self.types.contains(&address_component_type)
    }

    /// Returns the full display name of this component.
    #[must_use]
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Returns the abbreviated display name of this component.
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }
}

impl fmt::Display for AddressComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types = self
            .types
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\", \"");

        write!(
            f,
            "addressComponentTypes: [\"{types}\"], longName: \"{}\", shortName: \"{}\"",
            self.long_name, self.short_name
        )
    }
}

/// Staged builder for [`AddressComponent`].
#[derive(Debug, Clone)]
pub struct AddressComponentBuilder {
    types: BTreeSet<AddressComponentType>,
    long_name: String,
    short_name: String,
}

impl AddressComponentBuilder {
    /// Adds a further semantic type. Duplicates collapse into one.
    #[must_use]
    pub fn add_type(mut self, address_component_type: AddressComponentType) -> Self {
        self.types.insert(address_component_type);
        self
    }

    /// Adds every given semantic type.
    #[must_use]
    pub fn add_types(
        mut self,
        address_component_types: impl IntoIterator<Item = AddressComponentType>,
    ) -> Self {
        self.types.extend(address_component_types);
        self
    }

    /// Sets the full display name.
    #[must_use]
    pub fn long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = long_name.into();
        self
    }

    /// Sets the abbreviated display name.
    #[must_use]
    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Builds the component.
    #[must_use]
    pub fn build(self) -> AddressComponent {
        AddressComponent {
            types: self.types,
            long_name: self.long_name,
            short_name: self.short_name,
        }
    }
}
