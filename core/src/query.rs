//! QuerySpec — the filters and sort directive applied to one location.
//!
//! A QuerySpec is built fresh for every interaction and never mutated in
//! place. Unknown sort fields and orders are rejected while the QuerySpec is
//! being built (FromStr / deserialization), never at query time.

use crate::{
    error::{CatalogError, CatalogResult},
    property::Property,
    types::Location,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sentinel accepted by both filters to mean "keep everything".
pub const ALL: &str = "all";

/// Exact-match filter on a free-text field.
///
/// The literal value "all" always means no filtering, so a record whose
/// field is literally "all" cannot be singled out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldFilter {
    #[default]
    All,
    Exact(String),
}

impl FieldFilter {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Exact(expected) => expected == value,
        }
    }
}

impl From<String> for FieldFilter {
    fn from(value: String) -> Self {
        if value == ALL {
            FieldFilter::All
        } else {
            FieldFilter::Exact(value)
        }
    }
}

impl From<&str> for FieldFilter {
    fn from(value: &str) -> Self {
        FieldFilter::from(value.to_string())
    }
}

impl From<FieldFilter> for String {
    fn from(filter: FieldFilter) -> Self {
        match filter {
            FieldFilter::All => ALL.to_string(),
            FieldFilter::Exact(value) => value,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    #[serde(rename = "price", alias = "min_sell_price", alias = "minSellPrice")]
    Price,
    #[serde(rename = "lot_area", alias = "lotArea")]
    LotArea,
    #[serde(rename = "floor_area", alias = "floorArea")]
    FloorArea,
    #[serde(rename = "required_gross", alias = "requiredGross")]
    RequiredGross,
    #[serde(rename = "property_type", alias = "propertyType", alias = "prop_group_type")]
    PropertyType,
    #[serde(rename = "status")]
    Status,
}

/// The value a record is ordered by.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Price         => "price",
            SortField::LotArea       => "lot_area",
            SortField::FloorArea     => "floor_area",
            SortField::RequiredGross => "required_gross",
            SortField::PropertyType  => "property_type",
            SortField::Status        => "status",
        }
    }

    /// Extract the sort key. Missing numbers read as 0, text is lower-cased
    /// so that ordering is case-insensitive.
    pub fn key(&self, property: &Property) -> SortKey {
        match self {
            SortField::Price         => SortKey::Number(property.min_sell_price),
            SortField::LotArea       => SortKey::Number(property.lot_area.unwrap_or(0.0)),
            SortField::FloorArea     => SortKey::Number(property.floor_area.unwrap_or(0.0)),
            SortField::RequiredGross => SortKey::Number(property.required_gross.unwrap_or(0.0)),
            SortField::PropertyType  => SortKey::Text(property.prop_group_type.to_lowercase()),
            SortField::Status        => SortKey::Text(property.status.to_lowercase()),
        }
    }
}

impl SortKey {
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            // A single field never yields mixed keys.
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> CatalogResult<Self> {
        match s {
            "price" | "min_sell_price" | "minSellPrice" => Ok(SortField::Price),
            "lot_area" | "lotArea" => Ok(SortField::LotArea),
            "floor_area" | "floorArea" => Ok(SortField::FloorArea),
            "required_gross" | "requiredGross" => Ok(SortField::RequiredGross),
            "property_type" | "propertyType" | "prop_group_type" => Ok(SortField::PropertyType),
            "status" => Ok(SortField::Status),
            other => Err(CatalogError::UnknownSortField { value: other.to_string() }),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Asc,
    #[serde(rename = "desc", alias = "descending")]
    Desc,
}

impl SortOrder {
    /// Apply the direction to an ascending comparison. Equal stays equal,
    /// so stability holds in both directions.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc  => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc  => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> CatalogResult<Self> {
        match s {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(CatalogError::UnknownSortOrder { value: other.to_string() }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuerySpec {
    pub location: Location,
    #[serde(default)]
    pub status_filter: FieldFilter,
    #[serde(default)]
    pub property_type_filter: FieldFilter,
    #[serde(default)]
    pub sort_field: SortField,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl QuerySpec {
    /// Everything in the location, cheapest first.
    pub fn for_location(location: impl Into<Location>) -> Self {
        Self {
            location: location.into(),
            status_filter: FieldFilter::All,
            property_type_filter: FieldFilter::All,
            sort_field: SortField::Price,
            sort_order: SortOrder::Asc,
        }
    }

    /// Build a spec from raw UI strings, rejecting unknown sort values.
    pub fn parse(
        location: &str,
        status: &str,
        property_type: &str,
        sort_field: &str,
        sort_order: &str,
    ) -> CatalogResult<Self> {
        Ok(Self::for_location(location)
            .with_status(status)
            .with_property_type(property_type)
            .sorted_by(sort_field.parse()?, sort_order.parse()?))
    }

    pub fn with_status(mut self, status: impl Into<FieldFilter>) -> Self {
        self.status_filter = status.into();
        self
    }

    pub fn with_property_type(mut self, property_type: impl Into<FieldFilter>) -> Self {
        self.property_type_filter = property_type.into();
        self
    }

    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_field = field;
        self.sort_order = order;
        self
    }

    /// True if the record survives both filters. Location is not checked here.
    pub fn accepts(&self, property: &Property) -> bool {
        self.status_filter.matches(&property.status)
            && self.property_type_filter.matches(&property.prop_group_type)
    }

    /// Directed comparison of two records under this spec's sort.
    pub fn compare(&self, a: &Property, b: &Property) -> Ordering {
        let ordering = self.sort_field.key(a).compare(&self.sort_field.key(b));
        self.sort_order.apply(ordering)
    }
}
