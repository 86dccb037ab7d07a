//! Property query engine — location views over an in-memory catalog.
//!
//! Every operation here is pure: records are borrowed, never mutated, and
//! the same inputs always produce the same output. Pipeline per query:
//!   1. select_location   — exact, case-sensitive match on city_municipality
//!   2. risk_distribution — counts per tier over the whole location
//!   3. filter_and_sort   — status filter, type filter, stable directed sort

use crate::{
    error::CatalogResult,
    property::Property,
    query::QuerySpec,
    risk::{RiskDistribution, RiskTier},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Records whose `city_municipality` equals `location`. No match is an
/// empty subset, not an error.
pub fn select_location<'a>(records: &'a [Property], location: &str) -> Vec<&'a Property> {
    records
        .iter()
        .filter(|p| p.city_municipality == location)
        .collect()
}

pub fn risk_distribution(subset: &[&Property]) -> CatalogResult<RiskDistribution> {
    RiskDistribution::from_properties(subset.iter().copied())
}

/// Apply the QuerySpec's filters then its sort. Returns a new sequence; the
/// input slice is left untouched. `slice::sort_by` is stable, so ties keep
/// their input order in both directions.
pub fn filter_and_sort<'a>(subset: &[&'a Property], spec: &QuerySpec) -> Vec<&'a Property> {
    let mut rows: Vec<&'a Property> = subset
        .iter()
        .copied()
        .filter(|p| spec.accepts(p))
        .collect();
    rows.sort_by(|a, b| spec.compare(a, b));
    rows
}

/// One table row: the record plus its derived tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyRow {
    pub risk_tier: RiskTier,
    #[serde(flatten)]
    pub property: Property,
}

/// Everything a results page needs for one QuerySpec.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationReport {
    pub spec: QuerySpec,
    /// Size of the location before filtering.
    pub location_total: usize,
    /// Tier counts over the whole location, independent of the filters.
    pub distribution: RiskDistribution,
    pub rows: Vec<PropertyRow>,
}

/// Owns the full catalog for one session.
pub struct PropertyQueryEngine {
    properties: Vec<Property>,
}

impl PropertyQueryEngine {
    pub fn new(properties: Vec<Property>) -> Self {
        log::info!("query: engine holds {} properties", properties.len());
        Self { properties }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn select_location(&self, location: &str) -> Vec<&Property> {
        select_location(&self.properties, location)
    }

    pub fn risk_distribution(&self, location: &str) -> CatalogResult<RiskDistribution> {
        risk_distribution(&self.select_location(location))
    }

    pub fn filter_and_sort(&self, spec: &QuerySpec) -> Vec<&Property> {
        filter_and_sort(&self.select_location(&spec.location), spec)
    }

    /// Location picker: distinct locations, sorted.
    pub fn locations(&self) -> Vec<String> {
        distinct(self.properties.iter().map(|p| p.city_municipality.as_str()))
    }

    /// Property type options: distinct types across the whole catalog, sorted.
    pub fn property_types(&self) -> Vec<String> {
        distinct(self.properties.iter().map(|p| p.prop_group_type.as_str()))
    }

    /// Status options seen within one location, sorted.
    pub fn statuses(&self, location: &str) -> Vec<String> {
        distinct(self.select_location(location).into_iter().map(|p| p.status.as_str()))
    }

    /// Run the full pipeline for one spec.
    pub fn query(&self, spec: &QuerySpec) -> CatalogResult<LocationReport> {
        let subset = self.select_location(&spec.location);
        let distribution = risk_distribution(&subset)?;
        let rows = filter_and_sort(&subset, spec)
            .into_iter()
            .map(|p| {
                Ok(PropertyRow {
                    risk_tier: RiskTier::of(p)?,
                    property: p.clone(),
                })
            })
            .collect::<CatalogResult<Vec<_>>>()?;

        log::debug!(
            "query: location={} status={:?} type={:?} sort={} {} -> {}/{} rows",
            spec.location,
            spec.status_filter,
            spec.property_type_filter,
            spec.sort_field,
            spec.sort_order,
            rows.len(),
            subset.len()
        );

        Ok(LocationReport {
            spec: spec.clone(),
            location_total: subset.len(),
            distribution,
            rows,
        })
    }
}

fn distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
