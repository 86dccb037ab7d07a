//! Risk classification — maps a minimum sell price to a risk tier.
//!
//! RULE: tiers are derived from `min_sell_price` only and are never stored.
//! Boundaries are inclusive on the lower tier:
//!   price <= LOW_MAX       -> Low
//!   price <= MODERATE_MAX  -> Moderate
//!   otherwise              -> High (unbounded)

use crate::{
    error::{CatalogError, CatalogResult},
    property::Property,
};
use serde::{Deserialize, Serialize};

pub const LOW_MAX: f64 = 623_205.54;
pub const MODERATE_MAX: f64 = 3_072_416.49;

/// Upper reference point of the source price study. Not an upper bound:
/// everything above MODERATE_MAX is High.
pub const HIGH_REFERENCE: f64 = 5_058_425.08;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// All tiers in presentation order.
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Moderate, RiskTier::High];

    /// Classify a price. Negative or non-finite prices are rejected.
    pub fn classify(price: f64) -> CatalogResult<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(CatalogError::InvalidPrice { price });
        }
        let tier = if price <= LOW_MAX {
            RiskTier::Low
        } else if price <= MODERATE_MAX {
            RiskTier::Moderate
        } else {
            RiskTier::High
        };
        Ok(tier)
    }

    pub fn of(property: &Property) -> CatalogResult<Self> {
        Self::classify(property.min_sell_price)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low      => "Low Risk",
            RiskTier::Moderate => "Moderate Risk",
            RiskTier::High     => "High Risk",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low      => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High     => "high",
        }
    }
}

/// Per-tier counts for one location.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskDistribution {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
}

/// Chart-ready shape: three labels, three counts, same order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: [String; 3],
    pub data: [usize; 3],
}

impl RiskDistribution {
    /// Classify and count every property. Fails on the first invalid price.
    pub fn from_properties<'a, I>(properties: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = &'a Property>,
    {
        let mut dist = Self::default();
        for property in properties {
            dist.record(RiskTier::of(property)?);
        }
        Ok(dist)
    }

    pub fn record(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::Low      => self.low += 1,
            RiskTier::Moderate => self.moderate += 1,
            RiskTier::High     => self.high += 1,
        }
    }

    pub fn count(&self, tier: RiskTier) -> usize {
        match tier {
            RiskTier::Low      => self.low,
            RiskTier::Moderate => self.moderate,
            RiskTier::High     => self.high,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.moderate + self.high
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            labels: RiskTier::ALL.map(|t| t.label().to_string()),
            data: RiskTier::ALL.map(|t| self.count(t)),
        }
    }
}
