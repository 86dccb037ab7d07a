//! Risk tier boundaries and distribution counts.

use propscope_core::{
    engine::risk_distribution,
    error::CatalogError,
    property::Property,
    risk::{RiskDistribution, RiskTier, LOW_MAX, MODERATE_MAX},
};

#[test]
fn low_boundary_is_inclusive() {
    assert_eq!(RiskTier::classify(623_205.54).unwrap(), RiskTier::Low);
    assert_eq!(RiskTier::classify(623_205.55).unwrap(), RiskTier::Moderate);
}

#[test]
fn moderate_boundary_is_inclusive() {
    assert_eq!(RiskTier::classify(3_072_416.49).unwrap(), RiskTier::Moderate);
    assert_eq!(RiskTier::classify(3_072_416.50).unwrap(), RiskTier::High);
}

#[test]
fn zero_price_is_low() {
    assert_eq!(RiskTier::classify(0.0).unwrap(), RiskTier::Low);
}

/// Walk across both thresholds; the tier must never go down as price rises.
#[test]
fn tiers_partition_the_price_line() {
    let mut previous = RiskTier::Low;
    let mut price = 0.0;
    while price < MODERATE_MAX * 2.0 {
        let tier = RiskTier::classify(price).unwrap();
        assert!(tier >= previous, "tier dropped at price {price}");
        let expected = if price <= LOW_MAX {
            RiskTier::Low
        } else if price <= MODERATE_MAX {
            RiskTier::Moderate
        } else {
            RiskTier::High
        };
        assert_eq!(tier, expected, "wrong tier at price {price}");
        previous = tier;
        price += 10_007.13;
    }
}

#[test]
fn negative_and_non_finite_prices_are_rejected() {
    for price in [-0.01, -1_000.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = RiskTier::classify(price);
        assert!(
            matches!(result, Err(CatalogError::InvalidPrice { .. })),
            "price {price} should be rejected, got {result:?}"
        );
    }
}

#[test]
fn one_of_each_tier() {
    let records = vec![
        Property::new("a", 500_000.0, "X"),
        Property::new("b", 1_000_000.0, "X"),
        Property::new("c", 6_000_000.0, "X"),
    ];
    let subset: Vec<&Property> = records.iter().collect();
    let dist = risk_distribution(&subset).unwrap();
    assert_eq!(dist, RiskDistribution { low: 1, moderate: 1, high: 1 });
}

#[test]
fn empty_subset_has_zero_counts() {
    let dist = risk_distribution(&[]).unwrap();
    assert_eq!(dist, RiskDistribution::default());
    assert_eq!(dist.total(), 0);
}

#[test]
fn invalid_price_fails_the_distribution() {
    let records = vec![
        Property::new("a", 500_000.0, "X"),
        Property::new("b", -5.0, "X"),
    ];
    let subset: Vec<&Property> = records.iter().collect();
    assert!(risk_distribution(&subset).is_err());
}

#[test]
fn tier_labels_match_chart_labels() {
    let labels: Vec<&str> = RiskTier::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Low Risk", "Moderate Risk", "High Risk"]);
    assert_eq!(serde_json::to_string(&RiskTier::Moderate).unwrap(), "\"moderate\"");
}
