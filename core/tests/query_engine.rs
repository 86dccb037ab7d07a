//! Location selection, filtering and sorting.

use propscope_core::{
    engine::{filter_and_sort, select_location, PropertyQueryEngine},
    error::CatalogError,
    property::Property,
    query::{FieldFilter, QuerySpec, SortField, SortOrder},
    risk::{RiskDistribution, RiskTier},
};

fn sample() -> Vec<Property> {
    vec![
        Property::new("q1", 900_000.0, "Quezon City")
            .with_type("Residential")
            .with_status("Occupied")
            .with_areas(120.0, 80.0),
        Property::new("q2", 400_000.0, "Quezon City")
            .with_type("Commercial")
            .with_status("Unoccupied")
            .with_areas(300.0, 150.0),
        Property::new("q3", 4_000_000.0, "Quezon City")
            .with_type("residential")
            .with_status("Occupied")
            .with_areas(120.0, 200.0),
        Property::new("m1", 7_500_000.0, "Makati City")
            .with_type("Condominium")
            .with_status("Occupied"),
        Property::new("q4", 900_000.0, "quezon city")
            .with_type("Residential")
            .with_status("Occupied"),
    ]
}

fn ids(rows: &[&Property]) -> Vec<String> {
    rows.iter().map(|p| p.id.clone()).collect()
}

#[test]
fn location_match_is_exact_and_case_sensitive() {
    let records = sample();
    let subset = select_location(&records, "Quezon City");
    assert_eq!(ids(&subset), ["q1", "q2", "q3"]);
    assert_eq!(ids(&select_location(&records, "quezon city")), ["q4"]);
}

#[test]
fn occupied_sorted_by_price_descending() {
    let records = sample();
    let subset = select_location(&records, "Quezon City");
    let spec = QuerySpec::for_location("Quezon City")
        .with_status("Occupied")
        .sorted_by(SortField::Price, SortOrder::Desc);

    let rows = filter_and_sort(&subset, &spec);
    assert_eq!(ids(&rows), ["q3", "q1"]);
}

#[test]
fn property_type_filter_is_exact() {
    let records = sample();
    let subset = select_location(&records, "Quezon City");
    let spec = QuerySpec::for_location("Quezon City").with_property_type("Residential");
    // "residential" (lower case) is a different type for filtering.
    assert_eq!(ids(&filter_and_sort(&subset, &spec)), ["q1"]);
}

#[test]
fn text_sort_ignores_case_and_is_stable() {
    let records = sample();
    let subset = select_location(&records, "Quezon City");
    let asc = QuerySpec::for_location("Quezon City")
        .sorted_by(SortField::PropertyType, SortOrder::Asc);
    let desc = asc.clone().sorted_by(SortField::PropertyType, SortOrder::Desc);

    // q1 and q3 tie on "residential": input order is kept both ways.
    assert_eq!(ids(&filter_and_sort(&subset, &asc)), ["q2", "q1", "q3"]);
    assert_eq!(ids(&filter_and_sort(&subset, &desc)), ["q1", "q3", "q2"]);
}

#[test]
fn numeric_ties_keep_input_order() {
    let records = sample();
    let subset = select_location(&records, "Quezon City");
    let spec = QuerySpec::for_location("Quezon City")
        .sorted_by(SortField::LotArea, SortOrder::Desc);
    assert_eq!(ids(&filter_and_sort(&subset, &spec)), ["q2", "q1", "q3"]);
}

#[test]
fn missing_area_sorts_as_zero() {
    let records = vec![
        Property::new("a", 1.0, "X").with_areas(50.0, 40.0),
        Property::new("b", 1.0, "X"),
        Property::new("c", 1.0, "X").with_areas(10.0, 5.0),
    ];
    let subset = select_location(&records, "X");
    let spec = QuerySpec::for_location("X").sorted_by(SortField::FloorArea, SortOrder::Asc);
    assert_eq!(ids(&filter_and_sort(&subset, &spec)), ["b", "c", "a"]);
}

#[test]
fn filter_and_sort_leaves_input_untouched() {
    let records = sample();
    let subset = select_location(&records, "Quezon City");
    let before = ids(&subset);
    let spec = QuerySpec::for_location("Quezon City").sorted_by(SortField::Price, SortOrder::Asc);
    let _ = filter_and_sort(&subset, &spec);
    assert_eq!(ids(&subset), before);
}

#[test]
fn unknown_location_is_empty_not_an_error() {
    let engine = PropertyQueryEngine::new(sample());
    let spec = QuerySpec::for_location("Atlantis");

    assert!(engine.select_location("Atlantis").is_empty());
    assert!(engine.filter_and_sort(&spec).is_empty());
    assert_eq!(engine.risk_distribution("Atlantis").unwrap(), RiskDistribution::default());

    let report = engine.query(&spec).unwrap();
    assert_eq!(report.location_total, 0);
    assert!(report.rows.is_empty());
}

#[test]
fn unknown_filter_value_is_empty_not_an_error() {
    let engine = PropertyQueryEngine::new(sample());
    let spec = QuerySpec::for_location("Quezon City").with_status("Demolished");
    assert!(engine.filter_and_sort(&spec).is_empty());
}

#[test]
fn report_distribution_ignores_filters() {
    let engine = PropertyQueryEngine::new(sample());
    let spec = QuerySpec::for_location("Quezon City")
        .with_status("Unoccupied")
        .sorted_by(SortField::Price, SortOrder::Asc);
    let report = engine.query(&spec).unwrap();

    assert_eq!(report.location_total, 3);
    assert_eq!(report.distribution, RiskDistribution { low: 1, moderate: 1, high: 1 });
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].property.id, "q2");
    assert_eq!(report.rows[0].risk_tier, RiskTier::Low);
}

#[test]
fn facets_are_sorted_and_distinct() {
    let engine = PropertyQueryEngine::new(sample());
    assert_eq!(engine.locations(), ["Makati City", "Quezon City", "quezon city"]);
    assert_eq!(
        engine.property_types(),
        ["Commercial", "Condominium", "Residential", "residential"]
    );
    assert_eq!(engine.statuses("Quezon City"), ["Occupied", "Unoccupied"]);
}

#[test]
fn spec_parse_rejects_unknown_sort_values() {
    let bad_field = QuerySpec::parse("X", "all", "all", "bedrooms", "asc");
    assert!(matches!(bad_field, Err(CatalogError::UnknownSortField { .. })));

    let bad_order = QuerySpec::parse("X", "all", "all", "price", "sideways");
    assert!(matches!(bad_order, Err(CatalogError::UnknownSortOrder { .. })));

    let ok = QuerySpec::parse("X", "Occupied", "all", "lotArea", "descending").unwrap();
    assert_eq!(ok.status_filter, FieldFilter::Exact("Occupied".into()));
    assert_eq!(ok.property_type_filter, FieldFilter::All);
    assert_eq!(ok.sort_field, SortField::LotArea);
    assert_eq!(ok.sort_order, SortOrder::Desc);
}

#[test]
fn spec_deserializes_from_ui_json() {
    let spec: QuerySpec = serde_json::from_str(
        r#"{ "location": "Calamba", "status_filter": "all",
             "property_type_filter": "Residential",
             "sort_field": "floorArea", "sort_order": "desc" }"#,
    )
    .unwrap();
    assert_eq!(spec.status_filter, FieldFilter::All);
    assert_eq!(spec.sort_field, SortField::FloorArea);

    let minimal: QuerySpec = serde_json::from_str(r#"{ "location": "Calamba" }"#).unwrap();
    assert_eq!(minimal, QuerySpec::for_location("Calamba"));

    let unknown = serde_json::from_str::<QuerySpec>(r#"{ "location": "Calamba", "sort_field": "age" }"#);
    assert!(unknown.is_err(), "unknown sort field must be rejected");
}
