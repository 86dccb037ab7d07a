//! Property record — the immutable input to every catalog view.
//!
//! Wire records arrive as loosely-typed JSON objects. `WireProperty` accepts
//! whatever shape the file has; `Property` is the validated, fixed-schema
//! form. Conversion rejects records missing `id`, `min_sell_price` or
//! `city_municipality`, and any negative or non-finite number.

use crate::types::{Amount, Location, PropertyId, SquareMeters};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "WireProperty")]
pub struct Property {
    pub id: PropertyId,
    pub min_sell_price: Amount,
    pub lot_area: Option<SquareMeters>,
    pub floor_area: Option<SquareMeters>,
    pub required_gross: Option<Amount>,
    pub prop_group_type: String,
    pub status: String,
    pub city_municipality: Location,
    pub appr_date: Option<NaiveDate>,
    pub inspection_date: Option<NaiveDate>,
    pub appr_days_ago: Option<u32>,
    pub inspection_days_ago: Option<u32>,
}

impl Property {
    /// A record with only the required fields set.
    pub fn new(
        id: impl Into<PropertyId>,
        min_sell_price: Amount,
        city_municipality: impl Into<Location>,
    ) -> Self {
        Self {
            id: id.into(),
            min_sell_price,
            lot_area: None,
            floor_area: None,
            required_gross: None,
            prop_group_type: String::new(),
            status: String::new(),
            city_municipality: city_municipality.into(),
            appr_date: None,
            inspection_date: None,
            appr_days_ago: None,
            inspection_days_ago: None,
        }
    }

    pub fn with_areas(mut self, lot_area: SquareMeters, floor_area: SquareMeters) -> Self {
        self.lot_area = Some(lot_area);
        self.floor_area = Some(floor_area);
        self
    }

    pub fn with_required_gross(mut self, amount: Amount) -> Self {
        self.required_gross = Some(amount);
        self
    }

    pub fn with_type(mut self, prop_group_type: impl Into<String>) -> Self {
        self.prop_group_type = prop_group_type.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_appraisal(mut self, date: NaiveDate, days_ago: u32) -> Self {
        self.appr_date = Some(date);
        self.appr_days_ago = Some(days_ago);
        self
    }

    pub fn with_inspection(mut self, date: NaiveDate, days_ago: u32) -> Self {
        self.inspection_date = Some(date);
        self.inspection_days_ago = Some(days_ago);
        self
    }
}

/// Ids are opaque strings, but some exports write them as bare numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(serde_json::Number),
}

/// The property as it appears in the source JSON. Every field is optional
/// here; `Property::try_from` decides what is acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireProperty {
    #[serde(default)]
    pub id: Option<WireId>,
    #[serde(default)]
    pub min_sell_price: Option<f64>,
    #[serde(default)]
    pub lot_area: Option<f64>,
    #[serde(default)]
    pub floor_area: Option<f64>,
    #[serde(default)]
    pub required_gross: Option<f64>,
    #[serde(default)]
    pub prop_group_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub city_municipality: Option<String>,
    #[serde(default)]
    pub appr_date: Option<NaiveDate>,
    #[serde(default)]
    pub inspection_date: Option<NaiveDate>,
    #[serde(default)]
    pub appr_days_ago: Option<u32>,
    #[serde(default)]
    pub inspection_days_ago: Option<u32>,
}

fn check_amount(field: &str, value: Option<f64>) -> Result<Option<f64>, String> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => {
            Err(format!("{field} must be finite and non-negative, got {v}"))
        }
        other => Ok(other),
    }
}

impl TryFrom<WireProperty> for Property {
    type Error = String;

    fn try_from(wire: WireProperty) -> Result<Self, Self::Error> {
        let id = match wire.id {
            Some(WireId::Text(s)) if !s.is_empty() => s,
            Some(WireId::Number(n)) => n.to_string(),
            _ => return Err("missing id".into()),
        };
        let min_sell_price = check_amount("min_sell_price", wire.min_sell_price)?
            .ok_or_else(|| format!("property {id}: missing min_sell_price"))?;
        let city_municipality = wire
            .city_municipality
            .ok_or_else(|| format!("property {id}: missing city_municipality"))?;

        Ok(Self {
            lot_area: check_amount("lot_area", wire.lot_area)?,
            floor_area: check_amount("floor_area", wire.floor_area)?,
            required_gross: check_amount("required_gross", wire.required_gross)?,
            prop_group_type: wire.prop_group_type.unwrap_or_default(),
            status: wire.status.unwrap_or_default(),
            appr_date: wire.appr_date,
            inspection_date: wire.inspection_date,
            appr_days_ago: wire.appr_days_ago,
            inspection_days_ago: wire.inspection_days_ago,
            id,
            min_sell_price,
            city_municipality,
        })
    }
}
