//! Deterministic synthetic catalogs.
//!
//! Used by the runner's demo mode and by tests that check invariants over
//! many records. Same seed = same catalog, ids included.

use crate::{property::Property, rng::CatalogRng};
use chrono::{Days, NaiveDate};

/// Price floor of the synthetic market, in base currency units.
const PRICE_X_MIN: f64 = 180_000.0;
const PRICE_ALPHA: f64 = 0.9;
const PRICE_CAP: f64 = 60_000_000.0;

/// Share of records generated as vacant lots (no floor area).
const VACANT_LOT_RATE: f64 = 0.15;

pub struct CatalogGenerator {
    rng: CatalogRng,
    reference_date: Option<NaiveDate>,
}

impl CatalogGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: CatalogRng::new(seed),
            reference_date: NaiveDate::from_ymd_opt(2025, 1, 31),
        }
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn generate(&mut self, count: usize) -> Vec<Property> {
        (0..count).map(|_| self.next_property()).collect()
    }

    fn next_property(&mut self) -> Property {
        let id = uuid::Builder::from_random_bytes(self.rng.next_bytes())
            .into_uuid()
            .to_string();
        let price = round_cents(self.rng.pareto(PRICE_X_MIN, PRICE_ALPHA).min(PRICE_CAP));
        let location = *self.rng.pick(Self::locations());
        let prop_type = *self.rng.pick(Self::property_types());
        let status = *self.rng.pick(Self::statuses());

        let lot_area = (40.0 + self.rng.next_f64() * 960.0).round();
        let mut property = Property::new(id, price, location)
            .with_type(prop_type)
            .with_status(status)
            .with_required_gross(round_cents(price * (0.10 + self.rng.next_f64() * 0.15)));

        if self.rng.chance(VACANT_LOT_RATE) {
            property.lot_area = Some(lot_area);
        } else {
            let floor_area = (lot_area * (0.3 + self.rng.next_f64() * 0.9)).round();
            property = property.with_areas(lot_area, floor_area);
        }

        let appr_days_ago = self.rng.next_u64_below(720) as u32;
        let inspection_days_ago = appr_days_ago + self.rng.next_u64_below(90) as u32;
        if let Some(date) = self.days_before_reference(appr_days_ago) {
            property = property.with_appraisal(date, appr_days_ago);
        }
        if let Some(date) = self.days_before_reference(inspection_days_ago) {
            property = property.with_inspection(date, inspection_days_ago);
        }
        property
    }

    fn days_before_reference(&self, days: u32) -> Option<NaiveDate> {
        self.reference_date?.checked_sub_days(Days::new(days as u64))
    }

    fn locations() -> &'static [&'static str] {
        &[
            "Quezon City", "Makati City", "Pasig City", "Taguig City", "Cebu City",
            "Davao City", "Antipolo City", "Bacoor", "Imus", "Calamba",
        ]
    }

    fn property_types() -> &'static [&'static str] {
        &["Residential", "Commercial", "Condominium", "Agricultural", "Industrial"]
    }

    fn statuses() -> &'static [&'static str] {
        &["Occupied", "Unoccupied"]
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
