//! Shared primitive types used across the catalog.

/// A stable, unique identifier for a property record.
pub type PropertyId = String;

/// A location label (`city_municipality`). The partition key for every view.
pub type Location = String;

/// Currency amount in base units (not cents).
pub type Amount = f64;

/// Area in square meters.
pub type SquareMeters = f64;
