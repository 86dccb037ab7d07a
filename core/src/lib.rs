//! propscope-core: risk classification and location queries over a
//! real-estate property catalog.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod property;
pub mod query;
pub mod risk;
pub mod rng;
pub mod types;
