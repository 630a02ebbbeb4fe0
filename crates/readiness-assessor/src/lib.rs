//! Scoring and recommendation engine for technology maturity assessments.
//!
//! The [`assessment`] module holds the pure engine (catalog, gate calculator, pathway scorer,
//! result composer) plus the thin service and HTTP glue that wraps it.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
