//! Business licensing compliance toolkit.
//!
//! The library hosts the rule-matching engine (profile intake, condition
//! evaluation, catalog sourcing, narrative reporting) plus the ambient
//! configuration, telemetry, and error plumbing shared by its services.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
