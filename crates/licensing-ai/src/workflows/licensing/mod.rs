//! Business licensing requirement matching: intake validation, condition
//! evaluation, catalog sourcing, and narrative reporting.

pub mod catalog;
pub mod domain;
pub(crate) mod evaluation;
pub mod intake;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CatalogRepository, FileCatalog, InMemoryCatalog, RuleCatalog};
pub use domain::{
    BusinessProfile, BusinessSize, BusinessSubmission, Rule, RuleConditions, RulePriority,
    FEATURE_VOCABULARY,
};
pub use evaluation::{
    ConditionKind, ConditionOutcome, MatchEngine, MatchReason, MatchedRequirement,
};
pub use intake::{IntakeGuard, ValidationError};
pub use report::{
    ComplianceReport, NarrativeError, NarrativeProvider, NoProvider, ReportBuilder,
    ReportMetadata, ReportMode,
};
pub use router::{licensing_router, ReportRequest};
pub use service::{LicensingService, MatchOutcome, ServiceError};
