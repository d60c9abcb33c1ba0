use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::{CatalogError, CatalogRepository, RuleCatalog};
use super::domain::{BusinessProfile, BusinessSubmission};
use super::evaluation::{MatchEngine, MatchedRequirement};
use super::intake::{IntakeGuard, ValidationError};
use super::report::{ComplianceReport, NarrativeProvider, ReportBuilder};

/// Validated profile plus the matched requirements in contract order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub business: BusinessProfile,
    pub matched: Vec<MatchedRequirement>,
}

/// Service composing the intake guard, match engine, catalog source, and
/// report builder behind one facade for the router and the CLI.
pub struct LicensingService<C, N> {
    guard: IntakeGuard,
    engine: MatchEngine,
    catalog: Arc<C>,
    reports: ReportBuilder<N>,
}

impl<C, N> LicensingService<C, N>
where
    C: CatalogRepository + 'static,
    N: NarrativeProvider + 'static,
{
    pub fn new(catalog: Arc<C>, provider: N) -> Self {
        Self {
            guard: IntakeGuard,
            engine: MatchEngine::new(),
            catalog,
            reports: ReportBuilder::new(provider),
        }
    }

    /// Validate a submission and match it against the current catalog.
    pub fn match_requirements(
        &self,
        submission: BusinessSubmission,
    ) -> Result<MatchOutcome, ServiceError> {
        let profile = self.guard.profile_from_submission(submission)?;
        let catalog = self.catalog.load()?;
        let matched = self.engine.match_catalog(&profile, catalog.rules());

        info!(
            size = profile.size.label(),
            seats = profile.seats,
            features = profile.features.len(),
            matched = matched.len(),
            "matched catalog against business profile"
        );

        Ok(MatchOutcome {
            business: profile,
            matched,
        })
    }

    /// Name of the configured narrative provider, for status reporting.
    pub fn provider_name(&self) -> &str {
        self.reports.provider_name()
    }

    /// Full catalog listing for API consumers.
    pub fn requirements(&self) -> Result<RuleCatalog, ServiceError> {
        Ok(self.catalog.load()?)
    }

    /// Validate a submission and render a narrative report over previously
    /// matched requirements, preserving their order.
    pub fn report(
        &self,
        submission: BusinessSubmission,
        matched: &[MatchedRequirement],
    ) -> Result<ComplianceReport, ServiceError> {
        let profile = self.guard.profile_from_submission(submission)?;
        Ok(self.reports.build(&profile, matched))
    }

    /// Match and report in one pass, for CLI consumers that have no prior
    /// match response to hand back.
    pub fn match_and_report(
        &self,
        submission: BusinessSubmission,
    ) -> Result<(MatchOutcome, ComplianceReport), ServiceError> {
        let outcome = self.match_requirements(submission)?;
        let report = self.reports.build(&outcome.business, &outcome.matched);
        Ok((outcome, report))
    }
}

/// Error raised by the licensing service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
