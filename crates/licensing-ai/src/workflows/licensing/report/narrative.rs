use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::super::domain::BusinessProfile;
use super::super::evaluation::MatchedRequirement;
use super::summary::render_templated;

/// Failure raised by an external narrative provider.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("narrative provider unavailable: {0}")]
    Unavailable(String),
    #[error("narrative provider returned empty content")]
    EmptyContent,
}

/// Outbound seam for text-generation backends. The match results are handed
/// over in their contract order and must not be reordered by the provider.
pub trait NarrativeProvider: Send + Sync {
    fn name(&self) -> &str;

    fn generate(
        &self,
        business: &BusinessProfile,
        matched: &[MatchedRequirement],
    ) -> Result<String, NarrativeError>;
}

/// Placeholder provider used when no text-generation backend is configured;
/// it always defers to the templated report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProvider;

impl NarrativeProvider for NoProvider {
    fn name(&self) -> &str {
        "none"
    }

    fn generate(
        &self,
        _business: &BusinessProfile,
        _matched: &[MatchedRequirement],
    ) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable(
            "no provider configured".to_string(),
        ))
    }
}

/// How the report text was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    Provider,
    Templated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub mode: ReportMode,
    pub provider: String,
}

/// Narrative compliance report handed back to API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub report: String,
    pub metadata: ReportMetadata,
    pub generated_at: DateTime<Utc>,
}

/// Builds compliance reports, preferring the configured provider and falling
/// back to the deterministic template when it fails or returns nothing.
#[derive(Debug, Clone)]
pub struct ReportBuilder<N> {
    provider: N,
}

impl<N> ReportBuilder<N>
where
    N: NarrativeProvider,
{
    pub fn new(provider: N) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn build(
        &self,
        business: &BusinessProfile,
        matched: &[MatchedRequirement],
    ) -> ComplianceReport {
        let (report, mode) = match self.provider.generate(business, matched) {
            Ok(text) if !text.trim().is_empty() => (text, ReportMode::Provider),
            Ok(_) => {
                warn!(
                    provider = self.provider.name(),
                    "provider returned empty content, using templated report"
                );
                (render_templated(business, matched), ReportMode::Templated)
            }
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    error = %err,
                    "provider failed, using templated report"
                );
                (render_templated(business, matched), ReportMode::Templated)
            }
        };

        ComplianceReport {
            report,
            metadata: ReportMetadata {
                mode,
                provider: self.provider.name().to_string(),
            },
            generated_at: Utc::now(),
        }
    }
}
