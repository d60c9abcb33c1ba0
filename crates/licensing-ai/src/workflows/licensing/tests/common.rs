use std::collections::BTreeSet;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::licensing::catalog::InMemoryCatalog;
use crate::workflows::licensing::domain::{
    BusinessProfile, BusinessSize, BusinessSubmission, Rule, RuleConditions, RulePriority,
};
use crate::workflows::licensing::report::{NarrativeError, NarrativeProvider, NoProvider};
use crate::workflows::licensing::router::licensing_router;
use crate::workflows::licensing::service::LicensingService;

pub(super) fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn sizes(values: &[BusinessSize]) -> BTreeSet<BusinessSize> {
    values.iter().copied().collect()
}

pub(super) fn submission(
    size: BusinessSize,
    seats: u32,
    area_sqm: u32,
    staff_count: u32,
    features: &[&str],
) -> BusinessSubmission {
    BusinessSubmission {
        size,
        seats,
        area_sqm,
        staff_count,
        features: features.iter().map(|tag| tag.to_string()).collect(),
    }
}

pub(super) fn profile(
    size: BusinessSize,
    seats: u32,
    area_sqm: u32,
    staff_count: u32,
    features: &[&str],
) -> BusinessProfile {
    BusinessProfile {
        size,
        seats,
        area_sqm,
        staff_count,
        features: tags(features),
    }
}

/// The profile used across the concrete matching scenarios: a small cafe
/// with gas equipment.
pub(super) fn small_cafe() -> BusinessProfile {
    profile(BusinessSize::Small, 20, 50, 3, &["gas"])
}

pub(super) fn rule(
    id: &str,
    title: &str,
    category: &str,
    priority: RulePriority,
    conditions: RuleConditions,
) -> Rule {
    Rule {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Requirements for {title}"),
        category: category.to_string(),
        priority,
        conditions,
    }
}

pub(super) fn sample_rules() -> Vec<Rule> {
    vec![
        rule(
            "gas_safety",
            "Gas safety certification",
            "Safety",
            RulePriority::High,
            RuleConditions {
                features_any: Some(tags(&["gas"])),
                ..Default::default()
            },
        ),
        rule(
            "meat_handling",
            "Meat handling hygiene",
            "Hygiene",
            RulePriority::High,
            RuleConditions {
                features_any: Some(tags(&["meat"])),
                ..Default::default()
            },
        ),
        rule(
            "large_seating",
            "Assembly permit for large seating",
            "General licensing",
            RulePriority::Medium,
            RuleConditions {
                min_seats: Some(80),
                ..Default::default()
            },
        ),
        rule(
            "business_license",
            "General business license",
            "Licensing",
            RulePriority::High,
            RuleConditions::default(),
        ),
        rule(
            "outdoor_seating",
            "Outdoor seating permit",
            "General licensing",
            RulePriority::Low,
            RuleConditions {
                features_any: Some(tags(&["outdoor"])),
                ..Default::default()
            },
        ),
    ]
}

pub(super) struct CannedProvider;

impl NarrativeProvider for CannedProvider {
    fn name(&self) -> &str {
        "canned"
    }

    fn generate(
        &self,
        _business: &BusinessProfile,
        matched: &[crate::workflows::licensing::evaluation::MatchedRequirement],
    ) -> Result<String, NarrativeError> {
        Ok(format!("Narrative over {} requirement(s).", matched.len()))
    }
}

pub(super) struct FailingProvider;

impl NarrativeProvider for FailingProvider {
    fn name(&self) -> &str {
        "flaky"
    }

    fn generate(
        &self,
        _business: &BusinessProfile,
        _matched: &[crate::workflows::licensing::evaluation::MatchedRequirement],
    ) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable("simulated outage".to_string()))
    }
}

pub(super) fn build_service() -> LicensingService<InMemoryCatalog, NoProvider> {
    LicensingService::new(Arc::new(InMemoryCatalog::new(sample_rules())), NoProvider)
}

pub(super) fn build_router() -> axum::Router {
    licensing_router(Arc::new(build_service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
