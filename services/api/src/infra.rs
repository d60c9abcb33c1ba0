use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use licensing_ai::workflows::licensing::{BusinessSize, Rule, RuleConditions, RulePriority};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_size(raw: &str) -> Result<BusinessSize, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "small" => Ok(BusinessSize::Small),
        "medium" => Ok(BusinessSize::Medium),
        "large" => Ok(BusinessSize::Large),
        other => Err(format!(
            "unknown size '{other}', expected small, medium, or large"
        )),
    }
}

fn tag_set(tags: &[&str]) -> std::collections::BTreeSet<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

/// Embedded catalog used by the demo subcommand and as a last resort when no
/// catalog file is available.
pub(crate) fn sample_rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "gas_safety".to_string(),
            title: "Gas safety".to_string(),
            description: "Safety requirements for gas systems".to_string(),
            category: "Safety".to_string(),
            priority: RulePriority::High,
            conditions: RuleConditions {
                features_any: Some(tag_set(&["gas"])),
                ..Default::default()
            },
        },
        Rule {
            id: "meat_handling".to_string(),
            title: "Meat handling".to_string(),
            description: "Hygiene requirements for handling meat".to_string(),
            category: "Hygiene".to_string(),
            priority: RulePriority::High,
            conditions: RuleConditions {
                features_any: Some(tag_set(&["meat"])),
                ..Default::default()
            },
        },
        Rule {
            id: "large_seating".to_string(),
            title: "High occupancy seating".to_string(),
            description: "Additional requirements for venues seating more than 80".to_string(),
            category: "General licensing".to_string(),
            priority: RulePriority::Medium,
            conditions: RuleConditions {
                min_seats: Some(80),
                ..Default::default()
            },
        },
    ]
}
