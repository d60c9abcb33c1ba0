use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Size bands recognized by the requirement catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessSize {
    Small,
    Medium,
    Large,
}

impl BusinessSize {
    pub const fn label(self) -> &'static str {
        match self {
            BusinessSize::Small => "small",
            BusinessSize::Medium => "medium",
            BusinessSize::Large => "large",
        }
    }
}

/// The fixed vocabulary of feature tags a business may declare. Tags outside
/// this list fail intake validation rather than being dropped silently.
pub const FEATURE_VOCABULARY: &[&str] = &[
    // basic
    "gas",
    "meat",
    "delivery",
    // service
    "alcohol",
    "outdoor",
    "music",
    "smoking",
    "night",
    "takeaway",
    // kitchen
    "kitchen_hot",
    "kitchen_cold",
    "dairy",
    "fish",
    "vegan",
];

pub fn is_known_feature(tag: &str) -> bool {
    FEATURE_VOCABULARY.contains(&tag)
}

/// Business profile as submitted to the API, prior to intake validation.
/// Enumerated size and unsigned counts are enforced at deserialization;
/// feature tags are checked against [`FEATURE_VOCABULARY`] by the guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSubmission {
    pub size: BusinessSize,
    pub seats: u32,
    #[serde(default)]
    pub area_sqm: u32,
    #[serde(default)]
    pub staff_count: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Validated business profile consumed by the match engine. Feature tags are
/// deduplicated and kept sorted so reason rendering stays deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub size: BusinessSize,
    pub seats: u32,
    pub area_sqm: u32,
    pub staff_count: u32,
    pub features: BTreeSet<String>,
}

impl BusinessProfile {
    pub fn has_feature(&self, tag: &str) -> bool {
        self.features.contains(tag)
    }
}

/// Priority bands for catalog rules, declared in sort order: High outranks
/// Medium outranks Low.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum RulePriority {
    High,
    #[default]
    Medium,
    Low,
}

impl RulePriority {
    pub const fn rank(self) -> u8 {
        match self {
            RulePriority::High => 0,
            RulePriority::Medium => 1,
            RulePriority::Low => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RulePriority::High => "High",
            RulePriority::Medium => "Medium",
            RulePriority::Low => "Low",
        }
    }
}

/// Typed condition record for one rule. Every field is optional and the
/// effective predicate is the conjunction of the fields that are set.
/// Unrecognized keys in source documents are ignored on deserialization so
/// the catalog format can grow without breaking older engines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_any: Option<BTreeSet<BusinessSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_seats: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_seats: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_area_sqm: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_area_sqm: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_staff: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_staff: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features_any: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features_all: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features_none: Option<BTreeSet<String>>,
}

/// One catalog entry. Display fields are opaque to the engine and may be in
/// any language; only `conditions` participates in evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: RulePriority,
    #[serde(default)]
    pub conditions: RuleConditions,
}

impl Rule {
    /// Title to display in match results; a malformed rule with an empty
    /// title gets a placeholder instead of aborting the catalog scan.
    pub fn display_title(&self) -> String {
        if self.title.trim().is_empty() {
            "(no title)".to_string()
        } else {
            self.title.clone()
        }
    }
}
