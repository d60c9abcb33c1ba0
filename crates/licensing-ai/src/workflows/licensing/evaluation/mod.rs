mod conditions;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{BusinessProfile, Rule, RuleConditions, RulePriority};

/// Kinds of condition the evaluator recognizes, listed in evaluation order.
/// `General` marks the vacuous match of a rule with no conditions at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    SizeAny,
    MinSeats,
    MaxSeats,
    MinAreaSqm,
    MaxAreaSqm,
    MinStaff,
    MaxStaff,
    FeaturesAny,
    FeaturesAll,
    FeaturesNone,
    General,
}

impl ConditionKind {
    pub const fn label(self) -> &'static str {
        match self {
            ConditionKind::SizeAny => "size_any",
            ConditionKind::MinSeats => "min_seats",
            ConditionKind::MaxSeats => "max_seats",
            ConditionKind::MinAreaSqm => "min_area_sqm",
            ConditionKind::MaxAreaSqm => "max_area_sqm",
            ConditionKind::MinStaff => "min_staff",
            ConditionKind::MaxStaff => "max_staff",
            ConditionKind::FeaturesAny => "features_any",
            ConditionKind::FeaturesAll => "features_all",
            ConditionKind::FeaturesNone => "features_none",
            ConditionKind::General => "general",
        }
    }
}

/// Discrete explanation for one satisfied condition. The structured kind
/// stays separate from the rendered text so assertions and downstream
/// grouping do not depend on display wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReason {
    pub kind: ConditionKind,
    pub detail: String,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.detail)
    }
}

/// Verdict and reason trail for a single rule's predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionOutcome {
    pub is_match: bool,
    pub reasons: Vec<MatchReason>,
}

/// A catalog rule the business satisfied, carrying the rule's display fields
/// and the reasons for every satisfied condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedRequirement {
    pub id: String,
    pub title: String,
    pub category: String,
    pub priority: RulePriority,
    pub description: String,
    pub reasons: Vec<MatchReason>,
}

/// Stateless engine evaluating catalog rules against one business profile.
///
/// Evaluation is synchronous and side-effect-free; concurrent invocations
/// share nothing, so callers may run it per request without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEngine;

impl MatchEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate one rule's predicate, returning the verdict and the reason
    /// trail for every satisfied condition key.
    pub fn evaluate(
        &self,
        profile: &BusinessProfile,
        conditions: &RuleConditions,
    ) -> ConditionOutcome {
        conditions::evaluate_conditions(profile, conditions)
    }

    /// Scan the catalog and return matched requirements in contract order:
    /// priority rank (High first), then category, then title, with rule id
    /// as the final tiebreaker so the sort is total and reproducible.
    pub fn match_catalog(
        &self,
        profile: &BusinessProfile,
        rules: &[Rule],
    ) -> Vec<MatchedRequirement> {
        let mut matched: Vec<MatchedRequirement> = rules
            .iter()
            .filter_map(|rule| {
                let outcome = self.evaluate(profile, &rule.conditions);
                outcome.is_match.then(|| MatchedRequirement {
                    id: rule.id.clone(),
                    title: rule.display_title(),
                    category: rule.category.clone(),
                    priority: rule.priority,
                    description: rule.description.clone(),
                    reasons: outcome.reasons,
                })
            })
            .collect();

        matched.sort_by(|a, b| {
            a.priority
                .rank()
                .cmp(&b.priority.rank())
                .then_with(|| a.category.cmp(&b.category))
                .then_with(|| a.title.cmp(&b.title))
                .then_with(|| a.id.cmp(&b.id))
        });

        matched
    }
}
