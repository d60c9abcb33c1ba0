use super::super::domain::{BusinessProfile, RuleConditions};
use super::{ConditionKind, ConditionOutcome, MatchReason};

/// Evaluate every recognized condition key present in `conditions` against
/// the profile and combine the outcomes with AND.
///
/// A key that is absent, or declared with an empty set, is skipped entirely:
/// it neither forces a match nor a failure. Numeric bounds are inclusive and
/// set membership uses exact string equality. When no key was evaluated at
/// all the rule is a general one and matches unconditionally with a single
/// marker reason.
pub(crate) fn evaluate_conditions(
    profile: &BusinessProfile,
    conditions: &RuleConditions,
) -> ConditionOutcome {
    let mut reasons = Vec::new();
    let mut is_match = true;
    let mut evaluated = 0usize;

    if let Some(sizes) = conditions.size_any.as_ref().filter(|set| !set.is_empty()) {
        evaluated += 1;
        if sizes.contains(&profile.size) {
            let allowed: Vec<&str> = sizes.iter().map(|size| size.label()).collect();
            reasons.push(MatchReason {
                kind: ConditionKind::SizeAny,
                detail: format!(
                    "business size '{}' is one of [{}]",
                    profile.size.label(),
                    allowed.join(", ")
                ),
            });
        } else {
            is_match = false;
        }
    }

    if let Some(min_seats) = conditions.min_seats {
        evaluated += 1;
        if profile.seats >= min_seats {
            reasons.push(MatchReason {
                kind: ConditionKind::MinSeats,
                detail: format!("{} seats meets the minimum of {}", profile.seats, min_seats),
            });
        } else {
            is_match = false;
        }
    }

    if let Some(max_seats) = conditions.max_seats {
        evaluated += 1;
        if profile.seats <= max_seats {
            reasons.push(MatchReason {
                kind: ConditionKind::MaxSeats,
                detail: format!(
                    "{} seats is within the maximum of {}",
                    profile.seats, max_seats
                ),
            });
        } else {
            is_match = false;
        }
    }

    if let Some(min_area) = conditions.min_area_sqm {
        evaluated += 1;
        if profile.area_sqm >= min_area {
            reasons.push(MatchReason {
                kind: ConditionKind::MinAreaSqm,
                detail: format!(
                    "{} sqm of floor area meets the minimum of {}",
                    profile.area_sqm, min_area
                ),
            });
        } else {
            is_match = false;
        }
    }

    if let Some(max_area) = conditions.max_area_sqm {
        evaluated += 1;
        if profile.area_sqm <= max_area {
            reasons.push(MatchReason {
                kind: ConditionKind::MaxAreaSqm,
                detail: format!(
                    "{} sqm of floor area is within the maximum of {}",
                    profile.area_sqm, max_area
                ),
            });
        } else {
            is_match = false;
        }
    }

    if let Some(min_staff) = conditions.min_staff {
        evaluated += 1;
        if profile.staff_count >= min_staff {
            reasons.push(MatchReason {
                kind: ConditionKind::MinStaff,
                detail: format!(
                    "{} staff per shift meets the minimum of {}",
                    profile.staff_count, min_staff
                ),
            });
        } else {
            is_match = false;
        }
    }

    if let Some(max_staff) = conditions.max_staff {
        evaluated += 1;
        if profile.staff_count <= max_staff {
            reasons.push(MatchReason {
                kind: ConditionKind::MaxStaff,
                detail: format!(
                    "{} staff per shift is within the maximum of {}",
                    profile.staff_count, max_staff
                ),
            });
        } else {
            is_match = false;
        }
    }

    if let Some(tags) = conditions
        .features_any
        .as_ref()
        .filter(|set| !set.is_empty())
    {
        evaluated += 1;
        let present: Vec<&String> = tags
            .iter()
            .filter(|tag| profile.has_feature(tag))
            .collect();
        if present.is_empty() {
            is_match = false;
        } else {
            // one reason per matched tag, already sorted by the BTreeSet
            for tag in present {
                reasons.push(MatchReason {
                    kind: ConditionKind::FeaturesAny,
                    detail: format!("business declares feature '{tag}'"),
                });
            }
        }
    }

    if let Some(tags) = conditions
        .features_all
        .as_ref()
        .filter(|set| !set.is_empty())
    {
        evaluated += 1;
        if tags.iter().all(|tag| profile.has_feature(tag)) {
            for tag in tags {
                reasons.push(MatchReason {
                    kind: ConditionKind::FeaturesAll,
                    detail: format!("required feature '{tag}' is present"),
                });
            }
        } else {
            is_match = false;
        }
    }

    if let Some(tags) = conditions
        .features_none
        .as_ref()
        .filter(|set| !set.is_empty())
    {
        evaluated += 1;
        if tags.iter().any(|tag| profile.has_feature(tag)) {
            is_match = false;
        } else {
            for tag in tags {
                reasons.push(MatchReason {
                    kind: ConditionKind::FeaturesNone,
                    detail: format!("excluded feature '{tag}' is absent"),
                });
            }
        }
    }

    if evaluated == 0 {
        return ConditionOutcome {
            is_match: true,
            reasons: vec![MatchReason {
                kind: ConditionKind::General,
                detail: "general rule, applies to every business".to_string(),
            }],
        };
    }

    ConditionOutcome { is_match, reasons }
}
