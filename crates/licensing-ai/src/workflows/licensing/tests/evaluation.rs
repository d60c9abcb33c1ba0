use super::common::*;
use crate::workflows::licensing::domain::{BusinessSize, RuleConditions};
use crate::workflows::licensing::evaluation::{ConditionKind, MatchEngine};

fn engine() -> MatchEngine {
    MatchEngine::new()
}

#[test]
fn empty_conditions_match_every_profile_with_general_reason() {
    let outcomes = [
        engine().evaluate(&small_cafe(), &RuleConditions::default()),
        engine().evaluate(
            &profile(BusinessSize::Large, 500, 2000, 60, &["meat", "alcohol"]),
            &RuleConditions::default(),
        ),
        engine().evaluate(
            &profile(BusinessSize::Medium, 0, 0, 0, &[]),
            &RuleConditions::default(),
        ),
    ];

    for outcome in outcomes {
        assert!(outcome.is_match);
        assert_eq!(outcome.reasons.len(), 1);
        assert_eq!(outcome.reasons[0].kind, ConditionKind::General);
    }
}

#[test]
fn conjunction_requires_every_key_to_hold() {
    let cafe = small_cafe();
    let all_true = RuleConditions {
        size_any: Some(sizes(&[BusinessSize::Small, BusinessSize::Medium])),
        min_seats: Some(10),
        features_any: Some(tags(&["gas"])),
        ..Default::default()
    };
    assert!(engine().evaluate(&cafe, &all_true).is_match);

    // flipping any single key to false flips the whole match
    let mut size_fails = all_true.clone();
    size_fails.size_any = Some(sizes(&[BusinessSize::Large]));
    assert!(!engine().evaluate(&cafe, &size_fails).is_match);

    let mut seats_fail = all_true.clone();
    seats_fail.min_seats = Some(21);
    assert!(!engine().evaluate(&cafe, &seats_fail).is_match);

    let mut features_fail = all_true;
    features_fail.features_any = Some(tags(&["alcohol"]));
    assert!(!engine().evaluate(&cafe, &features_fail).is_match);
}

#[test]
fn numeric_bounds_are_inclusive() {
    let business = profile(BusinessSize::Medium, 50, 120, 8, &[]);

    let cases = [
        (
            RuleConditions {
                min_seats: Some(50),
                ..Default::default()
            },
            RuleConditions {
                min_seats: Some(51),
                ..Default::default()
            },
        ),
        (
            RuleConditions {
                max_seats: Some(50),
                ..Default::default()
            },
            RuleConditions {
                max_seats: Some(49),
                ..Default::default()
            },
        ),
        (
            RuleConditions {
                min_area_sqm: Some(120),
                ..Default::default()
            },
            RuleConditions {
                min_area_sqm: Some(121),
                ..Default::default()
            },
        ),
        (
            RuleConditions {
                max_area_sqm: Some(120),
                ..Default::default()
            },
            RuleConditions {
                max_area_sqm: Some(119),
                ..Default::default()
            },
        ),
        (
            RuleConditions {
                min_staff: Some(8),
                ..Default::default()
            },
            RuleConditions {
                min_staff: Some(9),
                ..Default::default()
            },
        ),
        (
            RuleConditions {
                max_staff: Some(8),
                ..Default::default()
            },
            RuleConditions {
                max_staff: Some(7),
                ..Default::default()
            },
        ),
    ];

    for (boundary, beyond) in cases {
        let at_boundary = engine().evaluate(&business, &boundary);
        assert!(at_boundary.is_match, "boundary case failed: {boundary:?}");
        assert_eq!(at_boundary.reasons.len(), 1);
        assert!(
            !engine().evaluate(&business, &beyond).is_match,
            "beyond-boundary case matched: {beyond:?}"
        );
    }
}

#[test]
fn features_any_needs_nonempty_intersection() {
    let cafe = small_cafe();

    let overlapping = RuleConditions {
        features_any: Some(tags(&["gas", "alcohol"])),
        ..Default::default()
    };
    let outcome = engine().evaluate(&cafe, &overlapping);
    assert!(outcome.is_match);
    assert_eq!(outcome.reasons.len(), 1);
    assert!(outcome.reasons[0].detail.contains("gas"));

    let disjoint = RuleConditions {
        features_any: Some(tags(&["alcohol", "music"])),
        ..Default::default()
    };
    assert!(!engine().evaluate(&cafe, &disjoint).is_match);
}

#[test]
fn features_all_requires_subset() {
    let business = profile(BusinessSize::Small, 20, 50, 3, &["gas", "meat", "delivery"]);

    let subset = RuleConditions {
        features_all: Some(tags(&["gas", "meat"])),
        ..Default::default()
    };
    let outcome = engine().evaluate(&business, &subset);
    assert!(outcome.is_match);
    // one reason per required tag, in sorted order
    assert_eq!(outcome.reasons.len(), 2);
    assert!(outcome.reasons[0].detail.contains("gas"));
    assert!(outcome.reasons[1].detail.contains("meat"));

    // scenario: gas-only cafe misses the alcohol requirement
    let missing = RuleConditions {
        features_all: Some(tags(&["gas", "alcohol"])),
        ..Default::default()
    };
    assert!(!engine().evaluate(&small_cafe(), &missing).is_match);
}

#[test]
fn features_none_requires_empty_intersection() {
    let cafe = small_cafe();

    let clean = RuleConditions {
        features_none: Some(tags(&["alcohol", "smoking"])),
        ..Default::default()
    };
    let outcome = engine().evaluate(&cafe, &clean);
    assert!(outcome.is_match);
    assert_eq!(outcome.reasons.len(), 2);
    assert!(outcome
        .reasons
        .iter()
        .all(|reason| reason.kind == ConditionKind::FeaturesNone));

    let conflicting = RuleConditions {
        features_none: Some(tags(&["gas"])),
        ..Default::default()
    };
    assert!(!engine().evaluate(&cafe, &conflicting).is_match);
}

// A declared-but-empty set is ambiguous in the source data: it could mean
// "ignore" or "never matches". The engine adopts "ignore", so an empty set
// must neither force a failure nor count as an evaluated key.
#[test]
fn empty_declared_sets_are_ignored_not_failed() {
    let cafe = small_cafe();

    let only_empty = RuleConditions {
        size_any: Some(sizes(&[])),
        features_any: Some(tags(&[])),
        features_all: Some(tags(&[])),
        features_none: Some(tags(&[])),
        ..Default::default()
    };
    let outcome = engine().evaluate(&cafe, &only_empty);
    assert!(outcome.is_match, "empty sets alone must fall back to general");
    assert_eq!(outcome.reasons.len(), 1);
    assert_eq!(outcome.reasons[0].kind, ConditionKind::General);

    let empty_beside_real = RuleConditions {
        features_any: Some(tags(&[])),
        min_seats: Some(10),
        ..Default::default()
    };
    let outcome = engine().evaluate(&cafe, &empty_beside_real);
    assert!(outcome.is_match);
    assert_eq!(outcome.reasons.len(), 1);
    assert_eq!(outcome.reasons[0].kind, ConditionKind::MinSeats);
}

#[test]
fn size_mismatch_fails() {
    let outcome = engine().evaluate(
        &small_cafe(),
        &RuleConditions {
            size_any: Some(sizes(&[BusinessSize::Large])),
            ..Default::default()
        },
    );
    assert!(!outcome.is_match);
}

#[test]
fn reasons_follow_declared_key_order() {
    let business = profile(BusinessSize::Small, 20, 50, 3, &["gas", "meat"]);
    let conditions = RuleConditions {
        size_any: Some(sizes(&[BusinessSize::Small])),
        min_seats: Some(10),
        max_seats: Some(100),
        min_area_sqm: Some(10),
        max_area_sqm: Some(100),
        min_staff: Some(1),
        max_staff: Some(10),
        features_any: Some(tags(&["gas"])),
        features_all: Some(tags(&["meat"])),
        features_none: Some(tags(&["smoking"])),
    };

    let outcome = engine().evaluate(&business, &conditions);
    assert!(outcome.is_match);

    let kinds: Vec<ConditionKind> = outcome.reasons.iter().map(|reason| reason.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ConditionKind::SizeAny,
            ConditionKind::MinSeats,
            ConditionKind::MaxSeats,
            ConditionKind::MinAreaSqm,
            ConditionKind::MaxAreaSqm,
            ConditionKind::MinStaff,
            ConditionKind::MaxStaff,
            ConditionKind::FeaturesAny,
            ConditionKind::FeaturesAll,
            ConditionKind::FeaturesNone,
        ]
    );
}

#[test]
fn reason_rendering_names_kind_and_detail() {
    let outcome = engine().evaluate(
        &small_cafe(),
        &RuleConditions {
            features_any: Some(tags(&["gas"])),
            ..Default::default()
        },
    );

    let rendered = outcome.reasons[0].to_string();
    assert!(rendered.starts_with("features_any:"));
    assert!(rendered.contains("'gas'"));
}
