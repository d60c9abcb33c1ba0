use std::collections::BTreeSet;

use super::domain::{is_known_feature, BusinessProfile, BusinessSubmission};

/// Validation errors raised while admitting a submitted profile.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown feature tag(s): {}", tags.join(", "))]
    UnknownFeatures { tags: Vec<String> },
}

/// Guard responsible for producing validated [`BusinessProfile`] instances.
///
/// Size enumeration and non-negative counts are already enforced by the
/// submission's types; the guard checks feature tags against the fixed
/// vocabulary and collapses duplicates. Validation happens here, before any
/// matching: the engine downstream assumes its input is in contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn profile_from_submission(
        &self,
        submission: BusinessSubmission,
    ) -> Result<BusinessProfile, ValidationError> {
        let unknown: BTreeSet<String> = submission
            .features
            .iter()
            .filter(|tag| !is_known_feature(tag))
            .cloned()
            .collect();

        if !unknown.is_empty() {
            return Err(ValidationError::UnknownFeatures {
                tags: unknown.into_iter().collect(),
            });
        }

        let features: BTreeSet<String> = submission.features.into_iter().collect();

        Ok(BusinessProfile {
            size: submission.size,
            seats: submission.seats,
            area_sqm: submission.area_sqm,
            staff_count: submission.staff_count,
            features,
        })
    }
}
