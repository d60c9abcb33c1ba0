use std::collections::BTreeMap;

use super::super::domain::{BusinessProfile, RulePriority};
use super::super::evaluation::MatchedRequirement;

const PRIORITY_GUIDANCE: &[(RulePriority, &str)] = &[
    (RulePriority::High, "needs immediate attention"),
    (RulePriority::Medium, "address within one month"),
    (RulePriority::Low, "address within three months"),
];

/// Render the deterministic Markdown compliance report used when no external
/// narrative provider is configured or the provider fails.
///
/// Matched requirements arrive already sorted by priority, category, title;
/// grouping by category here preserves that relative order, so the output is
/// reproducible for a fixed input.
pub(crate) fn render_templated(
    business: &BusinessProfile,
    matched: &[MatchedRequirement],
) -> String {
    let mut out = String::new();

    out.push_str("# Business licensing compliance report\n\n");
    out.push_str("## Business profile\n");
    out.push_str(&format!("- Size: {}\n", business.size.label()));
    out.push_str(&format!("- Seats: {}\n", business.seats));
    out.push_str(&format!("- Floor area: {} sqm\n", business.area_sqm));
    out.push_str(&format!("- Staff per shift: {}\n", business.staff_count));
    if business.features.is_empty() {
        out.push_str("- Features: none declared\n");
    } else {
        let tags: Vec<&str> = business.features.iter().map(String::as_str).collect();
        out.push_str(&format!("- Features: {}\n", tags.join(", ")));
    }
    out.push('\n');

    if matched.is_empty() {
        out.push_str("No licensing requirements matched this profile.\n");
        return out;
    }

    let mut by_category: BTreeMap<&str, Vec<&MatchedRequirement>> = BTreeMap::new();
    for requirement in matched {
        by_category
            .entry(requirement.category.as_str())
            .or_default()
            .push(requirement);
    }

    out.push_str("## Requirements by category\n\n");
    for (category, requirements) in &by_category {
        let heading = if category.is_empty() {
            "(uncategorized)"
        } else {
            category
        };
        out.push_str(&format!("### {heading}\n"));
        for requirement in requirements {
            out.push_str(&format!(
                "- **{}** ({} priority): {}\n",
                requirement.title,
                requirement.priority.label(),
                requirement.description
            ));
            for reason in &requirement.reasons {
                out.push_str(&format!("  - {reason}\n"));
            }
        }
        out.push('\n');
    }

    out.push_str("## Action list by priority\n\n");
    for (priority, guidance) in PRIORITY_GUIDANCE {
        let in_band: Vec<&MatchedRequirement> = matched
            .iter()
            .filter(|requirement| requirement.priority == *priority)
            .collect();
        out.push_str(&format!("### {} priority - {}\n", priority.label(), guidance));
        if in_band.is_empty() {
            out.push_str("No requirements in this band.\n\n");
            continue;
        }
        for (index, requirement) in in_band.iter().enumerate() {
            out.push_str(&format!(
                "{}. **{}** ({})\n",
                index + 1,
                requirement.title,
                if requirement.category.is_empty() {
                    "(uncategorized)"
                } else {
                    requirement.category.as_str()
                }
            ));
        }
        out.push('\n');
    }

    out.push_str("## Next steps\n");
    out.push_str("1. Review every High priority requirement and collect the documents it names.\n");
    out.push_str("2. Contact the local licensing authority to confirm the applicable procedures.\n");
    out.push_str("3. Submit the business license application once the paperwork is complete.\n\n");
    out.push_str(
        "Note: this report is generated from the requirement catalog and is not legal advice.\n",
    );

    out
}
