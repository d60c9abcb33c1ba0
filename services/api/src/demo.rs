use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use licensing_ai::error::AppError;
use licensing_ai::workflows::licensing::{
    BusinessSize, BusinessSubmission, CatalogRepository, ComplianceReport, FileCatalog,
    InMemoryCatalog, LicensingService, MatchOutcome, NoProvider,
};

use crate::infra::sample_rules;

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Business size band: small, medium, or large
    #[arg(long, value_parser = crate::infra::parse_size)]
    pub(crate) size: BusinessSize,
    /// Number of seats
    #[arg(long, default_value_t = 0)]
    pub(crate) seats: u32,
    /// Floor area in square meters
    #[arg(long, default_value_t = 0)]
    pub(crate) area_sqm: u32,
    /// Staff on the largest shift
    #[arg(long, default_value_t = 0)]
    pub(crate) staff: u32,
    /// Declared feature tag (repeatable)
    #[arg(long = "feature")]
    pub(crate) features: Vec<String>,
    /// Catalog file to match against (defaults to the embedded sample)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Also render the compliance report
    #[arg(long)]
    pub(crate) report: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include the rendered compliance report for each demo profile
    #[arg(long)]
    pub(crate) include_reports: bool,
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs {
        size,
        seats,
        area_sqm,
        staff,
        features,
        catalog,
        report,
    } = args;

    let rules = match catalog {
        Some(path) => FileCatalog::new(path, None).load()?.rules().to_vec(),
        None => sample_rules(),
    };
    let service = LicensingService::new(Arc::new(InMemoryCatalog::new(rules)), NoProvider);

    let submission = BusinessSubmission {
        size,
        seats,
        area_sqm,
        staff_count: staff,
        features,
    };

    if report {
        let (outcome, compliance) = service.match_and_report(submission)?;
        render_outcome(&outcome);
        render_report(&compliance);
    } else {
        let outcome = service.match_requirements(submission)?;
        render_outcome(&outcome);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = LicensingService::new(Arc::new(InMemoryCatalog::new(sample_rules())), NoProvider);

    let profiles: [(&str, BusinessSubmission); 3] = [
        (
            "Small restaurant (meat + gas)",
            submission(BusinessSize::Small, 20, &["meat", "gas"]),
        ),
        (
            "Large cafe (delivery, 100 seats)",
            submission(BusinessSize::Large, 100, &["delivery"]),
        ),
        (
            "Medium bakery (gas only, 50 seats)",
            submission(BusinessSize::Medium, 50, &["gas"]),
        ),
    ];

    for (label, profile) in profiles {
        println!("{label}:");
        if args.include_reports {
            let (outcome, compliance) = service.match_and_report(profile)?;
            render_outcome(&outcome);
            render_report(&compliance);
        } else {
            let outcome = service.match_requirements(profile)?;
            render_outcome(&outcome);
        }
        println!();
    }

    Ok(())
}

fn submission(size: BusinessSize, seats: u32, features: &[&str]) -> BusinessSubmission {
    BusinessSubmission {
        size,
        seats,
        area_sqm: 0,
        staff_count: 0,
        features: features.iter().map(|tag| tag.to_string()).collect(),
    }
}

fn render_outcome(outcome: &MatchOutcome) {
    if outcome.matched.is_empty() {
        println!("  no requirements matched");
        return;
    }
    for requirement in &outcome.matched {
        println!(
            "  - {} [{} / {}]",
            requirement.title,
            requirement.priority.label(),
            if requirement.category.is_empty() {
                "(uncategorized)"
            } else {
                requirement.category.as_str()
            }
        );
        for reason in &requirement.reasons {
            println!("      {reason}");
        }
    }
}

fn render_report(report: &ComplianceReport) {
    println!();
    println!("{}", report.report);
}
