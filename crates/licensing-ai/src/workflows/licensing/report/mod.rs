mod narrative;
mod summary;

pub use narrative::{
    ComplianceReport, NarrativeError, NarrativeProvider, NoProvider, ReportBuilder,
    ReportMetadata, ReportMode,
};
