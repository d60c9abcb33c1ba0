use std::collections::HashSet;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::Rule;

/// Ordered collection of requirement rules. Order is preserved as loaded;
/// the match engine applies its own sort to results, not to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Wrap a rule list, warning about duplicate ids. Duplicates are kept:
    /// a sloppy catalog should degrade, not abort.
    pub fn new(rules: Vec<Rule>) -> Self {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id.as_str()) {
                warn!(rule_id = %rule.id, "duplicate rule id in catalog");
            }
        }
        Self { rules }
    }

    /// Parse a catalog from a JSON array of rules. Unrecognized condition
    /// keys inside rules are ignored by the permissive `RuleConditions`
    /// deserializer.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let rules: Vec<Rule> = serde_json::from_reader(reader)?;
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Errors raised while sourcing a rule catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog document: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source abstraction so the service and router can be exercised against
/// in-memory catalogs in tests.
pub trait CatalogRepository: Send + Sync {
    fn load(&self) -> Result<RuleCatalog, CatalogError>;
}

/// File-backed catalog source. Prefers the primary document, falls back to
/// the bundled sample when the primary is missing or malformed, and serves
/// an empty catalog when neither exists. Each `load` re-reads the file, so
/// catalog edits are picked up per request without a restart.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    primary: PathBuf,
    fallback: Option<PathBuf>,
}

impl FileCatalog {
    pub fn new(primary: PathBuf, fallback: Option<PathBuf>) -> Self {
        Self { primary, fallback }
    }

    fn read(path: &Path) -> Result<RuleCatalog, CatalogError> {
        let file = File::open(path)?;
        RuleCatalog::from_json_reader(file)
    }
}

impl CatalogRepository for FileCatalog {
    fn load(&self) -> Result<RuleCatalog, CatalogError> {
        match Self::read(&self.primary) {
            Ok(catalog) => {
                info!(path = %self.primary.display(), rules = catalog.len(), "loaded rule catalog");
                return Ok(catalog);
            }
            Err(err) => {
                warn!(path = %self.primary.display(), error = %err, "primary catalog unavailable");
            }
        }

        let Some(fallback) = &self.fallback else {
            warn!("no rule catalog available, serving empty catalog");
            return Ok(RuleCatalog::default());
        };

        match Self::read(fallback) {
            Ok(catalog) => {
                info!(path = %fallback.display(), rules = catalog.len(), "loaded fallback rule catalog");
                Ok(catalog)
            }
            Err(CatalogError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                warn!("no rule catalog available, serving empty catalog");
                Ok(RuleCatalog::default())
            }
            Err(err) => Err(err),
        }
    }
}

/// In-memory catalog for tests, demos, and embedded defaults.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    catalog: RuleCatalog,
}

impl InMemoryCatalog {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            catalog: RuleCatalog::new(rules),
        }
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn load(&self) -> Result<RuleCatalog, CatalogError> {
        Ok(self.catalog.clone())
    }
}
