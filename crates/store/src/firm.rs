//! File-per-firm-per-year store.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use tracing::debug;

use finstat_core::depreciation::DepreciationRow;
use finstat_core::ledger::Ledger;
use finstat_core::template::LedgerTemplate;

use crate::error::StoreError;
use crate::format;

/// Store rooted at a data directory, one ledger file and one
/// depreciation-register file per firm and financial year.
#[derive(Debug, Clone)]
pub struct FirmStore {
    root: PathBuf,
}

impl FirmStore {
    /// Creates a store rooted at `root`. The directory is created lazily
    /// on first save.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the ledger file for a firm/year.
    #[must_use]
    pub fn ledger_path(&self, firm: &str, year: &str) -> PathBuf {
        self.root
            .join(format!("ledger_{}_{}.csv", slug(firm), slug(year)))
    }

    /// Path of the depreciation-register file for a firm/year.
    #[must_use]
    pub fn register_path(&self, firm: &str, year: &str) -> PathBuf {
        self.root
            .join(format!("depreciation_{}_{}.csv", slug(firm), slug(year)))
    }

    /// Loads the ledger for a firm/year, or `None` when no file exists.
    pub fn load_ledger(&self, firm: &str, year: &str) -> Result<Option<Ledger>, StoreError> {
        let path = self.ledger_path(firm, year);
        if !path.exists() {
            return Ok(None);
        }
        debug!(path = %path.display(), "loading ledger");
        let ledger = format::read_ledger(BufReader::new(File::open(path)?))?;
        Ok(Some(ledger))
    }

    /// Loads the ledger for a firm/year, falling back to the template
    /// default when no file exists yet.
    pub fn load_ledger_or_template(
        &self,
        firm: &str,
        year: &str,
        template: &LedgerTemplate,
    ) -> Result<Ledger, StoreError> {
        Ok(self
            .load_ledger(firm, year)?
            .unwrap_or_else(|| template.to_ledger()))
    }

    /// Loads the depreciation register for a firm/year; a missing file is
    /// an empty register.
    pub fn load_register(&self, firm: &str, year: &str) -> Result<Vec<DepreciationRow>, StoreError> {
        let path = self.register_path(firm, year);
        if !path.exists() {
            return Ok(Vec::new());
        }
        debug!(path = %path.display(), "loading depreciation register");
        format::read_register(BufReader::new(File::open(path)?))
    }

    /// Saves the ledger for a firm/year, replacing any existing file.
    pub fn save_ledger(&self, firm: &str, year: &str, ledger: &Ledger) -> Result<(), StoreError> {
        let path = self.ledger_path(firm, year);
        self.ensure_root()?;
        format::write_ledger(File::create(path)?, ledger)
    }

    /// Saves the depreciation register for a firm/year.
    pub fn save_register(
        &self,
        firm: &str,
        year: &str,
        register: &[DepreciationRow],
    ) -> Result<(), StoreError> {
        let path = self.register_path(firm, year);
        self.ensure_root()?;
        format::write_register(File::create(path)?, register)
    }

    /// Seeds a new firm/year from a template. Refuses to overwrite an
    /// existing ledger file.
    pub fn init_firm_year(
        &self,
        firm: &str,
        year: &str,
        template: &LedgerTemplate,
    ) -> Result<(), StoreError> {
        let path = self.ledger_path(firm, year);
        if path.exists() {
            return Err(StoreError::AlreadyExists(path));
        }
        self.save_ledger(firm, year, &template.to_ledger())?;
        self.save_register(firm, year, &[])
    }

    fn ensure_root(&self) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

/// Lowercases and replaces anything outside `[a-z0-9]` with a hyphen,
/// collapsing runs, so firm names and year labels make safe file keys.
fn slug(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last_hyphen = true;
    for c in value.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            last_hyphen = false;
        } else if !last_hyphen {
            out.push('-');
            last_hyphen = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_slug_normalizes_firm_names() {
        assert_eq!(slug("M/s Rudra Earthmovers"), "m-s-rudra-earthmovers");
        assert_eq!(slug("1-APR-2024 TO 31-MAR-2025"), "1-apr-2024-to-31-mar-2025");
        assert_eq!(slug("  spaced  out  "), "spaced-out");
    }

    #[test]
    fn test_paths_are_keyed_by_firm_and_year() {
        let store = FirmStore::new("data");
        let path = store.ledger_path("Rudra Earthmovers", "2024-25");

        assert_eq!(
            path,
            Path::new("data").join("ledger_rudra-earthmovers_2024-25.csv")
        );
    }
}
