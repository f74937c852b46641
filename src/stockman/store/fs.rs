use super::{format_records, parse_records, RecordStore, ScanReport};
use crate::error::{Result, StockError};
use crate::model::StockItem;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockError::Io)?;
            }
        }
        Ok(())
    }

    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(StockError::Io)?;
        Ok(Some(content))
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Vec<StockItem>> {
        let report = self.scan()?;
        if !report.malformed.is_empty() {
            warn!(
                path = %self.path.display(),
                skipped = report.malformed.len(),
                "skipped malformed lines"
            );
        }
        Ok(report.items)
    }

    fn save(&mut self, items: &[StockItem]) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, format_records(items)).map_err(StockError::Io)?;
        debug!(path = %self.path.display(), records = items.len(), "saved records");
        Ok(())
    }

    fn scan(&self) -> Result<ScanReport> {
        let report = match self.read()? {
            Some(content) => parse_records(&content),
            None => ScanReport::default(),
        };
        debug!(
            path = %self.path.display(),
            records = report.items.len(),
            "loaded records"
        );
        Ok(report)
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}
