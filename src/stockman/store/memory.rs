use super::{format_records, parse_records, RecordStore, ScanReport};
use crate::error::Result;
use crate::model::StockItem;
use std::path::PathBuf;

/// Keeps the serialized file contents in memory, so tests exercise the same line codec
/// the file store uses.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    content: String,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from raw file text, malformed lines included.
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn with_items(items: &[StockItem]) -> Self {
        Self::from_text(format_records(items))
    }

    pub fn text(&self) -> &str {
        &self.content
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<StockItem>> {
        Ok(parse_records(&self.content).items)
    }

    fn save(&mut self, items: &[StockItem]) -> Result<()> {
        self.content = format_records(items);
        Ok(())
    }

    fn scan(&self) -> Result<ScanReport> {
        Ok(parse_records(&self.content))
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}
