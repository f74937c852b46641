//! # Storage Layer
//!
//! This module defines the storage abstraction for stockman. The [`RecordStore`] trait
//! lets the application run against a real file or an in-memory buffer.
//!
//! ## Storage Format
//!
//! One record per line, fields joined by a literal `|`:
//!
//! ```text
//! Cola|Drinks|12
//! Chips|Snacks|3
//! Milk|Dairy|0
//! ```
//!
//! There is no header and no escaping, so names and categories may not contain `|`
//! (the item form refuses them). Lines are trimmed before splitting. A line that does not
//! split into exactly three fields is skipped on load; [`RecordStore::scan`] reports
//! those lines for diagnostics. Blank lines are skipped silently.
//!
//! Saving always rewrites the whole file from the given records.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage backed by a single text file
//! - [`memory::InMemoryStore`]: A text buffer in memory, for tests

use crate::error::Result;
use crate::model::StockItem;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub const FIELD_SEPARATOR: char = '|';

/// A line that `load` skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub line_number: usize,
    pub content: String,
}

/// Everything `scan` found in the backing data.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub items: Vec<StockItem>,
    pub malformed: Vec<MalformedLine>,
}

/// Abstract interface for record storage.
pub trait RecordStore {
    /// Load every well-formed record, in file order.
    fn load(&self) -> Result<Vec<StockItem>>;

    /// Replace the stored records with `items`.
    fn save(&mut self, items: &[StockItem]) -> Result<()>;

    /// Load, keeping track of the lines that had to be skipped.
    fn scan(&self) -> Result<ScanReport>;

    /// Path of the backing file, for file-based stores.
    fn location(&self) -> Option<PathBuf>;
}

/// Parses one stored line. Blank lines and lines without exactly three fields yield `None`.
pub fn parse_line(line: &str) -> Option<StockItem> {
    let mut fields = line.trim().split(FIELD_SEPARATOR);
    let name = fields.next()?;
    let category = fields.next()?;
    let quantity = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some(StockItem::new(name, category, quantity))
}

pub fn format_line(item: &StockItem) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        item.name,
        item.category,
        item.quantity,
        sep = FIELD_SEPARATOR
    )
}

/// Parses a whole file. Blank lines are ignored rather than reported as malformed.
pub fn parse_records(content: &str) -> ScanReport {
    let mut report = ScanReport::default();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(item) => report.items.push(item),
            None => report.malformed.push(MalformedLine {
                line_number: i + 1,
                content: line.to_string(),
            }),
        }
    }
    report
}

pub fn format_records(items: &[StockItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format_line(item));
        out.push('\n');
    }
    out
}
