use crate::classify::LowStockEntry;
use crate::config::StockConfig;
use crate::error::{Result, StockError};
use crate::form::ItemForm;
use crate::index::DisplayRow;
use crate::model::{Scope, StockItem};
use std::path::PathBuf;

pub mod add;
pub mod alert;
pub mod analytics;
pub mod clear;
pub mod config;
pub mod delete;
pub mod doctor;
pub mod filter;
pub mod init;
pub mod list;
pub mod select;
pub mod update;

pub use analytics::{CategoryCount, StockStats};

#[derive(Debug, Clone)]
pub struct StockPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl StockPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| StockError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<StockItem>,
    pub listed_rows: Vec<DisplayRow>,
    pub low_stock: Vec<LowStockEntry>,
    pub form: Option<ItemForm>,
    pub stats: Option<StockStats>,
    pub config: Option<StockConfig>,
    pub store_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<StockItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_rows(mut self, rows: Vec<DisplayRow>) -> Self {
        self.listed_rows = rows;
        self
    }

    pub fn with_low_stock(mut self, entries: Vec<LowStockEntry>) -> Self {
        self.low_stock = entries;
        self
    }

    pub fn with_form(mut self, form: ItemForm) -> Self {
        self.form = Some(form);
        self
    }

    pub fn with_stats(mut self, stats: StockStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: StockConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_store_path(mut self, path: PathBuf) -> Self {
        self.store_path = Some(path);
        self
    }
}
