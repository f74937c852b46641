//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! every stockman operation, regardless of the UI in front of it.
//!
//! ## Application State
//!
//! Unlike a stateless request handler, an inventory session has state the operator builds
//! up between actions: the visible table (possibly filtered), the selected rows and the
//! three input fields. [`StockApi`] owns that state explicitly; the commands receive it as
//! plain arguments, which keeps them testable without any UI present.
//!
//! A one-shot CLI invocation opens an API, performs one action and drops it. The
//! interactive shell keeps a single API alive for the whole session.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (row number strings → [`RowIndex`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and no formatting; that belongs to the client.
//!
//! ## Generic Over RecordStore
//!
//! `StockApi<S: RecordStore>` runs as `StockApi<FileStore>` in production and
//! `StockApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::{Result, StockError};
use crate::form::{FormField, ItemForm};
use crate::index::RowIndex;
use crate::model::{CategoryFilter, Scope, DEFAULT_CATEGORIES};
use crate::store::RecordStore;
use crate::table::InventoryTable;
use std::str::FromStr;

/// Optional overrides applied on top of a row's current values.
#[derive(Debug, Clone, Default)]
pub struct ItemEdit {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
}

impl ItemEdit {
    fn apply_to(self, form: &mut ItemForm) {
        if let Some(name) = self.name {
            form.set(FormField::Name, name);
        }
        if let Some(category) = self.category {
            form.set(FormField::Category, category);
        }
        if let Some(quantity) = self.quantity {
            form.set(FormField::Quantity, quantity);
        }
    }
}

/// The main API facade and application state.
pub struct StockApi<S: RecordStore> {
    store: S,
    paths: commands::StockPaths,
    table: InventoryTable,
    form: ItemForm,
    filter: CategoryFilter,
    categories: Vec<String>,
}

impl<S: RecordStore> StockApi<S> {
    /// An API with an empty view. Call [`StockApi::reload`] to populate it.
    pub fn new(store: S, paths: commands::StockPaths) -> Self {
        Self {
            store,
            paths,
            table: InventoryTable::new(),
            form: ItemForm::default(),
            filter: CategoryFilter::All,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Replaces the category suggestions offered to the operator.
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// An API whose table shows everything currently stored.
    pub fn open(store: S, paths: commands::StockPaths) -> Result<Self> {
        let mut api = Self::new(store, paths);
        api.reload()?;
        Ok(api)
    }

    /// Re-reads the data file through the active filter.
    pub fn reload(&mut self) -> Result<commands::CmdResult> {
        commands::filter::run(&self.store, &mut self.table, &self.filter)
    }

    pub fn list(&self) -> commands::CmdResult {
        commands::list::run(&self.table)
    }

    pub fn filter(&mut self, filter: CategoryFilter) -> Result<commands::CmdResult> {
        let result = commands::filter::run(&self.store, &mut self.table, &filter)?;
        self.filter = filter;
        Ok(result)
    }

    pub fn active_filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn select_rows<I: AsRef<str>>(&mut self, rows: &[I]) -> Result<commands::CmdResult> {
        let rows = parse_rows(rows)?;
        commands::select::run(&mut self.table, &mut self.form, &rows)
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> commands::CmdResult {
        self.form.set(field, value);
        commands::CmdResult::default().with_form(self.form.clone())
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    pub fn clear_fields(&mut self) -> commands::CmdResult {
        commands::clear::run(&mut self.form)
    }

    /// Adds whatever is in the form.
    pub fn add(&mut self) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &mut self.table, &mut self.form)
    }

    /// Fills the form with the given raw values, then adds.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Result<commands::CmdResult> {
        self.form = ItemForm::new(name, category, quantity);
        self.add()
    }

    /// Updates the selected row with whatever is in the form.
    pub fn update(&mut self) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &mut self.table, &mut self.form)
    }

    /// Selects `row` (copying its values into the form), applies `edit`, then updates.
    pub fn update_row<I: AsRef<str>>(&mut self, row: I, edit: ItemEdit) -> Result<commands::CmdResult> {
        self.select_rows(&[row])?;
        edit.apply_to(&mut self.form);
        self.update()
    }

    /// Deletes the selected rows.
    pub fn delete(&mut self) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &mut self.table)
    }

    pub fn delete_rows<I: AsRef<str>>(&mut self, rows: &[I]) -> Result<commands::CmdResult> {
        self.select_rows(rows)?;
        self.delete()
    }

    pub fn analytics(&self) -> Result<commands::CmdResult> {
        commands::analytics::run(&self.store)
    }

    pub fn low_stock_alert(&self) -> commands::CmdResult {
        commands::alert::run(&self.table)
    }

    pub fn doctor(&mut self, fix: bool) -> Result<commands::CmdResult> {
        let result = commands::doctor::run(&mut self.store, fix)?;
        if fix {
            self.reload()?;
        }
        Ok(result)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn data_path(&self) -> commands::CmdResult {
        let result = commands::CmdResult::default();
        match self.store.location() {
            Some(path) => result.with_store_path(path),
            None => result,
        }
    }

    pub fn table(&self) -> &InventoryTable {
        &self.table
    }

    pub fn paths(&self) -> &commands::StockPaths {
        &self.paths
    }
}

fn parse_rows<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RowIndex>> {
    inputs
        .iter()
        .map(|s| RowIndex::from_str(s.as_ref()).map_err(StockError::Api))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CategoryCount, CmdMessage, CmdResult, MessageLevel, StockPaths, StockStats,
};
