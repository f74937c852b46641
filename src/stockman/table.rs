//! # Inventory Table
//!
//! The ordered rows the operator is looking at, plus the current row selection.
//!
//! The table is a *view*: after a category filter it holds only part of the data set.
//! Each [`TableRow`] therefore carries `source`, the position of its record in the data
//! file, which is what the mutation commands use when writing changes back.
//!
//! Positions here are 0-based; see [`crate::index::RowIndex`] for user-facing numbers.

use crate::error::{Result, StockError};
use crate::index::RowIndex;
use crate::model::StockItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub item: StockItem,
    pub source: usize,
}

#[derive(Debug, Clone, Default)]
pub struct InventoryTable {
    rows: Vec<TableRow>,
    selection: Vec<usize>,
}

impl InventoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an unfiltered table, where every row's source is its own position.
    pub fn from_items(items: Vec<StockItem>) -> Self {
        let rows = items
            .into_iter()
            .enumerate()
            .map(|(source, item)| TableRow { item, source })
            .collect();
        Self {
            rows,
            selection: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn items(&self) -> impl Iterator<Item = &StockItem> {
        self.rows.iter().map(|row| &row.item)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&TableRow> {
        self.rows.get(position)
    }

    pub fn insert(&mut self, item: StockItem, source: usize) {
        self.rows.push(TableRow { item, source });
    }

    pub fn update(&mut self, position: usize, item: StockItem) -> Result<()> {
        let row = self
            .rows
            .get_mut(position)
            .ok_or(StockError::RowNotFound(RowIndex::from_position(position)))?;
        row.item = item;
        Ok(())
    }

    /// Removes the rows at `positions` and returns them in table order.
    ///
    /// Remaining rows keep their relative order. Their sources are shifted down so they
    /// keep pointing at the same records once the removed ones are gone from the file.
    pub fn delete(&mut self, positions: &[usize]) -> Result<Vec<TableRow>> {
        let mut doomed: Vec<usize> = positions.to_vec();
        doomed.sort_unstable();
        doomed.dedup();
        if let Some(&bad) = doomed.iter().find(|&&p| p >= self.rows.len()) {
            return Err(StockError::RowNotFound(RowIndex::from_position(bad)));
        }

        let mut removed = Vec::with_capacity(doomed.len());
        let mut kept = Vec::with_capacity(self.rows.len() - doomed.len());
        for (position, row) in self.rows.drain(..).enumerate() {
            if doomed.binary_search(&position).is_ok() {
                removed.push(row);
            } else {
                kept.push(row);
            }
        }

        let mut removed_sources: Vec<usize> = removed.iter().map(|row| row.source).collect();
        removed_sources.sort_unstable();
        for row in &mut kept {
            let shift = removed_sources.partition_point(|&s| s < row.source);
            row.source -= shift;
        }

        self.rows = kept;
        self.selection.clear();
        Ok(removed)
    }

    pub fn replace_all(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
        self.selection.clear();
    }

    pub fn select(&mut self, positions: &[usize]) -> Result<()> {
        let mut selection: Vec<usize> = positions.to_vec();
        selection.sort_unstable();
        selection.dedup();
        if let Some(&bad) = selection.iter().find(|&&p| p >= self.rows.len()) {
            return Err(StockError::RowNotFound(RowIndex::from_position(bad)));
        }
        self.selection = selection;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn is_selected(&self, position: usize) -> bool {
        self.selection.binary_search(&position).is_ok()
    }

    /// The row edits apply to when several are selected: the first one.
    pub fn primary_selection(&self) -> Option<usize> {
        self.selection.first().copied()
    }
}
