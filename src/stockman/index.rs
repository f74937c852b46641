//! # Row Numbers
//!
//! The operator addresses rows by their 1-based position in the visible table, the same
//! number the listing prints next to each row. Internally the table works with 0-based
//! positions; [`RowIndex`] is the only place that converts between the two.
//!
//! Row numbers are positional, not stable identities: deleting row 2 renumbers every row
//! after it, and filtering renumbers the whole view.

use crate::classify::classify_item;
use crate::model::{StockItem, StockLevel};
use crate::table::InventoryTable;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RowIndex(usize);

impl RowIndex {
    /// Builds a row number from a 0-based table position.
    pub fn from_position(position: usize) -> Self {
        RowIndex(position + 1)
    }

    /// The 0-based table position this row number points at.
    pub fn position(&self) -> usize {
        self.0 - 1
    }

    pub fn number(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RowIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Row numbers start at 1".to_string()),
            Ok(n) => Ok(RowIndex(n)),
            Err(_) => Err(format!("Invalid row number: {}", s)),
        }
    }
}

/// A visible row as the client shows it: number, values and stock level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub index: RowIndex,
    pub item: StockItem,
    pub level: StockLevel,
    pub selected: bool,
}

/// Numbers and classifies every row of the visible table, in table order.
pub fn index_rows(table: &InventoryTable) -> Vec<DisplayRow> {
    table
        .rows()
        .iter()
        .enumerate()
        .map(|(position, row)| DisplayRow {
            index: RowIndex::from_position(position),
            item: row.item.clone(),
            level: classify_item(&row.item),
            selected: table.is_selected(position),
        })
        .collect()
}
