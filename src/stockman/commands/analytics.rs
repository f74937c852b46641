use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::model::{StockItem, StockLevel};
use crate::store::RecordStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Aggregate figures over the whole data file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockStats {
    pub total_items: usize,
    /// Sum of every numeric quantity. Wider than a single quantity so it cannot overflow.
    pub total_quantity: i128,
    pub low_stock: usize,
    pub highest: i64,
    pub lowest: i64,
    pub average: f64,
    /// Categories in order of first appearance.
    pub categories: Vec<CategoryCount>,
    /// Records whose quantity didn't parse, left out of the numeric figures.
    pub skipped: usize,
}

impl StockStats {
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average)
    }
}

/// Reads the data file (never the filtered view) and summarizes it.
pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let items = store.load()?;
    let stats = compute(&items)?;

    let mut result = CmdResult::default();
    if stats.skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} record(s) with a non-numeric quantity were left out of the figures.",
            stats.skipped
        )));
    }
    Ok(result.with_stats(stats))
}

pub fn compute(items: &[StockItem]) -> Result<StockStats> {
    if items.is_empty() {
        return Err(StockError::EmptyDataset);
    }

    let mut categories: Vec<CategoryCount> = Vec::new();
    for item in items {
        match categories.iter_mut().find(|c| c.category == item.category) {
            Some(entry) => entry.count += 1,
            None => categories.push(CategoryCount {
                category: item.category.clone(),
                count: 1,
            }),
        }
    }

    let quantities: Vec<i64> = items.iter().filter_map(StockItem::quantity_value).collect();
    let total_quantity: i128 = quantities.iter().map(|&q| i128::from(q)).sum();
    let average = if quantities.is_empty() {
        0.0
    } else {
        total_quantity as f64 / quantities.len() as f64
    };

    Ok(StockStats {
        total_items: items.len(),
        total_quantity,
        low_stock: quantities
            .iter()
            .filter(|&&q| StockLevel::of(q).is_low())
            .count(),
        highest: quantities.iter().copied().max().unwrap_or(0),
        lowest: quantities.iter().copied().min().unwrap_or(0),
        average,
        categories,
        skipped: items.len() - quantities.len(),
    })
}
