//! Low-stock classification.
//!
//! Purely presentational: levels are derived from the current quantities every time they
//! are needed and never stored. A quantity that doesn't parse can't be known to be low,
//! so it classifies as [`StockLevel::Normal`].

use crate::model::{StockItem, StockLevel};
use serde::Serialize;

pub fn classify_item(item: &StockItem) -> StockLevel {
    item.quantity_value()
        .map(StockLevel::of)
        .unwrap_or(StockLevel::Normal)
}

pub fn classify<'a, I>(items: I) -> Vec<StockLevel>
where
    I: IntoIterator<Item = &'a StockItem>,
{
    items.into_iter().map(classify_item).collect()
}

/// An item that should show up in the low-stock alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockEntry {
    pub name: String,
    pub quantity: i64,
}

pub fn low_stock<'a, I>(items: I) -> Vec<LowStockEntry>
where
    I: IntoIterator<Item = &'a StockItem>,
{
    items
        .into_iter()
        .filter_map(|item| {
            let quantity = item.quantity_value()?;
            StockLevel::of(quantity).is_low().then(|| LowStockEntry {
                name: item.name.clone(),
                quantity,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_below_five_as_low() {
        let items = [
            StockItem::new("A", "Drinks", "0"),
            StockItem::new("B", "Drinks", "4"),
            StockItem::new("C", "Drinks", "5"),
            StockItem::new("D", "Drinks", "100"),
        ];
        assert_eq!(
            classify(&items),
            vec![
                StockLevel::Low,
                StockLevel::Low,
                StockLevel::Normal,
                StockLevel::Normal
            ]
        );
    }

    #[test]
    fn unparsable_quantity_is_normal() {
        assert_eq!(
            classify_item(&StockItem::new("A", "", "lots")),
            StockLevel::Normal
        );
    }

    #[test]
    fn low_stock_lists_names_with_quantities() {
        let items = [
            StockItem::new("Milk", "Dairy", "2"),
            StockItem::new("Chips", "Snacks", "20"),
            StockItem::new("Juice", "Drinks", "4"),
        ];
        let low = low_stock(&items);
        assert_eq!(
            low,
            vec![
                LowStockEntry {
                    name: "Milk".into(),
                    quantity: 2
                },
                LowStockEntry {
                    name: "Juice".into(),
                    quantity: 4
                },
            ]
        );
    }
}
