use crate::classify::low_stock;
use crate::commands::{CmdMessage, CmdResult};
use crate::table::InventoryTable;

/// Collects the visible items that are running low, as `name (qty)`.
pub fn run(table: &InventoryTable) -> CmdResult {
    let entries = low_stock(table.items());
    let mut result = CmdResult::default();

    if !entries.is_empty() {
        let listing = entries
            .iter()
            .map(|e| format!("{} ({})", e.name, e.quantity))
            .collect::<Vec<_>>()
            .join(", ");
        result.add_message(CmdMessage::warning(format!(
            "Low stock alert: {}",
            listing
        )));
    }

    result.with_low_stock(entries)
}
