use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::index::index_rows;
use crate::store::RecordStore;
use crate::table::InventoryTable;
use tracing::info;

/// Removes every selected row from the view and the data file.
pub fn run<S: RecordStore>(store: &mut S, table: &mut InventoryTable) -> Result<CmdResult> {
    if table.selection().is_empty() {
        return Err(StockError::NoSelection("select an item to delete"));
    }

    let positions = table.selection().to_vec();
    let mut sources: Vec<usize> = positions
        .iter()
        .filter_map(|&p| table.get(p).map(|row| row.source))
        .collect();
    sources.sort_unstable();
    sources.dedup();

    let records = store.load()?;
    let remaining: Vec<_> = records
        .into_iter()
        .enumerate()
        .filter(|(i, _)| sources.binary_search(i).is_err())
        .map(|(_, item)| item)
        .collect();
    store.save(&remaining)?;

    let removed = table.delete(&positions)?;
    let removed: Vec<_> = removed.into_iter().map(|row| row.item).collect();
    info!(count = removed.len(), "items deleted");

    let mut result = CmdResult::default()
        .with_listed_rows(index_rows(table))
        .with_affected_items(removed);
    result.add_message(CmdMessage::success(
        "Selected item(s) deleted successfully.",
    ));
    Ok(result)
}
