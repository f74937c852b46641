use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_rows;
use crate::model::CategoryFilter;
use crate::store::RecordStore;
use crate::table::{InventoryTable, TableRow};
use tracing::debug;

/// Rebuilds the visible table from the data file, keeping only rows in `filter`.
///
/// Always starts from the stored records rather than the current view, so switching from
/// one category to another never filters an already-filtered table. Nothing is written.
pub fn run<S: RecordStore>(
    store: &S,
    table: &mut InventoryTable,
    filter: &CategoryFilter,
) -> Result<CmdResult> {
    let rows: Vec<TableRow> = store
        .load()?
        .into_iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(item))
        .map(|(source, item)| TableRow { item, source })
        .collect();
    debug!(filter = %filter, visible = rows.len(), "filter applied");
    table.replace_all(rows);

    let mut result = CmdResult::default().with_listed_rows(index_rows(table));
    if table.is_empty() {
        if let CategoryFilter::Only(category) = filter {
            result.add_message(CmdMessage::info(format!(
                "No items in category \"{}\".",
                category
            )));
        }
    }
    Ok(result)
}
