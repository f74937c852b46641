use crate::commands::CmdResult;
use crate::error::Result;
use crate::form::ItemForm;
use crate::index::{index_rows, RowIndex};
use crate::table::InventoryTable;

/// Selects rows and copies the first selected row into the form.
pub fn run(table: &mut InventoryTable, form: &mut ItemForm, rows: &[RowIndex]) -> Result<CmdResult> {
    let positions: Vec<usize> = rows.iter().map(RowIndex::position).collect();
    table.select(&positions)?;

    if let Some(row) = table.primary_selection().and_then(|p| table.get(p)) {
        form.populate(&row.item);
    }

    Ok(CmdResult::default()
        .with_listed_rows(index_rows(table))
        .with_form(form.clone()))
}
