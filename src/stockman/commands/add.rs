use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::ItemForm;
use crate::index::index_rows;
use crate::store::RecordStore;
use crate::table::InventoryTable;
use tracing::info;

pub fn run<S: RecordStore>(
    store: &mut S,
    table: &mut InventoryTable,
    form: &mut ItemForm,
) -> Result<CmdResult> {
    let item = form.validate()?;

    let mut records = store.load()?;
    records.push(item.clone());
    store.save(&records)?;

    table.insert(item.clone(), records.len() - 1);
    form.clear();
    info!(name = %item.name, category = %item.category, quantity = %item.quantity, "item added");

    let mut result = CmdResult::default()
        .with_listed_rows(index_rows(table))
        .with_affected_items(vec![item.clone()]);
    result.add_message(CmdMessage::success(format!(
        "{} added successfully!",
        item.name
    )));
    Ok(result)
}
