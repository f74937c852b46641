use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::form::ItemForm;
use crate::index::{index_rows, RowIndex};
use crate::store::RecordStore;
use crate::table::InventoryTable;
use tracing::info;

/// Overwrites the selected row (the first one, if several are selected) with the form.
pub fn run<S: RecordStore>(
    store: &mut S,
    table: &mut InventoryTable,
    form: &mut ItemForm,
) -> Result<CmdResult> {
    let position = table
        .primary_selection()
        .ok_or(StockError::NoSelection("select an item to update"))?;
    let item = form.validate()?;

    let source = table
        .get(position)
        .map(|row| row.source)
        .ok_or(StockError::RowNotFound(RowIndex::from_position(position)))?;

    let mut records = store.load()?;
    let record = records.get_mut(source).ok_or_else(|| {
        StockError::Store(format!(
            "Row {} points past the end of the data file; reload and try again",
            RowIndex::from_position(position)
        ))
    })?;
    *record = item.clone();
    store.save(&records)?;

    table.update(position, item.clone())?;
    form.clear();
    info!(row = position + 1, name = %item.name, quantity = %item.quantity, "item updated");

    let mut result = CmdResult::default()
        .with_listed_rows(index_rows(table))
        .with_affected_items(vec![item.clone()]);
    result.add_message(CmdMessage::success(format!(
        "{} updated successfully!",
        item.name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::filter;
    use crate::commands::fixtures::{open_table, sample_store};
    use crate::model::{CategoryFilter, StockItem, StockLevel};

    #[test]
    fn overwrites_selected_row_in_place() {
        let mut store = sample_store();
        let mut table = open_table(&store);
        table.select(&[1]).unwrap();
        let mut form = ItemForm::new("B", "Snacks", "2");

        let result = run(&mut store, &mut table, &mut form).unwrap();

        let stored = store.load().unwrap();
        assert_eq!(stored[1], StockItem::new("B", "Snacks", "2"));
        assert_eq!(stored[0].name, "A");
        assert_eq!(stored[2].name, "C");
        assert_eq!(result.listed_rows[1].level, StockLevel::Low);
        assert!(form.is_empty());
        assert_eq!(result.messages[0].content, "B updated successfully!");
    }

    #[test]
    fn requires_a_selection() {
        let mut store = sample_store();
        let mut table = open_table(&store);
        let mut form = ItemForm::new("B", "Snacks", "2");

        let err = run(&mut store, &mut table, &mut form).unwrap_err();
        assert!(matches!(err, StockError::NoSelection(_)));
        assert_eq!(store.load().unwrap()[1].quantity, "10");
    }

    #[test]
    fn no_selection_is_reported_before_validation() {
        let mut store = sample_store();
        let mut table = open_table(&store);
        let mut form = ItemForm::default();

        let err = run(&mut store, &mut table, &mut form).unwrap_err();
        assert!(matches!(err, StockError::NoSelection(_)));
    }

    #[test]
    fn invalid_input_leaves_store_untouched() {
        let mut store = sample_store();
        let mut table = open_table(&store);
        table.select(&[0]).unwrap();
        let before = store.text().to_string();

        let mut form = ItemForm::new("A", "Drinks", "3.5");
        assert!(matches!(
            run(&mut store, &mut table, &mut form),
            Err(StockError::InvalidQuantity(_))
        ));
        let mut form = ItemForm::new("A", "Drinks", "");
        assert!(matches!(
            run(&mut store, &mut table, &mut form),
            Err(StockError::MissingField(_))
        ));
        assert_eq!(store.text(), before);
    }

    #[test]
    fn update_through_filtered_view_keeps_hidden_rows() {
        let mut store = sample_store();
        let mut table = open_table(&store);
        filter::run(&store, &mut table, &CategoryFilter::Only("Drinks".into())).unwrap();
        // Visible: A (source 0), C (source 2)
        table.select(&[1]).unwrap();
        let mut form = ItemForm::new("C", "Drinks", "1");

        run(&mut store, &mut table, &mut form).unwrap();

        let stored = store.load().unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[1], StockItem::new("B", "Snacks", "10"));
        assert_eq!(stored[2], StockItem::new("C", "Drinks", "1"));
    }
}
