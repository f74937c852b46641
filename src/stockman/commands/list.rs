use crate::commands::CmdResult;
use crate::index::index_rows;
use crate::table::InventoryTable;

pub fn run(table: &InventoryTable) -> CmdResult {
    CmdResult::default().with_listed_rows(index_rows(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{open_table, sample_store};
    use crate::model::StockLevel;

    #[test]
    fn lists_visible_rows_with_levels() {
        let store = sample_store();
        let table = open_table(&store);

        let result = run(&table);
        let levels: Vec<_> = result.listed_rows.iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![StockLevel::Low, StockLevel::Normal, StockLevel::Normal]
        );
    }
}
