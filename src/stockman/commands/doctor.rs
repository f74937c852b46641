use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Reports lines `load` would skip and records with unusable quantities.
/// With `fix`, rewrites the data file with only the loadable records.
pub fn run<S: RecordStore>(store: &mut S, fix: bool) -> Result<CmdResult> {
    let report = store.scan()?;
    let non_numeric: Vec<_> = report
        .items
        .iter()
        .filter(|item| item.quantity_value().is_none())
        .collect();
    let mut result = CmdResult::default();

    if report.malformed.is_empty() && non_numeric.is_empty() {
        result.add_message(CmdMessage::success("No inconsistencies found."));
        return Ok(result);
    }

    if !report.malformed.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "{} malformed line(s) are skipped when loading:",
            report.malformed.len()
        )));
        for line in &report.malformed {
            result.add_message(CmdMessage::info(format!(
                "  - line {}: {:?}",
                line.line_number, line.content
            )));
        }
    }

    for item in &non_numeric {
        result.add_message(CmdMessage::warning(format!(
            "  - {} has a non-numeric quantity: {:?}",
            item.name, item.quantity
        )));
    }

    if fix && !report.malformed.is_empty() {
        store.save(&report.items)?;
        result.add_message(CmdMessage::success(format!(
            "Removed {} malformed line(s).",
            report.malformed.len()
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::sample_store;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn clean_store_has_no_findings() {
        let mut store = sample_store();
        let result = run(&mut store, false).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "No inconsistencies found.");
    }

    #[test]
    fn reports_without_fixing_by_default() {
        let mut store = InMemoryStore::from_text("A|Drinks|1\nbroken line\nB|Snacks|x\n");
        let result = run(&mut store, false).unwrap();

        assert!(result.messages.iter().any(|m| m.content.contains("line 2")));
        assert!(result.messages.iter().any(|m| m.content.contains("B has a non-numeric")));
        assert!(store.text().contains("broken line"));
    }

    #[test]
    fn trailing_blank_lines_are_left_alone() {
        let mut store = InMemoryStore::from_text("A|Drinks|1\n\n");
        let result = run(&mut store, true).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "No inconsistencies found.");
        assert_eq!(store.text(), "A|Drinks|1\n\n");
    }

    #[test]
    fn fix_drops_malformed_lines() {
        let mut store = InMemoryStore::from_text("A|Drinks|1\nbroken line\n");
        run(&mut store, true).unwrap();
        assert_eq!(store.text(), "A|Drinks|1\n");
    }
}
