use crate::commands::{CmdMessage, CmdResult};
use crate::form::ItemForm;

/// Empties the inputs. The table and the selection are left alone.
pub fn run(form: &mut ItemForm) -> CmdResult {
    form.clear();
    let mut result = CmdResult::default().with_form(form.clone());
    result.add_message(CmdMessage::info("Fields cleared."));
    result
}
