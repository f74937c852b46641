//! # Interactive Shell
//!
//! `stockman shell` keeps one [`StockApi`] alive for the whole session, so the visible
//! table, the selection and the item form carry over from one command to the next:
//!
//! ```text
//! stock> filter Drinks
//! stock> select 2
//! stock> set quantity 12
//! stock> update
//! ```
//!
//! Each line is split into words (double quotes group words, `""` is an empty value) and
//! parsed with clap. Rejected operations and input errors are printed and the session
//! goes on; storage failures end it.

use super::commands::{rejection_message, AppContext, EMPTY_TABLE};
use super::render::{
    print_messages, render_form, render_messages, render_stats, render_table, render_text_list,
};
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use stockman::api::{CmdMessage, CmdResult, StockApi};
use stockman::error::{Result, StockError};
use stockman::form::FormField;
use stockman::model::CategoryFilter;
use stockman::store::RecordStore;
use tracing::debug;

const PROMPT: &str = "stock> ";

const HELP_LINES: &[&str] = &[
    "list                       show the visible table",
    "filter CATEGORY|All        show one category, or everything",
    "select ROW...              select rows and load the first into the form",
    "set FIELD VALUE            fill name, category or quantity",
    "form                       show the form",
    "add                        add the form as a new item",
    "update                     replace the selected item with the form",
    "delete                     delete the selected items",
    "clear                      empty the form",
    "analytics                  totals over the whole data file",
    "alerts                     items running low",
    "quit                       leave the shell",
];

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    #[command(alias = "ls")]
    List,
    Filter {
        #[arg(required = true, num_args = 1..)]
        category: Vec<String>,
    },
    Select {
        #[arg(required = true, num_args = 1..)]
        rows: Vec<String>,
    },
    Set {
        #[arg(value_parser = parse_field)]
        field: FormField,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    Form,
    Add,
    Update,
    #[command(alias = "rm")]
    Delete,
    Clear,
    #[command(alias = "stats")]
    Analytics,
    Alerts,
    Help,
    #[command(alias = "exit", alias = "q")]
    Quit,
}

fn parse_field(s: &str) -> std::result::Result<FormField, String> {
    s.parse()
}

/// What the session does after a line.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Step {
    Continue(String),
    Quit,
}

pub(super) fn run(ctx: &mut AppContext) -> Result<()> {
    let mut editor = DefaultEditor::new().map_err(|e| StockError::Api(e.to_string()))?;

    print!("{}", render_table(&ctx.api.list().listed_rows, EMPTY_TABLE));
    if ctx.startup_alert {
        print_messages(&ctx.api.low_stock_alert().messages);
    }

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                match execute_line(&mut ctx.api, &line)? {
                    Step::Continue(output) => print!("{}", output),
                    Step::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(StockError::Api(e.to_string())),
        }
    }
    Ok(())
}

/// Runs one shell line against the session state and returns what to print.
pub(super) fn execute_line<S: RecordStore>(api: &mut StockApi<S>, line: &str) -> Result<Step> {
    let words = match split_words(line) {
        Ok(words) => words,
        Err(e) => return Ok(Step::Continue(render_messages(&[CmdMessage::error(e)]))),
    };
    if words.is_empty() {
        return Ok(Step::Continue(String::new()));
    }

    let command = match ShellLine::try_parse_from(&words) {
        Ok(parsed) => parsed.command,
        Err(_) => {
            return Ok(Step::Continue(render_messages(&[CmdMessage::error(format!(
                "Unknown command: {}. Type `help` for the list.",
                line.trim()
            ))])))
        }
    };
    debug!(?command, "shell command");

    if matches!(command, ShellCommand::Quit) {
        return Ok(Step::Quit);
    }

    match dispatch(api, command) {
        Ok(output) => Ok(Step::Continue(output)),
        Err(err) => match rejection_message(&err) {
            Some(message) => Ok(Step::Continue(render_messages(&[message]))),
            None => match err {
                StockError::Api(reason) => Ok(Step::Continue(render_messages(&[
                    CmdMessage::error(reason),
                ]))),
                fatal => Err(fatal),
            },
        },
    }
}

fn dispatch<S: RecordStore>(api: &mut StockApi<S>, command: ShellCommand) -> Result<String> {
    let output = match command {
        ShellCommand::List => {
            let mut out = String::new();
            if let CategoryFilter::Only(category) = api.active_filter() {
                out.push_str(&render_messages(&[CmdMessage::info(format!(
                    "Showing category: {}",
                    category
                ))]));
            }
            out.push_str(&render_table(&api.list().listed_rows, EMPTY_TABLE));
            out
        }
        ShellCommand::Filter { category } => {
            let filter = CategoryFilter::from(category.join(" ").as_str());
            table_then_messages(api.filter(filter)?)
        }
        ShellCommand::Select { rows } => {
            let result = api.select_rows(&rows)?;
            let mut out = render_table(&result.listed_rows, EMPTY_TABLE);
            if let Some(form) = &result.form {
                out.push_str(&render_form(form, api.categories()));
            }
            out
        }
        ShellCommand::Set { field, value } => {
            let result = api.set_field(field, value.join(" "));
            result
                .form
                .as_ref()
                .map(|form| render_form(form, api.categories()))
                .unwrap_or_default()
        }
        ShellCommand::Form => render_form(api.form(), api.categories()),
        ShellCommand::Add => messages_then_table(api.add()?),
        ShellCommand::Update => messages_then_table(api.update()?),
        ShellCommand::Delete => messages_then_table(api.delete()?),
        ShellCommand::Clear => render_messages(&api.clear_fields().messages),
        ShellCommand::Analytics => {
            let result = api.analytics()?;
            let mut out = result.stats.as_ref().map(render_stats).unwrap_or_default();
            out.push_str(&render_messages(&result.messages));
            out
        }
        ShellCommand::Alerts => {
            let result = api.low_stock_alert();
            if result.low_stock.is_empty() {
                render_messages(&[CmdMessage::success("No items are running low.")])
            } else {
                render_messages(&result.messages)
            }
        }
        ShellCommand::Help => {
            let mut lines: Vec<String> = HELP_LINES.iter().map(|l| format!("  {}", l)).collect();
            if !api.categories().is_empty() {
                lines.push(String::new());
                lines.push(format!("  Categories: All, {}", api.categories().join(", ")));
            }
            render_text_list(&lines, "")
        }
        ShellCommand::Quit => String::new(),
    };
    Ok(output)
}

fn table_then_messages(result: CmdResult) -> String {
    let mut out = render_table(&result.listed_rows, EMPTY_TABLE);
    out.push_str(&render_messages(&result.messages));
    out
}

fn messages_then_table(result: CmdResult) -> String {
    let mut out = render_messages(&result.messages);
    out.push_str(&render_table(&result.listed_rows, EMPTY_TABLE));
    out
}

/// Splits a line on whitespace; double quotes group words and `""` is an empty word.
pub(super) fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut in_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_quotes {
        return Err("Unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockman::api::StockPaths;
    use stockman::model::{StockItem, StockLevel};
    use stockman::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn session() -> StockApi<InMemoryStore> {
        let store = InMemoryStore::with_items(&[
            StockItem::new("A", "Drinks", "3"),
            StockItem::new("B", "Snacks", "10"),
            StockItem::new("C", "Drinks", "5"),
        ]);
        let paths = StockPaths {
            project: None,
            global: PathBuf::from("/unused"),
        };
        StockApi::open(store, paths).unwrap()
    }

    fn output(api: &mut StockApi<InMemoryStore>, line: &str) -> String {
        match execute_line(api, line).unwrap() {
            Step::Continue(text) => text,
            Step::Quit => panic!("unexpected quit on {line:?}"),
        }
    }

    #[test]
    fn split_words_handles_quotes() {
        assert_eq!(
            split_words(r#"set name "Green Tea""#).unwrap(),
            vec!["set", "name", "Green Tea"]
        );
        assert_eq!(split_words(r#"set category """#).unwrap(), vec!["set", "category", ""]);
        assert_eq!(split_words("  list  ").unwrap(), vec!["list"]);
        assert!(split_words(r#"set name "oops"#).is_err());
    }

    #[test]
    fn form_then_add() {
        let mut api = session();
        output(&mut api, r#"set name "Green Tea""#);
        output(&mut api, "set category Drinks");
        output(&mut api, "set qty 2");

        let out = output(&mut api, "add");
        assert!(out.contains("Green Tea added successfully!"));
        assert_eq!(api.table().len(), 4);
        assert!(api.form().is_empty());
    }

    #[test]
    fn missing_quantity_is_reported_and_nothing_changes() {
        let mut api = session();
        output(&mut api, "set name Cola");

        let out = output(&mut api, "add");
        assert!(out.contains("Missing info: please enter the quantity."));
        assert_eq!(api.table().len(), 3);
        assert_eq!(api.form().name, "Cola");
    }

    #[test]
    fn select_set_update() {
        let mut api = session();
        let out = output(&mut api, "select 2");
        assert!(out.contains("Snacks"));
        assert_eq!(api.form().name, "B");

        output(&mut api, "set quantity 1");
        let out = output(&mut api, "update");
        assert!(out.contains("B updated successfully!"));

        let rows = api.list().listed_rows;
        assert_eq!(rows[1].level, StockLevel::Low);
    }

    #[test]
    fn delete_without_selection_warns() {
        let mut api = session();
        let out = output(&mut api, "delete");
        assert!(out.contains("No selection: please select an item to delete."));
        assert_eq!(api.table().len(), 3);
    }

    #[test]
    fn filter_narrows_the_table() {
        let mut api = session();
        output(&mut api, "filter Drinks");
        assert_eq!(api.table().len(), 2);

        output(&mut api, "filter all");
        assert_eq!(api.table().len(), 3);
    }

    #[test]
    fn configured_categories_are_offered() {
        let mut api = session().with_categories(vec!["Tools".into(), "Paint".into()]);

        let out = output(&mut api, "help");
        assert!(out.contains("Categories: All, Tools, Paint"));

        let out = output(&mut api, "set category Tools");
        assert!(out.contains("(categories: Tools, Paint)"));
    }

    #[test]
    fn bad_row_number_does_not_end_the_session() {
        let mut api = session();
        let out = output(&mut api, "select x");
        assert!(out.contains("Invalid row number: x"));
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut api = session();
        let out = output(&mut api, "restock everything");
        assert!(out.contains("Unknown command: restock everything"));
    }

    #[test]
    fn analytics_on_empty_store_says_no_data() {
        let paths = StockPaths {
            project: None,
            global: PathBuf::from("/unused"),
        };
        let mut api = StockApi::open(InMemoryStore::new(), paths).unwrap();
        let out = output(&mut api, "analytics");
        assert!(out.contains("No data available."));
    }

    #[test]
    fn quit_and_aliases_end_the_session() {
        let mut api = session();
        assert_eq!(execute_line(&mut api, "quit").unwrap(), Step::Quit);
        assert_eq!(execute_line(&mut api, "exit").unwrap(), Step::Quit);
    }
}
