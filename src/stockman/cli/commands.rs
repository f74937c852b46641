//! # CLI Layer
//!
//! This module is **one possible UI client** for stockman; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Decides the process exit status
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Initialize `AppContext` with API, scope, and configuration
//! 3. **API Dispatch**: Call the appropriate `StockApi` method
//! 4. **Output Formatting**: Convert `CmdResult` into terminal output
//! 5. **Error Handling**: Turn rejected operations into warnings or errors on stdout,
//!    and everything else into `Error: ...` on stderr
//!
//! ## Exit Status
//!
//! A rejected operation (missing field, bad quantity, no such row) exits with 1 after
//! printing its message. "No data available." is informational and exits with 0.

use super::logging;
use super::render::{print_messages, render_form, render_stats, render_table, render_text_list};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands,
    InventoryCommands, MiscCommands, ReportCommands,
};
use super::shell;
use super::styles;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use stockman::api::{CmdMessage, ConfigAction, ItemEdit, MessageLevel, StockApi};
use stockman::error::{Result, StockError};
use stockman::init::initialize;
use stockman::model::{CategoryFilter, Scope};
use stockman::store::fs::FileStore;

pub(super) const EMPTY_TABLE: &str = "No items found.";

pub(super) struct AppContext {
    pub api: StockApi<FileStore>,
    pub scope: Scope,
    pub startup_alert: bool,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.no_color {
        styles::disable_color();
    }
    logging::init(cli.verbose);

    // At top level use grouped help, for subcommands use clap's default
    if cli.help {
        print_subcommand_help(&cli.command);
        return Ok(ExitCode::SUCCESS);
    }

    // Help doesn't need an inventory
    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        handle_help(command.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let mut ctx = init_context(&cli)?;

    let outcome = match cli.command {
        Some(Commands::Inventory(cmd)) => match cmd {
            InventoryCommands::List { category } => handle_list(&mut ctx, category, false),
            InventoryCommands::Add {
                name,
                quantity,
                category,
            } => handle_add(&mut ctx, name, category, quantity),
            InventoryCommands::Update {
                row,
                name,
                category,
                quantity,
            } => handle_update(
                &mut ctx,
                row,
                ItemEdit {
                    name,
                    category,
                    quantity,
                },
            ),
            InventoryCommands::Delete { rows } => handle_delete(&mut ctx, rows),
            InventoryCommands::Show { row } => handle_show(&mut ctx, row),
        },
        Some(Commands::Reports(cmd)) => match cmd {
            ReportCommands::Analytics => handle_analytics(&ctx),
            ReportCommands::Alerts => handle_alerts(&ctx),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Shell => shell::run(&mut ctx),
            MiscCommands::Doctor { fix } => handle_doctor(&mut ctx, fix),
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Init => handle_init(&ctx),
            MiscCommands::Path => handle_path(&ctx),
            MiscCommands::Help { command } => {
                handle_help(command.as_deref());
                Ok(())
            }
        },
        None => {
            let alert = ctx.startup_alert;
            handle_list(&mut ctx, None, alert)
        }
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match rejection_message(&err) {
            Some(message) => {
                let status = if message.level == MessageLevel::Info {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                };
                print_messages(&[message]);
                Ok(status)
            }
            None => Err(err),
        },
    }
}

/// Maps an operation the core rejected to the message the operator sees.
/// Returns `None` for failures that are not about the operator's input.
pub(super) fn rejection_message(err: &StockError) -> Option<CmdMessage> {
    let content = err.to_string();
    match err {
        StockError::MissingField(_) | StockError::NoSelection(_) | StockError::RowNotFound(_) => {
            Some(CmdMessage::warning(content))
        }
        StockError::InvalidQuantity(_) | StockError::ReservedCharacter(_) => {
            Some(CmdMessage::error(content))
        }
        StockError::EmptyDataset => Some(CmdMessage::info(content)),
        _ => None,
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_file = cli.file.as_deref().map(Path::new);

    let ctx = initialize(&cwd, cli.global, data_file)?;

    Ok(AppContext {
        api: ctx.api,
        scope: ctx.scope,
        startup_alert: ctx.config.startup_alert,
    })
}

fn handle_list(ctx: &mut AppContext, category: Option<String>, alert: bool) -> Result<()> {
    let result = match category {
        Some(category) => ctx.api.filter(CategoryFilter::from(category.as_str()))?,
        None => ctx.api.list(),
    };

    print!("{}", render_table(&result.listed_rows, EMPTY_TABLE));
    print_messages(&result.messages);

    if alert {
        print_messages(&ctx.api.low_stock_alert().messages);
    }
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    category: String,
    quantity: String,
) -> Result<()> {
    let result = ctx.api.add_item(name, category, quantity)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, row: String, edit: ItemEdit) -> Result<()> {
    let result = ctx.api.update_row(row, edit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, rows: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_rows(&rows)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, row: String) -> Result<()> {
    let result = ctx.api.select_rows(&[row])?;
    if let Some(form) = &result.form {
        print!("{}", render_form(form, ctx.api.categories()));
    }
    let low = result
        .listed_rows
        .iter()
        .any(|r| r.selected && r.level.is_low());
    if low {
        print_messages(&[CmdMessage::warning("Running low (below 5).")]);
    }
    Ok(())
}

fn handle_analytics(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.analytics()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_alerts(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.low_stock_alert();
    if result.low_stock.is_empty() {
        print_messages(&[CmdMessage::success("No items are running low.")]);
    } else {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext, fix: bool) -> Result<()> {
    let result = ctx.api.doctor(fix)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(ctx.scope, action)?;

    if let Some(failure) = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
    {
        return Err(StockError::Api(failure.content.clone()));
    }

    let mut lines = Vec::new();
    if let Some(config) = &result.config {
        if key.is_none() {
            for (k, v) in config.list_all() {
                lines.push(format!("{} = {}", k, v));
            }
        }
    }
    if !lines.is_empty() {
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.data_path();
    let lines: Vec<String> = result
        .store_path
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    print!("{}", render_text_list(&lines, "No data file."));
    Ok(())
}

fn handle_help(command: Option<&str>) {
    match command {
        Some(name) => print_help_for_command(name),
        None => print_grouped_help(),
    }
}
