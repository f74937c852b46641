//! # Rendering
//!
//! Turns `CmdResult` payloads into terminal text through the templates in `templates.rs`.
//!
//! Layout calculations (column widths, padding) stay in Rust because they need
//! unicode-aware widths: a name like `Café crème` must line up with `Cola`. Templates
//! only place the pre-padded strings and pick styles.
//!
//! Every public `render_*` has an `_internal` twin taking `Option<bool>` for color so
//! tests can force plain output.

use super::styles::{names, render, render_with_color};
use super::templates::{
    FORM_TEMPLATE, MESSAGES_TEMPLATE, STATS_TEMPLATE, TABLE_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use serde::Serialize;
use stockman::api::{CmdMessage, MessageLevel, StockStats};
use stockman::form::ItemForm;
use stockman::index::DisplayRow;
use unicode_width::UnicodeWidthStr;

pub const LOW_MARKER: &str = "!";
pub const SELECTED_MARKER: &str = ">";
const COLUMN_GAP: &str = "  ";

#[derive(Serialize)]
struct RowLine {
    flags: String,
    index: String,
    name: String,
    category: String,
    quantity: String,
    style: &'static str,
}

#[derive(Serialize)]
struct TableData {
    header: String,
    rows: Vec<RowLine>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct FieldLine {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct FormData {
    fields: Vec<FieldLine>,
    categories: String,
}

#[derive(Serialize)]
struct Figure {
    label: String,
    value: String,
    style: &'static str,
}

#[derive(Serialize)]
struct CategoryLine {
    bullet: &'static str,
    category: String,
    count: usize,
}

#[derive(Serialize)]
struct StatsData {
    figures: Vec<Figure>,
    categories: Vec<CategoryLine>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, minijinja::Error> {
    match use_color {
        Some(c) => render_with_color(template, data, c),
        None => render(template, data),
    }
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(fill), text)
}

/// Renders the visible table: one aligned line per row, low rows marked and styled.
pub fn render_table(rows: &[DisplayRow], empty_message: &str) -> String {
    render_table_internal(rows, empty_message, None)
}

fn render_table_internal(
    rows: &[DisplayRow],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let indexes: Vec<String> = rows.iter().map(|r| format!("{}.", r.index)).collect();
    let index_width = indexes.iter().map(|i| i.width()).max().unwrap_or(0).max(1);
    let name_width = rows
        .iter()
        .map(|r| r.item.name.width())
        .chain(std::iter::once("Name".width()))
        .max()
        .unwrap_or(0);
    let category_width = rows
        .iter()
        .map(|r| r.item.category.width())
        .chain(std::iter::once("Category".width()))
        .max()
        .unwrap_or(0);

    // Flags column is two characters wide plus a space.
    let header = format!(
        "   {}{gap}{}{gap}{}{gap}Qty",
        pad_left("#", index_width),
        pad_right("Name", name_width),
        pad_right("Category", category_width),
        gap = COLUMN_GAP
    );

    let lines = rows
        .iter()
        .zip(indexes)
        .map(|(row, index)| {
            let is_low = row.level.is_low();
            let flags = format!(
                "{}{}",
                if row.selected { SELECTED_MARKER } else { " " },
                if is_low { LOW_MARKER } else { " " }
            );
            RowLine {
                flags,
                index: pad_left(&index, index_width),
                name: pad_right(&row.item.name, name_width),
                category: pad_right(&row.item.category, category_width),
                quantity: row.item.quantity.clone(),
                style: if is_low { names::LOW } else { names::NORMAL },
            }
        })
        .collect::<Vec<_>>();

    let data = TableData {
        header,
        empty: lines.is_empty(),
        rows: lines,
        empty_message: empty_message.to_string(),
    };

    render_template(TABLE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the three input fields, then the category suggestions if there are any.
pub fn render_form(form: &ItemForm, categories: &[String]) -> String {
    render_form_internal(form, categories, None)
}

fn render_form_internal(
    form: &ItemForm,
    categories: &[String],
    use_color: Option<bool>,
) -> String {
    let fields = [
        ("Name:", &form.name),
        ("Category:", &form.category),
        ("Quantity:", &form.quantity),
    ];
    let width = fields.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
    let data = FormData {
        fields: fields
            .iter()
            .map(|(label, value)| FieldLine {
                label: pad_right(label, width),
                value: value.to_string(),
            })
            .collect(),
        categories: categories.join(", "),
    };

    render_template(FORM_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        format!(
            "Name: {}\nCategory: {}\nQuantity: {}\n",
            form.name, form.category, form.quantity
        )
    })
}

/// Renders the analytics report: six figures then the category breakdown.
pub fn render_stats(stats: &StockStats) -> String {
    render_stats_internal(stats, None)
}

fn render_stats_internal(stats: &StockStats, use_color: Option<bool>) -> String {
    let figure = |label: &str, value: String, style: &'static str| Figure {
        label: format!("  {}", label),
        value,
        style,
    };

    let mut figures = vec![
        figure("Total Item Types:", stats.total_items.to_string(), names::NORMAL),
        figure("Total Quantity:", stats.total_quantity.to_string(), names::NORMAL),
        figure(
            "Low-stock Items (<5):",
            stats.low_stock.to_string(),
            if stats.low_stock > 0 {
                names::LOW
            } else {
                names::NORMAL
            },
        ),
        figure("Highest Stock:", stats.highest.to_string(), names::NORMAL),
        figure("Lowest Stock:", stats.lowest.to_string(), names::NORMAL),
        figure("Average Stock:", stats.average_display(), names::NORMAL),
    ];
    if stats.skipped > 0 {
        figures.push(figure(
            "Non-numeric (skipped):",
            stats.skipped.to_string(),
            names::WARNING,
        ));
    }

    let data = StatsData {
        figures,
        categories: stats
            .categories
            .iter()
            .map(|c| CategoryLine {
                bullet: "  • ",
                category: c.category.clone(),
                count: c.count,
            })
            .collect(),
    };

    render_template(STATS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    render_text_list_internal(lines, empty_message, None)
}

fn render_text_list_internal(
    lines: &[String],
    empty_message: &str,
    use_color: Option<bool>,
) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

fn level_style(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

/// Renders command messages, each in its level's style.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: level_style(msg.level),
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}
