//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as stand-alone `.tmp` files,
//! which are easier to edit and diff than string literals buried in Rust. They are
//! embedded at compile time, so the binary stays self-contained.
//!
//! Conventions:
//!
//!     1. Line breaks are explicit (`{{ "\n" }}`) and every tag trims the whitespace
//!     around it. A template's layout on disk never leaks into the output.
//!
//!     2. Layout math (column widths, padding) happens in `render.rs`, which has
//!     unicode-aware width handling. Templates receive ready-to-print strings.
//!
//!     3. Style selection is data: the renderer passes the style name
//!     (`row.style`) instead of the template branching on `is_low`.
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const FORM_TEMPLATE: &str = include_str!("templates/form.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
