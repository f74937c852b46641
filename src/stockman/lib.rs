//! # Stockman Architecture
//!
//! Stockman is a **UI-agnostic inventory library**. The command-line binary is one client of
//! it; the same core could sit behind a desktop form, a TUI or a web page.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, runs the shell         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the application state: table, form, active filter  │
//! │  - Normalizes inputs (row numbers → table positions)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Add / update / delete / filter / analytics / alerts      │
//! │  - Functions over explicit (store, table, form) arguments   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait over the `name|category|quantity` file │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ground Truth vs. the Visible Table
//!
//! The data file is the ground truth. The [`table::InventoryTable`] is what the operator
//! currently sees, possibly narrowed by a category filter. Every table row remembers the
//! position of its record in the data file, so edits made through a filtered view are
//! written back to the right line and never drop the rows the filter hides.
//!
//! ## Errors as Values
//!
//! Validation failures (missing fields, bad quantities, nothing selected, empty data set)
//! come back as typed [`error::StockError`] variants. The core never pops up, prints or
//! exits; the client decides how loud each failure is.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and application state
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the line codec
//! - [`table`]: The visible inventory table and its selection
//! - [`form`]: The editable item fields and their validation
//! - [`classify`]: Low-stock classification
//! - [`model`]: Core data types (`StockItem`, `StockLevel`, `CategoryFilter`, `Scope`)
//! - [`index`]: User-facing row numbers
//! - [`config`]: Configuration management
//! - [`init`]: Scope and data file resolution
//! - [`error`]: Error types

pub mod api;
pub mod classify;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod index;
pub mod init;
pub mod model;
pub mod store;
pub mod table;
