//! # stockman CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/stockman/cli/`, while this file
//! only invokes `cli::run()` and turns its outcome into the process exit status.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                          │
//! │  - clap argument parsing (setup.rs)                        │
//! │  - Context wiring + dispatch (commands.rs)                 │
//! │  - Interactive session (shell.rs)                          │
//! │  - Terminal rendering via minijinja templates (render.rs)  │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Owns the session state (table, selection, form)         │
//! │  - Returns structured `CmdResult` values                   │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*)                                │
//! │  - Business logic over a `RecordStore`                     │
//! │  - No knowledge of stdout/stderr or process exits          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer is responsible for
//! argument parsing, context initialization, dispatch, error presentation and rendering.
//!
//! ## Testing Approach
//!
//! - **Commands**: unit tests against `InMemoryStore`.
//! - **API**: tests that state (filter, selection, form) carries across calls.
//! - **CLI**: parsing tests in `setup.rs`, canned-data tests in `render.rs`, line-by-line
//!   session tests in `shell.rs`, and end-to-end runs of the binary in `tests/`.

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
