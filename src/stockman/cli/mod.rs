mod commands;
mod logging;
mod render;
mod setup;
mod shell;
mod styles;
mod templates;

pub use commands::run;
