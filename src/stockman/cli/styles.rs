//! # Styles
//!
//! Terminal output goes through minijinja templates (see `templates.rs`). Templates never
//! emit ANSI codes themselves; they tag text with a semantic style name through the
//! `style` filter:
//!
//! ```text
//! {{ row.name | style("low") }}
//! ```
//!
//! and the filter looks the name up in [`STOCK_THEME`]. Changing how low-stock rows look
//! is therefore a one-line change here, not a template edit.
//!
//! Styles:
//!     * `low` rows (red, bold marker) and `normal` rows (default foreground)
//!     * `index` for row numbers, `header` for column and section titles
//!     * `muted` for placeholders such as empty form fields
//!     * message levels: `info`, `success`, `warning`, `error`
//!
//! Color is applied only when stdout supports it and `--no-color` was not given.
use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const LOW: &str = "low";
    pub const NORMAL: &str = "normal";
    pub const INDEX: &str = "index";
    pub const HEADER: &str = "header";
    pub const MUTED: &str = "muted";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// Named styles looked up by the `style` template filter.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Unknown names leave the text untouched.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            _ => text.to_string(),
        }
    }

    #[cfg(test)]
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}

pub static STOCK_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::LOW, Style::new().red().bold())
        .add(names::NORMAL, Style::new())
        .add(names::INDEX, Style::new().yellow())
        .add(names::HEADER, Style::new().bold())
        .add(names::MUTED, Style::new().dim())
        .add(names::INFO, Style::new().cyan())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::ERROR, Style::new().red().bold())
});

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Honors `--no-color` for the rest of the process.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
    console::set_colors_enabled(false);
}

pub fn use_color() -> bool {
    !COLOR_DISABLED.load(Ordering::Relaxed) && Term::stdout().features().colors_supported()
}

/// Renders `template` with the theme's `style` filter and automatic color detection.
pub fn render<T: Serialize>(template: &'static str, data: &T) -> Result<String, Error> {
    render_with_color(template, data, use_color())
}

/// Renders `template` with explicit color control.
pub fn render_with_color<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    let theme: &'static Theme = &STOCK_THEME;
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("_inline", template)?;
    env.get_template("_inline")?.render(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Data {
        text: String,
    }

    #[test]
    fn every_name_is_registered() {
        for name in [
            names::LOW,
            names::NORMAL,
            names::INDEX,
            names::HEADER,
            names::MUTED,
            names::INFO,
            names::SUCCESS,
            names::WARNING,
            names::ERROR,
        ] {
            assert!(STOCK_THEME.has(name), "missing style {name}");
        }
    }

    #[test]
    fn plain_rendering_has_no_escape_codes() {
        let out = render_with_color(
            r#"{{ text | style("low") }}"#,
            &Data {
                text: "Cola".into(),
            },
            false,
        )
        .unwrap();
        assert_eq!(out, "Cola");
    }

    #[test]
    fn unknown_style_passes_text_through() {
        let theme = Theme::new();
        assert_eq!(theme.apply("nope", "x", true), "x");
    }
}
