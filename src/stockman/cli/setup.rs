use super::styles;
use super::templates::HELP_TEMPLATE;
use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

const ABOUT: &str = "Flat-file inventory tracker with low-stock alerts";

#[derive(Parser, Debug)]
#[command(
    name = "stockman",
    bin_name = "stockman",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = ABOUT, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the per-user inventory instead of the project one
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Data file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<String>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Inventory,
    Reports,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Inventory => "Inventory Commands:",
            CommandGroup::Reports => "Reports:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "add" | "update" | "delete" | "show" => Some(CommandGroup::Inventory),
            "analytics" | "alerts" => Some(CommandGroup::Reports),
            "shell" | "doctor" | "config" | "init" | "path" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Inventory,
            CommandGroup::Reports,
            CommandGroup::Misc,
        ]
    }
}

#[derive(Serialize)]
struct HelpCommand {
    name: String,
    about: String,
}

#[derive(Serialize)]
struct HelpGroup {
    heading: &'static str,
    commands: Vec<HelpCommand>,
}

#[derive(Serialize)]
struct HelpData {
    title: String,
    about: &'static str,
    usage: &'static str,
    groups: Vec<HelpGroup>,
    options: Vec<&'static str>,
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    let groups = CommandGroup::all()
        .iter()
        .map(|group| HelpGroup {
            heading: group.heading(),
            commands: subcommands
                .iter()
                .filter(|sc| {
                    !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
                })
                .map(|sc| HelpCommand {
                    name: format!("  {:<12}", sc.get_name()),
                    about: sc.get_about().map(|s| s.to_string()).unwrap_or_default(),
                })
                .collect(),
        })
        .filter(|group| !group.commands.is_empty())
        .collect();

    let data = HelpData {
        title: format!("stockman {version}"),
        about: ABOUT,
        usage: "Usage: stockman [OPTIONS] [COMMAND]",
        groups,
        options: vec![
            "  -g, --global       Use the per-user inventory",
            "  -f, --file <PATH>  Data file to use instead of the configured one",
            "  -v, --verbose      Verbose output",
            "      --no-color     Disable colored output",
            "  -h, --help         Print help",
            "  -V, --version      Print version",
        ],
    };

    styles::render(HELP_TEMPLATE, &data).unwrap_or_else(|_| {
        format!("stockman {version}\n{ABOUT}\n\nUsage: stockman [OPTIONS] [COMMAND]\n")
    })
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a single subcommand, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name || subcmd.get_all_aliases().any(|a| a == name) {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

/// Prints help for the subcommand the user asked `--help` on.
pub fn print_subcommand_help(command: &Option<Commands>) {
    match command {
        Some(command) => print_help_for_command(command.name()),
        None => print_grouped_help(),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Inventory(InventoryCommands),

    #[command(flatten)]
    Reports(ReportCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Inventory(c) => match c {
                InventoryCommands::List { .. } => "list",
                InventoryCommands::Add { .. } => "add",
                InventoryCommands::Update { .. } => "update",
                InventoryCommands::Delete { .. } => "delete",
                InventoryCommands::Show { .. } => "show",
            },
            Commands::Reports(c) => match c {
                ReportCommands::Analytics => "analytics",
                ReportCommands::Alerts => "alerts",
            },
            Commands::Misc(c) => match c {
                MiscCommands::Shell => "shell",
                MiscCommands::Doctor { .. } => "doctor",
                MiscCommands::Config { .. } => "config",
                MiscCommands::Init => "init",
                MiscCommands::Path => "path",
                MiscCommands::Help { .. } => "help",
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum InventoryCommands {
    /// List items, optionally only one category
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Category to show ("All" shows everything)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add an item
    #[command(alias = "a", display_order = 2)]
    Add {
        /// Item name
        name: String,

        /// Quantity in stock (whole number, 0 or more)
        #[arg(allow_hyphen_values = true)]
        quantity: String,

        /// Category
        #[arg(short, long, default_value = "")]
        category: String,
    },

    /// Change an item's name, category or quantity
    #[command(alias = "up", display_order = 3)]
    Update {
        /// Row number as shown by `list`
        row: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New quantity
        #[arg(long, allow_hyphen_values = true)]
        quantity: Option<String>,
    },

    /// Delete one or more items
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Row numbers as shown by `list` (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        rows: Vec<String>,
    },

    /// Show one item's fields
    #[command(alias = "v", display_order = 5)]
    Show {
        /// Row number as shown by `list`
        row: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals, extremes, average and items per category
    #[command(alias = "stats", display_order = 10)]
    Analytics,

    /// List items running low (quantity below 5)
    #[command(display_order = 11)]
    Alerts,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Interactive session with selection and an item form
    #[command(display_order = 20)]
    Shell,

    /// Report (and optionally drop) unreadable lines in the data file
    #[command(display_order = 21)]
    Doctor {
        /// Rewrite the data file without the malformed lines
        #[arg(long)]
        fix: bool,
    },

    /// Get or set configuration
    #[command(display_order = 22)]
    Config {
        /// Configuration key (data-file, categories, startup-alert)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the config and an empty data file
    #[command(display_order = 23)]
    Init,

    /// Print the data file path
    #[command(display_order = 24)]
    Path,

    /// Print help for stockman or a subcommand
    #[command(display_order = 25)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
