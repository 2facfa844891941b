//! Clap derive structures for the `unicorn` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

use unicorn_core::{ContactAction, Flavour};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// unicorn -- keep track of your unicorns
#[derive(Debug, Parser)]
#[command(
    name = "unicorn",
    version,
    about = "Manage unicorns from the command line",
    long_about = "List, add, edit and delete unicorns stored on a crudcrud-style\n\
        REST backend, or in a throwaway in-memory store seeded with samples.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Storage backend (overrides config)
    #[arg(long, short = 'b', env = "UNICORN_BACKEND", global = true)]
    pub backend: Option<BackendArg>,

    /// Backend base URL (overrides config)
    #[arg(long, short = 'e', env = "UNICORN_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// API secret embedded in request paths
    #[arg(long, env = "UNICORN_SECRET", global = true, hide_env = true)]
    pub secret: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "UNICORN_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "UNICORN_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides config)
    #[arg(long, env = "UNICORN_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Value Enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// crudcrud-style REST service
    Http,
    /// In-memory store seeded with sample unicorns (not persisted)
    Memory,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FlavourArg {
    Red,
    Green,
    Blue,
}

impl From<FlavourArg> for Flavour {
    fn from(arg: FlavourArg) -> Self {
        match arg {
            FlavourArg::Red => Flavour::Red,
            FlavourArg::Green => Flavour::Green,
            FlavourArg::Blue => Flavour::Blue,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ContactLink {
    Linkedin,
    Xing,
    Twitter,
}

impl From<ContactLink> for ContactAction {
    fn from(link: ContactLink) -> Self {
        match link {
            ContactLink::Linkedin => ContactAction::LinkedIn,
            ContactLink::Xing => ContactAction::Xing,
            ContactLink::Twitter => ContactAction::Twitter,
        }
    }
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all unicorns
    #[command(alias = "ls")]
    List,

    /// Show one unicorn
    Get {
        /// Unicorn id or name
        unicorn: String,
    },

    /// Add a unicorn
    Add {
        /// Name of the new unicorn
        #[arg(long, short = 'n')]
        name: String,

        #[arg(long, short = 'f', default_value = "red")]
        flavour: FlavourArg,
    },

    /// Rename a unicorn or change its flavour
    Edit {
        /// Unicorn id or name
        unicorn: String,

        #[arg(long, short = 'n')]
        name: Option<String>,

        #[arg(long, short = 'f')]
        flavour: Option<FlavourArg>,
    },

    /// Delete a unicorn
    #[command(alias = "rm")]
    Delete {
        /// Unicorn id or name
        unicorn: String,
    },

    /// Show the author's profile links
    Contact {
        link: ContactLink,
    },

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a config file from the current flags
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
