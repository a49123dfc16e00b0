//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "liuyao",
    bin_name = "liuyao",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{262f} Six-line I Ching divination",
    long_about = "Liuyao casts and interprets I Ching hexagrams using the \
                  three-coin method or number casting, resolving which text \
                  to read by the classical changing-line rules.",
    after_help = "EXAMPLES:\n\
        \x20 liuyao cast coins\n\
        \x20 liuyao cast coins --seed 42\n\
        \x20 liuyao cast numbers 385 812 204\n\
        \x20 liuyao show 41\n\
        \x20 liuyao list --format table",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Cast a hexagram and resolve its reading.
    #[command(
        visible_alias = "c",
        about = "Cast a hexagram",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 liuyao cast coins\n\
            \x20 liuyao cast coins --throws 233 322 333 222 233 323\n\
            \x20 liuyao cast numbers 385 812 204\n\
            \x20 liuyao cast numbers --random"
    )]
    Cast(CastCommands),

    /// Show the catalog entry for one hexagram.
    #[command(
        about = "Show a hexagram's texts",
        after_help = "EXAMPLES:\n\
            \x20 liuyao show 1        # by King Wen number\n\
            \x20 liuyao show 111010   # by six-bit key, bottom line first"
    )]
    Show(ShowArgs),

    /// List the 64 hexagrams.
    #[command(
        visible_alias = "ls",
        about = "List the hexagram catalog",
        after_help = "EXAMPLES:\n\
            \x20 liuyao list\n\
            \x20 liuyao list --format json\n\
            \x20 liuyao list --format csv > hexagrams.csv"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 liuyao completions bash > ~/.local/share/bash-completion/completions/liuyao\n\
            \x20 liuyao completions zsh  > ~/.zfunc/_liuyao\n\
            \x20 liuyao completions fish > ~/.config/fish/completions/liuyao.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Liuyao configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 liuyao config path\n\
            \x20 liuyao config list"
    )]
    Config(ConfigCommands),
}

// ── cast ──────────────────────────────────────────────────────────────────────

/// Casting methods.
#[derive(Debug, Subcommand)]
pub enum CastCommands {
    /// Three-coin method: six throws, bottom line first.
    #[command(about = "Cast with three coins")]
    Coins(CoinsArgs),

    /// Number casting: three numbers fix the trigrams and one moving line.
    #[command(visible_alias = "nums", about = "Cast with three numbers")]
    Numbers(NumbersArgs),
}

/// Arguments for `liuyao cast coins`.
#[derive(Debug, Args)]
pub struct CoinsArgs {
    /// Seed the random oracle so the ceremony can be replayed exactly.
    #[arg(long = "seed", value_name = "SEED", help = "Seed the coin oracle")]
    pub seed: Option<u64>,

    /// Report six hand-thrown coin triples instead of letting the oracle
    /// throw.  Each triple is three digits from {2, 3}: 2 = yin face,
    /// 3 = yang face.  Bottom line first.
    #[arg(
        long = "throws",
        value_name = "TRIPLE",
        num_args = 6,
        conflicts_with = "seed",
        help = "Six coin triples, e.g. --throws 233 322 333 222 233 323"
    )]
    pub throws: Option<Vec<String>>,

    /// Prompt for each throw interactively.
    #[arg(
        short = 'i',
        long = "interactive",
        conflicts_with_all = ["seed", "throws"],
        help = "Enter each throw interactively"
    )]
    pub interactive: bool,
}

/// Arguments for `liuyao cast numbers`.
#[derive(Debug, Args)]
pub struct NumbersArgs {
    /// The three casting numbers: lower trigram, upper trigram, moving line.
    #[arg(
        value_name = "NUMBER",
        num_args = 3,
        required_unless_present = "random",
        conflicts_with = "random",
        help = "Three numbers in 1..=999"
    )]
    pub numbers: Option<Vec<u32>>,

    /// Draw the three numbers from the oracle instead of supplying them.
    #[arg(long = "random", help = "Draw three random numbers")]
    pub random: bool,

    /// Seed the oracle used by --random.
    #[arg(
        long = "seed",
        value_name = "SEED",
        requires = "random",
        help = "Seed the number draw"
    )]
    pub seed: Option<u64>,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `liuyao show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// King Wen number (1..=64) or six-bit key (bottom line first).
    #[arg(value_name = "HEXAGRAM", help = "Number 1..=64 or key like 111010")]
    pub selector: String,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `liuyao list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One hexagram name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `liuyao completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `liuyao config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing configuration file.
        #[arg(long = "force", help = "Overwrite an existing file")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
