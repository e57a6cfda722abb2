//! simscore: Query-to-label similarity scoring and top-K retrieval
//!
//! Scores short free-text queries against candidate labels on a 0-100 scale,
//! either as a pass/fail threshold check or as ranked retrieval.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use simscore::cli::{self, OutputFormat};
use simscore::config::{self, SearchConfig};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with strategy info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nScoring Strategies:",
        "\n  bigram-cosine (default), penalized-cosine, jaccard, jaro-winkler, levenshtein",
        "\n\nOutput Formats:",
        "\n  text, json"
    )
}

#[derive(Parser)]
#[command(name = "simscore")]
#[command(version, long_version = build_long_version())]
#[command(about = "Query-to-label similarity scoring and top-K retrieval", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Match found / results returned
    1  No match, no results, or error

EXAMPLES:
    # Does the query clear the threshold for this label?
    simscore check \"adm\" \"Adamant platebody\"

    # Rank a label file against a query
    simscore rank \"rune scim\" --labels items.txt --top 10

    # JSON output with a different strategy
    simscore rank \"adm plate\" -l items.txt -s jaro-winkler -o json

    # Expand abbreviations from a table before scoring
    simscore check \"rune scimmy\" \"Rune scimitar\" --abbreviations abbrev.json

    # List available strategies
    simscore strategies")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs (extracted for readability)
// ============================================================================

/// Arguments for the `check` subcommand
#[derive(Parser)]
struct CheckArgs {
    /// Query text to score
    query: String,

    /// Candidate label to score against
    label: String,

    /// Minimum score (1-100) for the label to count as a match
    #[arg(short, long)]
    threshold: Option<u8>,

    /// Scoring strategy (see `simscore strategies`)
    #[arg(short, long)]
    strategy: Option<String>,

    /// Configuration preset (strict, balanced, lenient), replaces --config
    #[arg(long)]
    preset: Option<String>,

    /// Path to a JSON abbreviation table
    #[arg(long, env = "SIMSCORE_ABBREVIATIONS")]
    abbreviations: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,
}

/// Arguments for the `rank` subcommand
#[derive(Parser)]
struct RankArgs {
    /// Query text to score
    query: String,

    /// Path to a label file (one label per line)
    #[arg(short, long)]
    labels: PathBuf,

    /// Maximum number of results to return
    #[arg(short, long)]
    top: Option<usize>,

    /// Scoring strategy (see `simscore strategies`)
    #[arg(short, long)]
    strategy: Option<String>,

    /// Path to a JSON abbreviation table
    #[arg(long, env = "SIMSCORE_ABBREVIATIONS")]
    abbreviations: Option<PathBuf>,

    /// Print every candidate score to stderr before ranking
    #[arg(long)]
    scores: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,
}

/// Arguments for the `strategies` subcommand
#[derive(Parser)]
struct StrategiesArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one query/label pair against the filter threshold
    Check(CheckArgs),

    /// Rank a label file against a query and return the top results
    Rank(RankArgs),

    /// List available scoring strategies
    Strategies(StrategiesArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate a man page and print it to stdout
    Man,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let ansi = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(ansi),
        )
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Check(args) => {
            let mut config = match args.preset.as_deref() {
                Some(name) => SearchConfig::from_preset(name)
                    .with_context(|| format!("unknown preset: {name}"))?,
                None => load_config(cli.config.as_deref())?,
            };
            if let Some(threshold) = args.threshold {
                config.filter_threshold = threshold;
            }
            if let Some(strategy) = args.strategy {
                config.strategy = strategy;
            }
            if let Some(table) = args.abbreviations {
                config.abbreviations = Some(table);
            }
            cli::run_check(&args.query, &args.label, &config, args.output)
        }

        Commands::Rank(args) => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(top) = args.top {
                config.max_results = top;
            }
            if let Some(strategy) = args.strategy {
                config.strategy = strategy;
            }
            if let Some(table) = args.abbreviations {
                config.abbreviations = Some(table);
            }
            if args.scores {
                config.score_debug = true;
            }
            cli::run_rank(&args.query, &args.labels, &config, args.output)
        }

        Commands::Strategies(args) => cli::run_strategies(args.output),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "simscore", &mut io::stdout());
            Ok(())
        }

        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buf = Vec::new();
            man.render(&mut buf).context("failed to render man page")?;
            io::stdout().write_all(&buf)?;
            Ok(())
        }
    }
}

/// Load configuration from the explicit path, or defaults when none is given.
fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let (config, loaded_from) = config::load_or_default(path)?;
    if let Some(path) = &loaded_from {
        tracing::debug!(path = %path.display(), "loaded configuration file");
    }
    Ok(config)
}
