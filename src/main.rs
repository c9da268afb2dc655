//! Word Finder - CLI
//!
//! Full-screen, line-oriented and one-shot front ends over the same matcher.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use word_finder::{
    commands::{FindConfig, find_words, run_simple},
    config::Config,
    core::{CollationKind, Dictionary, build_collation},
    logging::{self, LogSink},
    matcher::Matcher,
    output::print_match_report,
};

#[derive(Parser)]
#[command(
    name = "word_finder",
    about = "Find dictionary words spelled from a set of letters and fitting a mask",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (overrides the config file)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Locale tag used to order results, e.g. 'en' or 'ru'
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Result ordering: 'locale' (default) or 'codepoint'
    #[arg(long, global = true)]
    collation: Option<CollationKind>,

    /// Config file (default: <config dir>/word_finder/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Debug logging and search counters
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (prompts on stdin)
    Simple,

    /// Look up words once and print them
    Find {
        /// Letters available for spelling
        letters: String,

        /// Mask, '*' for any letter (quote it in the shell)
        mask: String,

        /// Print only the words, one per line
        #[arg(long)]
        plain: bool,
    },
}

/// Config file values with command-line overrides applied
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = &cli.wordlist {
        config.dictionary.clone_from(path);
    }
    if let Some(locale) = &cli.locale {
        config.locale.clone_from(locale);
    }
    if let Some(kind) = cli.collation {
        config.collation = kind;
    }
    if let Some(dir) = &cli.log_dir {
        config.logging.dir = Some(dir.clone());
    }
    Ok(config)
}

fn build_matcher(config: &Config) -> Result<Matcher> {
    let collation = build_collation(config.collation, &config.locale)
        .with_context(|| format!("Failed to set up ordering for locale '{}'", config.locale))?;
    Ok(Matcher::new(collation))
}

fn load_dictionary(config: &Config) -> Result<Dictionary> {
    Dictionary::load(&config.dictionary).with_context(|| {
        format!(
            "Failed to load word list {} (use -w to choose another)",
            config.dictionary.display()
        )
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let sink = match command {
        Commands::Play => LogSink::FileOnly,
        Commands::Simple | Commands::Find { .. } => LogSink::Stderr,
    };
    let _log_guard = logging::init(&config.logging, sink, cli.verbose)?;

    let matcher = build_matcher(&config)?;
    let dictionary = load_dictionary(&config)?;
    info!(
        words = dictionary.len(),
        ordering = %matcher.collation().describe(),
        "ready"
    );

    match command {
        Commands::Play => {
            word_finder::interactive::run_tui(dictionary, matcher, config.dictionary)
        }
        Commands::Simple => run_simple(&matcher, &dictionary).context("Simple mode failed"),
        Commands::Find {
            letters,
            mask,
            plain,
        } => {
            let mut find = FindConfig::new(letters, mask);
            find.plain = plain;
            find.verbose = cli.verbose;

            let result = find_words(&find, &matcher, &dictionary);
            print_match_report(
                &result.letters,
                &result.mask,
                &result.report,
                find.plain,
                find.verbose,
            )
            .context("Failed to write results")
        }
    }
}
