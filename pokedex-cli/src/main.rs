//! pokedex CLI
//!
//! Browse the Pokémon catalog with Japanese names and descriptions.

mod commands;
mod error;
mod format;
mod spinner;

use std::io::Write;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse the Pokémon catalog in Japanese", long_about = None)]
struct Cli {
    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every provider request
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of the catalog
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Entries per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Show a single entry by national number
    Show {
        /// National number (e.g., 25)
        id: u32,
    },

    /// Search entries by Japanese or English name
    Search {
        /// Name fragment (e.g., ピカ or pika)
        query: String,

        /// Page of matches, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show resolved settings and their sources
    Show,

    /// Print the config file path
    Path,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::List { page, page_size } => commands::list::run_list(page, page_size, cli.quiet),
        Commands::Show { id } => commands::show::run_show(id, cli.quiet),
        Commands::Search { query, page } => {
            commands::search::run_search(&query, page, cli.quiet)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    };

    if let Err(e) = result {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(e.exit_code());
    }
}

/// Messages are user output, so the logger prints them bare on stdout.
fn init_logger(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("pokedex", level)
        .filter_module("pokedex_client", level)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

pub(crate) fn log_blank() {
    log::info!("");
}
