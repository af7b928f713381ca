// Phonebook - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Store + handler construction
// 4. A console host: one stdin line in, one reply on stdout

use clap::Parser;
use phonebook::app::handlers::{QueryHandlers, QuerySettings};
use phonebook::app::router;
use phonebook::app::store::RecordStore;
use phonebook::platform;
use phonebook::util;
use phonebook::util::error::PhonebookError;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Phonebook - contact export lookup.
///
/// Reads commands (`/start`, `/search <term>`) one per line from stdin and
/// writes each reply to stdout.
#[derive(Parser, Debug)]
#[command(name = "Phonebook", version, about)]
struct Cli {
    /// Contact export to load (overrides [data] file in config.toml).
    #[arg(short = 'D', long = "data")]
    data: Option<PathBuf>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Answer a single message and exit.
    #[arg(short = 'q', long = "query")]
    query: Option<String>,

    /// Load the export at startup instead of on the first /start.
    #[arg(long = "preload")]
    preload: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // The config file picks the log level, so it is read before logging is
    // up; anything it finds wrong is collected and logged afterwards.
    let mut config_warnings = Vec::new();
    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => platform::config::PlatformPaths::resolve(&mut config_warnings).config_file,
    };
    let (config, load_warnings) = platform::config::load_config(&config_path);
    config_warnings.extend(load_warnings);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        config_found = config_path.is_file(),
        "Phonebook starting"
    );
    for warning in config_warnings {
        let err = PhonebookError::from(warning);
        tracing::warn!(error = %err, "Configuration warning; using default");
    }

    let data_file = cli.data.unwrap_or(config.data_file);
    let store = Arc::new(RecordStore::new(data_file));
    let handlers = QueryHandlers::new(
        Arc::clone(&store),
        QuerySettings {
            sample_size: config.sample_size,
            search_limit: config.search_limit,
            layout: config.layout,
        },
    );

    if cli.preload {
        // Not fatal: the next /start retries the load.
        match store.load().map_err(PhonebookError::from) {
            Ok(report) => tracing::info!(records = report.records, "Preloaded contact export"),
            Err(e) => tracing::warn!(error = %e, "Preload failed; the first /start will retry"),
        }
    }

    if let Some(query) = cli.query {
        println!("{}", router::dispatch(&handlers, &query));
        return;
    }

    if let Err(e) = serve_console(&handlers) {
        tracing::error!(error = %e, "Console host stopped");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Treat each stdin line as one inbound message until EOF.
fn serve_console(handlers: &QueryHandlers) -> io::Result<()> {
    tracing::info!(source = %handlers.store().source().display(), "Ready for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = router::dispatch(handlers, &line);
        writeln!(stdout, "{reply}\n")?;
        stdout.flush()?;
    }

    tracing::info!("Input closed; shutting down");
    Ok(())
}
