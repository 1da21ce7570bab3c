//! Lau Trie - Main entrypoint.
//!
//! Builds a word store from the configured word list and command-line words,
//! or a bigram model from a word pair list, then answers a single query
//! against it.

use clap::{Parser, Subcommand};
use lau_trie_lib::config::{self, ConfigLoader, LauConfig, LogConfig};
use lau_trie_lib::data_structures::{BigramModel, SuggestOptions, TrieStore};
use lau_trie_lib::error::{
    report_error, set_error_reporter, ErrorContext, LauError, LauResult, TracingErrorReporter,
};
use lau_trie_lib::loader::{self, LoadOptions};
use lau_trie_lib::VERSION;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Words inserted by the `demo` command when no word list is given.
const DEMO_WORDS: [&str; 5] = ["apple", "app", "apps", "battle", "bat"];

/// Command line arguments for the Lau trie.
#[derive(Parser, Debug)]
#[clap(name = "Lau Trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load (`word [frequency]` per line)
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Word pair list for `predict` (`prev next [count]` per line)
    #[clap(short, long, value_parser)]
    bigrams: Option<PathBuf>,

    /// Extra word to insert; may be repeated
    #[clap(long = "word", value_parser)]
    word: Vec<String>,

    /// Abort on the first invalid word list entry
    #[clap(long)]
    strict: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Insert a few sample words and list completions for "ap" and "bat"
    Demo,

    /// Check whether a word is stored
    Search {
        /// Word to look up
        word: String,
    },

    /// Check whether any stored word starts with a prefix
    StartsWith {
        /// Prefix to check
        prefix: String,
    },

    /// List every stored word starting with a prefix, alphabetically
    Complete {
        /// Prefix to enumerate (empty for all words)
        #[clap(default_value = "")]
        prefix: String,

        /// Print the result as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Suggest the most frequent completions for a prefix
    Suggest {
        /// Prefix to complete
        prefix: String,

        /// Maximum number of suggestions
        #[clap(short, long, value_parser)]
        limit: Option<usize>,

        /// Print the result as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Predict the next word, or complete the word being typed
    Predict {
        /// Words typed so far; the last one may be partial
        input: Vec<String>,

        /// Maximum number of predictions
        #[clap(short = 'k', long, value_parser)]
        top_k: Option<usize>,

        /// Print the result as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so query results on stdout stay machine readable.
fn init_logging(log: &LogConfig) -> LauResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| LauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Build the word store from configuration and command-line arguments.
fn build_store(config: &LauConfig, args: &Args, demo: bool) -> LauResult<TrieStore> {
    let mut store = TrieStore::with_config((&config.trie).into());

    let words = args.words.as_ref().or(config.load.words.as_ref());
    if let Some(path) = words {
        let options = LoadOptions::new().with_strict(args.strict || config.load.strict);
        let summary = loader::load_words_from_path(&mut store, path, options)?;
        info!(
            "Loaded {} entries ({} skipped) from {:?}",
            summary.inserted, summary.skipped, path
        );
    }

    for word in &args.word {
        store.insert(word)?;
    }

    if demo && store.is_empty() {
        for word in DEMO_WORDS {
            store.insert(word)?;
        }
    }

    info!("Store holds {} words in {} nodes", store.len(), store.node_count());
    Ok(store)
}

/// Build the bigram model from the configured or given pair list.
fn build_model(config: &LauConfig, args: &Args) -> LauResult<BigramModel> {
    let mut model = BigramModel::with_config((&config.trie).into());

    match args.bigrams.as_ref().or(config.load.bigrams.as_ref()) {
        Some(path) => {
            let options = LoadOptions::new().with_strict(args.strict || config.load.strict);
            let summary = loader::load_bigrams_from_path(&mut model, path, options)?;
            info!(
                "Loaded {} pairs ({} skipped) from {:?}",
                summary.inserted, summary.skipped, path
            );
        }
        None => tracing::warn!("No word pair list given, predictions will be empty"),
    }

    Ok(model)
}

fn print_words(words: &[String], json: bool) -> LauResult<()> {
    if json {
        println!("{}", serde_json::to_string(words)?);
    } else {
        for word in words {
            println!("{word}");
        }
    }
    Ok(())
}

/// Write the default configuration as TOML to `output`.
fn generate_config(output: &Path) -> LauResult<()> {
    info!("Generating default configuration");

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&LauConfig::default())
        .map_err(|e| LauError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> LauResult<()> {
    let mut args = <Args as clap::Parser>::parse();
    let command = args.command.take().unwrap_or(Command::Demo);

    // Generating a config must work even when the current one is broken.
    if let Command::GenConfig { output } = &command {
        init_logging(&LogConfig::default())?;
        return generate_config(output);
    }

    let config_path = config::resolve_config_path(args.config.as_deref());
    let config_loader = ConfigLoader::new(config_path.as_deref(), config::ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            report_error(ErrorContext::new(e, "config"));
            process::exit(1);
        }
    };

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));
    info!("Lau Trie v{VERSION}");
    config::init_global_config(config.clone());

    let suggest_options = SuggestOptions::from(&config.suggest);

    match command {
        Command::Demo => {
            let store = build_store(&config, &args, true)?;
            for prefix in ["ap", "bat"] {
                info!("Words starting with {prefix:?}");
                for word in store.words_with_prefix(prefix)? {
                    println!("{word}");
                }
            }
        }
        Command::Search { word } => {
            let store = build_store(&config, &args, false)?;
            println!("{}", store.search(word)?);
        }
        Command::StartsWith { prefix } => {
            let store = build_store(&config, &args, false)?;
            println!("{}", store.starts_with(prefix)?);
        }
        Command::Complete { prefix, json } => {
            let store = build_store(&config, &args, false)?;
            let words: Vec<String> = store.words_with_prefix(prefix)?.collect();
            print_words(&words, json)?;
        }
        Command::Suggest {
            prefix,
            limit,
            json,
        } => {
            let store = build_store(&config, &args, false)?;
            let options = match limit {
                Some(limit) => suggest_options.with_limit(limit),
                None => suggest_options,
            };
            let words = store.autocomplete(prefix, &options)?;
            print_words(&words, json)?;
        }
        Command::Predict {
            input,
            top_k,
            json,
        } => {
            let model = build_model(&config, &args)?;
            let top_k = top_k.unwrap_or(config.predict.top_k);
            let words = model.hybrid_predict(&input.join(" "), top_k)?;
            print_words(&words, json)?;
        }
        Command::Validate => {
            let global = config::get_global_config();
            info!(
                "Configuration validated successfully (config file: {:?})",
                config_path
            );
            println!("{}", serde_json::to_string_pretty(global.get())?);
        }
        Command::GenConfig { output } => generate_config(&output)?,
    }

    Ok(())
}
