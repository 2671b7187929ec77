use clap::{Parser, Subcommand, builder::styling};
use eyre::Result;
use owo_colors::OwoColorize;
use rag_extract::{
    RunStatus, SinkKind,
    cli::{extract_json, run_export, seed_store},
    config::PipelineConfig,
};
use std::path::PathBuf;

// CLI Styling
const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::BrightWhite.on_default())
    .usage(styling::AnsiColor::BrightWhite.on_default())
    .literal(styling::AnsiColor::Green.on_default())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// RAG Extract: seed a document store and ship its rows as a JSON artifact
#[derive(Parser)]
#[command(name = "ragx", version, styles = STYLES)]
struct Cli {
    /// The dotenv file to source RAGX_* settings from
    #[arg(short, long, global = true, default_value = ".env")]
    env: String,

    /// More verbose logging
    #[arg(long, global = true)]
    debug: bool,

    /// SQLite store file (overrides RAGX_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// YAML fixture file to seed with (overrides RAGX_FIXTURES)
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed, extract and write the JSON artifact
    Run {
        /// Export the rows already in the store instead of reseeding it
        #[arg(long)]
        no_seed: bool,

        /// Where to write the artifact (overrides RAGX_SINK)
        #[arg(short, long, value_enum)]
        sink: Option<SinkKind>,

        /// Object key of the artifact (overrides RAGX_OUTPUT_KEY)
        #[arg(short, long)]
        key: Option<String>,

        /// Write JSON without indentation
        #[arg(long)]
        compact: bool,
    },

    /// Replace the store contents with the fixture documents
    Seed,

    /// Print every document in the store as a JSON array
    Extract {
        /// Print JSON without indentation
        #[arg(long)]
        compact: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let env_loaded = dotenvy::from_filename(&cli.env).is_ok();

    let log_level = match cli.debug {
        true => "debug",
        false => "info",
    };
    let env = env_logger::Env::default().filter_or("LOG_LEVEL", log_level);
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();

    if env_loaded {
        log::debug!("Loaded settings from {}", cli.env.bright_black());
    }

    let mut config = PipelineConfig::from_env()?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(fixtures) = cli.fixtures {
        config.fixtures = Some(fixtures);
    }

    match cli.command {
        Commands::Run {
            no_seed,
            sink,
            key,
            compact,
        } => {
            if no_seed {
                config.seed_before_extract = false;
            }
            if let Some(sink) = sink {
                config.sink = sink;
            }
            if let Some(key) = key {
                config.output_key = key;
            }
            if compact {
                config.pretty = false;
            }

            log::info!(
                "Exporting {} to {} sink",
                config.db_path.display().bright_black(),
                config.sink.cyan()
            );
            let status = run_export(config).await?;
            match &status {
                RunStatus::Success { location } => {
                    log::info!("✓ Exported documents to {}", location.bright_black())
                }
                RunStatus::NoData => log::warn!("No data found"),
            }
            println!("{}", serde_json::to_string(&status)?);
        }
        Commands::Seed => {
            let count = seed_store(&config)?;
            log::info!(
                "✓ Seeded {} document(s) into {}",
                count,
                config.db_path.display().bright_black()
            );
        }
        Commands::Extract { compact } => {
            if compact {
                config.pretty = false;
            }
            println!("{}", extract_json(&config)?);
        }
    }

    Ok(())
}
