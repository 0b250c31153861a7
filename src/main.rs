use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use exploader::{AppError, Document, Loader, LoaderConfig, SettingsFile, load_settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "exploader")]
#[command(version)]
#[command(about = "Load and validate experiment definitions from files or URLs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an experiment and print the parsed document
    #[clap(visible_alias = "l")]
    Load {
        #[command(flatten)]
        source: SourceArgs,
        /// Output format of the printed document
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },
    /// Check that an experiment loads and parses
    #[clap(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Local path or http(s) URL of the experiment
    source: String,
    /// Settings file holding per-host credentials (YAML, JSON or TOML)
    #[arg(short, long)]
    settings: Option<PathBuf>,
    /// Request timeout in seconds for remote sources
    #[arg(long)]
    timeout: Option<u64>,
    /// Accept invalid TLS certificates
    #[arg(long)]
    insecure: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("exploader=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Load { source, output } => {
            load(&source).and_then(|document| print_document(&document, output))
        }
        Commands::Validate { source } => load(&source).map(|document| match document.title() {
            Some(title) => println!("✅ Experiment is valid: {}", title),
            None => println!("✅ Experiment is valid"),
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load(args: &SourceArgs) -> Result<Document, AppError> {
    let file = match &args.settings {
        Some(path) => load_settings(path)?,
        None => SettingsFile::default(),
    };

    let config = LoaderConfig {
        timeout_secs: args.timeout.or(file.loader.timeout_secs),
        verify_tls: file.loader.verify_tls && !args.insecure,
    };

    let loader = Loader::new(&config)?;
    Ok(loader.load(&args.source, Some(&file.settings))?)
}

fn print_document(document: &Document, format: OutputFormat) -> Result<(), AppError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(document)
            .map_err(|e| AppError::Output(e.to_string()))?,
        OutputFormat::Yaml => {
            serde_yaml::to_string(document).map_err(|e| AppError::Output(e.to_string()))?
        }
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
