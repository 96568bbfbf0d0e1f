use clap::Parser;
use mentionize::{config::TokenizerConfig, Error, InternalResult, TextSegment};
use std::{
    io::{self, Read, Write},
    path::PathBuf,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Split text into plain, mention and newline segments", long_about = None)]
struct Cli {
    /// File to tokenize (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Tokenize this string instead of a file
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Path to a JSON trigger config (defaults to the built-in triggers)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit newlines as dedicated segments
    #[arg(short, long)]
    newlines: bool,

    /// Output format
    #[arg(short, long, default_value_t = OutputFormat::Json)]
    output: OutputFormat,

    /// Only print mention segments
    #[arg(short, long)]
    mentions_only: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
enum OutputFormat {
    Json,
    Text,
}

fn read_input(cli: &Cli) -> InternalResult<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| Error::internal(format!("Failed to read {}: {}", path.display(), e))),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| Error::internal(format!("Failed to read stdin: {}", e)))?;
            Ok(input)
        }
    }
}

fn write_segments(segments: &[TextSegment], format: OutputFormat) -> InternalResult<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(segments)
                .map_err(|e| Error::internal(format!("Failed to serialize segments: {}", e)))?;
            writeln!(stdout, "{}", json)
        }
        OutputFormat::Text => segments
            .iter()
            .try_for_each(|segment| writeln!(stdout, "{}", segment)),
    }
    .map_err(|e| Error::internal(format!("Failed to write output: {}", e)))
}

/// `--verbose` forces debug output, overriding `RUST_LOG`.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn run(cli: &Cli) -> InternalResult<()> {
    let mut config = match &cli.config {
        Some(path) => TokenizerConfig::from_file(path)?,
        None => TokenizerConfig::default(),
    };
    if cli.newlines {
        config.options.handle_newlines = true;
    }
    info!("config loaded.");
    debug!("config: {:?}", config);

    let tokenizer = config.build()?;
    let input = read_input(cli)?;

    let mut segments = tokenizer.tokenize(&input);
    debug!(segments = segments.len(), "tokenized input");
    if cli.mentions_only {
        segments.retain(|segment| segment.is_mention);
    }

    write_segments(&segments, cli.output)
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(log_filter(cli.verbose))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
