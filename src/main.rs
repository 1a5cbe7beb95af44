/// litlens: Lit web component intelligence from the command line
///
/// Scans a project for Lit-style components and answers questions about them.
///
/// Commands:
/// - scan: Every component in the project
/// - resolve: Declaring class of a custom-element tag
/// - outline: Structure outline of one file
/// - complete: Attribute and event completions for a tag
/// - goto: Resolve the tag mention at a byte offset of a file
/// - status: Workspace report
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use litlens::cli::{OutputFormat, OutputWriter};
use litlens::component::{ComponentExtractor, TracingObserver};
use litlens::extractors::ExtractorManager;
use litlens::index::TagResolver;
use litlens::tools::navigation::Location;
use litlens::tools::{WorkspaceStatus, complete_for_tag, goto_definition, outline_file, tag_at_offset};
use litlens::{LitConfig, LitWorkspace};

#[derive(Parser)]
#[command(name = "litlens")]
#[command(about = "Lit web component intelligence", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root to scan
    #[arg(short, long, global = true, default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to .litlens.toml in or above the root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for a daily-rolling log file
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every component in the project
    Scan,

    /// Find the class declaring a custom-element tag
    Resolve {
        /// Tag name, e.g. my-element
        tag: String,

        /// Report every declaring class, not just the first
        #[arg(long)]
        all: bool,
    },

    /// Structure outline of one file
    Outline {
        /// Source file
        file: PathBuf,
    },

    /// Attribute and event completions for a tag
    Complete {
        /// Tag name, e.g. my-element
        tag: String,
    },

    /// Resolve the tag mention at a byte offset
    Goto {
        /// File containing the mention
        file: PathBuf,

        /// Byte offset inside the tag name
        offset: usize,
    },

    /// Workspace report
    Status,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    /// Pretty-printed JSON
    Json,
    /// Newline-delimited JSON
    Ndjson,
    /// Plain text
    Text,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Ndjson => OutputFormat::Ndjson,
            OutputFormatArg::Text => OutputFormat::Text,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Guards must live until exit so buffered log lines are flushed
    let _guards = init_logging(cli.log_dir.as_deref())?;

    let config = load_config(&cli)?;
    let resolver = build_resolver(&config)?;

    // Scan lists components by default; everything else reads best as text
    let default_format = match cli.command {
        Commands::Scan => OutputFormat::Json,
        _ => OutputFormat::Text,
    };
    let mut out = OutputWriter::new(cli.format.map(Into::into).unwrap_or(default_format));

    match &cli.command {
        Commands::Scan => {
            let workspace = open_workspace(&cli.root, config)?;
            let components = resolver.components(workspace.files());
            info!("✅ {} components found", components.len());
            out.write_batch(&components)
        }
        Commands::Resolve { tag, all } => {
            let workspace = open_workspace(&cli.root, config)?;
            let classes = if *all {
                resolver.all_candidates(tag, workspace.files())
            } else {
                resolver.resolve(tag, workspace.files()).into_iter().collect()
            };
            if classes.is_empty() {
                bail!("No component declares <{}>", tag);
            }
            let locations: Vec<Location> = classes.into_iter().map(Location::of).collect();
            out.write_batch(&locations)
        }
        Commands::Outline { file } => {
            let parsed = ExtractorManager::new()
                .parse_file(file, config.scan.max_file_size)
                .with_context(|| format!("Failed to parse {}", file.display()))?;
            out.write_batch(&outline_file(&resolver, &parsed))
        }
        Commands::Complete { tag } => {
            let workspace = open_workspace(&cli.root, config)?;
            out.write_batch(&complete_for_tag(&resolver, tag, workspace.files()))
        }
        Commands::Goto { file, offset } => {
            let text = fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let Some(mention) = tag_at_offset(&text, *offset) else {
                bail!("No custom-element tag at offset {} of {}", offset, file.display());
            };
            debug!("Tag at offset {}: <{}>", offset, mention.tag);

            let workspace = open_workspace(&cli.root, config)?;
            let Some(definition) = goto_definition(&resolver, &mention.tag, workspace.files())
            else {
                bail!("No component declares <{}>", mention.tag);
            };
            out.write_value(&definition)
        }
        Commands::Status => {
            let workspace = open_workspace(&cli.root, config)?;
            out.write_value(&WorkspaceStatus::collect(&workspace, &resolver))
        }
    }
}

/// Console logging to stderr, plus an optional daily-rolling file
fn init_logging(log_dir: Option<&Path>) -> Result<Vec<WorkerGuard>> {
    let filter = EnvFilter::try_from_env("LITLENS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("litlens=info"))?;

    let (non_blocking_console, console_guard) = tracing_appender::non_blocking(std::io::stderr());
    let mut guards = vec![console_guard];

    let file_layer = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::daily(dir, "litlens.log");
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);
            guards.push(file_guard);
            Some(
                fmt::layer()
                    .with_writer(non_blocking_file)
                    .with_target(true)
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking_console)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guards)
}

fn load_config(cli: &Cli) -> Result<LitConfig> {
    match &cli.config {
        Some(path) => LitConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => LitConfig::discover(&cli.root).context("Failed to load configuration"),
    }
}

fn build_resolver(config: &LitConfig) -> Result<TagResolver> {
    let extractor = ComponentExtractor::new(config.detection.clone())
        .context("Invalid detection configuration")?
        .with_observer(Arc::new(TracingObserver));
    Ok(TagResolver::new(extractor))
}

fn open_workspace(root: &Path, config: LitConfig) -> Result<LitWorkspace> {
    let start = Instant::now();
    let workspace = LitWorkspace::scan(root, config)
        .with_context(|| format!("Failed to scan {}", root.display()))?;
    info!(
        "📁 Scanned {} files in {:.2}s",
        workspace.files().len(),
        start.elapsed().as_secs_f64()
    );
    Ok(workspace)
}
