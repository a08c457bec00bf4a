// Rich-text command line tool
//
// Runs the sanitizer, paste normalizer, renderer and plain-text extractor
// over a file or stdin and writes the result to stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use kodegen_tools_richtext::{PasteInput, RenderOptions, RichText, RichTextConfig, SanitizeMode};

#[derive(Parser)]
#[command(name = "kodegen-richtext")]
#[command(about = "Sanitize, normalize and render rich-text HTML")]
#[command(version)]
struct Cli {
    /// JSON config file (camelCase keys, e.g. {"mode":"article"})
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitize HTML for storage
    Sanitize {
        /// Input file (stdin when omitted)
        input: Option<PathBuf>,

        /// article or comment (default: from config)
        #[arg(short, long)]
        mode: Option<SanitizeMode>,
    },

    /// Normalize a clipboard payload
    Paste {
        /// Input file (stdin when omitted)
        input: Option<PathBuf>,

        /// Treat the input as text/plain instead of text/html
        #[arg(long)]
        text: bool,

        /// article or comment (default: from config)
        #[arg(short, long)]
        mode: Option<SanitizeMode>,
    },

    /// Extract readable plain text
    PlainText {
        /// Input file (stdin when omitted)
        input: Option<PathBuf>,
    },

    /// Sanitize and enhance for display
    Render {
        /// Input file (stdin when omitted)
        input: Option<PathBuf>,

        /// Leave bare URLs as text
        #[arg(long)]
        no_linkify: bool,

        /// Wrap @name tokens in mention spans
        #[arg(long)]
        mentionify: bool,
    },

    /// Print whether the input looks like Office-generated HTML
    DetectOffice {
        /// Input file (stdin when omitted)
        input: Option<PathBuf>,
    },

    /// Print the active color palette as JSON
    Palette,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = match &cli.config {
        Some(path) => RichTextConfig::from_json_file(path)?,
        None => RichTextConfig::default(),
    };
    let engine = RichText::new(config).context("Failed to initialise rich-text engine")?;

    let output = match cli.command {
        Commands::Sanitize { input, mode } => {
            let html = read_input(input.as_deref())?;
            let mode = mode.unwrap_or(engine.config().mode());
            engine.sanitize_as(&html, mode)?
        }
        Commands::Paste { input, text, mode } => {
            let payload = read_input(input.as_deref())?;
            let mode = mode.unwrap_or(engine.config().mode());
            let paste = if text {
                PasteInput::from_text(payload, mode)
            } else {
                PasteInput::from_html(payload, mode)
            };
            engine.normalize_paste(&paste)?
        }
        Commands::PlainText { input } => {
            let html = read_input(input.as_deref())?;
            engine.plain_text(&html)?
        }
        Commands::Render {
            input,
            no_linkify,
            mentionify,
        } => {
            let html = read_input(input.as_deref())?;
            let options = RenderOptions {
                linkify: engine.config().linkify() && !no_linkify,
                mentionify: engine.config().mentionify() || mentionify,
                mode: engine.config().mode(),
            };
            engine.render_with(&html, &options)?
        }
        Commands::DetectOffice { input } => {
            let html = read_input(input.as_deref())?;
            kodegen_tools_richtext::detect_office_html(&html).to_string()
        }
        Commands::Palette => serde_json::to_string_pretty(engine.palette())
            .context("Failed to serialize palette")?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write output")?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
