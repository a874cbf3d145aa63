//! # Recibo CLI
//!
//! Command-line interface for rendering receipt mockups.
//!
//! ## Usage
//!
//! ```bash
//! # List built-in templates
//! recibo list
//!
//! # Render a template fixture to PNG
//! recibo render --template 5
//!
//! # Render a record from a JSON file
//! recibo render --input my-receipt.json --out receipt.png
//!
//! # Plain-text rendition instead of PNG
//! recibo render --template 4 --text
//!
//! # Start the HTTP API
//! recibo serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use recibo::{
    ReciboError,
    export::{Artifact, ArtifactKind, Exporter, receipt_text, save_artifact},
    form::EnabledSections,
    record::ReceiptRecord,
    server::{ServerConfig, serve},
    template,
};

/// Recibo - receipt mockup renderer
#[derive(Parser, Debug)]
#[command(name = "recibo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List built-in receipt templates
    List,

    /// Render a receipt to a downloadable artifact
    Render {
        /// Built-in template id (see `recibo list`)
        #[arg(long)]
        template: Option<u32>,

        /// JSON record file to render instead of a template fixture
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output path (defaults to <storeName>-receipt.png in the
        /// current directory)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Produce the plain-text rendition instead of PNG
        #[arg(long)]
        text: bool,
    },

    /// Start the HTTP API server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ReciboError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            println!("{:<4} {:<22} {}", "ID", "TITLE", "CATEGORY");
            for entry in template::catalogue() {
                println!("{:<4} {:<22} {}", entry.id, entry.title, entry.category);
            }
            Ok(())
        }

        Commands::Render {
            template: template_id,
            input,
            out,
            text,
        } => {
            let record = load_record(template_id, input.as_deref())?;
            let artifact = if text {
                Artifact {
                    file_name: format!("{}-receipt.txt", record.store_name),
                    kind: ArtifactKind::Text,
                    bytes: receipt_text(&record).into_bytes(),
                }
            } else {
                Exporter::new().export(&record, &EnabledSections::default())
            };

            let path = match out {
                Some(path) => {
                    fs::write(&path, &artifact.bytes)?;
                    path
                }
                None => save_artifact(&artifact, Path::new("."))?,
            };
            println!("Wrote {} ({} bytes)", path.display(), artifact.bytes.len());
            Ok(())
        }

        Commands::Serve { listen } => {
            let config = ServerConfig {
                listen_addr: listen,
            };
            tokio::runtime::Runtime::new()?.block_on(serve(config))
        }
    }
}

/// Resolve the record to render: a JSON file when given, otherwise a
/// template fixture (the generic one by default).
fn load_record(template_id: Option<u32>, input: Option<&Path>) -> Result<ReceiptRecord, ReciboError> {
    if let Some(path) = input {
        let json = fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&json)?);
    }

    let id = template_id.unwrap_or(template::GENERIC_TEMPLATE_ID);
    template::record_for(id).ok_or_else(|| {
        ReciboError::Template(format!(
            "Unknown template id: {id} (see `recibo list`)"
        ))
    })
}
