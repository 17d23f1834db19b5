use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bgworld_disasm::WorldListing;
use bgworld_tools::ListingInspector;
use clap::{Parser, Subcommand, ValueEnum};
use sha2::{Digest, Sha256};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bgworld-cli", about = "Disassemble legacy .world asset files")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print tool version and crate info
    Info,
    /// Disassemble a world file and write the report to disk
    Dump {
        /// Path to the .world file
        input: PathBuf,
        /// Directory for the report (created if missing); defaults to the
        /// input's directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Report format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Disassemble a world file and print the report to stdout
    Print {
        /// Path to the .world file
        input: PathBuf,
    },
    /// Print summary statistics for a world file
    Inspect {
        /// Path to the .world file
        input: PathBuf,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// CRLF text disassembly
    Text,
    /// Decoded header and table as JSON
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Json => "json",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("bgworld-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", bgworld_common::crate_info());
            println!("disasm: {}", bgworld_disasm::crate_info());
            println!("tools: {}", bgworld_tools::crate_info());
        }
        Commands::Dump {
            input,
            out_dir,
            format,
        } => {
            let path = dump(&input, out_dir.as_deref(), format)?;
            println!("Wrote {}", path.display());
        }
        Commands::Print { input } => {
            let data = read_world(&input)?;
            print!("{}", render(&input, &data, Format::Text)?);
        }
        Commands::Inspect { input, json } => {
            let data = read_world(&input)?;
            let listing = decode(&input, &data)?;
            let summary = ListingInspector::summary(&listing);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
            }
        }
    }

    Ok(())
}

/// Read a whole world file into memory.
fn read_world(path: &Path) -> Result<Vec<u8>> {
    let data =
        fs::read(path).with_context(|| format!("failed to read world file {}", path.display()))?;
    info!(
        path = %path.display(),
        len = data.len(),
        sha256 = %sha256_hex(&data),
        "loaded world file"
    );
    Ok(data)
}

fn decode(path: &Path, data: &[u8]) -> Result<WorldListing> {
    WorldListing::decode(data).with_context(|| format!("failed to disassemble {}", path.display()))
}

fn render(path: &Path, data: &[u8], format: Format) -> Result<String> {
    let listing = decode(path, data)?;
    Ok(match format {
        Format::Text => listing.to_string(),
        Format::Json => serde_json::to_string_pretty(&listing)?,
    })
}

/// Where `dump` writes the report for `input`: `<file name>.<ext>` inside
/// `out_dir`, or next to the input when no directory is given.
fn output_path(input: &Path, out_dir: Option<&Path>, format: Format) -> Result<PathBuf> {
    let name = input
        .file_name()
        .with_context(|| format!("{} has no file name", input.display()))?;
    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    };
    let mut file_name = name.to_os_string();
    file_name.push(".");
    file_name.push(format.extension());
    Ok(dir.join(file_name))
}

/// Disassemble `input` and write the report. Nothing is written if decoding
/// fails.
fn dump(input: &Path, out_dir: Option<&Path>, format: Format) -> Result<PathBuf> {
    let data = read_world(input)?;
    let report = render(input, &data, format)?;

    let path = output_path(input, out_dir, format)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }
    fs::write(&path, report).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote report");
    Ok(path)
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
