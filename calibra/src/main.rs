use anyhow::Context;
use calibra::config::Config;
use calibra::event::TracingSink;
use calibra::overlay::{Overlay, OverlaySettings, Style};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "calibra")]
#[command(about = "Encode and inspect calibrated overlay records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Build an overlay from settings and write its binary record
    Encode {
        /// Settings JSON file, or `-` for the configured defaults
        #[arg(value_name = "SETTINGS")]
        settings: PathBuf,

        /// Destination of the binary record
        #[arg(value_name = "OUT")]
        out: PathBuf,

        /// Overlay name stored after the style
        name: Option<String>,
    },
    /// Decode a binary record and print it as JSON
    Decode {
        #[arg(value_name = "IN")]
        path: PathBuf,
    },
    /// Print the configured default settings as JSON
    Defaults,
}

#[derive(Serialize)]
struct DecodedOverlay<'a> {
    name: &'a str,
    content_sha256: String,
    size_bytes: usize,
    style: &'a Style,
}

fn load_settings(config: &Config, settings_path: &Path) -> anyhow::Result<OverlaySettings> {
    if settings_path == Path::new("-") {
        return Ok(config.settings.clone());
    }
    let raw = std::fs::read_to_string(settings_path)
        .with_context(|| format!("reading settings {}", settings_path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing settings {}", settings_path.display()))
}

fn encode(config: &Config, settings_path: &Path, out_path: &Path, name: &str) -> anyhow::Result<()> {
    let settings = load_settings(config, settings_path)?;

    let mut overlay = Overlay::with_settings(Arc::new(TracingSink), &settings).with_name(name);
    overlay.register();

    let file =
        File::create(out_path).with_context(|| format!("creating {}", out_path.display()))?;
    overlay
        .write_to(BufWriter::new(file))
        .with_context(|| format!("writing {}", out_path.display()))?;
    info!("Wrote overlay '{}' to {}", name, out_path.display());

    overlay.delete();
    Ok(())
}

fn decode(path: &Path) -> anyhow::Result<()> {
    let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    let mut overlay = Overlay::new(Arc::new(TracingSink));
    overlay
        .load_bytes(&data)
        .with_context(|| format!("decoding {}", path.display()))?;

    let report = DecodedOverlay {
        name: overlay.name(),
        content_sha256: hex_digest(&data),
        size_bytes: data.len(),
        style: overlay.style(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn hex_digest(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Encode {
            settings,
            out,
            name,
        } => encode(&config, &settings, &out, name.as_deref().unwrap_or("")),
        Command::Decode { path } => decode(&path),
        Command::Defaults => {
            println!("{}", serde_json::to_string_pretty(&config.settings)?);
            Ok(())
        }
    }
}
