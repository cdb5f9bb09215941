// SPDX-License-Identifier: GPL-3.0-only

//! Upgrades provisioning config documents to the current schema

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use provision_translate::{detect_revision, to_json, upgrade_document};
use tracing::info;

/// Translate a provisioning config to schema 2.0.0
#[derive(Debug, Parser)]
#[command(name = "provision-translate")]
#[command(about = "Upgrade a provisioning config document to schema 2.0.0", long_about = None)]
struct Cli {
    /// Input document; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Only report the detected schema revision
    #[arg(long)]
    check: bool,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let document = read_input(cli.input.as_ref())?;

    if cli.check {
        let value: serde_json::Value =
            serde_json::from_str(&document).context("Input is not valid JSON")?;
        let revision = detect_revision(&value)?;
        println!("{revision}");
        return Ok(());
    }

    let config = upgrade_document(&document).context("Failed to upgrade document")?;
    let json = to_json(&config, cli.pretty)?;

    match cli.output {
        Some(path) => {
            fs::write(&path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} document to {}", config.ignition.version, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write stdout")?;
        }
    }

    Ok(())
}
