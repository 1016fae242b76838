//! Pictor - image contract auditor.
//!
//! Downloads image URLs, sniffs the real container format and pixel size
//! from the raw bytes, and checks both against an expected print contract.

mod fetch;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pictor_core::{A4_PORTRAIT_200DPI, Dimensions, ImageContract};

#[derive(Parser)]
#[command(name = "pictor")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download URLs and audit them against the expected contract
    Audit {
        /// Image URLs to audit
        urls: Vec<String>,

        /// File with one URL per line ('#' starts a comment)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Expected MIME type
        #[arg(long, default_value = "image/jpeg")]
        mime: String,

        /// Expected pixel dimensions, e.g. 1654x2339 (A4 portrait at 200 DPI)
        #[arg(long)]
        size: Option<Dimensions>,

        /// Write a JSON report to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Sniff local files and print what the bytes say they are
    Inspect {
        /// Image files to inspect
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit {
            mut urls,
            manifest,
            mime,
            size,
            json,
        } => {
            if let Some(path) = manifest {
                urls.extend(report::read_manifest(&path)?);
            }
            if urls.is_empty() {
                anyhow::bail!("No URLs given. Pass them as arguments or via --manifest.");
            }

            let contract = ImageContract::new(mime, size.unwrap_or(A4_PORTRAIT_200DPI));
            let run = report::run_audit(&urls, &contract);
            report::print_summary(&run);

            if let Some(path) = json {
                report::write_json(&run, &path)?;
                println!("Report written to {}", path.display());
            }

            if !run.passed() {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Inspect { files } => report::inspect_files(&files),
    }
}
