use anyhow::{Context, Result};
use chrono::Utc;
use humansize::{DECIMAL, format_size};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use pictor_core::{ImageAudit, ImageContract, audit_bytes, detect_dimensions, detect_format};

use crate::fetch;

#[derive(Debug, Serialize)]
pub struct UrlReport {
    pub url: String,
    pub downloaded_bytes: u64,
    pub audit: Option<ImageAudit>,
    pub error: Option<String>,
}

impl UrlReport {
    fn passed(&self) -> bool {
        self.audit
            .as_ref()
            .map(|a| a.matches_contract)
            .unwrap_or(false)
    }
}

#[derive(Debug, Serialize)]
pub struct AuditRun {
    pub timestamp: String,
    pub contract: ImageContract,
    pub entries: Vec<UrlReport>,
}

impl AuditRun {
    pub fn passed(&self) -> bool {
        self.entries.iter().all(UrlReport::passed)
    }
}

/// Fetches and audits each URL in order. Sequential on purpose: the audit
/// targets a handful of plates, and the per-URL verdict order should match
/// the input order.
pub fn run_audit(urls: &[String], contract: &ImageContract) -> AuditRun {
    let bar = ProgressBar::new(urls.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut entries = Vec::with_capacity(urls.len());

    for url in urls {
        bar.set_message(url.clone());

        match fetch::fetch_bytes(url) {
            Ok(download) => {
                let audit = audit_bytes(
                    &download.bytes,
                    download.content_type.as_deref(),
                    contract,
                );
                entries.push(UrlReport {
                    url: url.clone(),
                    downloaded_bytes: download.bytes.len() as u64,
                    audit: Some(audit),
                    error: None,
                });
            }
            Err(err) => {
                entries.push(UrlReport {
                    url: url.clone(),
                    downloaded_bytes: 0,
                    audit: None,
                    error: Some(format!("{err:#}")),
                });
            }
        }

        bar.inc(1);
    }

    bar.finish_and_clear();

    AuditRun {
        timestamp: Utc::now().to_rfc3339(),
        contract: contract.clone(),
        entries,
    }
}

pub fn print_summary(run: &AuditRun) {
    println!(
        "Contract: {} at {}",
        run.contract.mime, run.contract.dimensions
    );
    println!();

    let mut failed = 0usize;

    for entry in &run.entries {
        match (&entry.audit, &entry.error) {
            (Some(audit), _) if audit.matches_contract => {
                println!(
                    "[ok]   {} ({}, {})",
                    entry.url,
                    audit.mime,
                    format_size(entry.downloaded_bytes, DECIMAL)
                );
            }
            (Some(audit), _) => {
                failed += 1;
                println!(
                    "[fail] {} ({})",
                    entry.url,
                    format_size(entry.downloaded_bytes, DECIMAL)
                );
                for issue in &audit.issues {
                    println!("       - {issue}");
                }
            }
            (None, Some(err)) => {
                failed += 1;
                println!("[fail] {}", entry.url);
                println!("       - {err}");
            }
            (None, None) => {}
        }
    }

    println!();
    if failed == 0 {
        println!("All {} images match the contract.", run.entries.len());
    } else {
        println!("{} of {} images failed the contract.", failed, run.entries.len());
    }
}

pub fn write_json(run: &AuditRun, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(run)?;
    fs::write(path, json).with_context(|| format!("Failed to write report: {}", path.display()))
}

/// One URL per line; blank lines and '#' comments are skipped.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

pub fn inspect_files(files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        anyhow::bail!("No files given.");
    }

    for path in files {
        let data =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let format = detect_format(&data);

        println!("{}", path.display());
        println!("  format: {} ({})", format, format.mime());
        match detect_dimensions(&data) {
            Some(dims) => println!("  size:   {}", dims),
            None => println!("  size:   unknown"),
        }
        println!("  bytes:  {}", format_size(data.len() as u64, DECIMAL));
    }

    Ok(())
}
