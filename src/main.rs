//! hookdoc — extract action and filter hook documentation from PHP source.
//!
//! Scans the doc comments ahead of `do_action()` / `apply_filters()` call
//! sites and emits the documented hooks as two ordered JSON collections.
//! Supports two modes:
//!
//! - **stdin mode**: `hookdoc -n themeblvd < header.php`
//! - **file mode**: `hookdoc -n themeblvd -o dist 'src/**/*.php'`

mod hooks;
mod model;
mod parser;

use anyhow::{Context, Result};
use clap::Parser;
use hooks::HarvestConfig;
use model::{HookRecord, SourceUnit};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hookdoc",
    about = "Extract action and filter hook documentation from PHP source files"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory for actions.json and filters.json
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Namespace prefix required on every emitted hook name
    #[arg(short = 'n', long)]
    namespace: String,

    /// Path prefix stripped from each record's file field
    #[arg(long, default_value = "src/")]
    source_root: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = HarvestConfig {
        namespace: cli.namespace.clone(),
        source_root: cli.source_root.clone(),
    };

    if cli.files.is_empty() {
        return stdin_mode(&config);
    }

    file_mode(&cli, &config)
}

/// stdin mode: read one PHP document, print the combined hook set to stdout.
fn stdin_mode(config: &HarvestConfig) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let units = parser::php::parse(&input, "<stdin>");
    let set = hooks::harvest(units, config);

    println!(
        "{}",
        serde_json::to_string_pretty(&set).context("failed to serialize hook set")?
    );
    Ok(())
}

/// file mode: process multiple files, write actions.json and filters.json.
fn file_mode(cli: &Cli, config: &HarvestConfig) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;

    // One flat unit sequence across all files, in discovery order.
    let mut units: Vec<SourceUnit> = Vec::new();
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match parser::parse_file(path, &content) {
            Ok(mut file_units) => units.append(&mut file_units),
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
            }
        }
    }

    let set = hooks::harvest(units, config);

    write_collection(&output_dir.join("actions.json"), &set.actions)?;
    write_collection(&output_dir.join("filters.json"), &set.filters)?;

    Ok(())
}

/// Serialize one ordered collection as pretty-printed JSON.
fn write_collection(path: &Path, records: &[HookRecord]) -> Result<()> {
    let mut json =
        serde_json::to_string_pretty(records).context("failed to serialize hook records")?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

/// File extensions recognized as source files.
const SUPPORTED_EXTENSIONS: &[&str] = &["php"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}
