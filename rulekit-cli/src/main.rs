//! rulekit - idempotent agent-rule scaffolding for JVM projects
//!
//! Copies static markdown rule templates into a target project, generates
//! the AGENTS.md index, and keeps .gitignore up to date. Re-running is
//! always safe: pre-existing files are never overwritten.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rulekit_core::config::ScaffoldConfig;
use rulekit_core::detect::{detect_java_version, BuildSystem};
use rulekit_core::error::ScaffoldError;
use rulekit_core::ignore::{append_ignore_patterns, DEFAULT_IGNORE_PATTERNS};
use rulekit_core::index::IndexContext;
use rulekit_core::installer::{write_if_absent, Installer};
use rulekit_core::packages::find_base_package_candidates;
use rulekit_core::report::{InstallReport, InstallStatus};
use rulekit_core::templates::TemplateRoot;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "rulekit",
    about = "Install agent rule templates into a JVM project",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,
}

#[derive(Parser, Debug)]
enum Command {
    /// Install rule templates, generate the AGENTS.md index, update .gitignore
    Init {
        /// Project root to install into
        #[clap(long, default_value = ".")]
        root: PathBuf,

        /// Override the rule template directory
        #[clap(long)]
        templates_dir: Option<PathBuf>,

        /// Base package directory for layer rules (skips the interactive prompt)
        #[clap(long)]
        base_package: Option<String>,

        /// Print the install report as JSON
        #[clap(long)]
        json: bool,

        /// Leave .gitignore untouched
        #[clap(long)]
        skip_gitignore: bool,
    },
}

/// Initialize tracing from the --log-level flag. Diagnostics go to stderr;
/// stdout is reserved for the report.
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let outcome = match cli.command {
        Command::Init {
            root,
            templates_dir,
            base_package,
            json,
            skip_gitignore,
        } => init_command(root, templates_dir, base_package, json, skip_gitignore),
    };

    match outcome {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn init_command(
    root: PathBuf,
    templates_dir: Option<PathBuf>,
    base_package: Option<String>,
    json: bool,
    skip_gitignore: bool,
) -> Result<i32> {
    // A missing template root aborts before any manifest item is processed.
    let template_root = TemplateRoot::discover_with_override(templates_dir)?
        .ok_or(ScaffoldError::MissingTemplateRoot)?;
    info!("Using rule templates from {:?}", template_root.path);

    let base_package_dir = match base_package {
        Some(dir) => dir,
        None => prompt_base_package(&root)?,
    };

    let config = ScaffoldConfig {
        project_root: root,
        base_package_dir,
        template_root,
    };

    let manifest = config.manifest();
    let installer = Installer::new(&config.project_root);
    let report = installer.install_all(&manifest);

    let java_version = detect_java_version(&config.project_root);
    let build_system = BuildSystem::detect(&config.project_root);
    let generated_at = chrono::Local::now().format("%Y-%m-%d").to_string();

    let index = IndexContext {
        base_package_dir: &config.base_package_dir,
        java_version: java_version.as_deref(),
        build_system,
        generated_at: &generated_at,
        results: report.results(),
    }
    .render();

    let index_path = config.project_root.join("AGENTS.md");
    let index_written = write_if_absent(&index_path, index.as_bytes())
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    let ignored_added = if skip_gitignore {
        Vec::new()
    } else {
        let ignore_file = config.project_root.join(".gitignore");
        append_ignore_patterns(&ignore_file, DEFAULT_IGNORE_PATTERNS)
            .with_context(|| format!("Failed to update {}", ignore_file.display()))?
    };

    if json {
        let output = serde_json::json!({
            "base_package_dir": &config.base_package_dir,
            "java_version": &java_version,
            "build_system": build_system,
            "index_written": index_written,
            "gitignore_added": &ignored_added,
            "failed": report.has_failures(),
            "results": report.results(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_summary(&report, index_written, &ignored_added);
    }

    Ok(if report.has_failures() { 1 } else { 0 })
}

/// Resolve the base package directory interactively: list scanned
/// candidates, accept a number or a directly typed path.
fn prompt_base_package(project_root: &Path) -> Result<String> {
    let candidates = find_base_package_candidates(project_root);

    println!("Select a base package directory for the layer rule files:");
    for (i, candidate) in candidates.iter().enumerate() {
        println!("  {}) {}", i + 1, candidate);
    }
    if candidates.is_empty() {
        println!("  (no candidates found under src/main/java or src/main/kotlin)");
    }
    println!("Enter a number or type a path:");
    print!("> ");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes_read = io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read selection")?;
    if bytes_read == 0 {
        bail!("No base package directory selected");
    }

    let input = input.trim();
    if input.is_empty() {
        bail!("Invalid selection: empty input");
    }

    if let Ok(n) = input.parse::<usize>() {
        if n >= 1 && n <= candidates.len() {
            return Ok(candidates[n - 1].clone());
        }
        bail!("Invalid selection: {n}");
    }

    // Anything non-numeric is taken verbatim as the base package directory.
    Ok(input.to_string())
}

fn print_summary(report: &InstallReport, index_written: bool, ignored_added: &[String]) {
    println!(
        "✅ Installed {} rule file(s), {} already present",
        report.installed(),
        report.skipped_existing()
    );

    for result in report.results() {
        match result.status {
            InstallStatus::Installed => {
                println!("   + {}", result.destination.display());
            }
            InstallStatus::SkippedExists => {
                println!("   = {} (exists, left untouched)", result.destination.display());
            }
            InstallStatus::SkippedMissingSource | InstallStatus::Failed => {}
        }
    }

    for result in report.results() {
        if result.status == InstallStatus::SkippedMissingSource {
            println!(
                "⚠️  Template missing for {}",
                result.destination.display()
            );
        }
    }

    for result in report.results() {
        if result.status == InstallStatus::Failed {
            println!(
                "⚠️  {}: {}",
                result.destination.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    println!();
    if index_written {
        println!("   Index:      AGENTS.md");
    } else {
        println!("   Index:      AGENTS.md (already present, left untouched)");
    }
    if ignored_added.is_empty() {
        println!("   .gitignore: up to date");
    } else {
        println!("   .gitignore: added {} pattern(s)", ignored_added.len());
    }

    if report.has_failures() {
        println!();
        println!("   {} item(s) failed; see warnings above.", report.failures());
    }
}
