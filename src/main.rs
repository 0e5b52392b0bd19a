//! Portal - resolves a documentation site descriptor into a validated
//! manifest and emits the artifacts derived from it.

mod cli;
mod config;
mod generator;
mod logger;
mod manifest;
mod utils;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use generator::{SitemapItem, build_sitemap, render_head};
use manifest::{Environment, ResolveOptions, ResolvedManifest, ValidationError, resolve};
use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

/// Reproducible-build timestamp, in seconds since the epoch.
const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let descriptor = load_config(root, &cli.config)?;

    if let Commands::Targets = cli.command {
        for name in descriptor.target_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let env = load_environment(cli.env_file.as_deref())?;
    let options = match &cli.target {
        Some(name) => ResolveOptions::new(build_instant(&env)?).with_target(name),
        None => ResolveOptions::new(build_instant(&env)?),
    };
    let manifest = resolve(&descriptor, &env, &options)?;

    match &cli.command {
        Commands::Check | Commands::Targets => Ok(()),
        Commands::Resolve { output } => {
            let json = serde_json::to_string_pretty(&manifest)?;
            emit("resolve", output.as_deref(), &json)
        }
        Commands::Head { output } => emit("head", output.as_deref(), &render_head(&manifest)?),
        Commands::Sitemap { items, output } => {
            let candidates = read_items(items)?;
            let path = sitemap_path(root, &manifest, output.as_ref());
            build_sitemap(&manifest, candidates, &path)
        }
    }
}

/// Load the descriptor from `<root>/<config>`.
fn load_config(root: &Path, config: &Path) -> Result<SiteConfig> {
    let config_path = root.join(config);
    if !config_path.exists() {
        anyhow::bail!("Config file not found: {}", config_path.display());
    }
    Ok(SiteConfig::from_path(&config_path)?)
}

/// Snapshot the process environment, optionally layered over a `.env` file.
fn load_environment(env_file: Option<&Path>) -> Result<Environment> {
    let env = Environment::from_process();
    match env_file {
        Some(path) => env
            .with_dotenv(path)
            .with_context(|| format!("Failed to read env file {}", path.display())),
        None => Ok(env),
    }
}

/// `SOURCE_DATE_EPOCH` when set, the current time otherwise.
fn build_instant(env: &Environment) -> Result<DateTime<Utc>> {
    let Some(raw) = env.get(SOURCE_DATE_EPOCH).map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Utc::now());
    };
    let secs: i64 = raw
        .parse()
        .with_context(|| format!("{SOURCE_DATE_EPOCH} `{raw}` is not an integer"))?;
    DateTime::from_timestamp(secs, 0)
        .with_context(|| format!("{SOURCE_DATE_EPOCH} `{raw}` is out of range"))
}

fn read_items(path: &Path) -> Result<Vec<SitemapItem>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sitemap items {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid sitemap items in {}", path.display()))
}

fn sitemap_path(root: &Path, manifest: &ResolvedManifest, output: Option<&PathBuf>) -> PathBuf {
    output
        .cloned()
        .unwrap_or_else(|| root.join(&manifest.sitemap.filename))
}

/// Write `content` to `output`, or to stdout when no path is given.
fn emit(module: &str, output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!(module; "{}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn report(err: &anyhow::Error) {
    log!("error"; "{}", error_report(err));
}

/// The whole failure as one message: every violation, or the cause chain.
fn error_report(err: &anyhow::Error) -> String {
    if let Some(validation) = err.downcast_ref::<ValidationError>() {
        return validation.to_string();
    }

    let mut report = err.to_string();
    for cause in err.chain().skip(1) {
        report.push_str(&format!("\n  caused by: {cause}"));
    }
    report
}
