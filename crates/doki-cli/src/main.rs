//! `doki`: expands bracket-tag markup in files or stdin.
//!
//! Usage:
//!   doki < page.doki                  - expand stdin to stdout
//!   doki a.doki b.doki                - expand each file to stdout
//!   doki -o out/ a.doki b.doki        - write out/a.html and out/b.html
//!   doki --list-tags                  - print registered tag names

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use doki_config::Config;
use doki_engine::{BlockNesting, Doki, TagRegistry};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to expand; reads stdin when none are given
    files: Vec<PathBuf>,

    /// Config file to use instead of ~/.config/doki/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write `<stem>.html` per input into this directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Close blocks at the first matching closing tag
    #[arg(long)]
    legacy_nesting: bool,

    /// Print the registered tag names and exit
    #[arg(long)]
    list_tags: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = load_config(cli.config.as_deref())?;
    let doki = build_doki(&config, cli.legacy_nesting)?;

    if cli.list_tags {
        let mut stdout = io::stdout().lock();
        for name in doki.registry().names() {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        io::stdout().write_all(doki.parse(&input).as_bytes())?;
        return Ok(());
    }

    let output_dir = cli.output_dir.or(config.output_dir);
    let mut failed = 0;
    for file in &cli.files {
        if let Err(e) = expand_file(&doki, file, output_dir.as_deref()) {
            log::error!("{}: {e:#}", file.display());
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} file(s) failed", cli.files.len());
    }
    Ok(())
}

/// An explicit path must exist; the default path may be absent.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display()))?,
        None => {
            log::info!("Config path: {}", Config::config_path().display());
            Config::load()?.unwrap_or_default()
        }
    };
    Ok(config)
}

fn build_doki(config: &Config, legacy_nesting: bool) -> Result<Doki> {
    let mut options = config.parse_options();
    if legacy_nesting {
        options.nesting = BlockNesting::Legacy;
    }

    let mut doki = Doki::with_registry(TagRegistry::with_defaults(), options);
    for (alias, target) in &config.aliases {
        doki.registry_mut()
            .alias(alias.as_str(), target)
            .with_context(|| format!("Invalid alias `{alias}`"))?;
        log::debug!("aliased `{alias}` to `{target}`");
    }
    Ok(doki)
}

fn expand_file(doki: &Doki, file: &Path, output_dir: Option<&Path>) -> Result<()> {
    let input = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let output = doki.parse(&input);

    let Some(dir) = output_dir else {
        io::stdout().write_all(output.as_bytes())?;
        return Ok(());
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let target = output_path(dir, file)?;
    std::fs::write(&target, output)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    log::info!("{} -> {}", file.display(), target.display());
    Ok(())
}

fn output_path(dir: &Path, file: &Path) -> Result<PathBuf> {
    let Some(stem) = file.file_stem() else {
        bail!("No file name in {}", file.display());
    };
    let mut name = stem.to_os_string();
    name.push(".html");
    Ok(dir.join(name))
}
