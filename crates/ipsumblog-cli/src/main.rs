//! ipsumblog CLI - reproducible placeholder blog entries.
//!
//! `ipsumblog [COUNT] [SALT]` writes COUNT entries named after
//! `sha1(SALT + index)` into the output directory, refusing to
//! overwrite anything already there.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use ipsumblog_core::{BatchDriver, BlogConfig, FsStore, Layout, MemoryStore, Synthesizer};

#[derive(Parser)]
#[command(name = "ipsumblog")]
#[command(about = "Generate reproducible placeholder blog entries", version)]
struct Cli {
    /// Number of entries to generate
    #[arg(default_value_t = 2000)]
    count: u64,

    /// Salt mixed into every entry digest
    #[arg(default_value = "foobar")]
    salt: String,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Omit the date line
    #[arg(long)]
    no_date: bool,

    /// Fail instead of extending the digest when a seed window runs past its end
    #[arg(long)]
    no_extend: bool,

    /// Header layout (overrides config)
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,

    /// Synthesize without writing files
    #[arg(long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    FrontMatter,
    Heading,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::FrontMatter => Layout::FrontMatter,
            LayoutArg::Heading => Layout::Heading,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = resolve_config(&cli)?;
    let synthesizer = Synthesizer::new(config.profile.clone(), config.bounds.clone());
    let driver = BatchDriver::new(&synthesizer).with_max_in_flight(config.max_in_flight);

    tracing::info!(count = cli.count, salt = %cli.salt, "Generating entries");

    if cli.dry_run {
        let store = MemoryStore::new();
        driver.generate(cli.count, &cli.salt, &store).await?.into_result()?;
        for name in store.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let store = FsStore::new(config.out_dir.clone(), config.extension.as_str());
    store.prepare().await?;

    let report = driver.generate(cli.count, &cli.salt, &store).await?;
    if !report.is_success() {
        tracing::error!(summary = %report.summary(), "Batch failed");
    }
    let written = report.into_result()?;

    tracing::info!(
        written = written.len(),
        out_dir = %store.dir().display(),
        "Complete."
    );
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<BlogConfig> {
    let mut config = BlogConfig::load_or_default(cli.config.as_deref())?;

    if let Some(out_dir) = &cli.out_dir {
        config.out_dir = out_dir.clone();
    }
    if cli.no_date {
        config.profile.include_date = false;
    }
    if cli.no_extend {
        config.profile.extend_digest_on_overflow = false;
    }
    if let Some(layout) = cli.layout {
        config.profile.layout = layout.into();
    }

    config.validate()?;
    Ok(config)
}
