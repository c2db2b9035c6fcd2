use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use nyulh_design_tokens::{build_all, BuildConfig, BuiltTheme};
use nyulh_design_tokens_core::Theme;
use tracing_subscriber::EnvFilter;

/// Build the NYU Langone Health CSS custom-property files from JSON design tokens
#[derive(Debug, Parser)]
#[command(name = "nyulh-tokens", version)]
struct Args {
    /// JSON build config (tokensDir, buildPath, themes)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the token sources
    #[arg(long, value_name = "DIR")]
    tokens_dir: Option<PathBuf>,

    /// Directory the stylesheets are written to
    #[arg(long, value_name = "DIR")]
    build_path: Option<PathBuf>,

    /// Only build this theme; repeat for several
    #[arg(long = "theme", value_name = "THEME")]
    themes: Vec<Theme>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    println!("🎨 Building NYU Langone Health Design Tokens...\n");
    match run(args) {
        Ok(built) => {
            println!("\n✅ Design tokens built successfully!");
            println!("📁 Generated files:");
            for theme in built {
                println!("   - {}", theme.destination.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("❌ Error building tokens: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<Vec<BuiltTheme>> {
    let mut config = match &args.config {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::default(),
    };
    if let Some(dir) = args.tokens_dir {
        config.tokens_dir = dir;
    }
    if let Some(dir) = args.build_path {
        config.build_path = dir;
    }
    if !args.themes.is_empty() {
        config.retain_themes(&args.themes);
    }
    tracing::debug!(?config, "resolved build config");

    build_all(&config, |build| println!("{}", build.theme.progress_label()))
        .context("theme build aborted")
}
