//! Builds the NYU Langone Health CSS custom-property files.
//!
//! Each configured theme reads one JSON token source from the tokens
//! directory, renders it and writes one stylesheet into the build path.

use std::{fs, io, path::PathBuf};

use nyulh_design_tokens_core::{load_tokens, render, Theme};

mod config;
pub use config::{BuildConfig, ThemeBuild};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Tokens(#[from] nyulh_design_tokens_core::Error),

    #[error("failed to read build config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid build config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A stylesheet that was written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltTheme {
    pub theme: Theme,
    pub destination: PathBuf,
    pub tokens: usize,
}

pub fn build_theme(config: &BuildConfig, build: &ThemeBuild) -> Result<BuiltTheme, BuildError> {
    let tokens = load_tokens(config.tokens_dir.join(build.source()))?;
    let css = render(&tokens, build.theme);

    fs::create_dir_all(&config.build_path).map_err(|source| BuildError::Write {
        path: config.build_path.clone(),
        source,
    })?;
    let destination = config.build_path.join(build.destination());
    fs::write(&destination, css).map_err(|source| BuildError::Write {
        path: destination.clone(),
        source,
    })?;
    tracing::info!(
        theme = %build.theme,
        path = %destination.display(),
        tokens = tokens.len(),
        "wrote stylesheet"
    );

    Ok(BuiltTheme {
        theme: build.theme,
        destination,
        tokens: tokens.len(),
    })
}

/// Builds every configured theme in order, stopping at the first failure.
///
/// `on_start` runs before each theme, e.g. to print a progress line.
pub fn build_all(
    config: &BuildConfig,
    mut on_start: impl FnMut(&ThemeBuild),
) -> Result<Vec<BuiltTheme>, BuildError> {
    config
        .themes
        .iter()
        .map(|build| {
            on_start(build);
            build_theme(config, build)
        })
        .collect()
}
