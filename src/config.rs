use std::{
    fs,
    path::{Path, PathBuf},
};

use nyulh_design_tokens_core::Theme;
use serde::Deserialize;

use crate::BuildError;

/// Where token sources are read from and stylesheets written to.
///
/// Every field has a default, so `{}` is a valid config file:
///
/// ```json
/// {
///   "tokensDir": "tokens",
///   "buildPath": "build",
///   "themes": [{ "theme": "light" }, { "theme": "dark", "destination": "dark.css" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildConfig {
    pub tokens_dir: PathBuf,
    pub build_path: PathBuf,
    pub themes: Vec<ThemeBuild>,
}
impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            tokens_dir: PathBuf::from("tokens"),
            build_path: PathBuf::from("build"),
            themes: Theme::ALL.into_iter().map(ThemeBuild::new).collect(),
        }
    }
}
impl BuildConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| BuildError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| BuildError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Drops every configured build whose theme is not in `themes`.
    pub fn retain_themes(&mut self, themes: &[Theme]) {
        self.themes.retain(|build| themes.contains(&build.theme));
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeBuild {
    pub theme: Theme,
    /// Overrides the theme's default source file name.
    #[serde(default)]
    pub source: Option<PathBuf>,
    #[serde(default)]
    pub destination: Option<PathBuf>,
}
impl ThemeBuild {
    pub fn new(theme: Theme) -> Self {
        ThemeBuild {
            theme,
            source: None,
            destination: None,
        }
    }
    pub fn source(&self) -> &Path {
        self.source
            .as_deref()
            .unwrap_or_else(|| Path::new(self.theme.source_file()))
    }
    pub fn destination(&self) -> &Path {
        self.destination
            .as_deref()
            .unwrap_or_else(|| Path::new(self.theme.destination_file()))
    }
}
