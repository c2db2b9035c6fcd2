use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::Deserialize;
mod error;
mod expression;
mod render;
mod theme;

pub use error::{Error, Result};
pub use render::{css_variable_name, render, render_for, NAMESPACE};
pub use theme::{Theme, ThemeScope};

/// Reads a JSON token tree from disk and flattens it into resolved tokens.
pub fn load_tokens(path: impl AsRef<Path>) -> Result<Vec<Token>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tokens = parse(&data, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), count = tokens.len(), "loaded design tokens");
    Ok(tokens)
}

/// Same as [`load_tokens`] for an in-memory JSON document.
pub fn parse_tokens(data: &str) -> Result<Vec<Token>> {
    parse(data, "<inline>")
}

fn parse(data: &str, origin: &str) -> Result<Vec<Token>> {
    let tree: DesignTokens = serde_json::from_str(data).map_err(|source| Error::Parse {
        origin: origin.to_string(),
        source,
    })?;
    tree.tokens()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub path: Vec<String>,
    pub value: String,
    pub description: Option<String>,
    pub token_type: Option<String>,
}
impl Token {
    pub fn new(path: impl IntoIterator<Item = impl Into<String>>, value: impl Into<String>) -> Self {
        Token {
            path: path.into_iter().map(Into::into).collect(),
            value: value.into(),
            description: None,
            token_type: None,
        }
    }
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
    /// Third path segment, or `other` for shallow tokens.
    pub fn category(&self) -> &str {
        match self.path.get(2) {
            Some(category) if !category.is_empty() => category,
            _ => "other",
        }
    }
    pub fn css_name(&self) -> String {
        css_variable_name(&self.path)
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct DesignTokens {
    pub root: IndexMap<String, TokenOrGroup>,
}
impl DesignTokens {
    /// Depth-first, in source order, with aliases resolved.
    pub fn tokens(&self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        collect_group(&self.root, &mut Vec::new(), &mut tokens)?;
        expression::resolve_aliases(&mut tokens)?;
        Ok(tokens)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TokenOrGroup {
    Token {
        #[serde(alias = "$value")]
        value: TokenValue,
        #[serde(rename = "type", alias = "$type")]
        type_: Option<String>,
        #[serde(alias = "$description")]
        description: Option<String>,
    },
    Group(IndexMap<String, TokenOrGroup>),
    Metadata(serde_json::Value),
}
impl TokenOrGroup {
    fn collect(&self, path: &mut Vec<String>, tokens: &mut Vec<Token>) -> Result<()> {
        match self {
            TokenOrGroup::Token {
                value,
                type_,
                description,
            } => tokens.push(Token {
                value: value.to_css(path)?,
                path: path.clone(),
                description: description.clone(),
                token_type: type_.clone(),
            }),
            TokenOrGroup::Group(group) => collect_group(group, path, tokens)?,
            TokenOrGroup::Metadata(_) => {}
        }
        Ok(())
    }
}

// `$type`, `$description` and friends describe the group, not a child.
fn collect_group(
    group: &IndexMap<String, TokenOrGroup>,
    path: &mut Vec<String>,
    tokens: &mut Vec<Token>,
) -> Result<()> {
    for (key, node) in group.iter().filter(|(key, _)| !key.starts_with('$')) {
        path.push(key.clone());
        node.collect(path, tokens)?;
        path.pop();
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Single(String),
    Number(serde_json::Number),
    Bool(bool),
    Composite(serde_json::Value),
}
impl TokenValue {
    fn to_css(&self, path: &[String]) -> Result<String> {
        match self {
            TokenValue::Single(value) => Ok(value.clone()),
            TokenValue::Number(value) => Ok(value.to_string()),
            TokenValue::Bool(value) => Ok(value.to_string()),
            TokenValue::Composite(value) => Err(Error::UnsupportedValue {
                token: path.join("."),
                kind: match value {
                    serde_json::Value::Array(_) => "array",
                    serde_json::Value::Null => "null",
                    _ => "object",
                },
            }),
        }
    }
}
