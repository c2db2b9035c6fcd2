//! Errors raised while loading a token source.
//!
//! Rendering itself cannot fail; everything here comes from the loader
//! boundary (reading, parsing, alias resolution) or strict theme parsing.

use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The token source could not be read.
    #[error("failed to read token source {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The token source is not a JSON object tree.
    #[error("failed to parse token source {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A token value is an object, array or null.
    #[error("token `{token}` has an unsupported {kind} value")]
    UnsupportedValue { token: String, kind: &'static str },

    /// A `{...}` reference names a path with no token.
    #[error("token `{token}` references unknown token `{reference}`")]
    UnknownReference { token: String, reference: String },

    /// A chain of references leads back to where it started.
    #[error("circular reference: {chain}")]
    CircularReference { chain: String },

    /// A value has an unterminated or empty `{...}` reference.
    #[error("token `{token}` has a malformed reference in `{value}`")]
    MalformedReference {
        token: String,
        value: String,
        #[source]
        source: peg::error::ParseError<peg::str::LineCol>,
    },

    #[error("unknown theme `{0}` (expected light, dark, desktop, tablet or mobile)")]
    UnknownTheme(String),
}
