//! Catalog entity references.
//!
//! A reference has the form `[<kind>:][<namespace>/]<name>`, for example
//! `group:default/platform` or `user:jdoe`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: String,
    pub namespace: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityRefError {
    #[error("entity reference \"{0}\" was not on the form [<kind>:][<namespace>/]<name>")]
    Malformed(String),
    #[error("entity reference \"{0}\" had missing or empty kind")]
    MissingKind(String),
}

impl EntityRef {
    /// Parse a reference that must carry its own kind.
    pub fn parse(reference: &str) -> Result<Self, EntityRefError> {
        Self::parse_with_default_kind(reference, None)
    }

    /// Parse a reference, using `default_kind` when the string has none.
    pub fn parse_with_default_kind(
        reference: &str,
        default_kind: Option<&str>,
    ) -> Result<Self, EntityRefError> {
        let colon = reference.find(':');
        let slash = reference.find('/');

        // A colon after the first slash belongs to the name
        let colon = match (colon, slash) {
            (Some(c), Some(s)) if s < c => None,
            (c, _) => c,
        };

        let kind = colon.map(|c| &reference[..c]);
        let name_start = match (colon, slash) {
            (_, Some(s)) => s + 1,
            (Some(c), None) => c + 1,
            (None, None) => 0,
        };
        let namespace = slash.map(|s| &reference[colon.map_or(0, |c| c + 1)..s]);
        let name = &reference[name_start..];

        if kind == Some("") || namespace == Some("") || name.is_empty() {
            return Err(EntityRefError::Malformed(reference.to_string()));
        }

        let kind = kind
            .or(default_kind)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| EntityRefError::MissingKind(reference.to_string()))?;

        Ok(Self {
            kind: kind.to_string(),
            namespace: namespace.unwrap_or(DEFAULT_NAMESPACE).to_string(),
            name: name.to_string(),
        })
    }
}

impl FromStr for EntityRef {
    type Err = EntityRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}/{}",
            self.kind.to_lowercase(),
            self.namespace.to_lowercase(),
            self.name
        )
    }
}
