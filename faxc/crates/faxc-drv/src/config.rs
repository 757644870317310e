//! Configuration for the `schemec` binary.
//!
//! Mirrors `faxt`'s `Config`: a `serde`-derived struct loaded from an
//! optional TOML file, with defaults standing in when no file is given.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const CONFIG_FILE_NAME: &str = "schemec.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Tokens,
    Datum,
    Ast,
}

fn default_format() -> OutputFormat {
    OutputFormat::Ast
}

/// `lowercase_identifiers` exists to record, in config form, that the
/// reader already folds identifier case per spec — it does not switch
/// any behavior on or off. See DESIGN.md for why the toggle is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default)]
    pub lowercase_identifiers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: default_format(),
            lowercase_identifiers: false,
        }
    }
}

impl Config {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(crate::error::DrvError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => Ok(Self::default()),
        }
    }
}
