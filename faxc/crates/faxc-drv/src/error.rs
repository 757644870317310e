//! Error type for the command-line driver.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrvError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("lex error: {0}")]
    Lex(#[from] schemec_lex::LexError),

    #[error("parse error: {0}")]
    Parse(#[from] schemec_par::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DrvError>;
