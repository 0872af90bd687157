use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("error opening input file {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("absolute path should start with \"/\": {0}")]
    RelativeTarget(String),

    #[error("unbalanced menu end (no open menu):\n----\n{block}\n----")]
    UnbalancedMenuEnd { block: String },

    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("cannot read config {}: {source}", .path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("invalid config JSON in {}: {source}", .path.display())]
    InvalidConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
