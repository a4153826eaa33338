use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Load,
    Save,
    Validation,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to parse {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to serialize flights: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("unable to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' does not name a data file", path.display())]
    InvalidFileName { path: PathBuf },

    #[error("unable to resolve home directory")]
    HomeDirectoryUnavailable,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read { .. } | Self::Decode { .. } => ErrorKind::Load,
            Self::Encode(_) | Self::Write { .. } => ErrorKind::Save,
            Self::InvalidFileName { .. } | Self::HomeDirectoryUnavailable => {
                ErrorKind::Validation
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
