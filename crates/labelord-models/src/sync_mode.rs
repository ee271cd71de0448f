use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncModeError {
    #[error("Invalid mode '{mode}', expected 'update' or 'replace'")]
    InvalidMode { mode: String },
}

/// Reconciliation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Add and modify labels.
    Update,
    /// Add, modify and delete labels.
    Replace,
}

impl SyncMode {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Replace => "replace",
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for SyncMode {
    type Err = SyncModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "update" => Ok(Self::Update),
            "replace" => Ok(Self::Replace),
            _ => Err(SyncModeError::InvalidMode { mode: s.into() }),
        }
    }
}
