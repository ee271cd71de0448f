//! Repository slugs.

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryPathError {
    #[error("Invalid repository slug '{path}', expected 'owner/name'")]
    InvalidRepositoryPath { path: String },
}

/// Repository slug, `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryPath {
    owner: String,
    name: String,
}

impl RepositoryPath {
    pub fn new(path: &str) -> Result<Self, RepositoryPathError> {
        match path.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.into(),
                    name: name.into(),
                })
            }
            _ => Err(RepositoryPathError::InvalidRepositoryPath { path: path.into() }),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryPath {
    type Err = RepositoryPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for RepositoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
