//! Settings file.
//!
//! The settings file is an INI document with four sections:
//!
//! ```ini
//! [github]
//! token = <token>
//! webhook_secret = <secret>
//!
//! [labels]
//! Bug = ff0000
//!
//! [repos]
//! owner/repository = on
//!
//! [others]
//! template_repo = owner/template
//! ```

use std::{io::ErrorKind, path::Path};

use ini::{Ini, ParseOption};

use crate::{ConfigError, Result};

/// Default settings path.
pub const DEFAULT_SETTINGS_PATH: &str = "./config.cfg";

const GITHUB_SECTION: &str = "github";
const LABELS_SECTION: &str = "labels";
const REPOS_SECTION: &str = "repos";
const OTHERS_SECTION: &str = "others";

/// Values are taken literally: no escape sequences, no quote stripping.
fn parse_option() -> ParseOption {
    ParseOption {
        enabled_escape: false,
        enabled_quote: false,
        ..Default::default()
    }
}

/// Parsed settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// GitHub token.
    pub github_token: Option<String>,
    /// Webhook shared secret.
    pub webhook_secret: Option<String>,
    /// Desired labels as (name, color) pairs, in file order.
    pub labels: Option<Vec<(String, String)>>,
    /// Enabled repositories, in file order.
    pub repositories: Option<Vec<String>>,
    /// Repository used as label template.
    pub template_repository: Option<String>,
}

impl Settings {
    /// Load settings from a file.
    ///
    /// A missing file gives empty settings.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match Ini::load_from_file_opt(path, parse_option()) {
            Ok(ini) => Self::from_ini(&ini),
            Err(ini::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(ini::Error::Io(e)) => Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }),
            Err(ini::Error::Parse(e)) => Err(ConfigError::ParseError { source: e }),
        }
    }

    /// Parse settings from a string.
    pub fn parse(content: &str) -> Result<Self> {
        let ini = Ini::load_from_str_opt(content, parse_option())
            .map_err(|e| ConfigError::ParseError { source: e })?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self> {
        let github = ini.section(Some(GITHUB_SECTION));
        let github_token = github.and_then(|s| s.get("token")).and_then(non_empty);
        let webhook_secret = github
            .and_then(|s| s.get("webhook_secret"))
            .and_then(non_empty);

        let labels = ini.section(Some(LABELS_SECTION)).map(|section| {
            section
                .iter()
                .map(|(name, color)| {
                    (
                        name.to_string(),
                        color.trim().trim_start_matches('#').to_string(),
                    )
                })
                .collect()
        });

        let repositories = match ini.section(Some(REPOS_SECTION)) {
            Some(section) => {
                let mut enabled = Vec::new();
                for (repository, value) in section.iter() {
                    if parse_boolean(REPOS_SECTION, repository, value)? {
                        enabled.push(repository.to_string());
                    }
                }
                Some(enabled)
            }
            None => None,
        };

        let template_repository = ini
            .section(Some(OTHERS_SECTION))
            .and_then(|s| s.get("template_repo"))
            .and_then(non_empty);

        Ok(Self {
            github_token,
            webhook_secret,
            labels,
            repositories,
            template_repository,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_boolean(section: &str, option: &str, value: &str) -> Result<bool> {
    match &value.trim().to_lowercase()[..] {
        "1" | "yes" | "true" | "on" => Ok(true),
        "0" | "no" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBoolean {
            section: section.into(),
            option: option.into(),
            value: value.into(),
        }),
    }
}
