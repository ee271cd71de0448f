use serde::Deserialize;

use crate::types::GhRepository;

/// GitHub Ping event.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct GhPingEvent {
    /// Zen text.
    #[serde(default)]
    pub zen: String,
    /// Hook ID.
    #[serde(default)]
    pub hook_id: u64,
    /// Repository.
    pub repository: Option<GhRepository>,
}
