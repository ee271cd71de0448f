use serde::Deserialize;

use crate::types::{GhLabel, GhRepository};

/// GitHub label event action.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhLabelAction {
    /// Created.
    #[default]
    Created,
    /// Edited.
    Edited,
    /// Deleted.
    Deleted,
    /// Any action this tool does not know about.
    #[serde(other)]
    Unknown,
}

/// Previous value of a changed field.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct GhPreviousValue {
    /// Old value.
    pub from: String,
}

/// Changes carried by an `edited` label event.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct GhLabelChanges {
    /// Previous name.
    pub name: Option<GhPreviousValue>,
    /// Previous color.
    pub color: Option<GhPreviousValue>,
}

/// GitHub label event.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct GhLabelEvent {
    /// Action.
    pub action: GhLabelAction,
    /// Label, after the change.
    pub label: GhLabel,
    /// Source repository.
    pub repository: GhRepository,
    /// Changes, for `edited` events.
    #[serde(default)]
    pub changes: Option<GhLabelChanges>,
}

impl GhLabelEvent {
    /// Name the label had before an edit, if it was renamed.
    pub fn previous_name(&self) -> Option<&str> {
        self.changes
            .as_ref()
            .and_then(|c| c.name.as_ref())
            .map(|v| v.from.as_str())
    }
}
