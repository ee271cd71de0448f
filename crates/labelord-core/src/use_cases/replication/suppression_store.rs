//! Suppression markers.
//!
//! A marker is pushed right before the server writes a label to a peer, so
//! the webhook event GitHub sends back for that write is recognized as an
//! echo. Matching consumes the first equal marker only. Markers never
//! expire: an echo that never arrives leaves its marker behind.

use labelord_models::LabelAction;
use serde::Serialize;
use tokio::sync::Mutex;

/// Expected echo of a write made by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuppressionMarker {
    action: LabelAction,
    repository: String,
    label_name: String,
    color: Option<String>,
}

impl SuppressionMarker {
    /// Build a marker for an action.
    ///
    /// `deleted` markers never carry a color. Repository and color compare
    /// case-insensitively, the label name exactly.
    pub fn new(action: LabelAction, repository: &str, label_name: &str, color: &str) -> Self {
        let color = match action {
            LabelAction::Deleted => None,
            LabelAction::Created | LabelAction::Edited => Some(color.to_lowercase()),
        };

        Self {
            action,
            repository: repository.to_lowercase(),
            label_name: label_name.into(),
            color,
        }
    }

    pub fn action(&self) -> LabelAction {
        self.action
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

/// Pending suppression markers, shared by concurrent webhook handlers.
#[derive(Debug, Default)]
pub struct SuppressionStore {
    markers: Mutex<Vec<SuppressionMarker>>,
}

impl SuppressionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expected echo.
    pub async fn push(&self, marker: SuppressionMarker) {
        self.markers.lock().await.push(marker);
    }

    /// Remove the first marker equal to `marker`.
    ///
    /// Returns whether one was found.
    pub async fn consume(&self, marker: &SuppressionMarker) -> bool {
        let mut markers = self.markers.lock().await;
        match markers.iter().position(|m| m == marker) {
            Some(index) => {
                markers.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.markers.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.markers.lock().await.is_empty()
    }

    /// Copy of the pending markers, oldest first.
    pub async fn snapshot(&self) -> Vec<SuppressionMarker> {
        self.markers.lock().await.clone()
    }
}
