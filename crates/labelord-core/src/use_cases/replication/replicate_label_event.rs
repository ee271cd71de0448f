use async_trait::async_trait;
use labelord_ghapi_interface::{types::GhLabel, ApiService};
use labelord_models::{Label, LabelAction};
use tracing::{info, warn};

use super::suppression_store::{SuppressionMarker, SuppressionStore};

/// Single label change received from a webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEvent {
    pub action: LabelAction,
    pub repository: String,
    /// Label after the change.
    pub label: Label,
    /// Name before an edit, when the label was renamed.
    pub previous_name: Option<String>,
}

impl LabelEvent {
    fn marker_for(&self, repository: &str) -> SuppressionMarker {
        SuppressionMarker::new(
            self.action,
            repository,
            self.label.name(),
            self.label.color(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplicationOutcome {
    /// Echo of a write made by the server.
    Ignored,
    /// Change forwarded to every other peer.
    Applied { peers: usize, errors: usize },
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ReplicateLabelEventUseCaseInterface {
    async fn run(&self, event: &LabelEvent) -> ReplicationOutcome;
}

/// Forward a label change to every peer repository.
///
/// A marker is pushed before each peer write so that the event GitHub
/// sends back for it is ignored instead of being forwarded again. A
/// failing peer does not stop the others.
pub struct ReplicateLabelEventUseCase<'a> {
    pub api_service: &'a dyn ApiService,
    pub peers: &'a [String],
    pub suppression_store: &'a SuppressionStore,
}

#[async_trait]
impl<'a> ReplicateLabelEventUseCaseInterface for ReplicateLabelEventUseCase<'a> {
    #[tracing::instrument(skip(self), fields(action = %event.action, repository = %event.repository))]
    async fn run(&self, event: &LabelEvent) -> ReplicationOutcome {
        if self
            .suppression_store
            .consume(&event.marker_for(&event.repository))
            .await
        {
            info!(
                label = %event.label.name(),
                message = "Ignoring echo of a replicated change"
            );
            return ReplicationOutcome::Ignored;
        }

        let mut peers = 0;
        let mut errors = 0;
        for peer in self
            .peers
            .iter()
            .filter(|peer| !peer.eq_ignore_ascii_case(&event.repository))
        {
            peers += 1;
            self.suppression_store.push(event.marker_for(peer)).await;

            if let Err(e) = self.forward(peer, event).await {
                warn!(
                    peer = %peer,
                    error = %e,
                    message = "Could not replicate label change"
                );
                errors += 1;
            }
        }

        ReplicationOutcome::Applied { peers, errors }
    }
}

impl<'a> ReplicateLabelEventUseCase<'a> {
    async fn forward(&self, peer: &str, event: &LabelEvent) -> labelord_ghapi_interface::Result<()> {
        let label = GhLabel::new(event.label.name(), event.label.color());

        match event.action {
            LabelAction::Created => self.api_service.labels_create(peer, &label).await,
            LabelAction::Edited => {
                let current_name = event
                    .previous_name
                    .as_deref()
                    .unwrap_or_else(|| event.label.name());
                self.api_service
                    .labels_update(peer, current_name, &label)
                    .await
            }
            LabelAction::Deleted => self.api_service.labels_delete(peer, event.label.name()).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use labelord_ghapi_interface::{ApiError, MockApiService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn peers() -> Vec<String> {
        vec!["owner/r".into(), "owner/p1".into(), "owner/p2".into()]
    }

    fn event(action: LabelAction, repository: &str, name: &str, color: &str) -> LabelEvent {
        LabelEvent {
            action,
            repository: repository.into(),
            label: Label::new(name, color),
            previous_name: None,
        }
    }

    #[tokio::test]
    async fn created_is_replicated_then_echo_ignored() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_labels_create()
            .times(2)
            .withf(|repository, label| {
                (repository == "owner/p1" || repository == "owner/p2")
                    && label == &GhLabel::new("bug", "ff0000")
            })
            .returning(|_, _| Ok(()));

        let peers = peers();
        let store = SuppressionStore::new();
        let use_case = ReplicateLabelEventUseCase {
            api_service: &api_service,
            peers: &peers,
            suppression_store: &store,
        };

        let outcome = use_case
            .run(&event(LabelAction::Created, "owner/r", "bug", "ff0000"))
            .await;
        assert_eq!(outcome, ReplicationOutcome::Applied { peers: 2, errors: 0 });
        assert_eq!(
            store.snapshot().await,
            vec![
                SuppressionMarker::new(LabelAction::Created, "owner/p1", "bug", "ff0000"),
                SuppressionMarker::new(LabelAction::Created, "owner/p2", "bug", "ff0000"),
            ]
        );

        // Echo from P1: no further write, marker consumed.
        let outcome = use_case
            .run(&event(LabelAction::Created, "owner/p1", "bug", "ff0000"))
            .await;
        assert_eq!(outcome, ReplicationOutcome::Ignored);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn edited_uses_previous_name() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_labels_update()
            .times(2)
            .withf(|_, current_name, label| {
                current_name == "bug" && label == &GhLabel::new("defect", "00ff00")
            })
            .returning(|_, _, _| Ok(()));

        let peers = peers();
        let store = SuppressionStore::new();
        let outcome = ReplicateLabelEventUseCase {
            api_service: &api_service,
            peers: &peers,
            suppression_store: &store,
        }
        .run(&LabelEvent {
            previous_name: Some("bug".into()),
            ..event(LabelAction::Edited, "owner/p2", "defect", "00ff00")
        })
        .await;

        assert_eq!(outcome, ReplicationOutcome::Applied { peers: 2, errors: 0 });
        assert!(
            store
                .consume(&SuppressionMarker::new(
                    LabelAction::Edited,
                    "owner/r",
                    "defect",
                    "00ff00"
                ))
                .await
        );
    }

    #[tokio::test]
    async fn deleted_failure_does_not_stop_other_peers() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_labels_delete()
            .once()
            .withf(|repository, name| repository == "owner/r" && name == "bug")
            .return_once(|_, _| {
                Err(ApiError::HttpError {
                    status: 404,
                    message: "Not Found".into(),
                })
            });
        api_service
            .expect_labels_delete()
            .once()
            .withf(|repository, name| repository == "owner/p2" && name == "bug")
            .return_once(|_, _| Ok(()));

        let peers = peers();
        let store = SuppressionStore::new();
        let outcome = ReplicateLabelEventUseCase {
            api_service: &api_service,
            peers: &peers,
            suppression_store: &store,
        }
        .run(&event(LabelAction::Deleted, "owner/p1", "bug", "ff0000"))
        .await;

        assert_eq!(outcome, ReplicationOutcome::Applied { peers: 2, errors: 1 });
        assert_eq!(store.len().await, 2);
    }
}
