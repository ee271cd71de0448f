use async_trait::async_trait;
use labelord_ghapi_interface::{types::GhLabel, ApiService};
use labelord_models::{LabelOperation, LabelSet, SyncMode, Verbosity};
use tracing::warn;

use super::fetch_label_set::{FetchLabelSetUseCase, FetchLabelSetUseCaseInterface};
use crate::{
    diff::compute_label_operations,
    operation_log::{OperationLogEntry, OperationStatus},
};

/// Result of one repository reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub repository: String,
    pub errors: usize,
    pub op_log: Vec<OperationLogEntry>,
}

impl ReconcileOutcome {
    /// Log lines shown at the given verbosity.
    pub fn render(&self, verbosity: Verbosity) -> Vec<String> {
        self.op_log
            .iter()
            .filter_map(|entry| entry.render(verbosity))
            .collect()
    }
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ReconcileRepositoryUseCaseInterface {
    async fn run(
        &self,
        repository: &str,
        desired: &LabelSet,
        mode: SyncMode,
        dry_run: bool,
    ) -> ReconcileOutcome;
}

/// Bring one repository to the desired label set.
///
/// Each operation is applied on its own: a failure is counted and logged,
/// then the next operation runs. When the current labels cannot be fetched,
/// the repository counts as a single error and nothing is written.
pub struct ReconcileRepositoryUseCase<'a> {
    pub api_service: &'a dyn ApiService,
}

#[async_trait]
impl<'a> ReconcileRepositoryUseCaseInterface for ReconcileRepositoryUseCase<'a> {
    #[tracing::instrument(skip(self, desired), fields(desired_count = desired.len()))]
    async fn run(
        &self,
        repository: &str,
        desired: &LabelSet,
        mode: SyncMode,
        dry_run: bool,
    ) -> ReconcileOutcome {
        let mut outcome = ReconcileOutcome {
            repository: repository.into(),
            errors: 0,
            op_log: vec![],
        };

        let current = match (FetchLabelSetUseCase {
            api_service: self.api_service,
        })
        .run(repository)
        .await
        {
            Ok(current) => current,
            Err(e) => {
                warn!(repository = repository, error = %e, message = "Could not fetch labels");
                outcome.errors += 1;
                outcome.op_log.push(OperationLogEntry::FetchError {
                    repository: repository.into(),
                    message: describe_error(e),
                });
                return outcome;
            }
        };

        for operation in compute_label_operations(&current, desired, mode) {
            let status = if dry_run {
                OperationStatus::DryRun
            } else {
                match self.apply(repository, &operation).await {
                    Ok(()) => OperationStatus::Success,
                    Err(e) => {
                        warn!(
                            repository = repository,
                            operation = ?operation,
                            error = %e,
                            message = "Label operation failed"
                        );
                        outcome.errors += 1;
                        OperationStatus::Error(e.short_description())
                    }
                }
            };

            outcome.op_log.push(OperationLogEntry::Operation {
                kind: operation.kind(),
                repository: repository.into(),
                label: operation.label().clone(),
                status,
            });
        }

        outcome
    }
}

impl<'a> ReconcileRepositoryUseCase<'a> {
    async fn apply(
        &self,
        repository: &str,
        operation: &LabelOperation,
    ) -> labelord_ghapi_interface::Result<()> {
        match operation {
            LabelOperation::Add(label) => {
                self.api_service
                    .labels_create(repository, &GhLabel::new(label.name(), label.color()))
                    .await
            }
            LabelOperation::Update { old_name, label } => {
                self.api_service
                    .labels_update(
                        repository,
                        old_name,
                        &GhLabel::new(label.name(), label.color()),
                    )
                    .await
            }
            LabelOperation::Delete(label) => {
                self.api_service
                    .labels_delete(repository, label.name())
                    .await
            }
        }
    }
}

fn describe_error(error: crate::DomainError) -> String {
    match error {
        crate::DomainError::ApiError { source } => source.short_description(),
        e => e.to_string(),
    }
}
