use async_trait::async_trait;
use labelord_config::Settings;
use labelord_ghapi_interface::ApiService;
use labelord_models::{SyncMode, Verbosity};
use tracing::info;

use crate::{
    operation_log::render_summary,
    use_cases::{
        labels::{
            reconcile_repository::{
                ReconcileOutcome, ReconcileRepositoryUseCase, ReconcileRepositoryUseCaseInterface,
            },
            resolve_desired_labels::{
                ResolveDesiredLabelsUseCase, ResolveDesiredLabelsUseCaseInterface,
            },
        },
        repositories::resolve_target_repositories::{
            ResolveTargetRepositoriesUseCase, ResolveTargetRepositoriesUseCaseInterface,
        },
    },
    Result,
};

/// Synchronization run options, from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynchronizationOptions {
    pub mode: SyncMode,
    pub all_repositories: bool,
    pub template_repository: Option<String>,
    pub dry_run: bool,
}

/// Every repository outcome of a run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynchronizationReport {
    pub outcomes: Vec<ReconcileOutcome>,
}

impl SynchronizationReport {
    pub fn total_errors(&self) -> usize {
        self.outcomes.iter().map(|o| o.errors).sum()
    }

    pub fn repository_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_success(&self) -> bool {
        self.total_errors() == 0
    }

    /// Summary line, always shown.
    pub fn summary(&self, verbosity: Verbosity) -> String {
        render_summary(verbosity, self.total_errors(), self.repository_count())
    }

    /// Every line shown at the given verbosity, summary last.
    pub fn render(&self, verbosity: Verbosity) -> Vec<String> {
        let mut lines: Vec<String> = self
            .outcomes
            .iter()
            .flat_map(|outcome| outcome.render(verbosity))
            .collect();
        lines.push(self.summary(verbosity));
        lines
    }
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RunSynchronizationUseCaseInterface {
    async fn run(
        &self,
        options: SynchronizationOptions,
        settings: &Settings,
    ) -> Result<SynchronizationReport>;
}

/// Reconcile every target repository against the desired label set.
///
/// Label and repository specifications are resolved before anything is
/// written; a missing one fails the whole run. Repositories are then
/// processed one after the other.
pub struct RunSynchronizationUseCase<'a> {
    pub api_service: &'a dyn ApiService,
}

#[async_trait]
impl<'a> RunSynchronizationUseCaseInterface for RunSynchronizationUseCase<'a> {
    #[tracing::instrument(skip(self, settings))]
    async fn run(
        &self,
        options: SynchronizationOptions,
        settings: &Settings,
    ) -> Result<SynchronizationReport> {
        let desired = ResolveDesiredLabelsUseCase {
            api_service: self.api_service,
        }
        .run(options.template_repository.clone(), settings)
        .await?;

        let repositories = ResolveTargetRepositoriesUseCase {
            api_service: self.api_service,
        }
        .run(options.all_repositories, settings)
        .await?;

        let reconcile = ReconcileRepositoryUseCase {
            api_service: self.api_service,
        };

        let mut report = SynchronizationReport::default();
        for repository in repositories {
            let outcome = reconcile
                .run(&repository, &desired, options.mode, options.dry_run)
                .await;
            info!(
                repository = %outcome.repository,
                errors = outcome.errors,
                message = "Repository reconciled"
            );
            report.outcomes.push(outcome);
        }

        Ok(report)
    }
}
