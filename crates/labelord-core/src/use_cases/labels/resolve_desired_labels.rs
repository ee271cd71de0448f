use async_trait::async_trait;
use labelord_config::Settings;
use labelord_ghapi_interface::ApiService;
use labelord_models::{Label, LabelSet};

use super::fetch_label_set::{FetchLabelSetUseCase, FetchLabelSetUseCaseInterface};
use crate::{DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ResolveDesiredLabelsUseCaseInterface {
    async fn run(&self, template_repository: Option<String>, settings: &Settings)
        -> Result<LabelSet>;
}

/// Resolve the desired label set.
///
/// Priority: template repository given on the command line, then the one
/// from the settings, then the static `[labels]` section.
pub struct ResolveDesiredLabelsUseCase<'a> {
    pub api_service: &'a dyn ApiService,
}

#[async_trait]
impl<'a> ResolveDesiredLabelsUseCaseInterface for ResolveDesiredLabelsUseCase<'a> {
    #[tracing::instrument(skip(self, settings))]
    async fn run(
        &self,
        template_repository: Option<String>,
        settings: &Settings,
    ) -> Result<LabelSet> {
        let template_repository =
            template_repository.or_else(|| settings.template_repository.clone());

        if let Some(template_repository) = template_repository {
            return FetchLabelSetUseCase {
                api_service: self.api_service,
            }
            .run(&template_repository)
            .await;
        }

        settings
            .labels
            .as_ref()
            .map(|labels| {
                labels
                    .iter()
                    .map(|(name, color)| Label::new(name.clone(), color.clone()))
                    .collect()
            })
            .ok_or(DomainError::MissingLabelSpecification)
    }
}

#[cfg(test)]
mod tests {
    use labelord_ghapi_interface::{
        types::{GhLabel, GhPage},
        MockApiService,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn settings() -> Settings {
        Settings {
            labels: Some(vec![("Bug".into(), "ff0000".into())]),
            template_repository: Some("owner/settings-template".into()),
            ..Default::default()
        }
    }

    fn template(api_service: &mut MockApiService, expected: &'static str) {
        api_service
            .expect_labels_list_page()
            .once()
            .withf(move |repository, _| repository == expected)
            .return_once(|_, _| Ok(GhPage::last(vec![GhLabel::new("question", "cc317c")])));
    }

    #[tokio::test]
    async fn flag_wins_over_settings() -> Result<()> {
        let mut api_service = MockApiService::new();
        template(&mut api_service, "owner/flag-template");

        let labels = ResolveDesiredLabelsUseCase {
            api_service: &api_service,
        }
        .run(Some("owner/flag-template".into()), &settings())
        .await?;

        assert_eq!(labels.keys().collect::<Vec<_>>(), vec!["question"]);
        Ok(())
    }

    #[tokio::test]
    async fn settings_template_wins_over_static_labels() -> Result<()> {
        let mut api_service = MockApiService::new();
        template(&mut api_service, "owner/settings-template");

        let labels = ResolveDesiredLabelsUseCase {
            api_service: &api_service,
        }
        .run(None, &settings())
        .await?;

        assert_eq!(labels.keys().collect::<Vec<_>>(), vec!["question"]);
        Ok(())
    }

    #[tokio::test]
    async fn static_labels() -> Result<()> {
        let api_service = MockApiService::new();
        let settings = Settings {
            template_repository: None,
            ..settings()
        };

        let labels = ResolveDesiredLabelsUseCase {
            api_service: &api_service,
        }
        .run(None, &settings)
        .await?;

        assert_eq!(labels.get("bug"), Some(&Label::new("Bug", "ff0000")));
        Ok(())
    }

    #[tokio::test]
    async fn nothing_configured() {
        let api_service = MockApiService::new();

        let result = ResolveDesiredLabelsUseCase {
            api_service: &api_service,
        }
        .run(None, &Settings::default())
        .await;

        assert!(matches!(
            result,
            Err(DomainError::MissingLabelSpecification)
        ));
    }
}
