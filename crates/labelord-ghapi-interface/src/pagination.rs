//! Lazy pagination.
//!
//! Listings are exposed as finite streams that fetch one page per step. A
//! failing page ends the stream with that error; pages already yielded stay
//! yielded. Calling the builder again restarts from the first page.

use std::future::Future;

use futures::{stream, Stream, TryStreamExt};

use crate::{
    types::{GhLabel, GhPage, GhPageCursor, GhRepository},
    ApiService, Result,
};

/// Build an item stream from a page fetcher.
pub fn paginate<'a, T, F, Fut>(fetch: F) -> impl Stream<Item = Result<T>> + 'a
where
    T: 'a,
    F: Fn(GhPageCursor) -> Fut + 'a,
    Fut: Future<Output = Result<GhPage<T>>> + 'a,
{
    stream::try_unfold(Some(GhPageCursor::First), move |cursor| {
        let page = cursor.map(&fetch);
        async move {
            match page {
                Some(page) => page.await.map(|page| Some((page.items, page.next))),
                None => Ok(None),
            }
        }
    })
    .map_ok(|items| stream::iter(items.into_iter().map(Ok)))
    .try_flatten()
}

/// Stream every label of a repository.
pub fn labels_stream<'a>(
    api_service: &'a dyn ApiService,
    repository: &'a str,
) -> impl Stream<Item = Result<GhLabel>> + 'a {
    paginate(move |cursor| api_service.labels_list_page(repository, cursor))
}

/// Stream every repository accessible to the authenticated user.
pub fn user_repositories_stream(
    api_service: &dyn ApiService,
) -> impl Stream<Item = Result<GhRepository>> + '_ {
    paginate(move |cursor| api_service.user_repositories_list_page(cursor))
}

/// Fetch every label of a repository.
pub async fn labels_list_all(api_service: &dyn ApiService, repository: &str) -> Result<Vec<GhLabel>> {
    labels_stream(api_service, repository).try_collect().await
}

/// Fetch every repository accessible to the authenticated user.
pub async fn user_repositories_list_all(api_service: &dyn ApiService) -> Result<Vec<GhRepository>> {
    user_repositories_stream(api_service).try_collect().await
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ApiError, MockApiService};

    #[tokio::test]
    async fn follows_next_links_until_exhausted() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_labels_list_page()
            .once()
            .withf(|repository, cursor| {
                repository == "owner/repo" && cursor == &GhPageCursor::First
            })
            .return_once(|_, _| {
                Ok(GhPage::with_next(
                    vec![GhLabel::new("bug", "ff0000")],
                    "https://api.github.com/repositories/1/labels?per_page=100&page=2",
                ))
            });
        api_service
            .expect_labels_list_page()
            .once()
            .withf(|_, cursor| {
                cursor
                    == &GhPageCursor::Next(
                        "https://api.github.com/repositories/1/labels?per_page=100&page=2".into(),
                    )
            })
            .return_once(|_, _| Ok(GhPage::last(vec![GhLabel::new("wontfix", "ffffff")])));

        let labels = labels_list_all(&api_service, "owner/repo").await.unwrap();
        assert_eq!(
            labels,
            vec![
                GhLabel::new("bug", "ff0000"),
                GhLabel::new("wontfix", "ffffff")
            ]
        );
    }

    #[tokio::test]
    async fn failing_page_surfaces_error_after_yielded_items() {
        let mut api_service = MockApiService::new();
        api_service
            .expect_user_repositories_list_page()
            .once()
            .withf(|cursor| cursor == &GhPageCursor::First)
            .return_once(|_| {
                Ok(GhPage::with_next(
                    vec![GhRepository::new("owner/one")],
                    "https://api.github.com/user/repos?page=2",
                ))
            });
        api_service
            .expect_user_repositories_list_page()
            .once()
            .return_once(|_| {
                Err(ApiError::HttpError {
                    status: 502,
                    message: "Bad Gateway".into(),
                })
            });

        let mut stream = Box::pin(user_repositories_stream(&api_service));
        assert_eq!(
            stream.next().await.unwrap().unwrap(),
            GhRepository::new("owner/one")
        );
        let err = stream.next().await.unwrap().unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn listing_is_lazy() {
        // No expectation: building the stream must not fetch anything.
        let api_service = MockApiService::new();
        let _stream = labels_stream(&api_service, "owner/repo");
    }
}
