//! Auth.

use std::time::Duration;

use http::{header, HeaderMap};
use labelord_config::Config;
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

/// Get a GitHub client builder authenticated with a personal token.
pub fn get_authenticated_client_builder(
    config: &Config,
    token: &str,
) -> Result<ClientBuilder, GitHubError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github+json"),
    );

    let mut authorization = header::HeaderValue::from_str(&format!("token {token}"))
        .map_err(|e| GitHubError::InvalidToken { source: e })?;
    authorization.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("labelord/{}", config.version))
        .default_headers(headers))
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.github.root_url.trim_end_matches('/'),
        path.into()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_github_url() {
        let mut config = Config::from_env_no_version();
        config.api.github.root_url = "http://localhost:1234/".into();
        assert_eq!(
            build_github_url(&config, "/user/repos"),
            "http://localhost:1234/user/repos"
        );
    }

    #[test]
    fn test_invalid_token() {
        let config = Config::from_env_no_version();
        assert!(matches!(
            get_authenticated_client_builder(&config, "bad\ntoken"),
            Err(GitHubError::InvalidToken { .. })
        ));
    }
}
