use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::env;

use crate::github::GitHub;

/// Builds the release source shared by all commands.
///
/// If the GITHUB_TOKEN environment variable is set, requests carry it as a
/// Bearer token, which raises the API rate limit and allows private
/// repositories.
pub fn build_source(api_url: Option<String>, download_url: Option<String>) -> Result<GitHub> {
    let mut headers = HeaderMap::new();
    if let Ok(token) = env::var("GITHUB_TOKEN") {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("Using GITHUB_TOKEN for authentication");
    }

    let client = Client::builder()
        .user_agent("ghrd-cli")
        .default_headers(headers)
        .build()?;

    Ok(GitHub::new(client, api_url, download_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::env;

    // Both token states live in one test; GITHUB_TOKEN is process-global.
    #[tokio::test]
    async fn test_build_source_authorization_header() {
        let token = "test_token";
        unsafe {
            env::set_var("GITHUB_TOKEN", token);
        }

        let mut server = mockito::Server::new_async().await;
        let with_auth = server
            .mock("GET", "/with-token")
            .match_header("Authorization", format!("Bearer {}", token).as_str())
            .create_async()
            .await;

        let source = build_source(None, None).unwrap();
        let _ = source
            .client
            .get(format!("{}/with-token", server.url()))
            .send()
            .await;
        with_auth.assert_async().await;

        unsafe {
            env::remove_var("GITHUB_TOKEN");
        }

        let without_auth = server
            .mock("GET", "/no-token")
            .match_header("Authorization", Matcher::Missing)
            .create_async()
            .await;

        let source = build_source(None, None).unwrap();
        let _ = source
            .client
            .get(format!("{}/no-token", server.url()))
            .send()
            .await;
        without_auth.assert_async().await;
    }

    #[test]
    fn test_build_source_applies_url_overrides() {
        let source = build_source(
            Some("http://api.example".to_string()),
            Some("http://dl.example".to_string()),
        )
        .unwrap();
        assert_eq!(source.api_url, "http://api.example");
        assert_eq!(source.download_url, "http://dl.example");
    }
}
