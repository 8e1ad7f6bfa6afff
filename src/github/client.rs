use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use super::error::check_status;
use super::repo::GitHubRepo;
use super::types::{Release, RepoInfo};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_DOWNLOAD_URL: &str = "https://github.com";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    async fn latest_release(&self, repo: &GitHubRepo) -> Result<Release>;
    async fn repo_info(&self, repo: &GitHubRepo) -> Result<RepoInfo>;
}

pub struct GitHub {
    pub client: Client,
    pub api_url: String,
    pub download_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url, download_url))]
    pub fn new(client: Client, api_url: Option<String>, download_url: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            download_url: download_url.unwrap_or_else(|| DEFAULT_DOWNLOAD_URL.to_string()),
        }
    }
}

#[async_trait]
impl ReleaseSource for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn latest_release(&self, repo: &GitHubRepo) -> Result<Release> {
        GitHub::fetch_latest_release(repo, &self.client, &self.api_url, &self.download_url).await
    }

    #[tracing::instrument(skip(self, repo))]
    async fn repo_info(&self, repo: &GitHubRepo) -> Result<RepoInfo> {
        GitHub::fetch_repo_info(repo, &self.client, &self.api_url).await
    }
}

impl GitHub {
    /// Fetches the latest release, preferring the static manifest published
    /// alongside the release artifacts. A manifest miss (send failure,
    /// non-success status, or a body that does not parse as a release) falls
    /// back to a single call against the releases API.
    #[tracing::instrument(skip(client, api_url, download_url))]
    pub async fn fetch_latest_release(
        repo: &GitHubRepo,
        client: &Client,
        api_url: &str,
        download_url: &str,
    ) -> Result<Release> {
        match Self::fetch_manifest(repo, client, download_url).await {
            Ok(release) => return Ok(release),
            Err(e) => warn!(
                "Manifest unavailable for {} ({:#}), falling back to the releases API",
                repo, e
            ),
        }

        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            api_url, repo.owner, repo.repo
        );

        debug!("Fetching latest release from {}...", url);

        let response = client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        let release = check_status(response)?
            .json::<Release>()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        Ok(release)
    }

    /// One attempt against the well-known `latest.json` path.
    async fn fetch_manifest(
        repo: &GitHubRepo,
        client: &Client,
        download_url: &str,
    ) -> Result<Release> {
        let url = format!(
            "{}/{}/{}/releases/latest/download/latest.json",
            download_url, repo.owner, repo.repo
        );

        debug!("Fetching release manifest from {}...", url);

        let response = client
            .get(&url)
            .send()
            .await
            .context("Failed to send request for the release manifest")?;

        let release = check_status(response)?
            .json::<Release>()
            .await
            .context("Failed to parse the release manifest")?;

        Ok(release)
    }

    #[tracing::instrument(skip(client, api_url))]
    pub async fn fetch_repo_info(
        repo: &GitHubRepo,
        client: &Client,
        api_url: &str,
    ) -> Result<RepoInfo> {
        let url = format!("{}/repos/{}/{}", api_url, repo.owner, repo.repo);

        debug!("Fetching repo info from {}...", url);

        let response = client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        let info = check_status(response)?
            .json::<RepoInfo>()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        Ok(info)
    }
}
