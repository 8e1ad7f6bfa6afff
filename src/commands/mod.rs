use anyhow::{Context, Result};

use crate::github::{GitHubRepo, Release, ReleaseSource};

pub mod config;
mod downloads;
mod latest;
mod stars;

pub use downloads::downloads;
pub use latest::latest;
pub use stars::stars;

/// Fetches the latest release; failures point the user at the releases page.
async fn fetch_latest<G: ReleaseSource>(source: &G, repo: &GitHubRepo) -> Result<Release> {
    source.latest_release(repo).await.with_context(|| {
        format!(
            "Failed to fetch the latest release for {}. Visit https://github.com/{}/releases directly.",
            repo, repo
        )
    })
}
