use anyhow::Result;
use log::warn;

use crate::github::{GitHubRepo, ReleaseSource};
use crate::output::format_star_count;

/// Print the repository's star count with digit grouping.
///
/// A failed lookup degrades to the placeholder instead of failing the
/// command.
#[tracing::instrument(skip(source))]
pub async fn stars<G: ReleaseSource>(source: &G, repo_str: &str) -> Result<()> {
    let repo = repo_str.parse::<GitHubRepo>()?;

    let count = match source.repo_info(&repo).await {
        Ok(info) => Some(info.stargazers_count),
        Err(e) => {
            warn!("Failed to fetch repository info for {}: {:#}", repo, e);
            None
        }
    };

    println!("{}", format_star_count(count));
    Ok(())
}
