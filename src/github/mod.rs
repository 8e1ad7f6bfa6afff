//! Latest-release and repository metadata retrieval.

mod client;
mod error;
mod repo;
mod types;

pub use client::{DEFAULT_API_URL, DEFAULT_DOWNLOAD_URL, GitHub, ReleaseSource};
pub use error::{FetchError, check_status};
pub use repo::GitHubRepo;
pub use types::{Release, ReleaseAsset, RepoInfo};

#[cfg(test)]
pub use client::MockReleaseSource;
