use serde::{Deserialize, Serialize};

/// One downloadable file attached to a release.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
    pub size: u64,
    pub content_type: Option<String>,
}

/// A tagged, published release and its downloadable assets.
///
/// Both the releases API and the static `latest.json` manifest deserialize
/// into this shape; asset order is preserved as delivered by the source.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct Release {
    pub tag_name: String,
    pub name: Option<String>,
    pub published_at: Option<String>,
    pub assets: Vec<ReleaseAsset>,
}

/// Repository metadata used for badge display.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct RepoInfo {
    pub stargazers_count: u64,
}
