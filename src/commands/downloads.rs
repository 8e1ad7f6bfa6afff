use anyhow::{Result, anyhow};

use super::fetch_latest;
use crate::asset::{Platform, assets_for_platform, display_label};
use crate::github::{GitHubRepo, Release, ReleaseSource};
use crate::output::format_size;

/// List the latest release's downloads for one platform.
#[tracing::instrument(skip(source))]
pub async fn downloads<G: ReleaseSource>(
    source: &G,
    repo_str: &str,
    platform_str: Option<&str>,
) -> Result<()> {
    let repo = repo_str.parse::<GitHubRepo>()?;
    let platform = resolve_platform(platform_str)?;
    let release = fetch_latest(source, &repo).await?;

    print!("{}", render_downloads(&release, platform));
    Ok(())
}

fn resolve_platform(platform_str: Option<&str>) -> Result<Platform> {
    match platform_str {
        Some(s) => s.parse(),
        None => Platform::detect().ok_or_else(|| {
            anyhow!("Could not detect a supported platform. Pass --platform (windows, mac, linux).")
        }),
    }
}

fn render_downloads(release: &Release, platform: Platform) -> String {
    let assets = assets_for_platform(&release.assets, platform);
    if assets.is_empty() {
        return format!("No downloads available for {}.\n", platform);
    }

    let mut out = format!("{} downloads for {}:\n\n", release.tag_name, platform);
    for asset in assets {
        out.push_str(&format!(
            "  {:<26} {:>10}  {}\n",
            display_label(&asset.name),
            format_size(asset.size),
            asset.browser_download_url
        ));
    }
    out
}
