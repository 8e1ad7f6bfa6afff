use anyhow::Result;

use super::fetch_latest;
use crate::asset::display_label;
use crate::github::{GitHubRepo, Release, ReleaseSource};
use crate::output::{format_date, format_size};

/// Show the latest release and all of its assets.
#[tracing::instrument(skip(source))]
pub async fn latest<G: ReleaseSource>(source: &G, repo_str: &str, json: bool) -> Result<()> {
    let repo = repo_str.parse::<GitHubRepo>()?;
    let release = fetch_latest(source, &repo).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&release)?);
    } else {
        print!("{}", render_release(&release));
    }
    Ok(())
}

fn render_release(release: &Release) -> String {
    let title = match &release.name {
        Some(name) if !name.is_empty() && *name != release.tag_name => {
            format!("{} ({})", name, release.tag_name)
        }
        _ => release.tag_name.clone(),
    };

    let mut out = format!("{}\n", title);
    if let Some(published) = &release.published_at {
        out.push_str(&format!("Released on {}\n", format_date(published)));
    }

    if release.assets.is_empty() {
        out.push_str("No downloadable assets.\n");
        return out;
    }

    out.push('\n');
    for asset in &release.assets {
        out.push_str(&format!(
            "  {:<44} {:<26} {:>10}\n",
            asset.name,
            display_label(&asset.name),
            format_size(asset.size)
        ));
    }
    out
}
