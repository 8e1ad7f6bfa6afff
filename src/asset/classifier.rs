use super::Platform;
use crate::github::ReleaseAsset;

/// Assets whose file name matches the platform's keyword set, in release order.
pub fn assets_for_platform(assets: &[ReleaseAsset], platform: Platform) -> Vec<&ReleaseAsset> {
    assets
        .iter()
        .filter(|asset| {
            let name = asset.name.to_lowercase();
            platform.keywords().iter().any(|kw| name.contains(kw))
        })
        .collect()
}

/// Human-readable OS label for an asset file name.
///
/// Checks run in a fixed order, so a name matching several keyword sets gets
/// the first label; unmatched names fall back to "Other".
pub fn os_label(file_name: &str) -> &'static str {
    let name = file_name.to_lowercase();
    if contains_any(&name, Platform::Windows.keywords()) {
        "Windows"
    } else if contains_any(&name, Platform::Mac.keywords()) {
        "macOS"
    } else if name.contains("linux") || name.contains(".appimage") {
        "Linux (AppImage)"
    } else if name.contains(".deb") {
        "Linux (Debian/Ubuntu)"
    } else if name.contains(".rpm") {
        "Linux (Red Hat/Fedora)"
    } else {
        "Other"
    }
}

/// OS label plus a marker for portable builds.
pub fn display_label(file_name: &str) -> String {
    let label = os_label(file_name);
    if file_name.to_lowercase().contains("portable") {
        format!("{} (Portable)", label)
    } else {
        label.to_string()
    }
}

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| name.contains(kw))
}
