//! Platform bucketing of release assets.
//!
//! Classification is substring keyword matching over file names, queried per
//! platform on demand rather than computed as a single partition.

mod classifier;
mod platform;

pub use classifier::{assets_for_platform, display_label, os_label};
pub use platform::Platform;
