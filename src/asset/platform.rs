use anyhow::anyhow;
use std::str::FromStr;

/// Download platforms offered for a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Mac, Platform::Linux];

    /// Keywords matched case-insensitively against asset file names.
    ///
    /// The sets overlap (for example "darwin" contains "win"), so an
    /// ambiguously named asset can land in more than one bucket. No
    /// precedence is defined; each bucket is queried independently.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Platform::Windows => &["win", "windows", ".exe", ".msi"],
            Platform::Mac => &["mac", "darwin", ".dmg"],
            Platform::Linux => &["linux", ".appimage", ".deb", ".rpm"],
        }
    }

    /// Platform of the host OS, if it is one of the supported targets.
    pub fn detect() -> Option<Self> {
        #[cfg(target_os = "macos")]
        {
            Some(Platform::Mac)
        }
        #[cfg(target_os = "linux")]
        {
            Some(Platform::Linux)
        }
        #[cfg(target_os = "windows")]
        {
            Some(Platform::Windows)
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "mac" | "macos" | "darwin" => Ok(Platform::Mac),
            "linux" => Ok(Platform::Linux),
            _ => Err(anyhow!(
                "Unknown platform '{}'. Expected one of: windows, mac, linux.",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!("windows".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("win".parse::<Platform>().unwrap(), Platform::Windows);
        assert_eq!("mac".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!("macOS".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!("darwin".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!("Linux".parse::<Platform>().unwrap(), Platform::Linux);
    }

    #[test]
    fn test_platform_from_str_unknown() {
        let err = "freebsd".parse::<Platform>().unwrap_err();
        assert!(err.to_string().contains("freebsd"));
    }

    #[test]
    fn test_platform_display_round_trips() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn test_platform_detect() {
        #[cfg(target_os = "macos")]
        assert_eq!(Platform::detect(), Some(Platform::Mac));

        #[cfg(target_os = "linux")]
        assert_eq!(Platform::detect(), Some(Platform::Linux));

        #[cfg(target_os = "windows")]
        assert_eq!(Platform::detect(), Some(Platform::Windows));
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for platform in Platform::ALL {
            for kw in platform.keywords() {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }
}
