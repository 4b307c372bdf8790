use semver::Version;
use serde::{Deserialize, Serialize};

/// Downloadable file attached to a loader release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// A loader release known to the updater
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteVersion {
    pub tag_name: String,
    pub name: String,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl RemoteVersion {
    /// Parses the release tag as a semantic version
    pub fn version(&self) -> Option<Version> {
        parse_tag(&self.tag_name)
    }
}

/// Loader version descriptor supplied by the updater
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Version of the running loader, usually a release tag like "v2.10.3"
    pub current: String,
    /// Newest release on the selected branch, if the updater could fetch it
    #[serde(default)]
    pub remote: Option<RemoteVersion>,
    /// Every release on the selected branch
    #[serde(default)]
    pub all: Option<Vec<RemoteVersion>>,
    /// Whether this install can update itself
    #[serde(default)]
    pub updatable: bool,
}

impl VersionInfo {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            remote: None,
            all: None,
            updatable: false,
        }
    }

    /// The running loader version, `None` for dev builds and other non-semver tags
    pub fn current_version(&self) -> Option<Version> {
        parse_tag(&self.current)
    }

    pub fn latest_remote(&self) -> Option<&RemoteVersion> {
        self.remote.as_ref()
    }

    /// True when the remote release parses and is newer than the current one
    pub fn remote_is_newer(&self) -> bool {
        match (self.current_version(), self.remote.as_ref().and_then(RemoteVersion::version)) {
            (Some(current), Some(remote)) => remote > current,
            _ => false,
        }
    }
}

fn parse_tag(tag: &str) -> Option<Version> {
    let trimmed = tag.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(trimmed).ok()
}
