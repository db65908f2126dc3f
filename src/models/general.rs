//! Instance-level endpoints that belong to no single resource.

use serde::{Deserialize, Serialize};

use crate::client::CachetClient;
use crate::envelope::Envelope;
use crate::error::Result;

/// Overall instance health from the `status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceStatus {
    /// `"success"` when everything is operational, `"info"` or `"danger"`
    /// otherwise.
    pub status: String,

    /// Human-readable summary shown as the page banner.
    #[serde(default)]
    pub message: String,
}

impl InstanceStatus {
    /// Whether every component reports as operational.
    #[must_use]
    pub fn is_operational(&self) -> bool {
        self.status == "success"
    }
}

/// Running version and release freshness from the `version` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Version the instance runs, e.g. `"2.4.0"`.
    pub version: String,

    /// Whether that is the newest published release.
    pub on_latest: bool,

    /// The newest published release.
    pub latest: LatestRelease,
}

/// The newest release the instance knows about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestRelease {
    /// Git tag of the release.
    #[serde(default)]
    pub tag_name: String,

    /// True for pre-releases. The service spells the key `prelease`.
    #[serde(default)]
    pub prelease: bool,

    /// True for draft releases.
    #[serde(default)]
    pub draft: bool,
}

/// Call the `ping` test endpoint. Answers `"Pong!"` when the instance is up.
///
/// # Example
///
/// ```ignore
/// use cachet_api::{ping, CachetClient};
///
/// let client = CachetClient::from_env()?;
/// println!("{}", ping(&client).await?);
/// ```
#[tracing::instrument(skip(client))]
pub async fn ping(client: &CachetClient) -> Result<String> {
    let (envelope, _) = client.get::<Envelope<String>>("api/v1/ping").await?;
    Ok(envelope.data)
}

/// Fetch the instance version and how it compares to the newest release.
#[tracing::instrument(skip(client))]
pub async fn version(client: &CachetClient) -> Result<VersionInfo> {
    // The version string sits under data while the release details sit
    // under meta; fold them into one value.
    #[derive(Default, Deserialize)]
    struct WireMeta {
        #[serde(default)]
        on_latest: bool,
        #[serde(default)]
        latest: LatestRelease,
    }

    #[derive(Deserialize)]
    struct Wire {
        #[serde(default)]
        meta: WireMeta,
        data: String,
    }

    let (wire, _) = client.get::<Wire>("api/v1/version").await?;
    Ok(VersionInfo {
        version: wire.data,
        on_latest: wire.meta.on_latest,
        latest: wire.meta.latest,
    })
}

/// Fetch the overall instance status banner.
#[tracing::instrument(skip(client))]
pub async fn instance_status(client: &CachetClient) -> Result<InstanceStatus> {
    let (envelope, _) = client
        .get::<Envelope<InstanceStatus>>("api/v1/status")
        .await?;
    Ok(envelope.data)
}
