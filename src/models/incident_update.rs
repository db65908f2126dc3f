//! Incident update model and endpoint functions.
//!
//! Updates live under their parent incident at
//! `api/v1/incidents/{id}/updates`, so they are exposed as free functions
//! taking the incident ID rather than through the entity traits.

use serde::{Deserialize, Serialize};

use crate::client::CachetClient;
use crate::envelope::{Envelope, Page};
use crate::error::Result;
use crate::models::component::ComponentStatus;
use crate::models::incident::IncidentStatus;

/// A follow-up update posted to an incident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentUpdate {
    /// Unique update ID.
    pub id: u32,

    /// Incident the update belongs to.
    pub incident_id: u32,

    /// Lifecycle state the incident moved to with this update.
    #[serde(default)]
    pub status: IncidentStatus,

    /// Markdown body of the update.
    #[serde(default)]
    pub message: String,

    /// Dashboard user who posted the update.
    #[serde(default)]
    pub user_id: u32,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Human-readable status (e.g., "Fixed").
    #[serde(default)]
    pub human_status: String,

    /// Direct link to the update on the status page.
    #[serde(default)]
    pub permalink: String,
}

/// Payload for posting or editing an incident update.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentUpdateParams {
    /// Lifecycle state the incident moves to.
    pub status: IncidentStatus,

    /// Markdown body.
    pub message: String,

    /// New status for the component attached to the incident.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_status: Option<ComponentStatus>,
}

impl IncidentUpdateParams {
    /// Params with just the required fields set.
    #[must_use]
    pub fn new(status: IncidentStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            component_status: None,
        }
    }
}

/// Query parameters for listing incident updates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IncidentUpdateListQuery {
    /// Page number (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// Fetch a page of updates for an incident.
///
/// # Arguments
///
/// * `client` - The Cachet API client
/// * `incident_id` - The parent incident
/// * `query` - Pagination parameters
///
/// # Example
///
/// ```ignore
/// use cachet_api::{get_incident_updates, CachetClient};
///
/// let client = CachetClient::from_env()?;
/// let updates = get_incident_updates(&client, 1, &Default::default()).await?;
/// for update in &updates {
///     println!("{}: {}", update.human_status, update.message);
/// }
/// ```
#[tracing::instrument(skip(client))]
pub async fn get_incident_updates(
    client: &CachetClient,
    incident_id: u32,
    query: &IncidentUpdateListQuery,
) -> Result<Page<IncidentUpdate>> {
    let path = format!("api/v1/incidents/{incident_id}/updates");
    let (listing, _) = client
        .get_with_query::<Page<IncidentUpdate>, _>(&path, query)
        .await?;
    Ok(listing)
}

/// Fetch a single update of an incident.
#[tracing::instrument(skip(client))]
pub async fn get_incident_update(
    client: &CachetClient,
    incident_id: u32,
    update_id: u32,
) -> Result<IncidentUpdate> {
    let path = format!("api/v1/incidents/{incident_id}/updates/{update_id}");
    let (envelope, _) = client.get::<Envelope<IncidentUpdate>>(&path).await?;
    Ok(envelope.data)
}

/// Post a new update to an incident.
#[tracing::instrument(skip(client))]
pub async fn create_incident_update(
    client: &CachetClient,
    incident_id: u32,
    params: IncidentUpdateParams,
) -> Result<IncidentUpdate> {
    let path = format!("api/v1/incidents/{incident_id}/updates");
    let (envelope, _) = client
        .post::<_, Envelope<IncidentUpdate>>(&path, &params)
        .await?;
    Ok(envelope.data)
}

/// Edit an existing update of an incident.
#[tracing::instrument(skip(client))]
pub async fn update_incident_update(
    client: &CachetClient,
    incident_id: u32,
    update_id: u32,
    params: IncidentUpdateParams,
) -> Result<IncidentUpdate> {
    let path = format!("api/v1/incidents/{incident_id}/updates/{update_id}");
    let (envelope, _) = client
        .put::<_, Envelope<IncidentUpdate>>(&path, &params)
        .await?;
    Ok(envelope.data)
}

/// Remove an update from an incident.
#[tracing::instrument(skip(client))]
pub async fn delete_incident_update(
    client: &CachetClient,
    incident_id: u32,
    update_id: u32,
) -> Result<()> {
    let path = format!("api/v1/incidents/{incident_id}/updates/{update_id}");
    client.delete(&path).await?;
    Ok(())
}
