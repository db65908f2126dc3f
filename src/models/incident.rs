//! Incident model and trait implementations.
//!
//! Incidents are the timeline entries of a status page: something broke,
//! someone is on it, it got fixed. Each incident can carry follow-up
//! updates and can drive the status of a component.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::CachetClient;
use crate::envelope::{Envelope, Page};
use crate::error::Result;
use crate::models::component::ComponentStatus;
use crate::models::incident_update::{
    get_incident_updates, IncidentUpdate, IncidentUpdateListQuery,
};
use crate::traits::{Create, Delete, Get, List, Update};

/// Lifecycle state of an [`Incident`].
///
/// The service encodes these as bare integers. Unrecognized values decode
/// as [`IncidentStatus::Scheduled`], the wire zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum IncidentStatus {
    /// The incident is attached to upcoming scheduled maintenance.
    #[default]
    Scheduled,
    /// The problem is being looked into.
    Investigating,
    /// The cause has been found and a fix is underway.
    Identified,
    /// A fix is deployed and being watched.
    Watching,
    /// The incident is resolved.
    Fixed,
}

impl From<IncidentStatus> for u8 {
    fn from(status: IncidentStatus) -> u8 {
        match status {
            IncidentStatus::Scheduled => 0,
            IncidentStatus::Investigating => 1,
            IncidentStatus::Identified => 2,
            IncidentStatus::Watching => 3,
            IncidentStatus::Fixed => 4,
        }
    }
}

impl From<u8> for IncidentStatus {
    fn from(code: u8) -> Self {
        match code {
            1 => IncidentStatus::Investigating,
            2 => IncidentStatus::Identified,
            3 => IncidentStatus::Watching,
            4 => IncidentStatus::Fixed,
            _ => IncidentStatus::Scheduled,
        }
    }
}

/// Who can see an incident.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum IncidentVisibility {
    /// Only logged-in dashboard users.
    #[default]
    LoggedIn,
    /// Everyone.
    Public,
}

impl From<IncidentVisibility> for u8 {
    fn from(visibility: IncidentVisibility) -> u8 {
        match visibility {
            IncidentVisibility::LoggedIn => 0,
            IncidentVisibility::Public => 1,
        }
    }
}

impl From<u8> for IncidentVisibility {
    fn from(code: u8) -> Self {
        match code {
            1 => IncidentVisibility::Public,
            _ => IncidentVisibility::LoggedIn,
        }
    }
}

/// An incident reported on the status page.
///
/// # Example
///
/// ```ignore
/// use cachet_api::{CachetClient, Incident, List};
///
/// let client = CachetClient::from_env()?;
/// let incidents = Incident::list_all(&client, &Default::default()).await?;
/// for incident in incidents {
///     println!("{}: {}", incident.name, incident.human_status);
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    /// Unique incident ID.
    pub id: u32,

    /// Component the incident is attached to; `0` when none.
    #[serde(default)]
    pub component_id: u32,

    /// Incident title.
    pub name: String,

    /// Current lifecycle state.
    #[serde(default)]
    pub status: IncidentStatus,

    /// Who can see the incident.
    #[serde(default)]
    pub visible: IncidentVisibility,

    /// Markdown body describing the incident.
    #[serde(default)]
    pub message: String,

    /// When the incident is scheduled for, when it came from a maintenance
    /// window.
    #[serde(default)]
    pub scheduled_at: Option<String>,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Deletion timestamp for soft-deleted incidents.
    #[serde(default)]
    pub deleted_at: Option<String>,

    /// Human-readable status (e.g., "Fixed").
    #[serde(default)]
    pub human_status: String,
}

impl Incident {
    /// Whether the incident has reached its terminal state.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status == IncidentStatus::Fixed
    }

    /// Whether the incident is visible without logging in.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visible == IncidentVisibility::Public
    }

    /// Fetch the first page of updates posted to this incident.
    pub async fn updates(&self, client: &CachetClient) -> Result<Page<IncidentUpdate>> {
        get_incident_updates(client, self.id, &IncidentUpdateListQuery::default()).await
    }
}

/// Payload for creating or updating an incident.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentParams {
    /// Incident title.
    pub name: String,

    /// Markdown body.
    pub message: String,

    /// Lifecycle state.
    pub status: IncidentStatus,

    /// Who can see the incident; the service defaults new incidents to
    /// public.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<IncidentVisibility>,

    /// Component to attach the incident to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<u32>,

    /// New status for the attached component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_status: Option<ComponentStatus>,

    /// Whether subscribers get notified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<bool>,
}

impl IncidentParams {
    /// Params with just the required fields set.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        status: IncidentStatus,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            status,
            visible: None,
            component_id: None,
            component_status: None,
            notify: None,
        }
    }
}

/// Query parameters for listing incidents.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IncidentListQuery {
    /// Filter by exact ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    /// Filter by attached component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<u32>,

    /// Filter by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Filter by lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IncidentStatus>,

    /// Filter by visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<IncidentVisibility>,
}

// =============================================================================
// TRAIT IMPLEMENTATIONS
// =============================================================================

#[async_trait]
impl Get for Incident {
    type Id = u32;

    #[tracing::instrument(skip(client))]
    async fn get(client: &CachetClient, id: Self::Id) -> Result<Self> {
        let path = format!("api/v1/incidents/{id}");
        let (envelope, _) = client.get::<Envelope<Incident>>(&path).await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl List for Incident {
    type Query = IncidentListQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &CachetClient,
        query: &Self::Query,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Self>> {
        #[derive(Serialize)]
        struct RequestParams<'a> {
            #[serde(flatten)]
            query: &'a IncidentListQuery,
            page: u32,
            per_page: u32,
        }

        let params = RequestParams {
            query,
            page,
            per_page,
        };

        let (listing, _) = client
            .get_with_query::<Page<Incident>, _>("api/v1/incidents", &params)
            .await?;
        Ok(listing)
    }
}

#[async_trait]
impl Create for Incident {
    type Params = IncidentParams;

    #[tracing::instrument(skip(client))]
    async fn create(client: &CachetClient, params: Self::Params) -> Result<Self> {
        let (envelope, _) = client
            .post::<_, Envelope<Incident>>("api/v1/incidents", &params)
            .await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl Update for Incident {
    type Id = u32;
    type Params = IncidentParams;

    #[tracing::instrument(skip(client))]
    async fn update(client: &CachetClient, id: Self::Id, params: Self::Params) -> Result<Self> {
        let path = format!("api/v1/incidents/{id}");
        let (envelope, _) = client.put::<_, Envelope<Incident>>(&path, &params).await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl Delete for Incident {
    type Id = u32;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &CachetClient, id: Self::Id) -> Result<()> {
        let path = format!("api/v1/incidents/{id}");
        client.delete(&path).await?;
        Ok(())
    }
}
