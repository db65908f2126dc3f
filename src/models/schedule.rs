//! Schedule model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::CachetClient;
use crate::envelope::{Envelope, Page};
use crate::error::Result;
use crate::models::component::Component;
use crate::traits::{Create, Delete, Get, List, Update};

/// Lifecycle state of a [`Schedule`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum ScheduleStatus {
    /// The window has not started yet.
    #[default]
    Upcoming,
    /// The work is underway.
    InProgress,
    /// The work is done.
    Complete,
}

impl From<ScheduleStatus> for u8 {
    fn from(status: ScheduleStatus) -> u8 {
        match status {
            ScheduleStatus::Upcoming => 0,
            ScheduleStatus::InProgress => 1,
            ScheduleStatus::Complete => 2,
        }
    }
}

impl From<u8> for ScheduleStatus {
    fn from(code: u8) -> Self {
        match code {
            1 => ScheduleStatus::InProgress,
            2 => ScheduleStatus::Complete,
            _ => ScheduleStatus::Upcoming,
        }
    }
}

/// A scheduled maintenance window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Unique schedule ID.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Markdown body describing the planned work.
    #[serde(default)]
    pub message: String,

    /// Current lifecycle state.
    #[serde(default)]
    pub status: ScheduleStatus,

    /// When the window starts.
    #[serde(default)]
    pub scheduled_at: Option<String>,

    /// When the work finished.
    #[serde(default)]
    pub completed_at: Option<String>,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Components affected by the window.
    #[serde(default)]
    pub components: Vec<Component>,

    /// Human-readable status (e.g., "Complete").
    #[serde(default)]
    pub human_status: String,
}

impl Schedule {
    /// Whether the window has run to completion.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == ScheduleStatus::Complete
    }
}

/// Payload for creating or updating a schedule.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleParams {
    /// Display name.
    pub name: String,

    /// Lifecycle state.
    pub status: ScheduleStatus,

    /// Markdown body describing the planned work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// When the window starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,

    /// When the work finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl ScheduleParams {
    /// Params with just the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, status: ScheduleStatus) -> Self {
        Self {
            name: name.into(),
            status,
            message: None,
            scheduled_at: None,
            completed_at: None,
        }
    }
}

/// Query parameters for listing schedules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleListQuery {
    /// Filter by exact ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    /// Filter by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Filter by lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ScheduleStatus>,
}

#[async_trait]
impl Get for Schedule {
    type Id = u32;

    #[tracing::instrument(skip(client))]
    async fn get(client: &CachetClient, id: Self::Id) -> Result<Self> {
        let path = format!("api/v1/schedules/{id}");
        let (envelope, _) = client.get::<Envelope<Schedule>>(&path).await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl List for Schedule {
    type Query = ScheduleListQuery;

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
            query: &'a ScheduleListQuery,
            page: u32,
            per_page: u32,
        }

        let params = RequestParams {
            query,
            page,
            per_page,
        };

        let (listing, _) = client
            .get_with_query::<Page<Schedule>, _>("api/v1/schedules", &params)
            .await?;
        Ok(listing)
    }
}

#[async_trait]
impl Create for Schedule {
    type Params = ScheduleParams;

    #[tracing::instrument(skip(client))]
    async fn create(client: &CachetClient, params: Self::Params) -> Result<Self> {
        let (envelope, _) = client
            .post::<_, Envelope<Schedule>>("api/v1/schedules", &params)
            .await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl Update for Schedule {
    type Id = u32;
    type Params = ScheduleParams;

    #[tracing::instrument(skip(client))]
    async fn update(client: &CachetClient, id: Self::Id, params: Self::Params) -> Result<Self> {
        let path = format!("api/v1/schedules/{id}");
        let (envelope, _) = client.put::<_, Envelope<Schedule>>(&path, &params).await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl Delete for Schedule {
    type Id = u32;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &CachetClient, id: Self::Id) -> Result<()> {
        let path = format!("api/v1/schedules/{id}");
        client.delete(&path).await?;
        Ok(())
    }
}
