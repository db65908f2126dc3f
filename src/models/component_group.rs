//! Component group model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::CachetClient;
use crate::envelope::{Envelope, Page};
use crate::error::Result;
use crate::traits::{Create, Delete, Get, List, Update};

/// How a [`ComponentGroup`] renders its members on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum GroupCollapsed {
    /// Members are always shown.
    #[default]
    Expanded,
    /// Members are hidden until the group is clicked open.
    Collapsed,
    /// Members are hidden unless one of them has an issue.
    CollapsedUntilIncident,
}

impl From<GroupCollapsed> for u8 {
    fn from(collapsed: GroupCollapsed) -> u8 {
        match collapsed {
            GroupCollapsed::Expanded => 0,
            GroupCollapsed::Collapsed => 1,
            GroupCollapsed::CollapsedUntilIncident => 2,
        }
    }
}

impl From<u8> for GroupCollapsed {
    fn from(code: u8) -> Self {
        match code {
            1 => GroupCollapsed::Collapsed,
            2 => GroupCollapsed::CollapsedUntilIncident,
            _ => GroupCollapsed::Expanded,
        }
    }
}

/// A named group of components, rendered as one section of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentGroup {
    /// Unique group ID.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Position among the groups.
    #[serde(default)]
    pub order: u32,

    /// How the group renders its members.
    #[serde(default)]
    pub collapsed: GroupCollapsed,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for creating or updating a component group.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentGroupParams {
    /// Display name.
    pub name: String,

    /// Position among the groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    /// How the group renders its members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<GroupCollapsed>,
}

impl ComponentGroupParams {
    /// Params with just the required name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order: None,
            collapsed: None,
        }
    }
}

/// Query parameters for listing component groups.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentGroupListQuery {
    /// Filter by exact ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    /// Filter by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Filter by collapse behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<GroupCollapsed>,
}

#[async_trait]
impl Get for ComponentGroup {
    type Id = u32;

    #[tracing::instrument(skip(client))]
    async fn get(client: &CachetClient, id: Self::Id) -> Result<Self> {
        let path = format!("api/v1/components/groups/{id}");
        let (envelope, _) = client.get::<Envelope<ComponentGroup>>(&path).await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl List for ComponentGroup {
    type Query = ComponentGroupListQuery;

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
            query: &'a ComponentGroupListQuery,
            page: u32,
            per_page: u32,
        }

        let params = RequestParams {
            query,
            page,
            per_page,
        };

        let (listing, _) = client
            .get_with_query::<Page<ComponentGroup>, _>("api/v1/components/groups", &params)
            .await?;
        Ok(listing)
    }
}

#[async_trait]
impl Create for ComponentGroup {
    type Params = ComponentGroupParams;

    #[tracing::instrument(skip(client))]
    async fn create(client: &CachetClient, params: Self::Params) -> Result<Self> {
        let (envelope, _) = client
            .post::<_, Envelope<ComponentGroup>>("api/v1/components/groups", &params)
            .await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl Update for ComponentGroup {
    type Id = u32;
    type Params = ComponentGroupParams;

    #[tracing::instrument(skip(client))]
    async fn update(client: &CachetClient, id: Self::Id, params: Self::Params) -> Result<Self> {
        let path = format!("api/v1/components/groups/{id}");
        let (envelope, _) = client
            .put::<_, Envelope<ComponentGroup>>(&path, &params)
            .await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl Delete for ComponentGroup {
    type Id = u32;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &CachetClient, id: Self::Id) -> Result<()> {
        let path = format!("api/v1/components/groups/{id}");
        client.delete(&path).await?;
        Ok(())
    }
}
