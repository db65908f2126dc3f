//! Component model and trait implementations.
//!
//! Components are the units whose health the status page reports: an API,
//! a database, a third-party dependency.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::CachetClient;
use crate::envelope::{Envelope, Page};
use crate::error::Result;
use crate::traits::{Create, Delete, Get, List, Update};

/// Operational state of a [`Component`].
///
/// The service encodes these as bare integers. Unrecognized values decode
/// as [`ComponentStatus::Unknown`] rather than failing the whole response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum ComponentStatus {
    /// The component's status is not known.
    #[default]
    Unknown,
    /// The component is working.
    Operational,
    /// The component is experiencing some slowness.
    PerformanceIssues,
    /// The component may not be working for everybody.
    PartialOutage,
    /// The component is not working for anybody.
    MajorOutage,
}

impl From<ComponentStatus> for u8 {
    fn from(status: ComponentStatus) -> u8 {
        match status {
            ComponentStatus::Unknown => 0,
            ComponentStatus::Operational => 1,
            ComponentStatus::PerformanceIssues => 2,
            ComponentStatus::PartialOutage => 3,
            ComponentStatus::MajorOutage => 4,
        }
    }
}

impl From<u8> for ComponentStatus {
    fn from(code: u8) -> Self {
        match code {
            1 => ComponentStatus::Operational,
            2 => ComponentStatus::PerformanceIssues,
            3 => ComponentStatus::PartialOutage,
            4 => ComponentStatus::MajorOutage,
            _ => ComponentStatus::Unknown,
        }
    }
}

/// A single component on the status page.
///
/// # Example
///
/// ```ignore
/// use cachet_api::{CachetClient, Component, Get, List};
///
/// let client = CachetClient::from_env()?;
///
/// // Fetch one component
/// let component = Component::get(&client, 1).await?;
/// println!("{} is {}", component.name, component.status_name);
///
/// // Or list them all
/// let components = Component::list_all(&client, &Default::default()).await?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// Unique component ID.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Longer description shown on the page.
    #[serde(default)]
    pub description: String,

    /// Link to the component, when one is set.
    #[serde(default)]
    pub link: String,

    /// Current status.
    #[serde(default)]
    pub status: ComponentStatus,

    /// Position in the component list.
    #[serde(default)]
    pub order: u32,

    /// ID of the group this component belongs to; `0` when ungrouped.
    #[serde(default)]
    pub group_id: u32,

    /// Creation timestamp, in the `YYYY-MM-DD HH:MM:SS` form the service
    /// uses.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Deletion timestamp for soft-deleted components.
    #[serde(default)]
    pub deleted_at: Option<String>,

    /// Human-readable status (e.g., "Operational").
    #[serde(default)]
    pub status_name: String,
}

impl Component {
    /// Whether the component reports as fully working.
    #[must_use]
    pub fn is_operational(&self) -> bool {
        self.status == ComponentStatus::Operational
    }

    /// Whether the component belongs to a group.
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        self.group_id != 0
    }
}

/// Payload for creating or updating a component.
///
/// `name` and `status` are required by the service; every other field is
/// left out of the request when `None`.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentParams {
    /// Display name.
    pub name: String,

    /// Component status.
    pub status: ComponentStatus,

    /// Description shown on the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Link to the component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Position in the component list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,

    /// Group to place the component in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u32>,
}

impl ComponentParams {
    /// Params with just the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, status: ComponentStatus) -> Self {
        Self {
            name: name.into(),
            status,
            description: None,
            link: None,
            order: None,
            group_id: None,
        }
    }
}

/// Query parameters for listing components.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentListQuery {
    /// Filter by exact ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    /// Filter by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Filter by status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ComponentStatus>,

    /// Filter by group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u32>,
}

// =============================================================================
// TRAIT IMPLEMENTATIONS
// =============================================================================

#[async_trait]
impl Get for Component {
    type Id = u32;

    #[tracing::instrument(skip(client))]
    async fn get(client: &CachetClient, id: Self::Id) -> Result<Self> {
        let path = format!("api/v1/components/{id}");
        let (envelope, _) = client.get::<Envelope<Component>>(&path).await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl List for Component {
    type Query = ComponentListQuery;

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
            query: &'a ComponentListQuery,
            page: u32,
            per_page: u32,
        }

        let params = RequestParams {
            query,
            page,
            per_page,
        };

        let (listing, _) = client
            .get_with_query::<Page<Component>, _>("api/v1/components", &params)
            .await?;
        Ok(listing)
    }
}

#[async_trait]
impl Create for Component {
    type Params = ComponentParams;

    #[tracing::instrument(skip(client))]
    async fn create(client: &CachetClient, params: Self::Params) -> Result<Self> {
        let (envelope, _) = client
            .post::<_, Envelope<Component>>("api/v1/components", &params)
            .await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl Update for Component {
    type Id = u32;
    type Params = ComponentParams;

    #[tracing::instrument(skip(client))]
    async fn update(client: &CachetClient, id: Self::Id, params: Self::Params) -> Result<Self> {
        let path = format!("api/v1/components/{id}");
        let (envelope, _) = client.put::<_, Envelope<Component>>(&path, &params).await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl Delete for Component {
    type Id = u32;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &CachetClient, id: Self::Id) -> Result<()> {
        let path = format!("api/v1/components/{id}");
        client.delete(&path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_deserialize() {
        let json = r#"{
            "id": 1,
            "name": "API",
            "description": "Used by third-parties to connect to us",
            "link": "",
            "status": 1,
            "order": 0,
            "group_id": 0,
            "created_at": "2015-07-24 14:42:10",
            "updated_at": "2015-07-24 14:42:10",
            "deleted_at": null,
            "status_name": "Operational"
        }"#;

        let component: Component = serde_json::from_str(json).expect("Failed to deserialize component");

        assert_eq!(component.id, 1);
        assert_eq!(component.name, "API");
        assert_eq!(component.description, "Used by third-parties to connect to us");
        assert_eq!(component.status, ComponentStatus::Operational);
        assert_eq!(component.status_name, "Operational");
        assert_eq!(component.created_at.as_deref(), Some("2015-07-24 14:42:10"));
        assert!(component.deleted_at.is_none());
        assert!(component.is_operational());
        assert!(!component.is_grouped());
    }

    #[test]
    fn test_component_status_codes() {
        assert_eq!(u8::from(ComponentStatus::Unknown), 0);
        assert_eq!(u8::from(ComponentStatus::Operational), 1);
        assert_eq!(u8::from(ComponentStatus::PerformanceIssues), 2);
        assert_eq!(u8::from(ComponentStatus::PartialOutage), 3);
        assert_eq!(u8::from(ComponentStatus::MajorOutage), 4);

        assert_eq!(ComponentStatus::from(3), ComponentStatus::PartialOutage);
        // Out-of-range codes fall back rather than erroring
        assert_eq!(ComponentStatus::from(99), ComponentStatus::Unknown);
    }

    #[test]
    fn test_component_status_json_round_trip() {
        assert_eq!(
            serde_json::to_string(&ComponentStatus::MajorOutage).unwrap(),
            "4"
        );
        assert_eq!(
            serde_json::from_str::<ComponentStatus>("2").unwrap(),
            ComponentStatus::PerformanceIssues
        );
    }

    #[test]
    fn test_component_params_minimal_serialization() {
        let params = ComponentParams::new("X", ComponentStatus::Operational);
        let json = serde_json::to_string(&params).expect("Failed to serialize params");

        assert_eq!(json, r#"{"name":"X","status":1}"#);
    }

    #[test]
    fn test_component_params_optional_fields() {
        let params = ComponentParams {
            description: Some("The API".to_string()),
            group_id: Some(2),
            ..ComponentParams::new("API", ComponentStatus::PartialOutage)
        };
        let json = serde_json::to_string(&params).expect("Failed to serialize params");

        assert_eq!(
            json,
            r#"{"name":"API","status":3,"description":"The API","group_id":2}"#
        );
    }

    #[test]
    fn test_component_list_query_default_is_empty() {
        let query = ComponentListQuery::default();
        let serialized = serde_qs::to_string(&query).expect("Failed to serialize query");

        assert!(serialized.is_empty());
    }

    #[test]
    fn test_component_list_query_with_filters() {
        let query = ComponentListQuery {
            name: Some("API".to_string()),
            status: Some(ComponentStatus::Operational),
            ..Default::default()
        };
        let serialized = serde_qs::to_string(&query).expect("Failed to serialize query");

        assert!(serialized.contains("name=API"));
        assert!(serialized.contains("status=1"));
        assert!(!serialized.contains("group_id"));
    }
}
