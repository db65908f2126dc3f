//! Cachet API client library.
//!
//! A Rust library for interacting with the REST API of a
//! [Cachet](https://cachethq.io/) status page, using a trait-based
//! architecture where each operation (Get, List, Create, Update, Delete)
//! is defined as a trait that entity types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use cachet_api::{CachetClient, Component, ComponentParams, ComponentStatus, Create, Get, List};
//!
//! #[tokio::main]
//! async fn main() -> cachet_api::Result<()> {
//!     // Create client from environment variables
//!     let client = CachetClient::from_env()?;
//!
//!     // Check the instance is up
//!     println!("{}", cachet_api::ping(&client).await?);
//!
//!     // Get a component by ID
//!     let component = Component::get(&client, 1).await?;
//!     println!("{} is {}", component.name, component.status_name);
//!
//!     // List all incidents
//!     let incidents = cachet_api::Incident::list_all(&client, &Default::default()).await?;
//!     println!("Found {} incidents", incidents.len());
//!
//!     // Writes need a credential
//!     let mut client = client;
//!     client.set_token_auth("MY-SECRET-TOKEN");
//!     let created = Component::create(
//!         &client,
//!         ComponentParams::new("API", ComponentStatus::Operational),
//!     )
//!     .await?;
//!     println!("Created component {}", created.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized around five core traits:
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`List`] - Fetch paginated collections of entities
//! - [`Create`] - Register a new entity
//! - [`Update`] - Modify an existing entity
//! - [`Delete`] - Remove an entity
//!
//! Each entity type (like [`Component`] or [`Incident`]) implements the
//! traits its API endpoints support. Nested resources (incident updates,
//! metric points) are exposed as free functions taking the parent ID.
//!
//! # Authentication
//!
//! Read endpoints are open. Writes need either the email/password of a
//! dashboard user ([`CachetClient::set_basic_auth`]) or an API token
//! ([`CachetClient::set_token_auth`]); configuring one mode replaces the
//! other.
//!
//! # Configuration
//!
//! [`CachetClient::from_env`] reads:
//!
//! - `CACHET_API_URL` (required) - Instance URL (e.g. `https://demo.cachethq.io/`)
//! - `CACHET_API_TOKEN` (optional) - API token for authenticated calls

mod auth;
mod client;
mod envelope;
mod error;
mod models;
mod traits;

// Re-export core types
pub use auth::{Credential, TOKEN_HEADER};
pub use client::{ApiResponse, CachetClient};
pub use envelope::{Envelope, Links, Meta, Page, Pagination};
pub use error::{ApiFailure, CachetError, Result};

// Re-export traits
pub use traits::{Create, Delete, Get, List, Update, DEFAULT_PAGE_SIZE};

// Re-export models
pub use models::{
    // Component types
    Component,
    ComponentListQuery,
    ComponentParams,
    ComponentStatus,
    // Component group types
    ComponentGroup,
    ComponentGroupListQuery,
    ComponentGroupParams,
    GroupCollapsed,
    // Incident types
    Incident,
    IncidentListQuery,
    IncidentParams,
    IncidentStatus,
    IncidentUpdate,
    IncidentUpdateListQuery,
    IncidentUpdateParams,
    IncidentVisibility,
    // Metric types
    Metric,
    MetricCalculation,
    MetricListQuery,
    MetricParams,
    Point,
    PointListQuery,
    PointParams,
    // Schedule types
    Schedule,
    ScheduleListQuery,
    ScheduleParams,
    ScheduleStatus,
    // Subscriber types
    Subscriber,
    SubscriberListQuery,
    SubscriberParams,
    Subscription,
    // Instance-level types
    InstanceStatus,
    LatestRelease,
    VersionInfo,
};

// Re-export convenience functions
pub use models::{
    create_incident_update, delete_incident_update, get_incident_update, get_incident_updates,
    update_incident_update,
};
pub use models::{add_metric_point, delete_metric_point, get_metric_points};
pub use models::{instance_status, ping, version};
