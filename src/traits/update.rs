//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::CachetClient;
use crate::error::Result;

/// Update an existing entity.
///
/// Implement this trait for entity types that can be modified
/// after creation.
///
/// # Example
///
/// ```ignore
/// use cachet_api::{CachetClient, Component, ComponentParams, ComponentStatus, Update};
///
/// let client = CachetClient::from_env()?;
/// let updated = Component::update(
///     &client,
///     1,
///     ComponentParams::new("API", ComponentStatus::MajorOutage),
/// ).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id;

    /// Parameters for the update.
    type Params;

    /// Update the entity and return the updated version.
    ///
    /// # Arguments
    ///
    /// * `client` - The Cachet API client
    /// * `id` - The entity identifier
    /// * `params` - Update parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(client: &CachetClient, id: Self::Id, params: Self::Params) -> Result<Self>;
}
