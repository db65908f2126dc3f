//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::CachetClient;
use crate::error::Result;

/// Delete an entity by ID.
///
/// The service answers these endpoints with `204 No Content`, so a
/// successful delete carries no payload.
///
/// # Example
///
/// ```ignore
/// use cachet_api::{CachetClient, Component, Delete};
///
/// let client = CachetClient::from_env()?;
/// Component::delete(&client, 1).await?;
/// ```
#[async_trait]
pub trait Delete {
    /// The ID type for this entity.
    type Id;

    /// Delete the entity.
    ///
    /// # Arguments
    ///
    /// * `client` - The Cachet API client
    /// * `id` - The entity identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn delete(client: &CachetClient, id: Self::Id) -> Result<()>;
}
