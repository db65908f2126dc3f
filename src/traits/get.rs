//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::CachetClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// from an `api/v1/<resource>/{id}` endpoint.
///
/// # Example
///
/// ```ignore
/// use cachet_api::{CachetClient, Component, Get};
///
/// let client = CachetClient::from_env()?;
/// let component = Component::get(&client, 1).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The Cachet API client
    /// * `id` - The entity identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &CachetClient, id: Self::Id) -> Result<Self>;
}
