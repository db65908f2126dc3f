//! Create trait for registering new entities.

use async_trait::async_trait;

use crate::client::CachetClient;
use crate::error::Result;

/// Create a new entity.
///
/// Implement this trait for entity types whose `api/v1/<resource>` endpoint
/// accepts a POST.
///
/// # Example
///
/// ```ignore
/// use cachet_api::{CachetClient, Component, ComponentParams, ComponentStatus, Create};
///
/// let client = CachetClient::from_env()?;
/// let component = Component::create(
///     &client,
///     ComponentParams::new("API", ComponentStatus::Operational),
/// ).await?;
/// ```
#[async_trait]
pub trait Create: Sized {
    /// Parameters for the create.
    type Params;

    /// Create the entity and return the stored version.
    ///
    /// # Arguments
    ///
    /// * `client` - The Cachet API client
    /// * `params` - Create parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the parameters or the
    /// request fails.
    async fn create(client: &CachetClient, params: Self::Params) -> Result<Self>;
}
