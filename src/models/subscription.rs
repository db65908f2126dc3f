//! Subscription deletion endpoint.

use async_trait::async_trait;

use crate::client::CachetClient;
use crate::error::Result;
use crate::traits::Delete;

/// A subscriber's subscription to a single component's notifications.
///
/// Subscriptions come into existence server-side when a subscriber picks
/// components; the API only exposes removing one.
#[derive(Debug, Clone, Copy)]
pub struct Subscription;

#[async_trait]
impl Delete for Subscription {
    type Id = u32;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &CachetClient, id: Self::Id) -> Result<()> {
        // Singular resource segment, exactly as the service routes it.
        let path = format!("api/v1/subscription/{id}");
        client.delete(&path).await?;
        Ok(())
    }
}
