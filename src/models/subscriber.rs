//! Subscriber model and trait implementations.
//!
//! Subscribers are email addresses signed up for status notifications, not
//! dashboard users. The API can list them, sign new ones up, and remove
//! them; there is no single-subscriber fetch and no edit.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::CachetClient;
use crate::envelope::{Envelope, Page};
use crate::error::Result;
use crate::traits::{Create, Delete, List};

/// Someone subscribed to status updates by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    /// Unique subscriber ID.
    pub id: u32,

    /// Subscribed email address.
    pub email: String,

    /// Code used to confirm the subscription.
    #[serde(default)]
    pub verify_code: String,

    /// When the address was verified; `None` while pending.
    #[serde(default)]
    pub verified_at: Option<String>,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Subscriber {
    /// Whether the address has confirmed its subscription.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.verified_at.is_some()
    }
}

/// Payload for signing up a subscriber.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriberParams {
    /// Email address to subscribe.
    pub email: String,

    /// Skip the verification email and mark the address verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify: Option<bool>,
}

impl SubscriberParams {
    /// Params for a subscription that goes through verification.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            verify: None,
        }
    }
}

/// Query parameters for listing subscribers. The endpoint offers no filters
/// beyond pagination.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubscriberListQuery {}

#[async_trait]
impl List for Subscriber {
    type Query = SubscriberListQuery;

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
            query: &'a SubscriberListQuery,
            page: u32,
            per_page: u32,
        }

        let params = RequestParams {
            query,
            page,
            per_page,
        };

        let (listing, _) = client
            .get_with_query::<Page<Subscriber>, _>("api/v1/subscribers", &params)
            .await?;
        Ok(listing)
    }
}

#[async_trait]
impl Create for Subscriber {
    type Params = SubscriberParams;

    #[tracing::instrument(skip(client))]
    async fn create(client: &CachetClient, params: Self::Params) -> Result<Self> {
        let (envelope, _) = client
            .post::<_, Envelope<Subscriber>>("api/v1/subscribers", &params)
            .await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl Delete for Subscriber {
    type Id = u32;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &CachetClient, id: Self::Id) -> Result<()> {
        let path = format!("api/v1/subscribers/{id}");
        client.delete(&path).await?;
        Ok(())
    }
}
