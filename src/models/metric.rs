//! Metric model and trait implementations.
//!
//! Metrics chart measurements over time on the status page. Their points
//! live under the parent metric at `api/v1/metrics/{id}/points` and are
//! exposed as free functions. Metrics cannot be edited once created, only
//! deleted, so there is no `Update` implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::CachetClient;
use crate::envelope::{Envelope, Page};
use crate::error::Result;
use crate::traits::{Create, Delete, Get, List};

/// How the service aggregates a metric's points per charted interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum MetricCalculation {
    /// Points within an interval are summed.
    #[default]
    Sum,
    /// Points within an interval are averaged.
    Average,
}

impl From<MetricCalculation> for u8 {
    fn from(calculation: MetricCalculation) -> u8 {
        match calculation {
            MetricCalculation::Sum => 0,
            MetricCalculation::Average => 1,
        }
    }
}

impl From<u8> for MetricCalculation {
    fn from(code: u8) -> Self {
        match code {
            1 => MetricCalculation::Average,
            _ => MetricCalculation::Sum,
        }
    }
}

/// A metric tracked and charted on the status page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    /// Unique metric ID.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Unit suffix shown after values (e.g., "ms").
    #[serde(default)]
    pub suffix: String,

    /// Longer description of what is measured.
    #[serde(default)]
    pub description: String,

    /// Value charted for intervals with no points.
    #[serde(default)]
    pub default_value: i64,

    /// How points are aggregated per interval.
    #[serde(default)]
    pub calc_type: MetricCalculation,

    /// Whether the chart is shown on the page.
    #[serde(default)]
    pub display_chart: bool,

    /// Decimal places shown on the chart.
    #[serde(default)]
    pub places: u32,

    /// Recent points, when the endpoint includes them.
    #[serde(default)]
    pub points: Vec<Point>,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Metric {
    /// Fetch the first page of points recorded for this metric.
    pub async fn points(&self, client: &CachetClient) -> Result<Page<Point>> {
        get_metric_points(client, self.id, &PointListQuery::default()).await
    }
}

/// A single measurement attached to a [`Metric`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    /// Unique point ID.
    pub id: u32,

    /// Metric the point belongs to.
    #[serde(default)]
    pub metric_id: u32,

    /// Measured value.
    pub value: i64,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for creating a metric.
#[derive(Debug, Clone, Serialize)]
pub struct MetricParams {
    /// Display name.
    pub name: String,

    /// Unit suffix shown after values.
    pub suffix: String,

    /// Longer description of what is measured.
    pub description: String,

    /// Value charted for intervals with no points.
    pub default_value: i64,

    /// How points are aggregated per interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calc_type: Option<MetricCalculation>,

    /// Whether the chart is shown on the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_chart: Option<bool>,

    /// Decimal places shown on the chart.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub places: Option<u32>,
}

impl MetricParams {
    /// Params with just the required fields set.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        suffix: impl Into<String>,
        description: impl Into<String>,
        default_value: i64,
    ) -> Self {
        Self {
            name: name.into(),
            suffix: suffix.into(),
            description: description.into(),
            default_value,
            calc_type: None,
            display_chart: None,
            places: None,
        }
    }
}

/// Payload for recording a point on a metric.
#[derive(Debug, Clone, Serialize)]
pub struct PointParams {
    /// Measured value.
    pub value: i64,

    /// When the measurement was taken; defaults to now on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl PointParams {
    /// Params for a measurement taken now.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self {
            value,
            timestamp: None,
        }
    }
}

/// Query parameters for listing metrics. The endpoint offers no filters
/// beyond pagination.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetricListQuery {}

/// Query parameters for listing metric points.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PointListQuery {
    /// Page number (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

// =============================================================================
// TRAIT IMPLEMENTATIONS
// =============================================================================

#[async_trait]
impl Get for Metric {
    type Id = u32;

    #[tracing::instrument(skip(client))]
    async fn get(client: &CachetClient, id: Self::Id) -> Result<Self> {
        let path = format!("api/v1/metrics/{id}");
        let (envelope, _) = client.get::<Envelope<Metric>>(&path).await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl List for Metric {
    type Query = MetricListQuery;

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
            query: &'a MetricListQuery,
            page: u32,
            per_page: u32,
        }

        let params = RequestParams {
            query,
            page,
            per_page,
        };

        let (listing, _) = client
            .get_with_query::<Page<Metric>, _>("api/v1/metrics", &params)
            .await?;
        Ok(listing)
    }
}

#[async_trait]
impl Create for Metric {
    type Params = MetricParams;

    #[tracing::instrument(skip(client))]
    async fn create(client: &CachetClient, params: Self::Params) -> Result<Self> {
        let (envelope, _) = client
            .post::<_, Envelope<Metric>>("api/v1/metrics", &params)
            .await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl Delete for Metric {
    type Id = u32;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &CachetClient, id: Self::Id) -> Result<()> {
        let path = format!("api/v1/metrics/{id}");
        client.delete(&path).await?;
        Ok(())
    }
}

// =============================================================================
// POINT FUNCTIONS
// =============================================================================

/// Fetch a page of points recorded for a metric.
#[tracing::instrument(skip(client))]
pub async fn get_metric_points(
    client: &CachetClient,
    metric_id: u32,
    query: &PointListQuery,
) -> Result<Page<Point>> {
    let path = format!("api/v1/metrics/{metric_id}/points");
    let (listing, _) = client
        .get_with_query::<Page<Point>, _>(&path, query)
        .await?;
    Ok(listing)
}

/// Record a new point on a metric.
#[tracing::instrument(skip(client))]
pub async fn add_metric_point(
    client: &CachetClient,
    metric_id: u32,
    params: PointParams,
) -> Result<Point> {
    let path = format!("api/v1/metrics/{metric_id}/points");
    let (envelope, _) = client.post::<_, Envelope<Point>>(&path, &params).await?;
    Ok(envelope.data)
}

/// Remove a point from a metric.
#[tracing::instrument(skip(client))]
pub async fn delete_metric_point(
    client: &CachetClient,
    metric_id: u32,
    point_id: u32,
) -> Result<()> {
    let path = format!("api/v1/metrics/{metric_id}/points/{point_id}");
    client.delete(&path).await?;
    Ok(())
}
