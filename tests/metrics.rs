//! Metric and metric point endpoint tests against a mocked Cachet instance.

use cachet_api::{
    add_metric_point, delete_metric_point, get_metric_points, CachetClient, Create, Delete, Get,
    List, Metric, MetricCalculation, MetricParams, PointParams,
};
use wiremock::matchers::{body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const METRIC_SINGLE: &str = r#"{
    "data": {
        "id": 1,
        "name": "Cups of coffee",
        "suffix": "Cups",
        "description": "How many cups of coffee we've drank.",
        "default_value": 0,
        "calc_type": 1,
        "display_chart": true,
        "created_at": "2015-08-06 12:00:00",
        "updated_at": "2015-08-06 12:00:00",
        "places": 2,
        "points": []
    }
}"#;

const METRIC_PAGE: &str = r#"{
    "meta": {
        "pagination": {
            "total": 1,
            "count": 1,
            "per_page": 20,
            "current_page": 1,
            "total_pages": 1,
            "links": {"next_page": null, "previous_page": null}
        }
    },
    "data": [
        {
            "id": 1,
            "name": "Cups of coffee",
            "suffix": "Cups",
            "description": "How many cups of coffee we've drank.",
            "default_value": 0,
            "calc_type": 1,
            "display_chart": true,
            "created_at": "2015-08-06 12:00:00",
            "updated_at": "2015-08-06 12:00:00",
            "places": 2,
            "points": []
        }
    ]
}"#;

const POINT_SINGLE: &str = r#"{
    "data": {
        "id": 1,
        "metric_id": 1,
        "value": 7,
        "created_at": "2015-08-06 12:00:00",
        "updated_at": "2015-08-06 12:00:00"
    }
}"#;

const POINT_PAGE: &str = r#"{
    "meta": {
        "pagination": {
            "total": 2,
            "count": 2,
            "per_page": 20,
            "current_page": 1,
            "total_pages": 1,
            "links": {"next_page": null, "previous_page": null}
        }
    },
    "data": [
        {
            "id": 1,
            "metric_id": 1,
            "value": 7,
            "created_at": "2015-08-06 12:00:00",
            "updated_at": "2015-08-06 12:00:00"
        },
        {
            "id": 2,
            "metric_id": 1,
            "value": 9,
            "created_at": "2015-08-06 13:00:00",
            "updated_at": "2015-08-06 13:00:00"
        }
    ]
}"#;

#[tokio::test]
async fn test_get_metric() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/metrics/1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(METRIC_SINGLE, "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CachetClient::new(&mock_server.uri()).unwrap();
    let metric = Metric::get(&client, 1).await.expect("Failed to get metric");

    assert_eq!(metric.id, 1);
    assert_eq!(metric.name, "Cups of coffee");
    assert_eq!(metric.suffix, "Cups");
    assert_eq!(metric.calc_type, MetricCalculation::Average);
    assert!(metric.display_chart);
}

#[tokio::test]
async fn test_list_metrics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/metrics"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(METRIC_PAGE, "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CachetClient::new(&mock_server.uri()).unwrap();
    let page = Metric::list_page(&client, &Default::default(), 1, 20)
        .await
        .expect("Failed to list metrics");

    assert_eq!(page.len(), 1);
    assert_eq!(page.data[0].places, 2);
}

#[tokio::test]
async fn test_create_metric() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/metrics"))
        .and(body_string(
            "{\"name\":\"Cups of coffee\",\"suffix\":\"Cups\",\"description\":\"How many cups of coffee we've drank.\",\"default_value\":0,\"calc_type\":1}\n",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_raw(METRIC_SINGLE, "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = CachetClient::new(&mock_server.uri()).unwrap();
    client.set_token_auth("MY-SECRET-TOKEN");

    let params = MetricParams {
        calc_type: Some(MetricCalculation::Average),
        ..MetricParams::new(
            "Cups of coffee",
            "Cups",
            "How many cups of coffee we've drank.",
            0,
        )
    };
    let metric = Metric::create(&client, params)
        .await
        .expect("Failed to create metric");

    assert_eq!(metric.id, 1);
}

#[tokio::test]
async fn test_delete_metric() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/metrics/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = CachetClient::new(&mock_server.uri()).unwrap();
    client.set_token_auth("MY-SECRET-TOKEN");

    Metric::delete(&client, 1)
        .await
        .expect("Failed to delete metric");
}

// =============================================================================
// Metric Points
// =============================================================================

#[tokio::test]
async fn test_get_metric_points() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/metrics/1/points"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(POINT_PAGE, "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CachetClient::new(&mock_server.uri()).unwrap();
    let points = get_metric_points(&client, 1, &Default::default())
        .await
        .expect("Failed to list metric points");

    assert_eq!(points.len(), 2);
    assert_eq!(points.data[0].value, 7);
    assert_eq!(points.data[1].value, 9);
}

#[tokio::test]
async fn test_metric_points_helper() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/metrics/1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(METRIC_SINGLE, "application/json"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/metrics/1/points"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(POINT_PAGE, "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CachetClient::new(&mock_server.uri()).unwrap();
    let metric = Metric::get(&client, 1).await.expect("Failed to get metric");
    let points = metric
        .points(&client)
        .await
        .expect("Failed to list points through the helper");

    assert_eq!(points.len(), 2);
}

#[tokio::test]
async fn test_add_metric_point() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/metrics/1/points"))
        .and(body_string("{\"value\":7}\n"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(POINT_SINGLE, "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = CachetClient::new(&mock_server.uri()).unwrap();
    client.set_token_auth("MY-SECRET-TOKEN");

    let point = add_metric_point(&client, 1, PointParams::new(7))
        .await
        .expect("Failed to add metric point");

    assert_eq!(point.id, 1);
    assert_eq!(point.metric_id, 1);
    assert_eq!(point.value, 7);
}

#[tokio::test]
async fn test_delete_metric_point() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/metrics/1/points/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = CachetClient::new(&mock_server.uri()).unwrap();
    client.set_token_auth("MY-SECRET-TOKEN");

    delete_metric_point(&client, 1, 1)
        .await
        .expect("Failed to delete metric point");
}
