//! Integration tests for the client against a wiremock server.

use wug_core::{
    Query, ReqwestTransport, RequestCategory, TransportError, WugClient, WugError,
    transport::DEFAULT_TIMEOUT,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const KEY: &str = "TESTKEY";

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {path}: {e}"))
}

fn client_for(mock_server: &MockServer) -> WugClient {
    let transport = ReqwestTransport::new(DEFAULT_TIMEOUT).expect("Failed to build transport");
    WugClient::with_transport(transport).with_base_url(format!("{}/api", mock_server.uri()))
}

async fn mount_json(mock_server: &MockServer, url_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn conditions_by_state_city() {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/api/TESTKEY/conditions/q/CA/San_Francisco.json",
        fixture("conditions.json"),
    )
    .await;

    let client = client_for(&mock_server);
    let query = Query::by_us_state_city(KEY, "ca", "San Francisco");

    let conditions = client.get_conditions(&query).await.unwrap();
    let obs = &conditions.current_observation;
    assert_eq!(obs.display_location.city, "San Francisco");
    assert_eq!(obs.temp_c, 15.2);
    assert_eq!(obs.wind_dir, "WSW");
}

#[tokio::test]
async fn forecast_by_zip() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/api/TESTKEY/forecast/q/94102.json", fixture("forecast.json")).await;

    let client = client_for(&mock_server);
    let forecast = client.get_forecast(&Query::by_us_zip(KEY, "94102")).await.unwrap();

    let days = &forecast.forecast.simpleforecast.forecastday;
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].high.fahrenheit, "62");
}

#[tokio::test]
async fn forecast_ten_day_by_lat_long() {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/api/TESTKEY/forecast10day/q/37.8,-122.4.json",
        fixture("forecast.json"),
    )
    .await;

    let client = client_for(&mock_server);
    let query = Query::by_lat_long(KEY, "37.8", "-122.4");
    let forecast = client.get_forecast_ten_day(&query).await.unwrap();

    assert_eq!(forecast.forecast.txt_forecast.forecastday.len(), 2);
}

#[tokio::test]
async fn hourly_by_airport() {
    let mock_server = MockServer::start().await;
    mount_json(&mock_server, "/api/TESTKEY/hourly/q/SFO.json", fixture("hourly.json")).await;

    let client = client_for(&mock_server);
    let hourly = client.get_hourly(&Query::by_airport_code(KEY, "SFO")).await.unwrap();

    assert_eq!(hourly.hourly_forecast.len(), 2);
    assert_eq!(hourly.hourly_forecast[0].condition, "Partly Cloudy");
}

#[tokio::test]
async fn hourly_ten_day_by_ip_geo() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/TESTKEY/hourly10day/q/autoip.json"))
        .and(query_param("geo_ip", "203.0.113.7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("hourly.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = Query::by_ip_geo(KEY, "203.0.113.7");
    let hourly = client.get_hourly_ten_day(&query).await.unwrap();

    assert_eq!(hourly.hourly_forecast[1].fcttime.hour, "13");
}

#[tokio::test]
async fn raw_body_is_returned_verbatim() {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        "/api/TESTKEY/conditions/q/autoip.json",
        "{\"not\":\"the schema\"}".to_string(),
    )
    .await;

    let client = client_for(&mock_server);
    let raw = client
        .get(RequestCategory::Conditions, &Query::by_auto_ip(KEY))
        .await
        .unwrap();

    assert_eq!(raw, b"{\"not\":\"the schema\"}");
}

#[tokio::test]
async fn api_error_in_body_is_data_not_failure() {
    let mock_server = MockServer::start().await;
    let body = serde_json::json!({
        "response": {
            "version": "0.1",
            "features": {},
            "error": { "type": "keynotfound", "description": "this key does not exist" }
        }
    });
    mount_json(&mock_server, "/api/TESTKEY/conditions/q/90210.json", body.to_string()).await;

    let client = client_for(&mock_server);
    let conditions = client.get_conditions(&Query::by_us_zip(KEY, "90210")).await.unwrap();

    let err = conditions.response.api_error().expect("error in response header");
    assert_eq!(err.kind, "keynotfound");
}

// ============================================================================
// Error scenarios
// ============================================================================

#[tokio::test]
async fn server_error_is_transport_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = Query::by_us_zip(KEY, "90210");

    match client.get_forecast(&query).await {
        Err(WugError::Transport {
            category: RequestCategory::Forecast,
            source: TransportError::Status { status, body },
        }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected status error, got {other:?}"),
    }

    assert!(matches!(client.get_conditions(&query).await, Err(WugError::Transport { .. })));
    assert!(matches!(
        client.get_forecast_ten_day(&query).await,
        Err(WugError::Transport { .. })
    ));
    assert!(matches!(client.get_hourly(&query).await, Err(WugError::Transport { .. })));
    assert!(matches!(
        client.get_hourly_ten_day(&query).await,
        Err(WugError::Transport { .. })
    ));
    assert!(matches!(
        client.get_raw_conditions(&query).await,
        Err(WugError::Transport { .. })
    ));
}

#[tokio::test]
async fn not_found_is_transport_error() {
    let mock_server = MockServer::start().await;

    let client = client_for(&mock_server);
    let err = client.get_hourly(&Query::by_auto_ip(KEY)).await.unwrap_err();

    assert!(matches!(
        err,
        WugError::Transport {
            source: TransportError::Status { status: 404, .. },
            ..
        }
    ));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let transport = ReqwestTransport::new(DEFAULT_TIMEOUT).unwrap();
    let client = WugClient::with_transport(transport).with_base_url("http://127.0.0.1:1/api");

    let err = client.get_conditions(&Query::by_auto_ip(KEY)).await.unwrap_err();
    assert!(matches!(
        err,
        WugError::Transport {
            source: TransportError::Request(_),
            ..
        }
    ));
}

#[tokio::test]
async fn invalid_json_is_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/TESTKEY/forecast/q/autoip.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"forecast\": [1, 2"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = Query::by_auto_ip(KEY);

    let err = client.get_forecast(&query).await.unwrap_err();
    assert!(matches!(
        err,
        WugError::Decode {
            category: RequestCategory::Forecast,
            ..
        }
    ));

    let raw = client.get_raw_forecast(&query).await.unwrap();
    assert_eq!(raw, b"{\"forecast\": [1, 2");
}

#[tokio::test]
async fn wrong_shape_is_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("{\"hourly_forecast\": {\"a\": 1}}"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_hourly(&Query::by_us_zip(KEY, "90210")).await.unwrap_err();

    assert!(matches!(
        err,
        WugError::Decode {
            category: RequestCategory::Hourly,
            ..
        }
    ));
}
