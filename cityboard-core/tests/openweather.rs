//! OpenWeather provider and dashboard fetch against a mock HTTP server.

use cityboard_core::{
    City, Dashboard, WeatherError, WeatherProvider, provider::openweather::OpenWeatherProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn snapshot_json(name: &str, temp: f64) -> serde_json::Value {
    serde_json::json!({
        "weather": [{"id": 801, "main": "Clouds", "description": "few clouds", "icon": "02d"}],
        "main": {"temp": temp, "feels_like": temp - 1.0, "temp_min": temp - 2.0,
                 "temp_max": temp + 2.0, "pressure": 1012, "humidity": 55},
        "visibility": 8000,
        "wind": {"speed": 3.6, "deg": 90},
        "dt": 1700000000,
        "sys": {"country": "EG", "sunrise": 1699935600, "sunset": 1699974000},
        "timezone": 7200,
        "name": name,
        "cod": 200
    })
}

#[tokio::test]
async fn current_sends_coordinates_and_metric_units() {
    let mock_server = MockServer::start().await;
    let cairo = snapshot_json("Cairo", 24.0);

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "30.0444"))
        .and(query_param("lon", "31.2357"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cairo))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = OpenWeatherProvider::with_base_url("TEST_KEY".into(), &mock_server.uri());
    let snap = provider.current(30.0444, 31.2357).await.unwrap();

    assert_eq!(snap.name, "Cairo");
    assert_eq!(snap.main.temp, 24.0);
    assert_eq!(snap.condition(), "Clouds");
    assert_eq!(snap.visibility, Some(8000));
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"cod":401,"message":"Invalid API key."}"#),
        )
        .mount(&mock_server)
        .await;

    let provider = OpenWeatherProvider::with_base_url("BAD".into(), &mock_server.uri());
    let err = provider.current(1.0, 2.0).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    match err {
        WeatherError::Status { body, .. } => assert!(body.contains("Invalid API key")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"cod\": 200"))
        .mount(&mock_server)
        .await;

    let provider = OpenWeatherProvider::with_base_url("K".into(), &mock_server.uri());
    let err = provider.current(1.0, 2.0).await.unwrap_err();

    assert!(matches!(err, WeatherError::Parse(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn dashboard_survives_a_failing_city() {
    let mock_server = MockServer::start().await;
    let alpha = snapshot_json("Alpha", 20.0);
    let gamma = snapshot_json("Gamma", 30.0);

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alpha))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "20"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gamma))
        .mount(&mock_server)
        .await;

    let cities = vec![
        City::new("Alpha", "AA", 10.0, 1.0),
        City::new("Beta", "BB", 20.0, 2.0),
        City::new("Gamma", "CC", 30.0, 3.0),
    ];

    let provider = OpenWeatherProvider::with_base_url("K".into(), &mock_server.uri());
    let dash = Dashboard::fetch(&provider, cities).await;

    assert_eq!(dash.failures, 1);
    assert_eq!(dash.loaded(), 2);
    assert_eq!(
        dash.failure_banner().as_deref(),
        Some("Failed to load weather for 1 city")
    );

    let names: Vec<_> = dash
        .entries
        .iter()
        .map(|e| e.city.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    assert!(dash.entries[0].is_loaded());
    assert!(!dash.entries[1].is_loaded());
    let gamma_temp = dash.entries[2].snapshot.as_ref().map(|s| s.main.temp);
    assert_eq!(gamma_temp, Some(30.0));
}

#[tokio::test]
async fn unreachable_host_is_an_http_error() {
    // Nothing listens on the discard port.
    let provider = OpenWeatherProvider::with_base_url("K".into(), "http://127.0.0.1:9");
    let err = provider.current(1.0, 2.0).await.unwrap_err();

    assert!(matches!(err, WeatherError::Http(_)));
}
