use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pretty_assertions::assert_eq;
use reqwest::Client;
use secrecy::SecretString;
use serde_json::json;

use boardtui::{
    domain::{fetch::FetchFailure, quote::QuoteResponse},
    infrastructure::http::{
        FetchError, HttpQuoteClient, HttpWeatherClient, QuoteSource, WeatherSource,
    },
};

type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Weather stub keyed on the requested city
async fn weather_handler(
    State(seen): State<Seen>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    seen.lock().expect("lock").push(params.clone());
    if params.get("appid").map(String::as_str) != Some("secret") {
        return (StatusCode::UNAUTHORIZED, Json(json!({"cod": 401}))).into_response();
    }
    match params.get("q").map(String::as_str) {
        Some("Dammam") => Json(json!({
            "main": {"temp": 21.26, "humidity": 40},
            "wind": {"speed": 3.1},
        }))
        .into_response(),
        Some("Partial") => Json(json!({"main": {"temp": "hot"}})).into_response(),
        Some("Broken") => "<html>not json</html>".into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"cod": "404"}))).into_response(),
    }
}

async fn spawn_server() -> (SocketAddr, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route(
            "/quote",
            get(|| async { Json(json!({"content": "X", "author": "Y", "tags": []})) }),
        )
        .route("/quote-empty", get(|| async { Json(json!({})) }))
        .route(
            "/quote-down",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        )
        .route("/weather", get(weather_handler))
        .with_state(Arc::clone(&seen));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });
    (addr, seen)
}

/// Client that ignores any proxy configured in the environment
fn local_client() -> Client {
    Client::builder().no_proxy().build().expect("client")
}

fn weather_client(addr: SocketAddr) -> HttpWeatherClient {
    HttpWeatherClient::new(
        local_client(),
        format!("http://{addr}/weather"),
        SecretString::from("secret"),
    )
}

#[tokio::test]
async fn test_quote_client_parses_body() {
    let (addr, _) = spawn_server().await;
    let client = HttpQuoteClient::new(local_client(), format!("http://{addr}/quote"));

    let response = client.fetch_quote().await.expect("quote");

    assert_eq!(
        response,
        QuoteResponse {
            content: Some("X".to_string()),
            author: Some("Y".to_string()),
        }
    );
}

#[tokio::test]
async fn test_quote_client_tolerates_missing_fields() {
    let (addr, _) = spawn_server().await;
    let client = HttpQuoteClient::new(local_client(), format!("http://{addr}/quote-empty"));

    let response = client.fetch_quote().await.expect("quote");

    assert_eq!(response, QuoteResponse::default());
}

#[tokio::test]
async fn test_quote_client_maps_status() {
    let (addr, _) = spawn_server().await;
    let client = HttpQuoteClient::new(local_client(), format!("http://{addr}/quote-down"));

    let failure: FetchFailure = client.fetch_quote().await.expect_err("status").into();

    assert_eq!(failure, FetchFailure::Status(503));
}

#[tokio::test]
async fn test_weather_client_sends_query_parameters() {
    let (addr, seen) = spawn_server().await;

    let response = weather_client(addr)
        .fetch_weather("Dammam")
        .await
        .expect("weather");

    assert_eq!(response.temp, Some(21.26));
    assert_eq!(response.humidity, Some(40.0));
    assert_eq!(response.wind_speed, Some(3.1));

    let seen = seen.lock().expect("lock");
    let params = seen.first().expect("one request");
    assert_eq!(params.get("q").map(String::as_str), Some("Dammam"));
    assert_eq!(params.get("appid").map(String::as_str), Some("secret"));
    assert_eq!(params.get("units").map(String::as_str), Some("metric"));
}

#[tokio::test]
async fn test_weather_client_encodes_city() {
    let (addr, seen) = spawn_server().await;

    let result = weather_client(addr).fetch_weather("São Paulo").await;

    assert!(matches!(result, Err(FetchError::Status(404))));
    let seen = seen.lock().expect("lock");
    assert_eq!(
        seen.first().and_then(|p| p.get("q")).map(String::as_str),
        Some("São Paulo")
    );
}

#[tokio::test]
async fn test_weather_client_maps_unauthorized() {
    let (addr, _) = spawn_server().await;
    let client = HttpWeatherClient::new(
        local_client(),
        format!("http://{addr}/weather"),
        SecretString::from("wrong"),
    );

    let result = client.fetch_weather("Dammam").await;

    assert!(matches!(result, Err(FetchError::Status(401))));
}

#[tokio::test]
async fn test_weather_client_partial_body() {
    let (addr, _) = spawn_server().await;

    let response = weather_client(addr)
        .fetch_weather("Partial")
        .await
        .expect("weather");

    assert_eq!(response.temp, None);
    assert_eq!(response.humidity, None);
    assert_eq!(response.wind_speed, None);
}

#[tokio::test]
async fn test_weather_client_malformed_body() {
    let (addr, _) = spawn_server().await;

    let result = weather_client(addr).fetch_weather("Broken").await;

    match result {
        Err(e @ FetchError::Malformed(_)) => {
            assert!(matches!(e.failure(), FetchFailure::Malformed(_)));
        }
        other => panic!("Expected malformed body, got {other:?}"),
    }
}
