mod support;

use axum::http::StatusCode;
use chrono::{Datelike, NaiveDate};
use server::ServiceKind;
use service::games::{DESCRIPTIONS, TITLES};

use support::{app, send};

#[tokio::test]
async fn games_returns_five_valid_records() {
    let app = app(ServiceKind::Games);
    let (status, body) = send(&app, "GET", "/games", None).await;
    assert_eq!(status, StatusCode::OK);

    let games = body.as_array().unwrap();
    assert_eq!(games.len(), 5);
    for g in games {
        assert!(TITLES.contains(&g["title"].as_str().unwrap()));
        assert!(DESCRIPTIONS.contains(&g["description"].as_str().unwrap()));
        let price = g["price"].as_f64().unwrap();
        assert!((5.0..=50.0).contains(&price));
        let date = NaiveDate::parse_from_str(g["date_released"].as_str().unwrap(), "%Y-%m-%d").unwrap();
        assert!((1..=28).contains(&date.day()));
        assert!((2000..=2023).contains(&date.year()));
    }
}

#[tokio::test]
async fn games_are_not_stored_between_requests() {
    let app = app(ServiceKind::Games);
    let (_, first) = send(&app, "GET", "/games", None).await;
    let (_, second) = send(&app, "GET", "/games/", None).await;
    assert_eq!(second.as_array().unwrap().len(), 5);
    // one seeded stream, so consecutive batches differ
    assert_ne!(first, second);
}

#[tokio::test]
async fn games_service_serves_only_games() {
    let app = app(ServiceKind::Games);
    let (status, _) = send(&app, "GET", "/tasks/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn games_root_and_openapi_json_lead_to_docs() {
    let app = app(ServiceKind::Games);
    let (status, _) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);

    let (status, doc) = send(&app, "GET", "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "Game Data API");
    assert!(doc["paths"]["/games"].is_object());

    // other services keep their root free
    let items = support::app(ServiceKind::Items);
    let (status, _) = send(&items, "GET", "/openapi.json", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
