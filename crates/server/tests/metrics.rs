mod support;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::admin_http::admin_router;
use server::observability::encode_metrics;
use server::ServiceKind;
use tower::ServiceExt;

use support::{app, send};

#[tokio::test]
async fn handled_requests_show_up_in_metrics() {
    let app = app(ServiceKind::Games);
    let (status, _) = send(&app, "GET", "/games", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, text) = encode_metrics();
    assert_eq!(status, StatusCode::OK);
    assert!(
        text.contains(r#"http_requests_total{method="GET",service="games",status="200"}"#),
        "{text}"
    );
    assert!(text.contains(r#"http_request_duration_seconds_count{service="games"}"#), "{text}");
}

#[tokio::test]
async fn admin_listener_serves_prometheus_text() {
    let app = app(ServiceKind::Tasks);
    send(&app, "GET", "/tasks/missing", None).await;

    let res = admin_router(encode_metrics)
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(r#"http_requests_total{method="GET",service="tasks",status="404"}"#), "{text}");
}
