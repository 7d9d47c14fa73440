use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Received, LARGE_BODY_LEN, REDIRECT_TARGET, REPLY, SERVER_NAME};
use tower::ServiceExt;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post(body: &'static [u8]) -> Request<axum::body::Body> {
    post_to("/", body)
}

fn post_to(uri: &str, body: &'static [u8]) -> Request<axum::body::Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(axum::body::Body::from(body))
        .unwrap()
}

// --- collect ---

#[tokio::test]
async fn post_returns_ok_with_fixed_headers() {
    let resp = app().oneshot(post(b"payload")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::SERVER], SERVER_NAME);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/plain");
    assert_eq!(body_string(resp).await, REPLY);
}

#[tokio::test]
async fn post_stores_body_verbatim() {
    let received = Received::default();
    let resp = app_with(received.clone())
        .oneshot(post(b"\x00\xffraw"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let stored = received.read().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].method, Method::POST);
    assert_eq!(stored[0].path, "/");
    assert_eq!(&stored[0].body[..], b"\x00\xffraw");
}

#[tokio::test]
async fn empty_post_is_accepted() {
    let received = Received::default();
    let resp = app_with(received.clone()).oneshot(post(b"")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(received.read().await[0].body.is_empty());
}

#[tokio::test]
async fn get_on_root_is_not_allowed() {
    let resp = app()
        .oneshot(Request::builder().uri("/").body(axum::body::Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- moved ---

#[tokio::test]
async fn moved_answers_302_to_landing() {
    let received = Received::default();
    let resp = app_with(received.clone())
        .oneshot(post_to("/moved", b"payload"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers()[header::LOCATION], REDIRECT_TARGET);
    let stored = received.read().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].path, "/moved");
}

#[tokio::test]
async fn landing_records_get() {
    let received = Received::default();
    let resp = app_with(received.clone())
        .oneshot(Request::builder().uri(REDIRECT_TARGET).body(axum::body::Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(received.read().await[0].method, Method::GET);
}

// --- large ---

#[tokio::test]
async fn large_body_is_full_length() {
    let resp = app().oneshot(post_to("/large", b"")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(bytes.len(), LARGE_BODY_LEN);
}

// --- received ---

#[tokio::test]
async fn received_lists_bodies_in_arrival_order() {
    let received = Received::default();
    let router = app_with(received.clone());

    router.clone().oneshot(post(b"first")).await.unwrap();
    router.clone().oneshot(post(b"second")).await.unwrap();

    let resp = router
        .oneshot(Request::builder().uri("/received").body(axum::body::Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "first\nsecond");
}
