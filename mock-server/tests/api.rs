use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, sample_posts, Post};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_posts_returns_all() {
    let resp = app().oneshot(get("/api/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts, sample_posts());
}

#[tokio::test]
async fn list_posts_empty() {
    let resp = app_with(Vec::new()).oneshot(get("/api/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"[]");
}

#[tokio::test]
async fn list_posts_honours_limit() {
    let resp = app().oneshot(get("/api/posts?limit=3")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].id, sample_posts()[0].id);
}

#[tokio::test]
async fn list_posts_limit_larger_than_store() {
    let resp = app().oneshot(get("/api/posts?limit=100")).await.unwrap();
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len(), sample_posts().len());
}

#[tokio::test]
async fn list_posts_zero_limit_returns_400() {
    let resp = app().oneshot(get("/api/posts?limit=0")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_posts_non_numeric_limit_returns_400() {
    let resp = app().oneshot(get("/api/posts?limit=many")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- get ---

#[tokio::test]
async fn get_post_by_id() {
    let resp = app().oneshot(get("/api/posts/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let post: Post = body_json(resp).await;
    assert_eq!(post.title, "Hello, world");
}

#[tokio::test]
async fn get_post_by_slug() {
    let resp = app().oneshot(get("/api/posts/why-a-mini-blog")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let post: Post = body_json(resp).await;
    assert_eq!(post.id, "2");
}

#[tokio::test]
async fn get_post_not_found() {
    let resp = app().oneshot(get("/api/posts/missing")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app().oneshot(get("/api/comments")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn writes_are_not_served() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/posts/1")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
