use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<u32>,
}

pub type Db = Arc<Vec<Post>>;

/// Router seeded with `sample_posts()`.
pub fn app() -> Router {
    app_with(sample_posts())
}

pub fn app_with(posts: Vec<Post>) -> Router {
    let db: Db = Arc::new(posts);
    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{id}", get(get_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(
    State(db): State<Db>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Post>>, StatusCode> {
    let take = match query.limit {
        Some(0) => return Err(StatusCode::BAD_REQUEST),
        Some(limit) => limit as usize,
        None => db.len(),
    };
    tracing::debug!(take, "listing posts");
    Ok(Json(db.iter().take(take).cloned().collect()))
}

/// Looks a post up by id first, then by slug.
async fn get_post(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Post>, StatusCode> {
    db.iter()
        .find(|p| p.id == id)
        .or_else(|| db.iter().find(|p| p.slug.as_deref() == Some(id.as_str())))
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            tracing::debug!(%id, "post not found");
            StatusCode::NOT_FOUND
        })
}

/// Posts served by `app()`, newest first.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: "4".to_string(),
            title: "Tables and task lists".to_string(),
            content: "| Feature | Done |\n|---|---|\n| Feed | yes |\n\n- [x] list posts\n- [ ] comments\n\n~~Plain text~~ Markdown bodies."
                .to_string(),
            excerpt: Some("A tour of the markdown features posts can use.".to_string()),
            author: Some("Ada".to_string()),
            published_at: Some("2024-03-02T10:00:00Z".to_string()),
            slug: Some("tables-and-task-lists".to_string()),
        },
        Post {
            id: "3".to_string(),
            title: "Keeping state honest".to_string(),
            content: "Every request carries a generation. Responses for an older generation are dropped, so a slow reply can never overwrite a newer one."
                .to_string(),
            excerpt: None,
            author: Some("Grace".to_string()),
            published_at: Some("2024-02-14T08:30:00Z".to_string()),
            slug: None,
        },
        Post {
            id: "2".to_string(),
            title: "Why a mini blog".to_string(),
            content: "Small projects are a good place to get the basics right: clear data, clear states, clear errors."
                .to_string(),
            excerpt: None,
            author: None,
            published_at: Some("2024-01-20T12:00:00Z".to_string()),
            slug: Some("why-a-mini-blog".to_string()),
        },
        Post {
            id: "1".to_string(),
            title: "Hello, world".to_string(),
            content: "# Hello\n\nThis is the **first** post.".to_string(),
            excerpt: None,
            author: Some("Ada".to_string()),
            published_at: Some("2024-01-05T09:00:00Z".to_string()),
            slug: None,
        },
    ]
}
