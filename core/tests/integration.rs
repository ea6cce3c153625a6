//! Hooks driven over real HTTP against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then runs both hooks through a
//! `ureq`-backed transport. Validates request building, status handling and
//! DTO parsing end-to-end, and catches schema drift between the crates.

use std::net::SocketAddr;

use blog_core::{
    pages, BlogClient, FetchError, HttpRequest, HttpResponse, PostHook, PostsHook, Transport,
    TransportError,
};

/// Executes requests with ureq, returning 4xx/5xx as data.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.call().map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpResponse::new(status, body))
    }
}

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[tokio::test]
async fn feed_and_post_lifecycle() {
    let addr = start_server();
    let client = BlogClient::new(&format!("http://{addr}"));
    let expected = mock_server::sample_posts();

    // Step 1: full list.
    let posts = PostsHook::new(client.clone(), UreqTransport::new());
    let state = posts.fetch(None).await;
    assert!(state.is_ready(), "unexpected state: {state:?}");
    assert_eq!(state.data().len(), expected.len());
    assert_eq!(state.data()[0].id, expected[0].id);
    assert_eq!(state.data()[0].published_at, expected[0].published_at);

    // Step 2: change the key to a limit.
    let state = posts.fetch(Some(3)).await;
    assert_eq!(state.data().len(), 3);

    // Step 3: single post by id.
    let post = PostHook::new(client.clone(), UreqTransport::new());
    let state = post.fetch("1".to_string()).await;
    let loaded = state.data().as_ref().expect("post loaded");
    assert_eq!(loaded.title, "Hello, world");

    // Step 4: by slug, rendered as a page.
    let state = post.fetch("tables-and-task-lists".to_string()).await;
    let html = pages::post_page(&state).into_string();
    assert!(html.contains("<table>"));
    assert!(html.contains("March 2, 2024"));

    // Step 5: missing post keeps the previous data and reports 404.
    let state = post.fetch("missing".to_string()).await;
    assert!(state.error().is_some_and(FetchError::is_not_found));
    assert_eq!(state.data().as_ref().map(|p| p.id.as_str()), Some("4"));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let posts = PostsHook::new(BlogClient::new(&format!("http://{addr}")), UreqTransport::new());

    let state = posts.fetch(None).await;
    assert!(matches!(state.error(), Some(FetchError::Network(_))));
    assert!(!state.is_loading());
}
