//! `Transport` backed by a blocking `ureq` agent.

use blog_core::{HttpRequest, HttpResponse, Transport, TransportError};

/// Runs each request on tokio's blocking pool. Non-2xx statuses are returned
/// as responses, not errors, so the core decides what they mean.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        let request = request.clone();
        tokio::task::spawn_blocking(move || call(&agent, &request))
            .await
            .map_err(|e| TransportError(e.to_string()))?
    }
}

fn call(agent: &ureq::Agent, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
    let mut builder = agent.get(&request.url);
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    let mut response = builder.call().map_err(|e| TransportError(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TransportError(e.to_string()))?;
    tracing::debug!(url = %request.url, status, "response received");
    Ok(HttpResponse::new(status, body))
}
