//! Blocking HTTP transport for the view, backed by ureq.

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use ureq::{Agent, RequestBuilder};

pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Non-2xx statuses come back as responses; the client interprets them.
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (key, value) in headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = req.method.as_str(), path = %req.path, "sending request");
        let body = req.body.as_deref().unwrap_or_default().as_bytes();
        let headers = &req.headers;
        let result = match req.method {
            HttpMethod::Get => with_headers(self.agent.get(&req.path), headers).call(),
            HttpMethod::Post => with_headers(self.agent.post(&req.path), headers).send(body),
            HttpMethod::Put => with_headers(self.agent.put(&req.path), headers).send(body),
            // The resource takes the id in the body, even for DELETE.
            HttpMethod::Delete => {
                with_headers(self.agent.delete(&req.path).force_send_body(), headers).send(body)
            }
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        tracing::debug!(status, "received response");
        Ok(HttpResponse::new(status, body))
    }
}
