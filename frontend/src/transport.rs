use common::requests::{HttpReply, SubmitError, SubmitRequest, CSRF_HEADER};
use common::ui::Transport;
use gloo_net::http::Request;
use web_sys::{RequestCredentials, RequestMode};

/// `fetch`-backed transport. Requests are same-origin and carry the CSRF
/// token header.
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post(&self, request: SubmitRequest) -> Result<HttpReply, SubmitError> {
        let response = Request::post(&request.url)
            .header(CSRF_HEADER, &request.csrf_token)
            .header("Content-Type", "application/json")
            .mode(RequestMode::SameOrigin)
            .credentials(RequestCredentials::SameOrigin)
            .body(request.body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;

        // A failed status is reported on its own; its body is never read.
        let body = if response.ok() {
            response.text().await.map_err(network)?
        } else {
            String::new()
        };
        Ok(HttpReply {
            status: response.status(),
            redirected: response.redirected(),
            url: response.url(),
            body,
        })
    }
}

fn network(err: gloo_net::Error) -> SubmitError {
    SubmitError::Network(err.to_string())
}
