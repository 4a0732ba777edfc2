use soapling_client_core::TransportError;
use soapling_client_core::http::{HttpClient, HttpRequest, HttpResponse};
use tracing::{debug, error, info, info_span};

pub struct UreqHttpClient {
    agent: ureq::Agent,
}

impl UreqHttpClient {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(std::time::Duration::from_secs(30))
            .timeout_read(std::time::Duration::from_secs(60))
            .build();
        UreqHttpClient { agent }
    }
}

impl Default for UreqHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqHttpClient {
    fn send_request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let span = info_span!("http.request", url = %request.url);
        let _enter = span.enter();

        info!("sending request");

        let mut ureq_request = self.agent.post(&request.url);
        for (name, value) in &request.headers {
            ureq_request = ureq_request.set(name, value);
        }

        debug!(
            headers_count = request.headers.len(),
            body_length = request.body.len(),
            "request configured"
        );

        // Error-status responses (500 with a fault body in particular) are
        // still responses; only genuine transport failures map to errors.
        let (status_code, headers, body) = match ureq_request.send_string(&request.body) {
            Ok(response) => {
                let status = response.status();
                let headers = collect_headers(&response);
                let body = response.into_string().map_err(|e| {
                    error!(error = %e, "failed to read response body");
                    TransportError::with_source("failed to read response body", e)
                })?;
                (status, headers, body)
            }
            Err(ureq::Error::Status(status, response)) => {
                debug!(status, "received error status response");
                let headers = collect_headers(&response);
                let body = response.into_string().unwrap_or_default();
                (status, headers, body)
            }
            Err(e) => {
                error!(error = %e, "request failed");
                return Err(TransportError::with_source(
                    format!("request to {} failed", request.url),
                    e,
                ));
            }
        };

        info!(status_code, body_length = body.len(), "response received");

        Ok(HttpResponse {
            status_code,
            headers,
            body,
        })
    }
}

fn collect_headers(response: &ureq::Response) -> Vec<(String, String)> {
    response
        .headers_names()
        .iter()
        .filter_map(|name| {
            response
                .header(name)
                .map(|value| (name.clone(), value.to_string()))
        })
        .collect()
}
