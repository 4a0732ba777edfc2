use crate::config::EndpointConfig;
use crate::error::TransportError;

pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";
pub const SOAP_ACCEPT: &str = "application/soap+xml, application/dime, multipart/related, text/*";
pub const USER_AGENT: &str = concat!("soapling/", env!("CARGO_PKG_VERSION"));

/// A SOAP call over HTTP. Calls are always POSTs to the endpoint URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The transport seam. Implementations perform one blocking request and
/// either return the peer's response (whatever its status) or a
/// [`TransportError`] when no response could be obtained at all.
pub trait HttpClient {
    fn send_request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Assembles SOAP POST requests for a fixed endpoint.
#[derive(Debug)]
pub struct RequestBuilder<'a> {
    config: &'a EndpointConfig,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a EndpointConfig) -> Self {
        Self { config }
    }

    /// Builds the POST carrying `body`. The SOAPAction value is quoted, as
    /// the original client does.
    pub fn post(&self, soap_action: &str, body: String) -> HttpRequest {
        let headers = vec![
            ("Host".to_string(), self.config.host_header()),
            ("Content-Type".to_string(), SOAP_CONTENT_TYPE.to_string()),
            ("Content-Length".to_string(), body.len().to_string()),
            ("Accept".to_string(), SOAP_ACCEPT.to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
            ("SOAPAction".to_string(), format!("\"{soap_action}\"")),
        ];

        HttpRequest {
            url: self.config.url().to_string(),
            headers,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_ENDPOINT_URL, DEFAULT_SERVICE_NAMESPACE};

    #[test]
    fn post_carries_soap_headers() {
        let config = EndpointConfig::new(DEFAULT_ENDPOINT_URL, DEFAULT_SERVICE_NAMESPACE).unwrap();
        let request = RequestBuilder::new(&config).post("echo_string", "<x/>".to_string());

        assert_eq!(request.url, "http://127.0.0.1:9754/");
        let header = |name: &str| {
            request
                .headers
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(header("Host"), Some("127.0.0.1:9754"));
        assert_eq!(header("Content-Type"), Some("text/xml; charset=utf-8"));
        assert_eq!(header("Content-Length"), Some("4"));
        assert_eq!(header("SOAPAction"), Some("\"echo_string\""));
    }
}
