use url::Url;

use crate::error::RpcError;

/// Endpoint the original interop harness talks to.
pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:9754/";
pub const DEFAULT_SERVICE_NAMESPACE: &str = "InteropService.InteropService";

/// Where and under which service namespace calls are made. Immutable for
/// the lifetime of the client that owns it.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    url: Url,
    service_namespace: String,
}

impl EndpointConfig {
    pub fn new(url: &str, service_namespace: impl Into<String>) -> Result<Self, RpcError> {
        let url = Url::parse(url)?;
        Ok(Self {
            url,
            service_namespace: service_namespace.into(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn service_namespace(&self) -> &str {
        &self.service_namespace
    }

    /// `host:port` for the Host header; the port is omitted when the URL
    /// scheme's default applies.
    pub fn host_header(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        match self.url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants_form_a_valid_endpoint() {
        let config = EndpointConfig::new(DEFAULT_ENDPOINT_URL, DEFAULT_SERVICE_NAMESPACE)
            .expect("default endpoint should parse");

        assert_eq!(config.url().as_str(), "http://127.0.0.1:9754/");
        assert_eq!(config.service_namespace(), "InteropService.InteropService");
        assert_eq!(config.host_header(), "127.0.0.1:9754");
    }

    #[test]
    fn rejects_garbage_url() {
        assert!(EndpointConfig::new("not a url", DEFAULT_SERVICE_NAMESPACE).is_err());
    }
}
