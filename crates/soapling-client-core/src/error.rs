use soapling_protocol::soap::fault::SoapFault;

/// A failure in the HTTP transport layer, before any SOAP-level
/// interpretation of the exchange.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// The single failure taxonomy of a remote call. Any error during either
/// echo call surfaces as one of these; there is no retry and no partial
/// success.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error(transparent)]
    Fault(#[from] SoapFault),

    #[error("malformed response envelope: {0}")]
    Xml(#[from] soapling_xml::XmlError),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
