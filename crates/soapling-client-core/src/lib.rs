//! Transport-agnostic SOAP interop client.
//!
//! [`client::InteropClient`] binds an endpoint configuration to an
//! [`http::HttpClient`] implementation and exposes the echo operations as
//! plain typed methods. Every failure mode of a call collapses into
//! [`error::RpcError`].

pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub use client::InteropClient;
pub use config::EndpointConfig;
pub use error::{RpcError, TransportError};
pub use http::HttpClient;
