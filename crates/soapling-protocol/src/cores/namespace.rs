use soapling_xml::builder::Namespace;

pub const SOAP_ENVELOPE_NAMESPACE_URI: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const SOAP_ENVELOPE_NAMESPACE_ALIAS: &str = "SOAP-ENV";

pub const XML_SCHEMA_INSTANCE_NAMESPACE_URI: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const XML_SCHEMA_INSTANCE_NAMESPACE_ALIAS: &str = "xsi";

/// Prefix under which the target service namespace is declared in request
/// envelopes, e.g. `xmlns:tns="InteropService.InteropService"`.
pub const SERVICE_NAMESPACE_ALIAS: &str = "tns";

pub const SOAP_ENVELOPE_NAMESPACE: Namespace<'static> = Namespace {
    url: SOAP_ENVELOPE_NAMESPACE_URI,
    alias: SOAP_ENVELOPE_NAMESPACE_ALIAS,
};

/// Builds the declaration for a configured service namespace.
pub fn service_namespace(uri: &str) -> Namespace<'_> {
    Namespace::new(SERVICE_NAMESPACE_ALIAS, uri)
}
