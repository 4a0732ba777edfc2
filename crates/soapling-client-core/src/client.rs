use tracing::{debug, info, instrument};

use soapling_protocol::rpc::{MethodCall, Param, RESPONSE_SUFFIX};
use soapling_protocol::soap::SoapEnvelope;
use soapling_protocol::soap::body::SoapBody;
use soapling_protocol::soap::fault::SoapFault;
use soapling_xml::parser::XmlDeserialize;

use crate::config::EndpointConfig;
use crate::error::RpcError;
use crate::http::{HttpClient, RequestBuilder};

/// Client for the interop echo service. One instance owns its endpoint
/// configuration for its whole lifetime and is ready to call as soon as it
/// is constructed; an unreachable endpoint only surfaces at call time.
pub struct InteropClient<C> {
    config: EndpointConfig,
    http: C,
}

impl<C> InteropClient<C>
where
    C: HttpClient,
{
    pub fn new(config: EndpointConfig, http: C) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// Calls the remote `echo_string` operation. A conformant echo server
    /// returns the input unchanged, empty strings included.
    pub fn echo_string(&self, s: &str) -> Result<String, RpcError> {
        let call = MethodCall::new("echo_string", self.config.service_namespace())
            .with_param(Param::string("s", s));
        self.invoke(call)
    }

    /// Calls the remote `echo_integer` operation.
    pub fn echo_integer(&self, i: i64) -> Result<i64, RpcError> {
        let call = MethodCall::new("echo_integer", self.config.service_namespace())
            .with_param(Param::integer("i", i));
        let text = self.invoke(call)?;
        text.trim().parse::<i64>().map_err(|_| {
            RpcError::UnexpectedResponse(format!("echo_integer returned non-integer text '{text}'"))
        })
    }

    /// Calls the remote `echo_boolean` operation.
    pub fn echo_boolean(&self, b: bool) -> Result<bool, RpcError> {
        let call = MethodCall::new("echo_boolean", self.config.service_namespace())
            .with_param(Param::boolean("b", b));
        let text = self.invoke(call)?;
        match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(RpcError::UnexpectedResponse(format!(
                "echo_boolean returned non-boolean text '{other}'"
            ))),
        }
    }

    /// Calls the remote `echo_float` operation.
    pub fn echo_float(&self, f: f64) -> Result<f64, RpcError> {
        let call = MethodCall::new("echo_float", self.config.service_namespace())
            .with_param(Param::float("f", f));
        let text = self.invoke(call)?;
        text.trim().parse::<f64>().map_err(|_| {
            RpcError::UnexpectedResponse(format!("echo_float returned non-numeric text '{text}'"))
        })
    }

    /// One synchronous request/response exchange: serialize, POST, check
    /// the status, parse the envelope and extract the `{method}Result`
    /// text. Blocks until the response or the failure arrives.
    #[instrument(level = "debug", skip(self, call), fields(method = call.method()))]
    fn invoke(&self, call: MethodCall<'_>) -> Result<String, RpcError> {
        let method = call.method();
        let action = call.soap_action();
        let response_name = format!("{method}{RESPONSE_SUFFIX}");
        let result_name = call.result_name();

        let envelope = SoapEnvelope::builder()
            .body(SoapBody::builder().call(call).build())
            .build();
        let request = RequestBuilder::new(&self.config).post(action, envelope.to_document_string());

        debug!(url = %request.url, body_length = request.body.len(), "sending SOAP request");
        let response = self.http.send_request(request)?;
        info!(status = response.status_code, "response received");

        match response.status_code {
            200 | 202 => {}
            500 => return Err(fault_from_body(&response.body)),
            status => return Err(RpcError::Status { status }),
        }

        let document =
            soapling_xml::parser::parse(&response.body).map_err(|e| RpcError::Xml(e.into()))?;
        let envelope = SoapEnvelope::from_node(document.root_element())?;
        let body = envelope.body.value;

        // Some stacks return faults with a 200; treat them as faults anyway.
        if let Some(fault) = &body.fault {
            return Err(RpcError::Fault(SoapFault::from(&fault.value)));
        }

        let response_value = body.response.ok_or_else(|| {
            RpcError::UnexpectedResponse(format!("missing {response_name} element"))
        })?;

        if response_value.name() != response_name {
            return Err(RpcError::UnexpectedResponse(format!(
                "expected {response_name}, server answered with {}",
                response_value.name()
            )));
        }

        let field = response_value
            .field(&result_name)
            .ok_or_else(|| RpcError::UnexpectedResponse(format!("missing {result_name} element")))?;

        // The echo operations are non-nillable; a nil result is a protocol
        // violation, not an empty value.
        field.value().map(ToString::to_string).ok_or_else(|| {
            RpcError::UnexpectedResponse(format!("{result_name} was nil"))
        })
    }
}

/// Best-effort fault extraction from a 500 body. A 500 whose body is not a
/// parseable fault envelope is still reported, as a plain status error.
fn fault_from_body(body: &str) -> RpcError {
    let Ok(document) = soapling_xml::parser::parse(body) else {
        return RpcError::Status { status: 500 };
    };
    let Ok(envelope) = SoapEnvelope::from_node(document.root_element()) else {
        return RpcError::Status { status: 500 };
    };
    match envelope.body.value.fault {
        Some(fault) => RpcError::Fault(SoapFault::from(&fault.value)),
        None => RpcError::Status { status: 500 },
    }
}
