use soapling_protocol::rpc::{MethodCall, Param};
use soapling_protocol::soap::SoapEnvelope;
use soapling_protocol::soap::body::SoapBody;
use soapling_protocol::soap::fault::FaultValue;

const SERVICE_NS: &str = "InteropService.InteropService";

#[test]
fn test_build_echo_string_envelope() {
    let call = MethodCall::new("echo_string", SERVICE_NS).with_param(Param::string("s", "OK"));

    let envelope = SoapEnvelope::builder()
        .body(SoapBody::builder().call(call).build())
        .build();

    let xml = envelope.to_document_string();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("xmlns:SOAP-ENV=\"http://schemas.xmlsoap.org/soap/envelope/\""));
    assert!(xml.contains("xmlns:tns=\"InteropService.InteropService\""));
    assert!(xml.contains("<SOAP-ENV:Body>"));
    assert!(xml.contains("<tns:echo_string><tns:s>OK</tns:s></tns:echo_string>"));
    assert!(xml.ends_with("</SOAP-ENV:Envelope>"));
}

#[test]
fn test_build_echo_integer_envelope() {
    let call = MethodCall::new("echo_integer", SERVICE_NS).with_param(Param::integer("i", -42));

    let envelope = SoapEnvelope::builder()
        .body(SoapBody::builder().call(call).build())
        .build();

    let xml = envelope.to_document_string();

    assert!(xml.contains("<tns:echo_integer><tns:i>-42</tns:i></tns:echo_integer>"));
}

#[test]
fn test_param_text_is_escaped() {
    let call = MethodCall::new("echo_string", SERVICE_NS)
        .with_param(Param::string("s", "a < b & \"c\""));

    let envelope = SoapEnvelope::builder()
        .body(SoapBody::builder().call(call).build())
        .build();

    let xml = envelope.to_document_string();

    assert!(xml.contains("<tns:s>a &lt; b &amp; \"c\"</tns:s>"));
}

#[test]
fn test_boolean_and_float_params() {
    let call = MethodCall::new("multi", SERVICE_NS)
        .with_param(Param::boolean("b", true))
        .with_param(Param::float("f", 3.5));

    let element = call.into_element();
    let rendered = element.to_string();

    assert_eq!(
        rendered,
        "<tns:multi><tns:b>true</tns:b><tns:f>3.5</tns:f></tns:multi>"
    );
}

#[test]
fn test_build_fault_envelope() {
    let fault = FaultValue::builder()
        .faultcode("SOAP-ENV:Client")
        .faultstring("bad request")
        .build();

    let envelope = SoapEnvelope::builder()
        .body(SoapBody::builder().fault(fault).build())
        .build();

    let xml = envelope.to_document_string();

    assert!(xml.contains(
        "<SOAP-ENV:Fault><faultcode>SOAP-ENV:Client</faultcode>\
         <faultstring>bad request</faultstring></SOAP-ENV:Fault>"
    ));
}

#[test]
fn test_soap_action_defaults_to_method_name() {
    let call = MethodCall::new("echo_string", SERVICE_NS);
    assert_eq!(call.soap_action(), "echo_string");
    assert_eq!(call.result_name(), "echo_stringResult");
}
