use soapling_protocol::soap::SoapEnvelope;
use soapling_protocol::soap::fault::SoapFault;
use soapling_xml::parser::XmlDeserialize;

#[test]
fn test_parse_server_fault() {
    let xml = r#"<?xml version='1.0' encoding='UTF-8'?>
<senv:Envelope xmlns:senv="http://schemas.xmlsoap.org/soap/envelope/"><senv:Body><senv:Fault><faultcode>senv:Server</faultcode><faultstring>method not found</faultstring></senv:Fault></senv:Body></senv:Envelope>"#;

    let document = soapling_xml::parser::parse(xml).unwrap();
    let envelope = SoapEnvelope::from_node(document.root_element()).unwrap();

    let fault = envelope
        .body
        .value
        .fault
        .expect("body should carry a fault");

    let owned = SoapFault::from(&fault.value);
    assert_eq!(owned.code, "senv:Server");
    assert_eq!(owned.reason, "method not found");
    assert!(owned.actor.is_none());
    assert!(owned.detail.is_none());
}

#[test]
fn test_parse_fault_with_actor_and_detail() {
    let xml = r#"<senv:Envelope xmlns:senv="http://schemas.xmlsoap.org/soap/envelope/"><senv:Body><senv:Fault><faultcode>senv:Client</faultcode><faultstring>bad request</faultstring><faultactor>urn:interop</faultactor><detail>stack trace here</detail></senv:Fault></senv:Body></senv:Envelope>"#;

    let document = soapling_xml::parser::parse(xml).unwrap();
    let envelope = SoapEnvelope::from_node(document.root_element()).unwrap();

    let owned = SoapFault::from(&envelope.body.value.fault.unwrap().value);
    assert_eq!(owned.actor.as_deref(), Some("urn:interop"));
    assert_eq!(owned.detail.as_deref(), Some("stack trace here"));
}

#[test]
fn test_fault_without_faultstring_is_rejected() {
    let xml = r#"<senv:Envelope xmlns:senv="http://schemas.xmlsoap.org/soap/envelope/"><senv:Body><senv:Fault><faultcode>senv:Server</faultcode></senv:Fault></senv:Body></senv:Envelope>"#;

    let document = soapling_xml::parser::parse(xml).unwrap();
    let result = SoapEnvelope::from_node(document.root_element());

    assert!(result.is_err(), "fault without faultstring should not parse");
}

#[test]
fn test_fault_display_carries_code_and_reason() {
    let fault = SoapFault {
        code: "senv:Server".to_string(),
        reason: "boom".to_string(),
        actor: None,
        detail: None,
    };

    assert_eq!(fault.to_string(), "SOAP fault senv:Server: boom");
}
