use soapling_protocol::soap::SoapEnvelope;
use soapling_xml::parser::XmlDeserialize;

fn parse_envelope_response(xml: &str) -> (String, Vec<(String, Option<String>)>) {
    let document = soapling_xml::parser::parse(xml).expect("response should be well-formed XML");
    let envelope = SoapEnvelope::from_node(document.root_element())
        .expect("response should be a SOAP envelope");

    let response = envelope
        .body
        .value
        .response
        .expect("body should carry a response element");

    let fields = response
        .fields()
        .iter()
        .map(|field| {
            (
                field.name().to_string(),
                field.value().map(ToString::to_string),
            )
        })
        .collect();

    (response.name().to_string(), fields)
}

#[test]
fn test_parse_echo_string_response() {
    let xml = r#"<?xml version='1.0' encoding='UTF-8'?>
<senv:Envelope xmlns:senv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:tns="InteropService.InteropService">
<senv:Body><tns:echo_stringResponse><tns:echo_stringResult>OK</tns:echo_stringResult></tns:echo_stringResponse></senv:Body>
</senv:Envelope>"#;

    let (name, fields) = parse_envelope_response(xml);
    assert_eq!(name, "echo_stringResponse");
    assert_eq!(
        fields,
        vec![("echo_stringResult".to_string(), Some("OK".to_string()))]
    );
}

#[test]
fn test_parse_empty_string_result() {
    let xml = r#"<senv:Envelope xmlns:senv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:tns="InteropService.InteropService"><senv:Body><tns:echo_stringResponse><tns:echo_stringResult/></tns:echo_stringResponse></senv:Body></senv:Envelope>"#;

    let (_, fields) = parse_envelope_response(xml);
    assert_eq!(
        fields,
        vec![("echo_stringResult".to_string(), Some(String::new()))]
    );
}

#[test]
fn test_parse_negative_integer_result() {
    let xml = r#"<senv:Envelope xmlns:senv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:tns="InteropService.InteropService"><senv:Body><tns:echo_integerResponse><tns:echo_integerResult>-1</tns:echo_integerResult></tns:echo_integerResponse></senv:Body></senv:Envelope>"#;

    let (name, fields) = parse_envelope_response(xml);
    assert_eq!(name, "echo_integerResponse");
    assert_eq!(
        fields,
        vec![("echo_integerResult".to_string(), Some("-1".to_string()))]
    );
}

#[test]
fn test_parse_nil_result_is_none() {
    let xml = r#"<senv:Envelope xmlns:senv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:tns="InteropService.InteropService" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><senv:Body><tns:echo_stringResponse><tns:echo_stringResult xsi:nil="true"/></tns:echo_stringResponse></senv:Body></senv:Envelope>"#;

    let (_, fields) = parse_envelope_response(xml);
    assert_eq!(fields, vec![("echo_stringResult".to_string(), None)]);
}

#[test]
fn test_parse_response_with_header() {
    // Response headers are tolerated and left uninterpreted.
    let xml = r#"<senv:Envelope xmlns:senv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:tns="InteropService.InteropService"><senv:Header><tns:session>abc</tns:session></senv:Header><senv:Body><tns:echo_integerResponse><tns:echo_integerResult>0</tns:echo_integerResult></tns:echo_integerResponse></senv:Body></senv:Envelope>"#;

    let document = soapling_xml::parser::parse(xml).unwrap();
    let envelope = SoapEnvelope::from_node(document.root_element()).unwrap();

    assert!(envelope.header.is_some());
    assert!(envelope.body.value.response.is_some());
}

#[test]
fn test_entity_escaped_text_round_trips() {
    let xml = r#"<senv:Envelope xmlns:senv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:tns="InteropService.InteropService"><senv:Body><tns:echo_stringResponse><tns:echo_stringResult>a &lt; b &amp; c</tns:echo_stringResult></tns:echo_stringResponse></senv:Body></senv:Envelope>"#;

    let (_, fields) = parse_envelope_response(xml);
    assert_eq!(fields[0].1.as_deref(), Some("a < b & c"));
}
