use soapling_xml::XmlError;
use soapling_xml::parser::{XmlDeserialize, XmlVisitor};
use tracing::debug;

use crate::cores::{Fault, SOAP_ENVELOPE_NAMESPACE_URI, Tag, TagName, TagValue};
use crate::rpc::{MethodCall, MethodResponse};
use crate::soap::fault::FaultValue;

/// The body of a SOAP envelope. Exactly one of the fields is populated:
/// `call` on the request side, `response` or `fault` on the parse side.
/// `response` has no build form, it only exists as parsed data.
#[derive(Debug, Clone, typed_builder::TypedBuilder)]
pub struct SoapBody<'a> {
    #[builder(default, setter(strip_option))]
    pub call: Option<MethodCall<'a>>,
    #[builder(default, setter(strip_option))]
    pub response: Option<MethodResponse>,
    #[builder(default, setter(into, strip_option))]
    pub fault: Option<Tag<'a, FaultValue<'a>, Fault>>,
}

impl<'a> TagValue<'a> for SoapBody<'a> {
    fn append_to_element(
        self,
        mut element: soapling_xml::builder::Element<'a>,
    ) -> soapling_xml::builder::Element<'a> {
        if let Some(call) = self.call {
            element = element.add_child(call.into_element());
        }
        if let Some(fault) = self.fault {
            element = element.add_child(fault.into_element());
        }
        element
    }
}

pub struct SoapBodyVisitor<'a> {
    response: Option<MethodResponse>,
    fault: Option<Tag<'a, FaultValue<'a>, Fault>>,
}

impl<'a> XmlVisitor<'a> for SoapBodyVisitor<'a> {
    type Value = SoapBody<'a>;

    fn visit_node(&mut self, node: soapling_xml::parser::Node<'a, 'a>) -> Result<(), XmlError> {
        let children: Vec<_> = node.children().collect();
        self.visit_children(children.into_iter())
    }

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = soapling_xml::parser::Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        for child in children {
            if !child.is_element() {
                continue;
            }

            let is_fault = child.tag_name().name() == Fault::TAG_NAME
                && child.tag_name().namespace() == Some(SOAP_ENVELOPE_NAMESPACE_URI);

            if is_fault {
                debug!("parsing SOAP fault from body");
                self.fault = Some(Tag::from_node(child)?);
            } else {
                self.response = Some(MethodResponse::from_node(child)?);
            }
        }

        Ok(())
    }

    fn finish(self) -> Result<Self::Value, XmlError> {
        Ok(SoapBody {
            call: None,
            response: self.response,
            fault: self.fault,
        })
    }
}

impl<'a> XmlDeserialize<'a> for SoapBody<'a> {
    type Visitor = SoapBodyVisitor<'a>;

    fn visitor() -> Self::Visitor {
        SoapBodyVisitor {
            response: None,
            fault: None,
        }
    }
}
