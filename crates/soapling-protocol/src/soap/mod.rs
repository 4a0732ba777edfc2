pub mod body;
pub mod fault;

use soapling_xml::XmlError;
use soapling_xml::builder::{Builder, Declaration, RootElement};
use soapling_xml::parser::{XmlDeserialize, XmlVisitor};

use crate::cores::{Body, Envelope, Header, SOAP_ENVELOPE_NAMESPACE_URI, Tag, TagName, TagValue, Unparsed};
use crate::soap::body::SoapBody;

#[derive(Debug, Clone, typed_builder::TypedBuilder)]
pub struct SoapEnvelope<'a> {
    #[builder(default, setter(into, strip_option))]
    pub header: Option<Tag<'a, Unparsed<'a>, Header>>,
    #[builder(setter(into))]
    pub body: Tag<'a, SoapBody<'a>, Body>,
}

impl<'a> SoapEnvelope<'a> {
    /// Renders the envelope as a complete XML document, declaration
    /// included. Namespace declarations for everything used in the tree are
    /// collected on the root element.
    pub fn to_document_string(self) -> String {
        let envelope: Tag<'a, SoapEnvelope<'a>, Envelope> = Tag::new(self);
        Builder::new(
            Some(Declaration::new("1.0", "UTF-8")),
            RootElement::new(envelope.into_element()),
        )
        .to_string()
    }
}

impl<'a> TagValue<'a> for SoapEnvelope<'a> {
    fn append_to_element(
        self,
        element: soapling_xml::builder::Element<'a>,
    ) -> soapling_xml::builder::Element<'a> {
        let envelope = element;

        if let Some(header) = self.header {
            envelope.add_child(header.into_element())
        } else {
            envelope
        }
        .add_child(self.body.into_element())
    }
}

pub struct SoapEnvelopeVisitor<'a> {
    pub header: Option<Tag<'a, Unparsed<'a>, Header>>,
    pub body: Option<Tag<'a, SoapBody<'a>, Body>>,
}

impl<'a> XmlVisitor<'a> for SoapEnvelopeVisitor<'a> {
    type Value = SoapEnvelope<'a>;

    fn visit_children(
        &mut self,
        node: impl Iterator<Item = soapling_xml::parser::Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        Err(XmlError::InvalidXml(format!(
            "Expected a single envelope, found {} children",
            node.count()
        )))
    }

    fn visit_node(&mut self, node: soapling_xml::parser::Node<'a, 'a>) -> Result<(), XmlError> {
        if node.tag_name().name() != Envelope::TAG_NAME {
            return Err(XmlError::XmlInvalidTag {
                expected: Envelope::TAG_NAME.to_string(),
                found: node.tag_name().name().to_string(),
            });
        }

        if node.tag_name().namespace() != Some(SOAP_ENVELOPE_NAMESPACE_URI) {
            return Err(XmlError::XmlInvalidNamespace {
                expected: SOAP_ENVELOPE_NAMESPACE_URI.to_string(),
                found: node.tag_name().namespace().map(ToString::to_string),
            });
        }

        let header: Option<Tag<'_, Unparsed<'a>, Header>> = node
            .children()
            .find(|child| child.tag_name().name() == Header::TAG_NAME)
            .map(Tag::from_node)
            .transpose()?;

        // Header can be none
        self.header = header;

        let body: Option<Tag<'_, SoapBody<'a>, Body>> = node
            .children()
            .find(|child| child.tag_name().name() == Body::TAG_NAME)
            .map(Tag::from_node)
            .transpose()?;

        if body.is_none() {
            return Err(XmlError::InvalidXml(
                "SoapEnvelope must contain a Body element".to_string(),
            ));
        }

        self.body = body;

        Ok(())
    }

    fn finish(self) -> Result<Self::Value, XmlError> {
        Ok(SoapEnvelope {
            header: self.header,
            body: self
                .body
                .ok_or_else(|| XmlError::InvalidXml("Missing Soap Body".to_string()))?,
        })
    }
}

impl<'a> XmlDeserialize<'a> for SoapEnvelope<'a> {
    type Visitor = SoapEnvelopeVisitor<'a>;

    fn visitor() -> Self::Visitor {
        SoapEnvelopeVisitor {
            header: None,
            body: None,
        }
    }
}
