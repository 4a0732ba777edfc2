use std::borrow::Cow;

use soapling_xml::{
    builder::Element,
    parser::{XmlDeserialize, XmlVisitor},
};

pub trait TagValue<'a> {
    fn append_to_element(self, element: Element<'a>) -> Element<'a>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text<'a>(Cow<'a, str>);

impl<'a> From<&'a str> for Text<'a> {
    fn from(value: &'a str) -> Self {
        Text(value.into())
    }
}

impl From<String> for Text<'_> {
    fn from(value: String) -> Self {
        Text(value.into())
    }
}

impl AsRef<str> for Text<'_> {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl<'a> From<Text<'a>> for Cow<'a, str> {
    fn from(value: Text<'a>) -> Self {
        value.0
    }
}

impl<'a> TagValue<'a> for Text<'a> {
    fn append_to_element(self, element: Element<'a>) -> Element<'a> {
        element.set_text(self.0)
    }
}

pub struct TextVisitor<'a> {
    value: Option<Text<'a>>,
}

impl<'a> XmlVisitor<'a> for TextVisitor<'a> {
    type Value = Text<'a>;

    fn visit_node(&mut self, _node: soapling_xml::parser::Node<'a, 'a>) -> Result<(), soapling_xml::XmlError> {
        Ok(())
    }

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = soapling_xml::parser::Node<'a, 'a>>,
    ) -> Result<(), soapling_xml::XmlError> {
        let child_nodes: Vec<_> = children.collect();

        // An empty element carries the empty string. Text is never trimmed:
        // echoed values must survive byte-for-byte.
        match child_nodes.as_slice() {
            [] => {
                self.value = Some(Text(Cow::Borrowed("")));
                Ok(())
            }
            [child] if child.is_text() => {
                self.value = Some(Text(child.text().unwrap_or("").into()));
                Ok(())
            }
            _ => Err(soapling_xml::XmlError::InvalidXml(format!(
                "Expected a single text node, found {} children",
                child_nodes.len()
            ))),
        }
    }

    fn finish(self) -> Result<Self::Value, soapling_xml::XmlError> {
        self.value.ok_or(soapling_xml::XmlError::InvalidXml(
            "No text found in the node".to_string(),
        ))
    }
}

impl<'a> XmlDeserialize<'a> for Text<'a> {
    type Visitor = TextVisitor<'a>;

    fn visitor() -> Self::Visitor {
        TextVisitor { value: None }
    }
}

/// Subtree content the client does not interpret, such as response headers
/// or fault detail blocks. Only the immediate text (if any) is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unparsed<'a> {
    pub text: Option<Cow<'a, str>>,
}

impl<'a> TagValue<'a> for Unparsed<'a> {
    fn append_to_element(self, element: Element<'a>) -> Element<'a> {
        match self.text {
            Some(text) => element.set_text(text),
            None => element,
        }
    }
}

pub struct UnparsedVisitor<'a> {
    value: Unparsed<'a>,
}

impl<'a> XmlVisitor<'a> for UnparsedVisitor<'a> {
    type Value = Unparsed<'a>;

    fn visit_node(&mut self, node: soapling_xml::parser::Node<'a, 'a>) -> Result<(), soapling_xml::XmlError> {
        self.value.text = node.text().map(Cow::Borrowed);
        Ok(())
    }

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = soapling_xml::parser::Node<'a, 'a>>,
    ) -> Result<(), soapling_xml::XmlError> {
        for child in children {
            if child.is_text() && self.value.text.is_none() {
                self.value.text = child.text().map(Cow::Borrowed);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, soapling_xml::XmlError> {
        Ok(self.value)
    }
}

impl<'a> XmlDeserialize<'a> for Unparsed<'a> {
    type Visitor = UnparsedVisitor<'a>;

    fn visitor() -> Self::Visitor {
        UnparsedVisitor {
            value: Unparsed { text: None },
        }
    }
}
