use tracing::debug;

use soapling_xml::XmlError;
use soapling_xml::builder::{Attribute, Element};
use soapling_xml::parser::{NodeDeserializer, XmlDeserialize, XmlVisitor};

use super::tag_name::TagName;
use super::tag_value::{TagValue, Text};

/// An XML tag whose name and namespace are fixed at compile time by `N`
/// while the content is carried by `V`.
#[derive(Debug, Clone)]
pub struct Tag<'a, V, N>
where
    V: TagValue<'a>,
    N: TagName,
{
    pub value: V,
    pub attributes: Vec<Attribute<'a>>,

    __phantom: std::marker::PhantomData<&'a V>,
    __phantom_name: std::marker::PhantomData<N>,
}

impl<'a, V, N> Tag<'a, V, N>
where
    V: TagValue<'a>,
    N: TagName,
{
    pub fn new(value: impl Into<V>) -> Self {
        Self {
            value: value.into(),
            attributes: Vec::new(),
            __phantom: std::marker::PhantomData,
            __phantom_name: std::marker::PhantomData,
        }
    }

    /// Does not do anything, just returns self.
    /// This is useful for the compiler to infer `N` when using `Tag::new`.
    pub fn with_name(self, _name: N) -> Self {
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute<'a>) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn into_element(self) -> Element<'a> {
        let mut element = Element::new(N::TAG_NAME);
        if let Some(ns) = N::NAMESPACE {
            element = element.set_namespace(ns);
        }

        for attribute in self.attributes {
            element = element.add_attribute(attribute);
        }

        self.value.append_to_element(element)
    }

    pub fn name(&self) -> &'static str {
        N::TAG_NAME
    }
}

impl<'a, V, N> From<V> for Tag<'a, V, N>
where
    V: TagValue<'a>,
    N: TagName + 'a,
{
    fn from(value: V) -> Self {
        Tag::new(value)
    }
}

impl<'a, N> From<&'a str> for Tag<'a, Text<'a>, N>
where
    N: TagName + 'a,
{
    fn from(value: &'a str) -> Self {
        Tag::new(Text::from(value))
    }
}

impl<'a, N> From<String> for Tag<'a, Text<'a>, N>
where
    N: TagName + 'a,
{
    fn from(value: String) -> Self {
        Tag::new(Text::from(value))
    }
}

pub struct TagVisitor<'a, V, N>
where
    V: TagValue<'a>,
    N: TagName,
{
    pub tag: Option<V>,
    __phantom: std::marker::PhantomData<&'a N>,
}

impl<'a, V, N> XmlVisitor<'a> for TagVisitor<'a, V, N>
where
    V: TagValue<'a> + XmlDeserialize<'a> + 'a,
    N: TagName,
{
    type Value = Tag<'a, V, N>;

    fn visit_node(&mut self, node: soapling_xml::parser::Node<'a, 'a>) -> Result<(), XmlError> {
        debug!(
            found = node.tag_name().name(),
            expected = N::TAG_NAME,
            "TagVisitor visiting node"
        );

        if !node.is_element() || node.tag_name().name() != N::TAG_NAME {
            return Err(XmlError::XmlInvalidTag {
                expected: N::TAG_NAME.to_string(),
                found: node.tag_name().name().to_string(),
            });
        }

        let expected_namespace = N::NAMESPACE.map(|ns| ns.url);
        if node.tag_name().namespace() != expected_namespace {
            return Err(XmlError::XmlInvalidNamespace {
                expected: expected_namespace.unwrap_or_default().to_string(),
                found: node.tag_name().namespace().map(ToString::to_string),
            });
        }

        let value = V::from_children(node.children().filter(|c| c.is_element() || c.is_text()))?;
        self.tag = Some(value);

        Ok(())
    }

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = soapling_xml::parser::Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        for child in children {
            if child.is_element() {
                self.visit_node(child)?;
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, XmlError> {
        self.tag
            .map(|value| Tag::new(value))
            .ok_or(XmlError::InvalidXml(format!(
                "TagVisitor did not find a valid {} tag",
                N::TAG_NAME
            )))
    }
}

impl<'a, V, N> XmlDeserialize<'a> for Tag<'a, V, N>
where
    V: TagValue<'a> + XmlDeserialize<'a> + 'a,
    N: TagName + 'a,
{
    type Visitor = TagVisitor<'a, V, N>;

    fn visitor() -> Self::Visitor {
        TagVisitor {
            tag: None,
            __phantom: std::marker::PhantomData,
        }
    }

    fn from_node(node: soapling_xml::parser::Node<'a, 'a>) -> Result<Self, XmlError> {
        NodeDeserializer::new(node).deserialize(Self::visitor())
    }
}

impl<'a, V, N> AsRef<V> for Tag<'a, V, N>
where
    V: TagValue<'a>,
    N: TagName,
{
    fn as_ref(&self) -> &V {
        &self.value
    }
}

impl<'a, V, N> From<Tag<'a, V, N>> for Element<'a>
where
    V: TagValue<'a>,
    N: TagName,
{
    fn from(val: Tag<'a, V, N>) -> Self {
        val.into_element()
    }
}

impl<'a, V, N> TagValue<'a> for Tag<'a, V, N>
where
    V: TagValue<'a>,
    N: TagName,
{
    fn append_to_element(self, element: Element<'a>) -> Element<'a> {
        let inner_element = self.into_element();
        element.add_child(inner_element)
    }
}
