pub use roxmltree::*;

use crate::XmlError;

pub fn parse(xml: &str) -> Result<Document<'_>, roxmltree::Error> {
    roxmltree::Document::parse(xml)
}

/// Visitor driven over a parsed XML subtree. Implementations accumulate
/// state in `visit_node`/`visit_children` and produce the final value in
/// `finish`.
pub trait XmlVisitor<'a> {
    type Value;

    fn visit_node(&mut self, node: Node<'a, 'a>) -> Result<(), XmlError>;

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), XmlError>;

    fn finish(self) -> Result<Self::Value, XmlError>
    where
        Self: Sized;
}

pub trait XmlDeserialize<'a>: Sized {
    type Visitor: XmlVisitor<'a, Value = Self>;

    fn visitor() -> Self::Visitor;

    fn from_node(node: Node<'a, 'a>) -> Result<Self, XmlError> {
        NodeDeserializer::new(node).deserialize(Self::visitor())
    }

    fn from_children(children: impl Iterator<Item = Node<'a, 'a>>) -> Result<Self, XmlError> {
        let mut visitor = Self::visitor();
        visitor.visit_children(children)?;
        visitor.finish()
    }
}

pub struct NodeDeserializer<'a> {
    root: Node<'a, 'a>,
}

impl<'a> NodeDeserializer<'a> {
    pub fn new(root: Node<'a, 'a>) -> Self {
        Self { root }
    }

    /// Drive any visitor over the subtree rooted at `self.root`.
    pub fn deserialize<V>(self, mut visitor: V) -> Result<V::Value, XmlError>
    where
        V: XmlVisitor<'a>,
    {
        visitor.visit_node(self.root)?;
        visitor.finish()
    }
}
