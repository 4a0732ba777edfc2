use std::borrow::Cow;

use crate::builder::{write_escaped, Attribute, Namespace};

#[derive(Debug, Clone)]
pub enum Content<'a> {
    /// Represents a text content within an XML element.
    Text(Cow<'a, str>),
    /// Represents a child element within an XML element.
    Elements(Vec<Element<'a>>),

    None,
}

/// Represents an XML element.
#[derive(Debug, Clone)]
pub struct Element<'a> {
    /// The name of the element.
    name: &'a str,
    /// The namespace associated with the element.
    namespace: Option<Namespace<'a>>,
    /// The attributes of the element.
    attributes: Vec<Attribute<'a>>,
    /// The child elements of the element.
    content: Content<'a>,
}

impl<'a> Element<'a> {
    /// Creates a new instance of `Element` with the given name.
    ///
    /// # Example
    ///
    /// ```
    /// use soapling_xml::builder::Element;
    /// let element = Element::new("root");
    /// ```
    pub fn new(name: &'a str) -> Self {
        Element {
            name,
            namespace: None,
            attributes: Vec::new(),
            content: Content::None,
        }
    }

    /// Adds a namespace to the element and returns a modified `Element`.
    ///
    /// # Example
    ///
    /// ```
    /// use soapling_xml::builder::{Element, Namespace};
    /// let element = Element::new("root")
    ///     .set_namespace(Namespace::new("ns", "http://example.com"));
    /// ```
    pub fn set_namespace(mut self, namespace: Namespace<'a>) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Collects every namespace used in this subtree, in document order,
    /// skipping duplicates. The root element declares the result.
    pub(crate) fn collect_namespaces(&self, namespaces: &mut Vec<Namespace<'a>>) {
        if let Some(namespace) = &self.namespace {
            if !namespaces.contains(namespace) {
                namespaces.push(namespace.clone());
            }
        }

        for attribute in &self.attributes {
            attribute.collect_namespaces(namespaces);
        }

        if let Content::Elements(children) = &self.content {
            for child in children {
                child.collect_namespaces(namespaces);
            }
        }
    }

    /// Adds an attribute to the element and returns a modified `Element`.
    ///
    /// # Example
    ///
    /// ```
    /// use soapling_xml::builder::{Attribute, Element};
    /// let element = Element::new("root")
    ///     .add_attribute(Attribute::new("attr1", "value1"));
    /// ```
    pub fn add_attribute(mut self, attribute: Attribute<'a>) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds a child element to the element and returns a modified `Element`.
    ///
    /// # Example
    ///
    /// ```
    /// use soapling_xml::builder::Element;
    /// let child = Element::new("child");
    /// let element = Element::new("root")
    ///     .add_child(child);
    /// ```
    pub fn add_child(mut self, child: Element<'a>) -> Self {
        match self.content {
            Content::None | Content::Text(_) => {
                self.content = Content::Elements(vec![child]);
            }
            Content::Elements(ref mut children) => {
                children.push(child);
            }
        }
        self
    }

    pub fn add_children(mut self, children: Vec<Element<'a>>) -> Self {
        for child in children {
            self = self.add_child(child);
        }
        self
    }

    /// Sets the text content of the element and returns a modified `Element`.
    ///
    /// # Example
    ///
    /// ```
    /// use soapling_xml::builder::Element;
    /// let element = Element::new("root")
    ///    .set_text("This is some text content.");
    /// ```
    pub fn set_text(mut self, text: impl Into<Cow<'a, str>>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    fn qualified_name(&self) -> String {
        if let Some(namespace) = &self.namespace {
            format!("{}:{}", namespace.alias, self.name)
        } else {
            self.name.to_string()
        }
    }
}

impl std::fmt::Display for Element<'_> {
    /// Formats the element and its content as an XML string. Output is
    /// compact: element text must survive byte-for-byte, so no indentation
    /// or newlines are ever inserted.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.qualified_name();
        write!(f, "<{name}")?;

        for attribute in &self.attributes {
            write!(f, " {attribute}")?;
        }

        match &self.content {
            Content::None => {
                write!(f, "/>")?;
            }
            Content::Text(value) => {
                write!(f, ">")?;
                write_escaped(f, value, false)?;
                write!(f, "</{name}>")?;
            }
            Content::Elements(children) => {
                write!(f, ">")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{name}>")?;
            }
        }
        Ok(())
    }
}

/// The document root. Declares every namespace used in the tree on the
/// opening tag, e.g.
/// `<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">`.
pub struct RootElement<'a> {
    element: Element<'a>,
}

impl<'a> RootElement<'a> {
    /// Creates a new instance of `RootElement` with the given element.
    ///
    /// # Example
    ///
    /// ```
    /// use soapling_xml::builder::{Element, RootElement};
    /// let element = Element::new("root");
    /// let root_element = RootElement::new(element);
    /// ```
    pub fn new(element: Element<'a>) -> Self {
        RootElement { element }
    }
}

impl std::fmt::Display for RootElement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut namespaces = Vec::new();
        self.element.collect_namespaces(&mut namespaces);

        let name = self.element.qualified_name();
        write!(f, "<{name}")?;

        for namespace in &namespaces {
            write!(f, " xmlns:{}=\"{}\"", namespace.alias, namespace.url)?;
        }

        for attribute in &self.element.attributes {
            write!(f, " {attribute}")?;
        }

        match &self.element.content {
            Content::None => {
                write!(f, "/>")?;
            }
            Content::Text(value) => {
                write!(f, ">")?;
                write_escaped(f, value, false)?;
                write!(f, "</{name}>")?;
            }
            Content::Elements(children) => {
                write!(f, ">")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{name}>")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements_compactly() {
        let element = Element::new("root")
            .add_child(Element::new("child").set_text("value"))
            .add_child(Element::new("empty"));

        assert_eq!(
            element.to_string(),
            "<root><child>value</child><empty/></root>"
        );
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let element = Element::new("e")
            .add_attribute(Attribute::new("a", "say \"hi\" & <bye>"))
            .set_text("1 < 2 && 3 > 2");

        assert_eq!(
            element.to_string(),
            "<e a=\"say &quot;hi&quot; &amp; &lt;bye&gt;\">1 &lt; 2 &amp;&amp; 3 &gt; 2</e>"
        );
    }

    #[test]
    fn root_declares_namespaces_from_subtree() {
        let tns = Namespace::new("tns", "urn:example");
        let element = Element::new("Envelope")
            .set_namespace(Namespace::new("s", "http://schemas.xmlsoap.org/soap/envelope/"))
            .add_child(
                Element::new("Body")
                    .set_namespace(Namespace::new("s", "http://schemas.xmlsoap.org/soap/envelope/"))
                    .add_child(Element::new("echo").set_namespace(tns)),
            );

        let rendered = RootElement::new(element).to_string();
        assert!(rendered.starts_with(
            "<s:Envelope xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\" xmlns:tns=\"urn:example\">"
        ));
        assert!(rendered.contains("<tns:echo/>"));
        assert!(rendered.ends_with("</s:Envelope>"));
    }
}
