use std::borrow::Cow;

use crate::builder::{write_escaped, Namespace};

/// Represents an XML attribute with a name and value.
#[derive(Debug, Clone)]
pub struct Attribute<'a> {
    /// The name of the attribute.
    name: &'a str,
    /// The value of the attribute.
    value: Cow<'a, str>,

    namespace: Option<Namespace<'a>>,
}

impl<'a> Attribute<'a> {
    /// Creates a new instance of `Attribute`.
    ///
    /// # Example
    ///
    /// ```
    /// use soapling_xml::builder::Attribute;
    /// let attribute = Attribute::new("name", "value");
    /// ```
    pub fn new(name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        Attribute {
            name,
            value: value.into(),
            namespace: None,
        }
    }

    pub fn set_namespace(mut self, namespace: Namespace<'a>) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub(crate) fn collect_namespaces(&self, namespaces: &mut Vec<Namespace<'a>>) {
        if let Some(namespace) = &self.namespace {
            if !namespaces.contains(namespace) {
                namespaces.push(namespace.clone());
            }
        }
    }
}

impl std::fmt::Display for Attribute<'_> {
    /// Formats the attribute as a string in the format `name="value"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(namespace) = &self.namespace {
            write!(f, "{}:{}=\"", namespace.alias, self.name)?;
        } else {
            write!(f, "{}=\"", self.name)?;
        }
        write_escaped(f, &self.value, true)?;
        f.write_str("\"")
    }
}
