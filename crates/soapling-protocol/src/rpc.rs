//! RPC payload model in the soaplib wire convention: requests are a
//! `<tns:method>` element with one `tns`-qualified child per positional
//! parameter; responses are `<tns:{method}Response>` holding
//! `<tns:{method}Result>`.

use std::borrow::Cow;

use soapling_xml::XmlError;
use soapling_xml::builder::{Element, Namespace};
use soapling_xml::parser::{NodeDeserializer, XmlDeserialize, XmlVisitor};

use crate::cores::namespace::{XML_SCHEMA_INSTANCE_NAMESPACE_URI, service_namespace};

pub const RESPONSE_SUFFIX: &str = "Response";
pub const RESULT_SUFFIX: &str = "Result";

/// One remote invocation, ready to be placed in a SOAP body. The method
/// name doubles as the SOAPAction value.
#[derive(Debug, Clone)]
pub struct MethodCall<'a> {
    method: &'a str,
    namespace: Namespace<'a>,
    params: Vec<Param<'a>>,
}

impl<'a> MethodCall<'a> {
    pub fn new(method: &'a str, service_namespace_uri: &'a str) -> Self {
        Self {
            method,
            namespace: service_namespace(service_namespace_uri),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: Param<'a>) -> Self {
        self.params.push(param);
        self
    }

    pub fn method(&self) -> &'a str {
        self.method
    }

    /// The SOAPAction for this call. soaplib services default the action to
    /// the bare method name.
    pub fn soap_action(&self) -> &'a str {
        self.method
    }

    /// Element name carrying the result for this call, `{method}Result`.
    pub fn result_name(&self) -> String {
        format!("{}{}", self.method, RESULT_SUFFIX)
    }

    pub fn into_element(self) -> Element<'a> {
        let Self {
            method,
            namespace,
            params,
        } = self;

        let mut element = Element::new(method).set_namespace(namespace.clone());
        for param in params {
            element = element.add_child(param.into_element(namespace.clone()));
        }
        element
    }
}

/// A single positional, named parameter of a [`MethodCall`].
#[derive(Debug, Clone)]
pub struct Param<'a> {
    name: &'a str,
    value: ParamValue<'a>,
}

impl<'a> Param<'a> {
    pub fn string(name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name,
            value: ParamValue::Str(value.into()),
        }
    }

    pub fn integer(name: &'a str, value: i64) -> Self {
        Self {
            name,
            value: ParamValue::Int(value),
        }
    }

    pub fn boolean(name: &'a str, value: bool) -> Self {
        Self {
            name,
            value: ParamValue::Bool(value),
        }
    }

    pub fn float(name: &'a str, value: f64) -> Self {
        Self {
            name,
            value: ParamValue::Float(value),
        }
    }

    fn into_element(self, namespace: Namespace<'a>) -> Element<'a> {
        Element::new(self.name)
            .set_namespace(namespace)
            .set_text(self.value.into_text())
    }
}

#[derive(Debug, Clone)]
enum ParamValue<'a> {
    Str(Cow<'a, str>),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl<'a> ParamValue<'a> {
    fn into_text(self) -> Cow<'a, str> {
        match self {
            ParamValue::Str(value) => value,
            ParamValue::Int(value) => Cow::Owned(value.to_string()),
            ParamValue::Bool(value) => Cow::Borrowed(if value { "true" } else { "false" }),
            ParamValue::Float(value) => Cow::Owned(value.to_string()),
        }
    }
}

/// A parsed RPC response body, owned so it outlives the parsed document.
/// Children are matched by local name; the original client strips namespace
/// prefixes the same way.
#[derive(Debug, Clone)]
pub struct MethodResponse {
    name: String,
    fields: Vec<ResponseField>,
}

impl MethodResponse {
    /// Local name of the response element, usually `{method}Response`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self, name: &str) -> Option<&ResponseField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn fields(&self) -> &[ResponseField] {
        &self.fields
    }
}

#[derive(Debug, Clone)]
pub struct ResponseField {
    name: String,
    value: Option<String>,
}

impl ResponseField {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field text. `None` means the server marked it `xsi:nil`.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

pub struct MethodResponseVisitor {
    name: Option<String>,
    fields: Vec<ResponseField>,
}

impl<'a> XmlVisitor<'a> for MethodResponseVisitor {
    type Value = MethodResponse;

    fn visit_node(&mut self, node: soapling_xml::parser::Node<'a, 'a>) -> Result<(), XmlError> {
        if !node.is_element() {
            return Err(XmlError::InvalidXml(
                "Expected a response element".to_string(),
            ));
        }

        self.name = Some(node.tag_name().name().to_string());

        for child in node.children().filter(soapling_xml::parser::Node::is_element) {
            let nil = child
                .attribute((XML_SCHEMA_INSTANCE_NAMESPACE_URI, "nil"))
                .is_some_and(|value| value == "true" || value == "1");

            let value = if nil {
                None
            } else {
                Some(child.text().unwrap_or("").to_string())
            };

            self.fields.push(ResponseField {
                name: child.tag_name().name().to_string(),
                value,
            });
        }

        Ok(())
    }

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = soapling_xml::parser::Node<'a, 'a>>,
    ) -> Result<(), XmlError> {
        let elements: Vec<_> = children.filter(|c| c.is_element()).collect();
        match elements.as_slice() {
            [single] => self.visit_node(*single),
            other => Err(XmlError::TagCountInvalid {
                tag: "response".to_string(),
                value: other.len(),
            }),
        }
    }

    fn finish(self) -> Result<Self::Value, XmlError> {
        let name = self.name.ok_or(XmlError::InvalidXml(
            "No response element found".to_string(),
        ))?;

        Ok(MethodResponse {
            name,
            fields: self.fields,
        })
    }
}

impl<'a> XmlDeserialize<'a> for MethodResponse {
    type Visitor = MethodResponseVisitor;

    fn visitor() -> Self::Visitor {
        MethodResponseVisitor {
            name: None,
            fields: Vec::new(),
        }
    }

    fn from_node(node: soapling_xml::parser::Node<'a, 'a>) -> Result<Self, XmlError> {
        NodeDeserializer::new(node).deserialize(Self::visitor())
    }
}
