use crate::builder::{Declaration, RootElement};

/// Represents a builder for constructing an XML document.
pub struct Builder<'a> {
    /// The XML declaration.
    declaration: Option<Declaration<'a>>,
    /// The root element of the XML document.
    element: RootElement<'a>,
}

impl<'a> Builder<'a> {
    /// Creates a new instance of `Builder` with the given declaration and
    /// root element.
    ///
    /// # Example
    ///
    /// ```
    /// use soapling_xml::builder::{Builder, Declaration, Element, RootElement};
    /// let declaration = Declaration::new("1.0", "UTF-8");
    /// let element = Element::new("root");
    /// let builder = Builder::new(Some(declaration), RootElement::new(element));
    /// ```
    pub fn new(declaration: Option<Declaration<'a>>, element: RootElement<'a>) -> Self {
        Builder {
            declaration,
            element,
        }
    }
}

impl std::fmt::Display for Builder<'_> {
    /// Formats the builder and its content as an XML document string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(declaration) = &self.declaration {
            write!(f, "{declaration}")?;
        }
        write!(f, "{}", self.element)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Element;

    #[test]
    fn document_starts_with_declaration() {
        let builder = Builder::new(
            Some(Declaration::new("1.0", "UTF-8")),
            RootElement::new(Element::new("root")),
        );

        assert_eq!(
            builder.to_string(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><root/>"
        );
    }
}
