/// Represents the XML declaration at the start of a document.
#[derive(Debug, Clone)]
pub struct Declaration<'a> {
    version: &'a str,
    encoding: &'a str,
    standalone: Option<bool>,
}

impl<'a> Declaration<'a> {
    /// Creates a new instance of `Declaration` with the given version and
    /// encoding.
    ///
    /// # Example
    ///
    /// ```
    /// use soapling_xml::builder::Declaration;
    /// let declaration = Declaration::new("1.0", "UTF-8");
    /// ```
    pub fn new(version: &'a str, encoding: &'a str) -> Self {
        Declaration {
            version,
            encoding,
            standalone: None,
        }
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = Some(standalone);
        self
    }
}

impl std::fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<?xml version=\"{}\" encoding=\"{}\"",
            self.version, self.encoding
        )?;
        if let Some(standalone) = self.standalone {
            write!(f, " standalone=\"{}\"", if standalone { "yes" } else { "no" })?;
        }
        write!(f, "?>")
    }
}
