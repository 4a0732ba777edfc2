mod attribute;
mod builder;
mod declaration;
mod element;
mod namespace;

pub use self::attribute::*;
pub use self::builder::*;
pub use self::declaration::*;
pub use self::element::*;
pub use self::namespace::*;

/// Writes `value` with the XML predefined entities escaped. Attribute values
/// additionally escape the double quote, since attributes are always rendered
/// with `"` delimiters.
pub(crate) fn write_escaped(
    f: &mut std::fmt::Formatter<'_>,
    value: &str,
    in_attribute: bool,
) -> std::fmt::Result {
    use std::fmt::Write;

    for ch in value.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' if in_attribute => f.write_str("&quot;")?,
            _ => f.write_char(ch)?,
        }
    }
    Ok(())
}
