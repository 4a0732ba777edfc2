use soapling_xml::builder::{Attribute, Builder, Declaration, Element, Namespace, RootElement};

fn main() {
    // Create an XML declaration
    let declaration = Declaration::new("1.0", "UTF-8");

    // Create an XML element
    let element = Element::new("root")
        .add_attribute(Attribute::new("attr1", "value1"))
        .add_child(
            Element::new("child1")
                .set_namespace(Namespace::new("ns", "http://example.com/ns"))
                .add_child(Element::new("grandchild").set_text("text & more")),
        )
        .add_child(Element::new("child2"));

    // Create a builder with the declaration and element
    let builder = Builder::new(Some(declaration), RootElement::new(element));

    // Print the XML document
    println!("{builder}");
}
