//! Write parsed nodes back out as HTML markup.

use html_parser::{Element, ElementVariant, Node};
use std::fmt::Write;

/// Serialize a node and its descendants.
///
/// Attributes are written in a stable order: `id`, then `class`, then the rest sorted by name.
/// Text is written as it was parsed, since html_parser does not decode entities.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Comment(comment) => {
            let _ = write!(out, "<!--{comment}-->");
        }
        Node::Element(el) => write_element(out, el),
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(&el.name);

    if let Some(id) = &el.id {
        write_attribute(out, "id", Some(id));
    }

    if !el.classes.is_empty() {
        write_attribute(out, "class", Some(&el.classes.join(" ")));
    }

    let mut attributes: Vec<_> = el.attributes.iter().collect();
    attributes.sort_by(|a, b| a.0.cmp(b.0));
    for (name, value) in attributes {
        write_attribute(out, name, value.as_deref());
    }

    if matches!(el.variant, ElementVariant::Void) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &el.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", el.name);
}

fn write_attribute(out: &mut String, name: &str, value: Option<&str>) {
    out.push(' ');
    out.push_str(name);
    if let Some(value) = value {
        let _ = write!(out, "=\"{}\"", value.replace('"', "&quot;"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_with_attributes() {
        let node = Node::Element(Element {
            name: "button".to_string(),
            id: Some("save".to_string()),
            classes: vec!["big".to_string(), "primary".to_string()],
            attributes: [
                ("data-slot".to_string(), Some("footer".to_string())),
                ("disabled".to_string(), None),
                ("aria-label".to_string(), Some("say \"hi\"".to_string())),
            ]
            .into_iter()
            .collect(),
            variant: ElementVariant::Normal,
            children: vec![Node::Text("Save".to_string())],
            ..Default::default()
        });

        assert_eq!(
            to_html(&node),
            r#"<button id="save" class="big primary" aria-label="say &quot;hi&quot;" data-slot="footer" disabled>Save</button>"#
        );
    }

    #[test]
    fn void_elements_and_comments() {
        let img = Node::Element(Element {
            name: "img".to_string(),
            variant: ElementVariant::Void,
            ..Default::default()
        });
        assert_eq!(to_html(&img), "<img />");
        assert_eq!(to_html(&Node::Comment(" note ".to_string())), "<!-- note -->");
    }
}
