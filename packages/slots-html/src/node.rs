use dioxus_slots::{AttributeValue, Flatten, SlotNode};
use html_parser::{Element, Node};
use std::{fmt::Display, ops::Deref};

/// A borrowed HTML node that can be routed into a slot.
///
/// Elements expose their attribute map. A valueless attribute like `<div data-slot>` reads as
/// [`AttributeValue::None`]. Text and comments have no attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub struct HtmlNode<'a>(pub &'a Node);

impl<'a> HtmlNode<'a> {
    /// The underlying parsed node
    pub fn node(&self) -> &'a Node {
        self.0
    }

    /// Serialize the node back to HTML markup
    pub fn to_html(&self) -> String {
        crate::to_html(self.0)
    }

    /// The node as an element, if it is one
    pub fn element(&self) -> Option<&'a Element> {
        match self.0 {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl Deref for HtmlNode<'_> {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl SlotNode for HtmlNode<'_> {
    fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
        let el = self.element()?;

        // html_parser lifts a lowercase id out of the attribute map
        if name.eq_ignore_ascii_case("id") {
            if let Some(id) = el.id.as_deref() {
                return Some(AttributeValue::Text(id));
            }
        }

        match find_attribute(el, name)? {
            Some(value) => Some(AttributeValue::Text(value)),
            None => Some(AttributeValue::None),
        }
    }
}

/// HTML attribute names are case-insensitive, but html_parser keeps them as written
fn find_attribute<'a>(el: &'a Element, name: &str) -> Option<Option<&'a str>> {
    el.attributes
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_deref())
}

/// The id of an element, wherever html_parser put it
pub(crate) fn element_id(el: &Element) -> Option<&str> {
    el.id.as_deref().or_else(|| find_attribute(el, "id").flatten())
}

impl serde::Serialize for HtmlNode<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

/// A short, single-line label for the node: `<h1#title>`, `"some text"`, or `<!---->`
impl Display for HtmlNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Node::Element(el) => match &el.id {
                Some(id) => write!(f, "<{}#{}>", el.name, id),
                None => write!(f, "<{}>", el.name),
            },
            Node::Text(text) => {
                let text = text.trim();
                match text.char_indices().nth(24) {
                    Some((end, _)) => write!(f, "{:?}", format!("{}...", &text[..end])),
                    None => write!(f, "{text:?}"),
                }
            }
            Node::Comment(_) => write!(f, "<!---->"),
        }
    }
}

/// The children of a parsed element or document, flattened the way they render.
///
/// Comments and whitespace-only text render nothing, so they are reported as holes.
#[derive(Clone, Copy, Debug)]
pub struct HtmlChildren<'a>(pub &'a [Node]);

impl<'a> Flatten<HtmlNode<'a>> for HtmlChildren<'a> {
    fn flatten(self, visit: &mut dyn FnMut(Option<HtmlNode<'a>>)) {
        for node in self.0 {
            match node {
                Node::Comment(_) => visit(None),
                Node::Text(text) if text.trim().is_empty() => visit(None),
                _ => visit(Some(HtmlNode(node))),
            }
        }
    }
}
