#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://avatars.githubusercontent.com/u/79236386")]
#![doc(html_favicon_url = "https://avatars.githubusercontent.com/u/79236386")]

mod error;
mod html;
mod node;

pub use error::{Error, Result};
pub use html::to_html;
pub use html_parser::{Dom, Element, Node};
pub use node::{HtmlChildren, HtmlNode};

use dioxus_slots::Slots;

/// Parse an HTML document or fragment
pub fn parse(html: &str) -> Result<Dom> {
    let dom = Dom::parse(html)?;
    tracing::debug!(
        nodes = dom.children.len(),
        errors = dom.errors.len(),
        "parsed html"
    );
    for error in &dom.errors {
        tracing::warn!("html parser recovered from: {error}");
    }
    Ok(dom)
}

/// Partition a list of sibling nodes
pub fn partition_nodes(nodes: &[Node]) -> Slots<HtmlNode<'_>> {
    dioxus_slots::partition(HtmlChildren(nodes))
}

/// Partition the top-level nodes of a document
pub fn partition_dom(dom: &Dom) -> Slots<HtmlNode<'_>> {
    partition_nodes(&dom.children)
}

/// Partition the children of an element
pub fn partition_element(element: &Element) -> Slots<HtmlNode<'_>> {
    partition_nodes(&element.children)
}

/// Find the first element with the given id, searching depth-first in document order
pub fn find_element_by_id<'a>(dom: &'a Dom, id: &str) -> Option<&'a Element> {
    find_in(&dom.children, id)
}

fn find_in<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Element> {
    nodes.iter().find_map(|node| match node {
        Node::Element(el) if node::element_id(el) == Some(id) => Some(el),
        Node::Element(el) => find_in(&el.children, id),
        _ => None,
    })
}

/// Partition the children of the element with id `root`, or the whole document if no root is given
pub fn partition_root<'a>(dom: &'a Dom, root: Option<&str>) -> Result<Slots<HtmlNode<'a>>> {
    let Some(id) = root else {
        return Ok(partition_dom(dom));
    };

    let element = find_element_by_id(dom, id).ok_or_else(|| Error::RootNotFound(id.to_string()))?;
    tracing::debug!(root = id, tag = %element.name, "partitioning children of root element");

    Ok(partition_element(element))
}
