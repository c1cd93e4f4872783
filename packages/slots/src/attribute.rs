use std::{fmt::Formatter, rc::Rc, sync::Arc};

/// The attribute a child sets to pick the slot it renders into.
///
/// ```rust, ignore
/// rsx! {
///     Card {
///         h1 { "data-slot": "header", "Title" }
///         p { "Body text lands in the orphans" }
///     }
/// }
/// ```
pub const MARKER_ATTRIBUTE: &str = "data-slot";

/// Possible values for an attribute, as seen by the partitioner
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum AttributeValue<'a> {
    Text(&'a str),
    Float(f64),
    Int(i64),
    Bool(bool),

    /// The attribute is present but carries no value, like `<div data-slot>`
    None,
}

impl<'a> AttributeValue<'a> {
    /// Get the text of this value, if it is text
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret this value as a slot name.
    ///
    /// Only non-empty text names a slot. Empty text, booleans, numbers (including `0`) and
    /// valueless attributes all read as "no slot", so the node falls through to the orphans.
    pub fn as_slot_name(&self) -> Option<&'a str> {
        self.as_text().filter(|name| !name.is_empty())
    }
}

impl std::fmt::Display for AttributeValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Text(a) => write!(f, "{a}"),
            AttributeValue::Float(a) => write!(f, "{a}"),
            AttributeValue::Int(a) => write!(f, "{a}"),
            AttributeValue::Bool(a) => write!(f, "{a}"),
            AttributeValue::None => Ok(()),
        }
    }
}

impl<'a> From<&'a str> for AttributeValue<'a> {
    fn from(value: &'a str) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<bool> for AttributeValue<'_> {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue<'_> {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<f64> for AttributeValue<'_> {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

/// Anything that can be handed to the partitioner as a child.
///
/// The only capability the partitioner needs is an optional look into the node's attribute map.
/// Node types without attributes (text, comments, component placeholders) can rely on the default
/// implementation, which reports no attributes at all.
pub trait SlotNode {
    /// Look up a single attribute by name
    fn attribute(&self, _name: &str) -> Option<AttributeValue<'_>> {
        None
    }

    /// The slot this node asked for, if it carries a usable [`MARKER_ATTRIBUTE`]
    fn slot(&self) -> Option<&str> {
        self.attribute(MARKER_ATTRIBUTE)?.as_slot_name()
    }
}

// Bare text never carries attributes
impl SlotNode for str {}

impl SlotNode for String {}

impl<T: SlotNode + ?Sized> SlotNode for &T {
    fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
        (**self).attribute(name)
    }
}

impl<T: SlotNode + ?Sized> SlotNode for Box<T> {
    fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
        (**self).attribute(name)
    }
}

impl<T: SlotNode + ?Sized> SlotNode for Rc<T> {
    fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
        (**self).attribute(name)
    }
}

impl<T: SlotNode + ?Sized> SlotNode for Arc<T> {
    fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
        (**self).attribute(name)
    }
}
