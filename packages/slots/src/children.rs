//! Child trees and the flattening contract the partitioner consumes.
//!
//! UI frameworks hand their children around as loosely nested structures: lists produced by
//! iterators, fragments returned from other components, and the holes left behind by conditional
//! rendering (`None`, `false`, empty placeholders). The partitioner never walks those structures
//! itself. Instead it asks a [`Flatten`] implementation to visit each position in document order.

/// A possibly nested list of children, as produced by a host framework.
#[derive(Clone, Debug, PartialEq)]
pub enum Children<N> {
    /// A single child node
    Node(N),

    /// A list of children rendered in place, like a fragment or the output of an iterator
    Fragment(Vec<Children<N>>),

    /// A position that renders nothing, like a `None` from an `if` without an `else`
    Hole,
}

impl<N> Children<N> {
    /// Children that contain no nodes at all
    pub fn empty() -> Self {
        Children::Fragment(Vec::new())
    }

    /// Wrap an optional node, turning `None` into a [`Children::Hole`]
    pub fn maybe(node: Option<N>) -> Self {
        match node {
            Some(node) => Children::Node(node),
            None => Children::Hole,
        }
    }

    /// Add a child to the end of this list.
    ///
    /// A lone node or hole is promoted to a fragment first so the existing child keeps its position.
    pub fn push(&mut self, child: impl Into<Children<N>>) {
        if !matches!(self, Children::Fragment(_)) {
            let previous = std::mem::replace(self, Children::empty());
            if let Children::Fragment(list) = self {
                list.push(previous);
            }
        }

        if let Children::Fragment(list) = self {
            list.push(child.into());
        }
    }

    /// Collect every present node in document order, dropping holes
    pub fn flatten_to_vec(self) -> Vec<N> {
        let mut out = Vec::new();
        self.flatten(&mut |child| out.extend(child));
        out
    }
}

impl<N> Default for Children<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<N> From<N> for Children<N> {
    fn from(node: N) -> Self {
        Children::Node(node)
    }
}

impl<N> FromIterator<Children<N>> for Children<N> {
    fn from_iter<I: IntoIterator<Item = Children<N>>>(iter: I) -> Self {
        Children::Fragment(iter.into_iter().collect())
    }
}

impl<N> FromIterator<Option<N>> for Children<N> {
    fn from_iter<I: IntoIterator<Item = Option<N>>>(iter: I) -> Self {
        Children::Fragment(iter.into_iter().map(Children::maybe).collect())
    }
}

/// Resolve a child structure into a single ordered sequence.
///
/// Implementations must visit nested groupings in document order and report every hole as `None`.
/// Hosts with their own child representation implement this for it, or pass a plain function to
/// [`crate::partition_with`].
pub trait Flatten<N> {
    /// Visit every position of this structure in document order
    fn flatten(self, visit: &mut dyn FnMut(Option<N>));
}

impl<N> Flatten<N> for Children<N> {
    fn flatten(self, visit: &mut dyn FnMut(Option<N>)) {
        match self {
            Children::Node(node) => visit(Some(node)),
            Children::Hole => visit(None),
            Children::Fragment(children) => {
                for child in children {
                    child.flatten(visit);
                }
            }
        }
    }
}

impl<'a, N> Flatten<&'a N> for &'a Children<N> {
    fn flatten(self, visit: &mut dyn FnMut(Option<&'a N>)) {
        match self {
            Children::Node(node) => visit(Some(node)),
            Children::Hole => visit(None),
            Children::Fragment(children) => {
                for child in children {
                    child.flatten(visit);
                }
            }
        }
    }
}

impl<N> Flatten<N> for Vec<Children<N>> {
    fn flatten(self, visit: &mut dyn FnMut(Option<N>)) {
        for child in self {
            child.flatten(visit);
        }
    }
}

/// A sequence the host has already flattened, with holes as `None`
///
/// ```rust
/// use dioxus_slots::{partition, Flat};
///
/// let slots = partition::<&str>(Flat(vec![None, Some("a"), Some("b")]));
/// assert_eq!(slots.orphans(), &["a", "b"]);
/// ```
#[derive(Clone, Debug)]
pub struct Flat<I>(pub I);

impl<N, I> Flatten<N> for Flat<I>
where
    I: IntoIterator<Item = Option<N>>,
{
    fn flatten(self, visit: &mut dyn FnMut(Option<N>)) {
        for child in self.0 {
            visit(child);
        }
    }
}
