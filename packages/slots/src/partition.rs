use crate::{AttributeValue, Flatten, SlotNode};
use rustc_hash::FxHashMap;
use std::fmt::Debug;

/// Nodes grouped by the slot they asked for.
///
/// Only slot names that were actually encountered have an entry. Names are remembered in the order
/// their first node was seen, and nodes keep their traversal order within each slot. The empty
/// string is never a slot name.
#[derive(Clone, PartialEq)]
pub struct SlotMap<N> {
    index: FxHashMap<String, usize>,
    entries: Vec<(String, Vec<N>)>,
}

impl<N> SlotMap<N> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            entries: Vec::new(),
        }
    }

    /// Append a node to the end of a slot, creating the slot if this is its first node.
    ///
    /// Names that could never come out of a marker attribute (the empty string) are rejected and
    /// the node is handed back.
    pub fn push(&mut self, name: &str, node: N) -> Result<(), N> {
        match AttributeValue::Text(name).as_slot_name() {
            Some(name) => {
                self.list_mut(name).push(node);
                Ok(())
            }
            None => Err(node),
        }
    }

    /// The list for a slot, created empty if the slot is new. `name` must already be validated.
    fn list_mut(&mut self, name: &str) -> &mut Vec<N> {
        let idx = match self.index.get(name).copied() {
            Some(idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(name.to_string(), idx);
                self.entries.push((name.to_string(), Vec::new()));
                idx
            }
        };
        &mut self.entries[idx].1
    }

    /// The nodes routed into a slot, if any were
    pub fn get(&self, name: &str) -> Option<&[N]> {
        let idx = *self.index.get(name)?;
        Some(self.entries[idx].1.as_slice())
    }

    /// Check if any node was routed into a slot
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Remove a slot and hand back its nodes
    pub fn remove(&mut self, name: &str) -> Option<Vec<N>> {
        let idx = self.index.remove(name)?;
        let (_, list) = self.entries.remove(idx);

        // later slots shift down by one
        for other in self.index.values_mut() {
            if *other > idx {
                *other -= 1;
            }
        }

        Some(list)
    }

    /// The number of distinct slots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no slot was filled
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slot names in the order they were first encountered
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over every slot and its nodes, in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[N])> + '_ {
        self.entries
            .iter()
            .map(|(name, list)| (name.as_str(), list.as_slice()))
    }

    /// The total number of nodes across every slot
    pub fn node_count(&self) -> usize {
        self.entries.iter().map(|(_, list)| list.len()).sum()
    }
}

impl<N> Default for SlotMap<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Debug> Debug for SlotMap<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<N> IntoIterator for SlotMap<N> {
    type Item = (String, Vec<N>);
    type IntoIter = std::vec::IntoIter<(String, Vec<N>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serialize")]
impl<N: serde::Serialize> serde::Serialize for SlotMap<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, nodes) in self.iter() {
            map.serialize_entry(name, nodes)?;
        }
        map.end()
    }
}

/// The result of partitioning a list of children.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Slots<N> {
    /// Children that named a slot, grouped by that slot
    pub slots: SlotMap<N>,

    /// Present children without a usable slot name, in traversal order
    pub orphans: Vec<N>,
}

impl<N> Slots<N> {
    /// The nodes in a slot. Slots that were never filled are empty.
    pub fn slot(&self, name: &str) -> &[N] {
        self.slots.get(name).unwrap_or_default()
    }

    /// Take the nodes out of a slot so they can be moved into a render position
    pub fn take_slot(&mut self, name: &str) -> Vec<N> {
        self.slots.remove(name).unwrap_or_default()
    }

    /// Children without a usable slot name
    pub fn orphans(&self) -> &[N] {
        &self.orphans
    }

    /// Take the orphans, leaving an empty list behind
    pub fn take_orphans(&mut self) -> Vec<N> {
        std::mem::take(&mut self.orphans)
    }

    /// The number of nodes across all slots and the orphans
    pub fn node_count(&self) -> usize {
        self.slots.node_count() + self.orphans.len()
    }

    /// Check if there were no present children at all
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty() && self.orphans.is_empty()
    }

    /// Split into the slot map and the orphans
    pub fn into_parts(self) -> (SlotMap<N>, Vec<N>) {
        (self.slots, self.orphans)
    }

    fn route(&mut self, node: N)
    where
        N: SlotNode,
    {
        match node.slot() {
            // slot() only yields names that passed as_slot_name
            Some(name) => {
                tracing::trace!(slot = name, "routing child into slot");
                self.slots.list_mut(name).push(node);
            }
            None => {
                tracing::trace!("child has no slot, keeping it as an orphan");
                self.orphans.push(node);
            }
        }
    }
}

impl<N> Default for Slots<N> {
    fn default() -> Self {
        Self {
            slots: SlotMap::default(),
            orphans: Vec::new(),
        }
    }
}

/// Split children into named slots and orphans.
///
/// Every present child that carries a non-empty [`crate::MARKER_ATTRIBUTE`] is appended to that
/// slot. Every other present child becomes an orphan. Holes are dropped. Relative order is kept
/// within each slot and within the orphans.
///
/// ```rust
/// use dioxus_slots::{partition, AttributeValue, Children, SlotNode, MARKER_ATTRIBUTE};
///
/// #[derive(Debug, PartialEq)]
/// struct Div(Option<&'static str>);
///
/// impl SlotNode for Div {
///     fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
///         (name == MARKER_ATTRIBUTE).then_some(AttributeValue::Text(self.0?))
///     }
/// }
///
/// let children = Children::from_iter([
///     None,
///     Some(Div(Some("header"))),
///     Some(Div(None)),
///     Some(Div(Some("header"))),
/// ]);
///
/// let slots = partition(children);
/// assert_eq!(slots.slot("header").len(), 2);
/// assert_eq!(slots.orphans(), &[Div(None)]);
/// ```
pub fn partition<N: SlotNode>(children: impl Flatten<N>) -> Slots<N> {
    partition_with(children, |children, visit| children.flatten(visit))
}

/// Split children into named slots and orphans, using a host-supplied flattening function.
///
/// The function must call `visit` once per position in document order, passing `None` for holes.
pub fn partition_with<C, N, F>(children: C, flatten: F) -> Slots<N>
where
    N: SlotNode,
    F: FnOnce(C, &mut dyn FnMut(Option<N>)),
{
    let mut slots = Slots::default();
    let mut holes = 0_usize;

    flatten(children, &mut |child| match child {
        Some(node) => slots.route(node),
        None => holes += 1,
    });

    tracing::debug!(
        slots = slots.slots.len(),
        orphans = slots.orphans.len(),
        holes,
        "partitioned children"
    );

    slots
}
