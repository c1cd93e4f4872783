//! Does the partitioner route children into the right slots?

use dioxus_slots::{
    partition, partition_with, AttributeValue, Children, Flat, SlotNode, MARKER_ATTRIBUTE,
};
use pretty_assertions::assert_eq;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum Value {
    Text(&'static str),
    Bool(bool),
    Int(i64),
}

/// A stand-in for an element produced by a host framework
#[derive(Clone, Debug, PartialEq)]
struct El {
    name: &'static str,
    attrs: Vec<(&'static str, Value)>,
}

impl El {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: vec![],
        }
    }

    fn tagged(name: &'static str, slot: &'static str) -> Self {
        Self::new(name).attr(MARKER_ATTRIBUTE, Value::Text(slot))
    }

    fn attr(mut self, key: &'static str, value: Value) -> Self {
        self.attrs.push((key, value));
        self
    }
}

impl SlotNode for El {
    fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
        let (_, value) = self.attrs.iter().find(|(key, _)| *key == name)?;
        Some(match value {
            Value::Text(text) => AttributeValue::Text(text),
            Value::Bool(b) => AttributeValue::Bool(*b),
            Value::Int(i) => AttributeValue::Int(*i),
        })
    }
}

fn names(nodes: &[El]) -> Vec<&'static str> {
    nodes.iter().map(|node| node.name).collect()
}

#[test]
fn header_and_footer() {
    let children = Children::from_iter([
        None,
        Some(El::tagged("a", "header")),
        Some(El::new("b")),
        Some(El::tagged("c", "header")),
        Some(El::tagged("d", "footer")),
    ]);

    let slots = partition(children);

    assert_eq!(slots.slots.len(), 2);
    assert_eq!(names(slots.slot("header")), ["a", "c"]);
    assert_eq!(names(slots.slot("footer")), ["d"]);
    assert_eq!(names(slots.orphans()), ["b"]);
    assert_eq!(slots.slots.names().collect::<Vec<_>>(), ["header", "footer"]);
}

#[test]
fn untagged_children_are_all_orphans() {
    let children: Children<El> = ["a", "b", "c"]
        .into_iter()
        .map(|name| Children::Node(El::new(name)))
        .collect();

    let slots = partition(children);

    assert!(slots.slots.is_empty());
    assert_eq!(names(slots.orphans()), ["a", "b", "c"]);
}

#[test]
fn no_children() {
    let slots = partition(Children::<El>::empty());

    assert!(slots.slots.is_empty());
    assert!(slots.orphans().is_empty());
    assert!(slots.is_empty());
    assert_eq!(slots.node_count(), 0);
}

#[test]
fn nested_fragments_are_flattened_first() {
    let children = Children::Fragment(vec![
        El::tagged("outer", "x").into(),
        Children::Fragment(vec![
            Children::Hole,
            El::new("plain").into(),
            Children::Fragment(vec![El::tagged("inner", "x").into()]),
        ]),
    ]);

    let slots = partition(children);

    assert_eq!(names(slots.slot("x")), ["outer", "inner"]);
    assert_eq!(names(slots.orphans()), ["plain"]);
}

#[test]
fn falsy_markers_are_orphans() {
    let children = Children::from_iter([
        Some(El::tagged("empty", "")),
        Some(El::new("false").attr(MARKER_ATTRIBUTE, Value::Bool(false))),
        Some(El::new("zero").attr(MARKER_ATTRIBUTE, Value::Int(0))),
        Some(El::new("true").attr(MARKER_ATTRIBUTE, Value::Bool(true))),
    ]);

    let slots = partition(children);

    assert!(slots.slots.is_empty());
    assert!(!slots.slots.contains(""));
    assert_eq!(names(slots.orphans()), ["empty", "false", "zero", "true"]);
}

#[test]
fn other_attributes_are_ignored() {
    let children = Children::from_iter([
        Some(El::new("a").attr("data-role", Value::Text("header"))),
        Some(El::tagged("b", "header").attr("class", Value::Text("big"))),
    ]);

    let slots = partition(children);

    assert_eq!(names(slots.slot("header")), ["b"]);
    assert_eq!(names(slots.orphans()), ["a"]);
}

#[test]
fn missing_slots_read_as_empty() {
    let slots = partition(Children::from(El::tagged("a", "header")));

    assert!(slots.slot("footer").is_empty());
    assert_eq!(slots.slots.get("footer"), None);
}

#[test]
fn taking_slots_leaves_the_rest() {
    let mut slots = partition(Children::from_iter([
        Some(El::tagged("a", "header")),
        Some(El::tagged("b", "body")),
        Some(El::new("c")),
    ]));

    assert_eq!(names(&slots.take_slot("header")), ["a"]);
    assert!(slots.take_slot("header").is_empty());
    assert_eq!(slots.slots.names().collect::<Vec<_>>(), ["body"]);

    assert_eq!(names(&slots.take_orphans()), ["c"]);
    assert!(slots.orphans().is_empty());
    assert_eq!(slots.node_count(), 1);
}

#[test]
fn shared_handles_are_not_copied() {
    let header = Rc::new(El::tagged("a", "header"));
    let body = Rc::new(El::new("b"));

    let slots = partition(Flat([Some(header.clone()), None, Some(body.clone())]));

    assert!(Rc::ptr_eq(&slots.slot("header")[0], &header));
    assert!(Rc::ptr_eq(&slots.orphans()[0], &body));
    assert_eq!(Rc::strong_count(&header), 2);
}

#[test]
fn borrowed_children_partition_in_place() {
    let children = Children::from_iter([Some(El::tagged("a", "main")), None, Some(El::new("b"))]);

    let slots = partition(&children);

    assert_eq!(slots.slot("main"), [&El::tagged("a", "main")]);
    assert_eq!(slots.orphans(), [&El::new("b")]);

    // the input is untouched and can be partitioned again
    assert_eq!(partition(&children), slots);
}

#[test]
fn host_supplied_flattening() {
    // a host that stores children as rows of optional nodes
    let rows = vec![
        vec![Some(El::tagged("a", "left")), None],
        vec![Some(El::new("b")), Some(El::tagged("c", "left"))],
    ];

    let slots = partition_with(rows, |rows, visit| {
        for row in rows {
            for child in row {
                visit(child);
            }
        }
    });

    assert_eq!(names(slots.slot("left")), ["a", "c"]);
    assert_eq!(names(slots.orphans()), ["b"]);
}

#[test]
fn bare_text_is_an_orphan() {
    let slots = partition(Flat([Some("hello"), None, Some("world")]));

    assert!(slots.slots.is_empty());
    assert_eq!(slots.orphans(), ["hello", "world"]);
}

#[test]
fn owned_iteration_keeps_first_encounter_order() {
    let slots = partition(Children::from_iter([
        Some(El::tagged("a", "footer")),
        Some(El::tagged("b", "header")),
        Some(El::tagged("c", "footer")),
    ]));

    let (map, orphans) = slots.into_parts();
    let groups: Vec<(String, Vec<&'static str>)> = map
        .into_iter()
        .map(|(name, nodes)| (name, names(&nodes)))
        .collect();

    assert!(orphans.is_empty());
    assert_eq!(
        groups,
        vec![
            ("footer".to_string(), vec!["a", "c"]),
            ("header".to_string(), vec!["b"]),
        ]
    );
}

#[cfg(feature = "serialize")]
#[test]
fn serializes_in_first_encounter_order() {
    let slots = partition(Flat([Some("text")]));
    assert_eq!(
        serde_json::to_string(&slots).unwrap(),
        r#"{"slots":{},"orphans":["text"]}"#
    );
}
