#![doc = include_str!("../README.md")]
#![doc(html_logo_url = "https://avatars.githubusercontent.com/u/79236386")]
#![doc(html_favicon_url = "https://avatars.githubusercontent.com/u/79236386")]
#![warn(missing_docs)]

mod attribute;
mod children;
mod partition;

pub use attribute::{AttributeValue, SlotNode, MARKER_ATTRIBUTE};
pub use children::{Children, Flat, Flatten};
pub use partition::{partition, partition_with, SlotMap, Slots};
