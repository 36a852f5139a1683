//! Document tree model.
//!
//! The tree is produced by a wiki markup parser and consumed read-only by
//! the exporter. Node kinds form a closed vocabulary with typed attribute
//! payloads, so dispatch over them is exhaustive and an unrecognized tag
//! is a compile error rather than a runtime surprise.

mod node;

pub use node::{Bullet, Element, Kind, ListStart};
