//! Element tree for tolerant markup parsing.
//!
//! Nodes live in an arena ([`Tree`]) and reference each other through
//! [`NodeId`] indices. The parent link is a plain back-reference index, so
//! ownership only ever flows parent → children and dropping the tree frees
//! everything at once.

pub mod attrs;
pub mod error;
pub mod filter;
pub mod node;
pub mod serialize;

pub use crate::attrs::AttrList;
pub use crate::error::DomError;
pub use crate::filter::{find, find_first};
pub use crate::node::{Node, NodeId, Tree};
pub use crate::serialize::{to_compact, to_indented};
