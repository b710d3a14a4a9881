#![forbid(unsafe_code)]

//! Interactive state for the datatree widget family.
//!
//! [`tree::DataTree`] owns a normalized forest and answers expand/collapse,
//! selection, and lookup operations; everything a renderer needs is the pure
//! projection returned by [`tree::DataTree::visible_rows`]. Outward
//! notifications queue as [`event::TreeEvent`]s for the host to drain.
//! [`card::RecordListCard`] is the peer tabular card widget.

pub mod card;
pub mod event;
pub mod selection;
pub mod tree;

pub use card::{CardAction, Column, RecordListCard};
pub use event::{CardEvent, ClickedNode, SelectionUpdate, TreeEvent};
pub use selection::Selection;
pub use tree::{Chevron, DataTree, TreeRow};
