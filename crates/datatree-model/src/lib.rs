#![forbid(unsafe_code)]

//! Data model and normalizer for the datatree widget family.
//!
//! Hosts supply caller-owned [`NodeData`] trees; the normalizer deep-clones
//! them into [`TreeNode`] trees annotated with the rendering metadata the
//! controller projects from (indentation class, expand-button class, explicit
//! per-node expanded state, lazy-load and URL flags).

pub mod data;
pub mod margin;
pub mod node;

pub use data::{NodeData, TypeAttributes};
pub use node::{TreeNode, derive_metadata};
