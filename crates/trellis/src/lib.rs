//! Core types and operations for the Trellis virtual-tree reconciliation
//! library: a virtual node model with an ergonomic builder, a differ that
//! computes minimal ordered edit sequences, a patcher that commits them to
//! a live render target, and a reactive store that triggers the render loop
//! on every field write.

// Core modules
pub mod attr;
pub mod backend;
mod build;
pub mod diff;
pub mod dump;
pub mod error;
mod node;
mod patch;
pub mod path;
mod runtime;
mod store;
mod target;

// Public exports
pub use attr::{AttrMap, AttrValue, EventHandler, class_list};
pub use backend::mem::LiveNode;
pub use build::{Children, el, text, wrap};
pub use diff::{EditOp, diff};
pub use dump::dump;
pub use error::{Error, Result};
pub use node::{Element, Node};
pub use patch::{materialize, patch};
pub use path::TreePath;
pub use runtime::Runtime;
pub use store::{Record, Store};
pub use target::Target;
