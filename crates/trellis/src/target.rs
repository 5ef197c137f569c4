use crate::{Result, attr::{AttrMap, AttrValue}};

/// The contract a host render surface must supply. The patcher drives a
/// live target exclusively through these primitives; everything else in the
/// reconciliation pipeline is internal.
///
/// A target value is a handle to one live node. Handles own their subtrees,
/// mirroring the virtual tree's shape one-to-one by structural position.
pub trait Target: Sized {
    /// Create a detached element node with the given tag and attributes.
    fn create_element(tag: &str, attrs: &AttrMap) -> Self;

    /// Create a detached text node.
    fn create_text(value: &str) -> Self;

    /// Set or overwrite an attribute. Errors if this node is not an element.
    fn set_attr(&mut self, name: &str, value: &AttrValue) -> Result<()>;

    /// Remove an attribute. Errors if this node is not an element.
    fn remove_attr(&mut self, name: &str) -> Result<()>;

    /// Attach `child` at `index`, shifting later children right. Errors if
    /// this node is not an element or the index is past the end.
    fn insert_child(&mut self, index: usize, child: Self) -> Result<()>;

    /// Detach the child at `index`. Errors if this node is not an element
    /// or there is no such child.
    fn remove_child(&mut self, index: usize) -> Result<()>;

    /// Set the value of a text node. Errors if this node is an element.
    fn set_text(&mut self, value: &str) -> Result<()>;

    /// Navigate to the child at `index`, if present.
    fn child_mut(&mut self, index: usize) -> Option<&mut Self>;
}
