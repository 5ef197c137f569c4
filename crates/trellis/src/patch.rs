//! Commit an edit sequence to a live render target.

use crate::{
    Error, Result,
    diff::EditOp,
    node::Node,
    path::TreePath,
    target::Target,
};

/// Mount a virtual tree as a fresh live target. Materialization is a full
/// recursive build - there is no prior live counterpart to diff against.
pub fn materialize<T: Target>(node: &Node) -> Result<T> {
    match node {
        Node::Text(t) => Ok(T::create_text(t)),
        Node::Element(e) => {
            let mut live = T::create_element(e.tag(), &e.attrs);
            for (i, child) in e.children.iter().enumerate() {
                live.insert_child(i, materialize(child)?)?;
            }
            Ok(live)
        }
    }
}

/// Apply an edit sequence to a live target, in the order the differ
/// produced it. Returns the same root handle unless the root itself was
/// replaced, in which case the new handle is returned and the old one is
/// dropped.
///
/// A path that does not resolve against the live structure means the caller
/// diffed against a stale baseline. That is a contract violation: it
/// surfaces as [`Error::Desync`] and must not be retried.
pub fn patch<T: Target>(mut root: T, ops: &[EditOp]) -> Result<T> {
    for op in ops {
        match op {
            EditOp::Replace { path, node } => {
                let mounted = materialize::<T>(node)?;
                if path.is_root() {
                    root = mounted;
                } else {
                    // Non-root path, so there is always a last index.
                    let (last, parent) = path.indices().split_last().unwrap();
                    let parent = resolve(&mut root, parent, path)?;
                    parent.remove_child(*last)?;
                    parent.insert_child(*last, mounted)?;
                }
            }
            EditOp::UpdateAttrs {
                path,
                added,
                changed,
                removed,
            } => {
                let live = resolve(&mut root, path.indices(), path)?;
                for (name, value) in added.iter().chain(changed.iter()) {
                    live.set_attr(name, value)?;
                }
                for name in removed {
                    live.remove_attr(name)?;
                }
            }
            EditOp::InsertChild { path, index, node } => {
                let mounted = materialize::<T>(node)?;
                resolve(&mut root, path.indices(), path)?.insert_child(*index, mounted)?;
            }
            EditOp::RemoveChild { path, index } => {
                resolve(&mut root, path.indices(), path)?.remove_child(*index)?;
            }
            EditOp::UpdateText { path, value } => {
                resolve(&mut root, path.indices(), path)?.set_text(value)?;
            }
        }
    }
    Ok(root)
}

/// Walk `indices` down from `root`. `full` is the op's complete path, used
/// for error context.
fn resolve<'a, T: Target>(
    root: &'a mut T,
    indices: &[usize],
    full: &TreePath,
) -> Result<&'a mut T> {
    let mut live = root;
    for &i in indices {
        live = live
            .child_mut(i)
            .ok_or_else(|| Error::Desync(format!("path {full} does not resolve at index {i}")))?;
    }
    Ok(live)
}
