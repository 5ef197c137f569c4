//! Compute the edit sequence that turns one virtual tree into another.

use std::collections::BTreeSet;

use crate::{
    attr::AttrMap,
    node::Node,
    path::TreePath,
};

/// One unit of a reconciliation diff. Paths address positions in the *old*
/// tree and stay valid when operations are applied in the produced order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Discard the subtree at `path` and mount `node` in its place.
    Replace {
        /// Position of the node being replaced.
        path: TreePath,
        /// The replacement subtree.
        node: Node,
    },
    /// Apply attribute deltas to the element at `path`. The three key sets
    /// are disjoint.
    UpdateAttrs {
        /// Position of the element.
        path: TreePath,
        /// Keys present in new but not old.
        added: AttrMap,
        /// Keys present in both with unequal values, carrying new values.
        changed: AttrMap,
        /// Keys present in old but not new.
        removed: BTreeSet<String>,
    },
    /// Mount `node` as a child of the element at `path`, at `index`.
    InsertChild {
        /// Position of the parent element.
        path: TreePath,
        /// Insertion index.
        index: usize,
        /// The subtree to mount.
        node: Node,
    },
    /// Detach the child at `index` of the element at `path`.
    RemoveChild {
        /// Position of the parent element.
        path: TreePath,
        /// Removal index.
        index: usize,
    },
    /// Set the value of the text node at `path`.
    UpdateText {
        /// Position of the text node.
        path: TreePath,
        /// The new text value.
        value: String,
    },
}

/// Diff `old` against `new`, producing the ordered edit sequence that
/// rewrites a live target materialized from `old` into one matching `new`.
///
/// Per node the output order is: attribute update, then structural child
/// edits (inserts at the tail in ascending index order, removes in
/// descending index order), then recursive edits to common children. The
/// patcher relies on this order to apply everything in one forward pass
/// without path invalidation.
pub fn diff(old: &Node, new: &Node) -> Vec<EditOp> {
    let mut ops = Vec::new();
    diff_node(old, new, &TreePath::root(), &mut ops);
    ops
}

fn diff_node(old: &Node, new: &Node, path: &TreePath, ops: &mut Vec<EditOp>) {
    match (old, new) {
        (Node::Text(a), Node::Text(b)) => {
            // Exact value equality - no coercion.
            if a != b {
                ops.push(EditOp::UpdateText {
                    path: path.clone(),
                    value: b.clone(),
                });
            }
        }
        (Node::Element(a), Node::Element(b)) => {
            if a.tag() != b.tag() {
                // A tag change replaces the whole subtree. No cross-tag
                // reconciliation is attempted.
                ops.push(EditOp::Replace {
                    path: path.clone(),
                    node: new.clone(),
                });
                return;
            }

            diff_attrs(&a.attrs, &b.attrs, path, ops);

            let old_len = a.children.len();
            let new_len = b.children.len();
            if new_len > old_len {
                for i in old_len..new_len {
                    ops.push(EditOp::InsertChild {
                        path: path.clone(),
                        index: i,
                        node: b.children[i].clone(),
                    });
                }
            } else {
                // Removing from the end first keeps earlier indices valid.
                for i in (new_len..old_len).rev() {
                    ops.push(EditOp::RemoveChild {
                        path: path.clone(),
                        index: i,
                    });
                }
            }

            for i in 0..old_len.min(new_len) {
                diff_node(&a.children[i], &b.children[i], &path.child(i), ops);
            }
        }
        // Kind mismatch: text where an element was, or the reverse.
        _ => {
            ops.push(EditOp::Replace {
                path: path.clone(),
                node: new.clone(),
            });
        }
    }
}

fn diff_attrs(old: &AttrMap, new: &AttrMap, path: &TreePath, ops: &mut Vec<EditOp>) {
    let mut added = AttrMap::new();
    let mut changed = AttrMap::new();
    let mut removed = BTreeSet::new();

    for (k, v) in new {
        match old.get(k) {
            None => {
                added.insert(k.clone(), v.clone());
            }
            Some(prev) if prev != v => {
                changed.insert(k.clone(), v.clone());
            }
            Some(_) => {}
        }
    }
    for k in old.keys() {
        if !new.contains_key(k) {
            removed.insert(k.clone());
        }
    }

    if !(added.is_empty() && changed.is_empty() && removed.is_empty()) {
        ops.push(EditOp::UpdateAttrs {
            path: path.clone(),
            added,
            changed,
            removed,
        });
    }
}
