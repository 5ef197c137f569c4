//! An in-memory render target.
//!
//! `LiveNode` mirrors the virtual tree's shape and implements the full
//! [`Target`] contract. It backs the test suite and benches, and serves as
//! the live surface for hosts that have no platform tree of their own.

use crate::{
    Error, Result,
    attr::{AttrMap, AttrValue},
    target::Target,
};

/// One node of an in-memory live tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiveNode {
    /// A live element with its committed attributes and children.
    Element {
        /// The element's tag.
        tag: String,
        /// Committed attributes.
        attrs: AttrMap,
        /// Attached children, in order.
        children: Vec<LiveNode>,
    },
    /// A live text node.
    Text(String),
}

impl LiveNode {
    /// The tag, if this is an element.
    pub fn tag(&self) -> Option<&str> {
        match self {
            LiveNode::Element { tag, .. } => Some(tag),
            LiveNode::Text(_) => None,
        }
    }

    /// The text value, if this is a text node.
    pub fn text(&self) -> Option<&str> {
        match self {
            LiveNode::Element { .. } => None,
            LiveNode::Text(t) => Some(t),
        }
    }

    /// A committed attribute value, if this is an element holding one.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        match self {
            LiveNode::Element { attrs, .. } => attrs.get(name),
            LiveNode::Text(_) => None,
        }
    }

    /// Number of attached children. Zero for text nodes.
    pub fn child_count(&self) -> usize {
        match self {
            LiveNode::Element { children, .. } => children.len(),
            LiveNode::Text(_) => 0,
        }
    }

    /// Borrow the child at `index`.
    pub fn child(&self, index: usize) -> Option<&LiveNode> {
        match self {
            LiveNode::Element { children, .. } => children.get(index),
            LiveNode::Text(_) => None,
        }
    }

    fn element_parts(&mut self, op: &str) -> Result<(&mut AttrMap, &mut Vec<LiveNode>)> {
        match self {
            LiveNode::Element {
                attrs, children, ..
            } => Ok((attrs, children)),
            LiveNode::Text(_) => Err(Error::Desync(format!("{op} on a text node"))),
        }
    }
}

impl Target for LiveNode {
    fn create_element(tag: &str, attrs: &AttrMap) -> Self {
        LiveNode::Element {
            tag: tag.to_string(),
            attrs: attrs.clone(),
            children: Vec::new(),
        }
    }

    fn create_text(value: &str) -> Self {
        LiveNode::Text(value.to_string())
    }

    fn set_attr(&mut self, name: &str, value: &AttrValue) -> Result<()> {
        let (attrs, _) = self.element_parts("set_attr")?;
        attrs.insert(name.to_string(), value.clone());
        Ok(())
    }

    fn remove_attr(&mut self, name: &str) -> Result<()> {
        let (attrs, _) = self.element_parts("remove_attr")?;
        attrs.remove(name);
        Ok(())
    }

    fn insert_child(&mut self, index: usize, child: Self) -> Result<()> {
        let (_, children) = self.element_parts("insert_child")?;
        if index > children.len() {
            return Err(Error::Desync(format!(
                "insert at {} past end of {} children",
                index,
                children.len()
            )));
        }
        children.insert(index, child);
        Ok(())
    }

    fn remove_child(&mut self, index: usize) -> Result<()> {
        let (_, children) = self.element_parts("remove_child")?;
        if index >= children.len() {
            return Err(Error::Desync(format!(
                "remove at {} with {} children",
                index,
                children.len()
            )));
        }
        children.remove(index);
        Ok(())
    }

    fn set_text(&mut self, value: &str) -> Result<()> {
        match self {
            LiveNode::Element { .. } => {
                Err(Error::Desync("set_text on an element".to_string()))
            }
            LiveNode::Text(t) => {
                *t = value.to_string();
                Ok(())
            }
        }
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut Self> {
        match self {
            LiveNode::Element { children, .. } => children.get_mut(index),
            LiveNode::Text(_) => None,
        }
    }
}
