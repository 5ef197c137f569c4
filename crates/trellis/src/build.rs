//! Ergonomic construction of virtual trees.
//!
//! `el` is the general form: tag, attributes, children. `wrap` is the
//! attribute-less form. Children coerce freely: a single node, a raw
//! string, or a bare element all become a one-element child list, and raw
//! strings anywhere in a child list become text nodes.

use crate::{
    attr::{AttrMap, AttrValue, normalize_key},
    node::{Element, Node},
};

/// An ordered child list, built by coercion from anything child-shaped.
#[derive(Debug, Clone, Default)]
pub struct Children(Vec<Node>);

impl Children {
    /// Consume the wrapper, yielding the child nodes.
    pub fn into_nodes(self) -> Vec<Node> {
        self.0
    }
}

impl From<Vec<Node>> for Children {
    fn from(v: Vec<Node>) -> Self {
        Children(v)
    }
}

impl From<Vec<Element>> for Children {
    fn from(v: Vec<Element>) -> Self {
        Children(v.into_iter().map(Node::Element).collect())
    }
}

impl From<Node> for Children {
    fn from(n: Node) -> Self {
        Children(vec![n])
    }
}

impl From<Element> for Children {
    fn from(e: Element) -> Self {
        Children(vec![Node::Element(e)])
    }
}

impl From<Vec<&str>> for Children {
    fn from(v: Vec<&str>) -> Self {
        Children(v.into_iter().map(Node::from).collect())
    }
}

impl From<&str> for Children {
    fn from(t: &str) -> Self {
        Children(vec![Node::from(t)])
    }
}

impl From<String> for Children {
    fn from(t: String) -> Self {
        Children(vec![Node::from(t)])
    }
}

impl From<()> for Children {
    fn from(_: ()) -> Self {
        Children(vec![])
    }
}

/// Build an element from a tag, an attribute list, and children.
///
/// Attribute keys are normalized to the render target's naming (camel-style
/// becomes dash-separated, the class-list convenience key becomes `class`).
/// Pure: no render target is touched, and tag validity is not checked here.
pub fn el(tag: &str, attrs: &[(&str, AttrValue)], children: impl Into<Children>) -> Element {
    let mut map = AttrMap::new();
    for (k, v) in attrs {
        map.insert(normalize_key(k), v.clone());
    }
    Element::new(tag, map, children.into().into_nodes())
}

/// Build an element with no attributes - the single-trailing-argument form.
pub fn wrap(tag: &str, children: impl Into<Children>) -> Element {
    el(tag, &[], children)
}

/// Build a text node.
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::class_list;

    #[test]
    fn single_child_coercion() {
        let e = wrap("p", "hello");
        assert_eq!(e.children, vec![Node::Text("hello".into())]);

        let e = wrap("div", wrap("p", ()));
        assert_eq!(e.children.len(), 1);
        assert_eq!(e.children[0].as_element().unwrap().tag(), "p");
    }

    #[test]
    fn string_children_become_text() {
        let e = wrap("ul", vec![text("a"), text("b")]);
        assert_eq!(e.children, vec![Node::from("a"), Node::from("b")]);

        let e = wrap("ul", vec!["a", "b"]);
        assert_eq!(e.children, vec![Node::from("a"), Node::from("b")]);
    }

    #[test]
    fn empty_children() {
        let e = el("br", &[], ());
        assert!(e.children.is_empty());
    }

    #[test]
    fn attr_normalization_through_builder() {
        let e = el(
            "input",
            &[
                ("dataValue", "x".into()),
                ("checked", true.into()),
                ("classList", class_list(&["todo", "done"])),
            ],
            (),
        );
        assert_eq!(e.attrs.get("data-value"), Some(&AttrValue::from("x")));
        assert_eq!(e.attrs.get("checked"), Some(&AttrValue::Flag(true)));
        // The class list lands on the native class attribute.
        assert_eq!(e.attrs.get("class"), Some(&AttrValue::from("todo done")));
        assert!(!e.attrs.contains_key("classList"));
    }

    #[test]
    fn element_list_children() {
        let e = wrap("ul", vec![wrap("li", "a"), wrap("li", "b")]);
        assert_eq!(e.children.len(), 2);
    }
}
