use std::collections::BTreeMap;
use std::rc::Rc;

use convert_case::{Case, Casing};

/// Attribute names mapped to values. A `BTreeMap` keeps iteration order
/// deterministic, which in turn keeps diff output deterministic.
pub type AttrMap = BTreeMap<String, AttrValue>;

/// A callback bound to an element through its attribute map.
///
/// Handlers compare by identity: two handlers are equal iff they share the
/// same underlying allocation. A closure re-created on every render pass
/// therefore diffs as changed, while a handler cloned from a shared value
/// compares equal.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn()>);

impl EventHandler {
    /// Wrap a callback.
    pub fn new(f: impl Fn() + 'static) -> Self {
        EventHandler(Rc::new(f))
    }

    /// Invoke the callback.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for EventHandler {}

impl std::fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EventHandler(..)")
    }
}

/// An attribute value: a string, a bare boolean flag, or an event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// A plain string value.
    Text(String),
    /// A boolean flag, e.g. `checked` or `disabled`.
    Flag(bool),
    /// A callback binding.
    Handler(EventHandler),
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Flag(v)
    }
}

impl From<EventHandler> for AttrValue {
    fn from(v: EventHandler) -> Self {
        AttrValue::Handler(v)
    }
}

/// The convenience key that holds a class list at call sites. It is
/// translated to the target's native `class` attribute rather than being
/// passed through as a generic attribute.
const CLASS_LIST_KEYS: [&str; 2] = ["classList", "class_list"];

/// Normalize a call-site attribute key to the render target's naming: the
/// class-list convenience key becomes `class`, everything else is munged
/// from camel-style to dash-separated.
pub fn normalize_key(key: &str) -> String {
    if CLASS_LIST_KEYS.contains(&key) {
        "class".to_string()
    } else {
        key.to_case(Case::Kebab)
    }
}

/// Join class names into a single value for the native `class` attribute.
pub fn class_list<S: AsRef<str>>(names: &[S]) -> AttrValue {
    AttrValue::Text(
        names
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(" "),
    )
}
