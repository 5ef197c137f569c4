//! The render loop context: baseline tree, live target, view function.

use crate::{
    Result,
    diff::diff,
    node::{Element, Node},
    patch::{materialize, patch},
    store::Record,
    target::Target,
};

/// Owns one reconciliation pipeline: the application's view function, the
/// baseline virtual tree from the previous pass, and the live render
/// target. All state is instance state with the runtime's lifetime - there
/// are no process-wide globals.
///
/// The expected wiring is for a [`Store`](crate::Store) change callback to
/// call [`Runtime::update`] with the current record.
pub struct Runtime<T: Target> {
    view: Box<dyn FnMut(&Record) -> Element>,
    baseline: Node,
    // Never None between public calls; `update` takes the root out while
    // patching and always puts it back before returning Ok.
    root: Option<T>,
}

impl<T: Target> Runtime<T> {
    /// Render the initial record, materialize the live target, and store
    /// the result as the baseline.
    pub fn mount(
        mut view: impl FnMut(&Record) -> Element + 'static,
        record: &Record,
    ) -> Result<Self> {
        let baseline = Node::Element(view(record));
        let root = materialize(&baseline)?;
        Ok(Runtime {
            view: Box::new(view),
            baseline,
            root: Some(root),
        })
    }

    /// Run one reconciliation pass: render the record into a new virtual
    /// tree, diff it against the baseline, commit the edits to the live
    /// target, and adopt the new tree as the baseline.
    ///
    /// An error here means the live target desynchronized from the
    /// baseline - a caller bug, not a recoverable condition. The runtime is
    /// unusable afterwards.
    pub fn update(&mut self, record: &Record) -> Result<()> {
        let next = Node::Element((self.view)(record));
        let ops = diff(&self.baseline, &next);
        tracing::debug!("reconcile: {} ops", ops.len());
        if !ops.is_empty() {
            let root = self.root.take().unwrap();
            self.root = Some(patch(root, &ops)?);
        }
        self.baseline = next;
        Ok(())
    }

    /// The baseline virtual tree from the last completed pass.
    pub fn baseline(&self) -> &Node {
        &self.baseline
    }

    /// The live render target.
    pub fn target(&self) -> &T {
        // See the field invariant on `root`.
        self.root.as_ref().unwrap()
    }

    /// Consume the runtime, yielding the live target.
    pub fn into_target(self) -> T {
        self.root.unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{backend::mem::LiveNode, build::wrap};
    use serde_json::json;

    fn items_view(record: &Record) -> Element {
        let items: Vec<Element> = record
            .get("items")
            .and_then(|v| v.as_array())
            .map(|a| {
                a.iter()
                    .map(|v| wrap("li", v.as_str().unwrap_or_default()))
                    .collect()
            })
            .unwrap_or_default();
        wrap("ul", items)
    }

    #[test]
    fn mount_then_update() -> Result<()> {
        let mut record = Record::new();
        record.insert("items".into(), json!(["a", "b"]));

        let mut rt: Runtime<LiveNode> = Runtime::mount(items_view, &record)?;
        assert_eq!(rt.target().child_count(), 2);

        record.insert("items".into(), json!(["a", "b", "c"]));
        rt.update(&record)?;
        assert_eq!(rt.target().child_count(), 3);
        assert_eq!(
            rt.target().child(2).unwrap().child(0).unwrap().text(),
            Some("c")
        );
        Ok(())
    }

    #[test]
    fn noop_update_leaves_target_unchanged() -> Result<()> {
        let mut record = Record::new();
        record.insert("items".into(), json!(["a"]));

        let mut rt: Runtime<LiveNode> = Runtime::mount(items_view, &record)?;
        let before = rt.target().clone();
        rt.update(&record)?;
        assert_eq!(rt.target(), &before);
        Ok(())
    }
}
