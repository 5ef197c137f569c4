//! A reactive record: field writes commit, then notify.

use serde_json::Value;

/// The underlying data record: field names mapped to values.
pub type Record = serde_json::Map<String, Value>;

/// Wraps a [`Record`] so that every field write is observed.
///
/// The change callback is supplied at construction, so a store is live from
/// birth: every write through [`Store::set`] commits the value first, then
/// invokes the callback synchronously with the updated record, then
/// returns. Reads are pass-through. There is no dirty-check - writing a
/// value equal to the current one still notifies - and no batching: N
/// writes produce N notifications.
///
/// Writes issued from inside the change callback are a contract violation
/// and panic. For a directly-owned store the borrow checker already rules
/// them out; the runtime guard covers stores reached through a shared
/// handle.
pub struct Store {
    record: Record,
    on_change: Box<dyn FnMut(&Record)>,
    notifying: bool,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("record", &self.record)
            .field("notifying", &self.notifying)
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Wrap an initial record with a change callback.
    pub fn new(initial: Record, on_change: impl FnMut(&Record) + 'static) -> Self {
        Store {
            record: initial,
            on_change: Box::new(on_change),
            notifying: false,
        }
    }

    /// Read a field. No interception, no side effects.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.record.get(field)
    }

    /// Borrow the whole record.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Write a field - whether or not it existed before - and notify. The
    /// value is committed before the callback runs, so the callback (and
    /// any read racing it on the same call stack) observes the new state.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        assert!(
            !self.notifying,
            "reactive write issued from inside a change notification"
        );
        let field = field.into();
        tracing::trace!("store write: {field}");
        self.record.insert(field, value.into());

        let Self {
            record,
            on_change,
            notifying,
        } = self;
        *notifying = true;
        // Reset the flag even if the callback panics.
        let _reset = scopeguard::guard(notifying, |n| *n = false);
        on_change(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use serde_json::json;

    #[test]
    fn commit_before_notify() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let inner = seen.clone();
        let mut store = Store::new(Record::new(), move |r: &Record| {
            inner.borrow_mut().push(r.get("count").cloned());
        });

        store.set("count", 1);
        store.set("count", 2);
        assert_eq!(
            *seen.borrow(),
            vec![Some(json!(1)), Some(json!(2))]
        );
        assert_eq!(store.get("count"), Some(&json!(2)));
    }

    #[test]
    fn three_writes_three_notifications() {
        let count = Rc::new(RefCell::new(0));
        let inner = count.clone();
        let mut store = Store::new(Record::new(), move |_: &Record| {
            *inner.borrow_mut() += 1;
        });

        store.set("a", "1");
        store.set("b", "2");
        store.set("c", "3");
        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn equal_value_still_notifies() {
        let count = Rc::new(RefCell::new(0));
        let inner = count.clone();
        let mut store = Store::new(Record::new(), move |_: &Record| {
            *inner.borrow_mut() += 1;
        });

        store.set("x", "same");
        store.set("x", "same");
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn reads_do_not_notify() {
        let count = Rc::new(RefCell::new(0));
        let inner = count.clone();
        let mut store = Store::new(Record::new(), move |_: &Record| {
            *inner.borrow_mut() += 1;
        });

        store.set("x", "v");
        let _ = store.get("x");
        let _ = store.record();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn notify_flag_resets_after_callback_panic() {
        let mut store = Store::new(Record::new(), |_: &Record| panic!("boom"));
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            store.set("x", "v");
        }));
        assert!(res.is_err());
        assert!(!store.notifying);
    }
}
