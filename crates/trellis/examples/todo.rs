//! A minimal todo list driven by the reactive store: every write to the
//! record triggers a render, diff and patch pass over an in-memory target.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use trellis::*;

/// Render the record as a heading plus a todo list.
fn view(record: &Record) -> Element {
    let todos: Vec<Element> = record
        .get("todos")
        .and_then(|v| v.as_array())
        .map(|a| {
            a.iter()
                .map(|v| {
                    el(
                        "li",
                        &[("classList", class_list(&["todo"]))],
                        v.as_str().unwrap_or_default(),
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    wrap(
        "div",
        vec![
            Node::from(wrap("h1", "todos")),
            Node::from(el("ul", &[("id", "todo-list".into())], todos)),
        ],
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut record = Record::new();
    record.insert("todos".into(), json!(["learn reconciliation"]));

    let runtime = Rc::new(RefCell::new(Runtime::<LiveNode>::mount(view, &record)?));

    let inner = runtime.clone();
    let mut store = Store::new(record, move |r: &Record| {
        inner.borrow_mut().update(r).expect("reconciliation failed");
    });

    store.set("todos", json!(["learn reconciliation", "walk the dog"]));
    store.set(
        "todos",
        json!(["learn reconciliation", "walk the dog", "ship it"]),
    );

    let rt = runtime.borrow();
    println!("{}", dump(rt.baseline()));
    println!(
        "live list has {} items",
        rt.target().child(1).map(LiveNode::child_count).unwrap_or(0)
    );
    Ok(())
}
