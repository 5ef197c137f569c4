use std::io::Write;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{attr::AttrValue, node::Node};

/// Traverses a virtual tree and returns a string showing the tag, attributes
/// and text of each node for visual display. This is a debug function.
pub fn dump(root: &Node) -> String {
    let mut buffer = Buffer::ansi();
    dump_node(&mut buffer, root, 0);
    String::from_utf8_lossy(buffer.as_slice()).into_owned()
}

/// Helper to write an indented, colored attribute name followed by a value
fn write_attr(buffer: &mut Buffer, indent: &str, name: &str, value: &AttrValue) {
    write!(buffer, "{indent}  ").unwrap();
    buffer
        .set_color(ColorSpec::new().set_fg(Some(Color::Green)))
        .unwrap();
    write!(buffer, "{name}").unwrap();
    buffer.reset().unwrap();
    let shown = match value {
        AttrValue::Text(t) => format!("{t:?}"),
        AttrValue::Flag(b) => b.to_string(),
        AttrValue::Handler(_) => "<handler>".to_string(),
    };
    writeln!(buffer, " {shown}").unwrap();
}

fn dump_node(buffer: &mut Buffer, node: &Node, level: usize) {
    let indent = "    ".repeat(level);
    write!(buffer, "{indent}").unwrap();

    match node {
        Node::Text(t) => {
            buffer
                .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))
                .unwrap();
            write!(buffer, "{t:?}").unwrap();
            buffer.reset().unwrap();
            writeln!(buffer).unwrap();
        }
        Node::Element(e) => {
            buffer
                .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))
                .unwrap();
            write!(buffer, "{}", e.tag()).unwrap();
            buffer.reset().unwrap();
            writeln!(buffer).unwrap();

            for (name, value) in &e.attrs {
                write_attr(buffer, &indent, name, value);
            }

            for child in &e.children {
                dump_node(buffer, child, level + 1);
            }
        }
    }
}
