//! Text dump of an element tree, for demos and debugging.

use std::fmt::Write;

use crate::element::{Content, Element};

/// Render the tree as indented lines: class list (or id when classless)
/// followed by the text content, one element per line.
pub fn render_to_string(root: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, root, 0);
    out
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }

    if element.classes.is_empty() {
        let _ = write!(out, "<{}>", element.id);
    } else {
        let _ = write!(out, "<{}>", element.classes.join(" "));
    }

    match &element.content {
        Content::Text(text) => {
            let _ = writeln!(out, " {text:?}");
        }
        _ => out.push('\n'),
    }

    for child in element.child_elements() {
        write_element(out, child, depth + 1);
    }
}
