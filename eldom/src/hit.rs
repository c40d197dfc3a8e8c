use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test_clickable(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let rect = layout.get(&root.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in root.child_elements().iter().rev() {
        if let Some(id) = hit_test_clickable(layout, child, x, y) {
            return Some(id);
        }
    }

    if root.clickable {
        Some(root.id.clone())
    } else {
        None
    }
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let rect = layout.get(&root.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    for child in root.child_elements().iter().rev() {
        if let Some(id) = hit_test_any(layout, child, x, y) {
            return Some(id);
        }
    }

    Some(root.id.clone())
}
