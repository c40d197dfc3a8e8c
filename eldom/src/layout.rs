use std::collections::HashMap;

use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Direction, Element};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Computed rects for a laid-out tree, keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    rects: HashMap<String, Rect>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Block-flow layout: text is one row tall and as wide as its display
/// width, columns stack children, rows place them side by side with the
/// container's gap between them.
pub fn layout(root: &Element, origin: (u16, u16)) -> LayoutResult {
    let mut result = LayoutResult::new();
    place(root, origin.0, origin.1, &mut result);
    result
}

/// Intrinsic size of an element's content.
pub fn measure(element: &Element) -> (u16, u16) {
    match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (text.width() as u16, 1),
        Content::Children(children) => {
            let gaps = element.gap * children.len().saturating_sub(1) as u16;
            match element.direction {
                Direction::Column => {
                    let width = children.iter().map(|c| measure(c).0).max().unwrap_or(0);
                    let height: u16 = children.iter().map(|c| measure(c).1).sum();
                    (width, height + gaps)
                }
                Direction::Row => {
                    let width: u16 = children.iter().map(|c| measure(c).0).sum();
                    let height = children.iter().map(|c| measure(c).1).max().unwrap_or(0);
                    (width + gaps, height)
                }
            }
        }
    }
}

fn place(element: &Element, x: u16, y: u16, result: &mut LayoutResult) {
    let (width, height) = measure(element);
    result.insert(element.id.clone(), Rect::new(x, y, width, height));

    let mut cursor_x = x;
    let mut cursor_y = y;
    for child in element.child_elements() {
        place(child, cursor_x, cursor_y, result);
        let (child_width, child_height) = measure(child);
        match element.direction {
            Direction::Column => cursor_y += child_height + element.gap,
            Direction::Row => cursor_x += child_width + element.gap,
        }
    }
}
