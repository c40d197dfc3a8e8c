use super::Element;

/// What an element holds.
#[derive(Debug, Clone, Default)]
pub enum Content {
    /// Nothing; a bare box.
    #[default]
    None,
    /// A single run of text.
    Text(String),
    /// Nested child elements.
    Children(Vec<Element>),
}

impl Content {
    /// The text run, if this is text content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The child elements, or an empty slice for non-container content.
    pub fn children(&self) -> &[Element] {
        match self {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
