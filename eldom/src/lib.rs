pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;

pub use document::{Document, DocumentListener, ListenerId};
pub use element::{find_element, subtree_contains, Content, Direction, Element};
pub use event::{EventFlow, EventKind, Key, MouseButton, PointerEvent, TermEvent};
pub use hit::{hit_test_any, hit_test_clickable};
pub use layout::{layout, LayoutResult, Rect};
pub use render::render_to_string;
pub use terminal::{Terminal, TerminalError};
