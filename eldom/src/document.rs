//! The shared render-tree host.
//!
//! A `Document` owns the currently rendered root element, its layout, and
//! the registry of document-level listeners. Widgets that need to observe
//! interactions anywhere in the tree (outside-click detection) register
//! here; everything element-targeted goes through a dispatcher instead.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::element::{find_element, subtree_contains, Element};
use crate::event::{EventKind, PointerEvent};
use crate::hit::{hit_test_any, hit_test_clickable};
use crate::layout::{layout, LayoutResult, Rect};

/// A document-level listener. Receives the event and the document it was
/// registered on, so it can inspect the current tree.
pub type DocumentListener = Arc<dyn Fn(&PointerEvent, &Document) + Send + Sync>;

/// Handle for removing a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Default)]
struct DocumentInner {
    root: Option<Element>,
    layout: LayoutResult,
    listeners: HashMap<EventKind, Vec<(ListenerId, DocumentListener)>>,
}

/// The render-tree host. Cloning shares the same document.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<RwLock<DocumentInner>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rendered root and recompute its layout at the origin.
    pub fn render(&self, root: Element) {
        if let Ok(mut inner) = self.inner.write() {
            inner.layout = layout(&root, (0, 0));
            inner.root = Some(root);
        }
    }

    /// Clone of the current root, if one was rendered.
    pub fn root(&self) -> Option<Element> {
        self.inner.read().ok().and_then(|inner| inner.root.clone())
    }

    /// Layout rect of an element in the current tree.
    pub fn rect_of(&self, id: &str) -> Option<Rect> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.layout.get(id).copied())
    }

    /// Deepest element at the given coordinates.
    pub fn target_at(&self, x: u16, y: u16) -> Option<String> {
        self.inner.read().ok().and_then(|inner| {
            inner
                .root
                .as_ref()
                .and_then(|root| hit_test_any(&inner.layout, root, x, y))
        })
    }

    /// Deepest clickable element at the given coordinates.
    pub fn clickable_at(&self, x: u16, y: u16) -> Option<String> {
        self.inner.read().ok().and_then(|inner| {
            inner
                .root
                .as_ref()
                .and_then(|root| hit_test_clickable(&inner.layout, root, x, y))
        })
    }

    /// Whether `target_id` lies inside the subtree rooted at `ancestor_id`
    /// in the current tree.
    pub fn subtree_within(&self, ancestor_id: &str, target_id: &str) -> bool {
        self.inner
            .read()
            .ok()
            .and_then(|inner| {
                inner
                    .root
                    .as_ref()
                    .and_then(|root| find_element(root, ancestor_id))
                    .map(|ancestor| subtree_contains(ancestor, target_id))
            })
            .unwrap_or(false)
    }

    /// Register a listener for one event kind.
    pub fn add_listener(&self, kind: EventKind, listener: DocumentListener) -> ListenerId {
        let id = ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed));
        if let Ok(mut inner) = self.inner.write() {
            inner.listeners.entry(kind).or_default().push((id, listener));
        }
        id
    }

    /// Remove a previously registered listener. Returns whether it was
    /// still registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        if let Ok(mut inner) = self.inner.write() {
            for listeners in inner.listeners.values_mut() {
                if let Some(pos) = listeners.iter().position(|(lid, _)| *lid == id) {
                    listeners.remove(pos);
                    return true;
                }
            }
        }
        false
    }

    /// Total number of registered listeners, across all kinds.
    pub fn listener_count(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.listeners.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Invoke every listener registered for the event's kind. Listeners
    /// are cloned out of the lock first so they may call back into the
    /// document. Returns how many ran.
    pub fn notify(&self, event: &PointerEvent) -> usize {
        let listeners: Vec<DocumentListener> = self
            .inner
            .read()
            .map(|inner| {
                inner
                    .listeners
                    .get(&event.kind)
                    .map(|entries| entries.iter().map(|(_, l)| Arc::clone(l)).collect())
                    .unwrap_or_default()
            })
            .unwrap_or_default();

        log::trace!(
            "document notify kind={:?} listeners={}",
            event.kind,
            listeners.len()
        );
        for listener in &listeners {
            listener(event, self);
        }
        listeners.len()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("listener_count", &self.listener_count())
            .finish()
    }
}
