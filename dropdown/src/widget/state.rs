//! Dropdown widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::option::{Selection, SelectedValue};

/// Unique identifier for a dropdown widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownId(usize);

impl DropdownId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__dropdown_{}", self.0)
    }
}

#[derive(Debug)]
struct DropdownInner {
    /// Current selection, or the placeholder sentinel.
    selected: SelectedValue,
}

/// Shared state handle for a dropdown widget.
///
/// Holds the `{selected, is_open}` pair behind shared interior
/// mutability, plus the liveness flag the document binding consults and a
/// dirty flag signalling that a re-render is due. Cloning shares state.
#[derive(Debug)]
pub struct DropdownState {
    /// Unique identifier for this instance, prefix for element ids.
    id: DropdownId,
    /// Selection state.
    inner: Arc<RwLock<DropdownInner>>,
    /// Whether the menu is open.
    is_open: Arc<AtomicBool>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
    /// Whether a document binding currently exists for this widget.
    mounted: Arc<AtomicBool>,
}

impl DropdownState {
    /// Create a new state in the default placeholder configuration.
    pub fn new() -> Self {
        Self::with_selected(SelectedValue::placeholder(None))
    }

    /// Create a state with an initial selection.
    pub fn with_selected(selected: SelectedValue) -> Self {
        Self {
            id: DropdownId::new(),
            inner: Arc::new(RwLock::new(DropdownInner { selected })),
            is_open: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
            mounted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this dropdown.
    pub fn id(&self) -> DropdownId {
        self.id
    }

    /// Get the ID as a string (root element id).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Selection state
    // -------------------------------------------------------------------------

    /// Get the current selection.
    pub fn selected(&self) -> SelectedValue {
        self.inner
            .read()
            .map(|guard| guard.selected.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().selected.clone())
    }

    /// Reconcile the externally supplied `value` and `placeholder` inputs.
    ///
    /// Runs on every build, not only when the inputs change: a non-empty
    /// value that is identity-distinct from the current selection replaces
    /// it; an absent or empty value resets to the placeholder state.
    pub fn sync_value(&self, value: Option<&SelectedValue>, placeholder: Option<&str>) {
        match value {
            Some(value) if !value.is_empty() => {
                if let Ok(mut guard) = self.inner.write()
                    && !guard.selected.same_identity(value)
                {
                    guard.selected = value.clone();
                    self.dirty.store(true, Ordering::SeqCst);
                }
            }
            _ => {
                if let Ok(mut guard) = self.inner.write() {
                    guard.selected = SelectedValue::placeholder(placeholder);
                    self.dirty.store(true, Ordering::SeqCst);
                }
            }
        }
    }

    /// Whether `candidate` is the very selection object currently stored.
    pub fn is_current_selection(&self, candidate: &Arc<Selection>) -> bool {
        self.inner
            .read()
            .map(|guard| match &guard.selected {
                SelectedValue::Choice(current) => Arc::ptr_eq(current, candidate),
                SelectedValue::Text(_) => false,
            })
            .unwrap_or(false)
    }

    /// Commit a picked selection and close the menu.
    pub fn commit_selection(&self, selection: Arc<Selection>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selected = SelectedValue::Choice(selection);
        }
        self.is_open.store(false, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the menu is open.
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    /// Open the menu.
    pub fn open(&self) {
        if !self.is_open.swap(true, Ordering::SeqCst) {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Close the menu.
    pub fn close(&self) {
        if self.is_open.swap(false, Ordering::SeqCst) {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle the menu open/closed.
    pub fn toggle_open(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    // -------------------------------------------------------------------------
    // Liveness
    // -------------------------------------------------------------------------

    /// Whether a document binding currently exists for this widget.
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub(crate) fn set_mounted(&self, mounted: bool) {
        self.mounted.store(mounted, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for DropdownState {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            is_open: Arc::clone(&self.is_open),
            dirty: Arc::clone(&self.dirty),
            mounted: Arc::clone(&self.mounted),
        }
    }
}

impl Default for DropdownState {
    fn default() -> Self {
        Self::new()
    }
}
