//! Handler closures and the document binding.

use std::sync::Arc;

use eldom::{Document, EventKind, ListenerId, MouseButton, PointerEvent};

use crate::handler::{EventData, Handler, HandlerContext, HandlerRegistry, WidgetHandlers};
use crate::option::Selection;

use super::state::DropdownState;

/// Register the control's press handler, bound to mouse press and touch
/// release like the control itself.
///
/// The order inside the closure is part of the contract: a non-primary
/// mouse button bails out before any suppression; otherwise the event is
/// suppressed first and the disabled check only gates the state flip.
pub(super) fn register_toggle(
    registry: &HandlerRegistry,
    control_id: &str,
    state: &DropdownState,
    disabled: bool,
) {
    let state = state.clone();
    let handler: Handler = Arc::new(move |hx: &HandlerContext| {
        if hx.kind() == Some(EventKind::MouseDown) && hx.button() != Some(MouseButton::Left) {
            return;
        }
        hx.stop_propagation();
        hx.prevent_default();

        if !disabled {
            state.toggle_open();
        }
    });
    registry.register(control_id, "on_mousedown", handler.clone());
    registry.register(control_id, "on_touchend", handler);
}

/// Register an option row's pick handler.
///
/// A fresh selection object is constructed on every invocation, so the
/// identity check against the stored selection only suppresses the change
/// callback when the caller re-commits the exact stored object - which a
/// row pick never does.
pub(super) fn register_select(
    registry: &HandlerRegistry,
    handlers: &WidgetHandlers,
    row_id: &str,
    state: &DropdownState,
    selection: Selection,
) {
    let state = state.clone();
    let on_change = handlers.get("on_change").cloned();
    let handler: Handler = Arc::new(move |hx: &HandlerContext| {
        let picked = Arc::new(selection.clone());
        if !state.is_current_selection(&picked)
            && let Some(on_change) = &on_change
        {
            on_change(&hx.with_data(EventData::Select {
                selection: Arc::clone(&picked),
            }));
        }
        state.commit_selection(picked);
    });
    registry.register(row_id, "on_mousedown", handler.clone());
    registry.register(row_id, "on_click", handler);
}

/// Mount guard owning the widget's two document listeners.
///
/// Created once when the widget enters the live tree and dropped once
/// when it leaves; rebuilding the widget in between touches neither
/// listener. Dropping removes both registrations and clears the
/// liveness flag, on every exit path.
pub struct DropdownBinding {
    document: Document,
    listeners: [ListenerId; 2],
    state: DropdownState,
}

impl DropdownBinding {
    /// Attach outside-interaction detection for the widget's subtree.
    ///
    /// Listens for `Click` and `TouchEnd` anywhere in the document; an
    /// event whose target is not inside the widget's rendered subtree
    /// forces the menu closed. Events arriving after teardown are ignored
    /// via the liveness flag.
    pub fn mount(state: &DropdownState, document: &Document) -> Self {
        state.set_mounted(true);
        let root_id = state.id_string();

        let make_listener = |kind: EventKind| {
            let state = state.clone();
            let root_id = root_id.clone();
            document.add_listener(
                kind,
                Arc::new(move |event: &PointerEvent, document: &Document| {
                    if !state.is_mounted() {
                        return;
                    }
                    let inside = event
                        .target
                        .as_deref()
                        .map(|target| document.subtree_within(&root_id, target))
                        .unwrap_or(false);
                    if !inside {
                        state.close();
                    }
                }),
            )
        };

        let listeners = [
            make_listener(EventKind::Click),
            make_listener(EventKind::TouchEnd),
        ];
        log::debug!("DropdownBinding::mount id={root_id}");

        Self {
            document: document.clone(),
            listeners,
            state: state.clone(),
        }
    }

    /// The state this binding guards.
    pub fn state(&self) -> &DropdownState {
        &self.state
    }
}

impl Drop for DropdownBinding {
    fn drop(&mut self) {
        self.state.set_mounted(false);
        for listener in self.listeners {
            self.document.remove_listener(listener);
        }
        log::debug!("DropdownBinding::drop id={}", self.state.id_string());
    }
}
