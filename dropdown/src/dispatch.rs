//! Event dispatch for pointer events.
//!
//! Two phases, in order: the deepest clickable element's registered
//! handler, then the document-level listeners - unless the handler
//! stopped propagation.

use eldom::{Document, EventFlow, EventKind, PointerEvent};

use crate::handler::{HandlerContext, HandlerRegistry};

/// Result of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// No handler ran and no document listener fired.
    NotHandled,
    /// A widget handler ran; document listeners never saw the event.
    HandledByWidget,
    /// Document-level listeners saw the event (possibly after a widget
    /// handler ran without stopping propagation).
    HandledByDocument,
}

impl DispatchResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, DispatchResult::NotHandled)
    }
}

/// Dispatches pointer events through the handler chain.
pub struct EventDispatcher<'a> {
    registry: &'a HandlerRegistry,
    document: &'a Document,
}

impl<'a> EventDispatcher<'a> {
    pub fn new(registry: &'a HandlerRegistry, document: &'a Document) -> Self {
        Self { registry, document }
    }

    /// Dispatch an event.
    ///
    /// The event's target is resolved by hit test when not preset. The
    /// target phase looks the handler up under the deepest clickable
    /// element at the event position - or under the preset target
    /// verbatim, for synthetic events.
    pub fn dispatch(&self, event: &PointerEvent) -> DispatchResult {
        let mut event = event.clone();
        let preset_target = event.target.clone();
        if event.target.is_none() {
            event.target = self.document.target_at(event.x, event.y);
        }

        let handler_element = match preset_target {
            Some(target) => Some(target),
            None => self.document.clickable_at(event.x, event.y),
        };

        let flow = EventFlow::new();
        let event_name = handler_event_name(event.kind);
        let mut widget_handled = false;
        if let Some(element_id) = handler_element {
            if let Some(handler) = self.registry.get(&element_id, event_name) {
                log::trace!("dispatch {event_name} -> {element_id}");
                handler(&HandlerContext::for_pointer(&event, &flow));
                widget_handled = true;
            }
        }

        if flow.propagation_stopped() {
            return if widget_handled {
                DispatchResult::HandledByWidget
            } else {
                DispatchResult::NotHandled
            };
        }

        if self.document.notify(&event) > 0 {
            DispatchResult::HandledByDocument
        } else if widget_handled {
            DispatchResult::HandledByWidget
        } else {
            DispatchResult::NotHandled
        }
    }
}

fn handler_event_name(kind: EventKind) -> &'static str {
    match kind {
        EventKind::MouseDown => "on_mousedown",
        EventKind::Click => "on_click",
        EventKind::TouchEnd => "on_touchend",
    }
}
