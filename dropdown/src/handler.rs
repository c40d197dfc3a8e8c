//! Handler types and registry.
//!
//! Widgets register closures against element ids at build time; the
//! dispatcher looks them up by (element id, event name) when an event
//! lands. `HandlerContext` bundles what a handler may inspect and the
//! flow flags it may raise.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use eldom::{EventFlow, EventKind, MouseButton, PointerEvent};

use crate::option::Selection;

/// A handler closure invoked with the in-flight event context.
pub type Handler = Arc<dyn Fn(&HandlerContext) + Send + Sync>;

/// Map of well-known handler names to handlers, used for passing
/// callbacks to widgets.
///
/// Standard handler names:
/// - `"on_change"` - the selection changed
pub type WidgetHandlers = HashMap<&'static str, Handler>;

/// Event-specific payload passed to handlers.
#[derive(Debug, Clone, Default)]
pub enum EventData {
    /// No payload (plain pointer handlers).
    #[default]
    None,
    /// A new option was picked.
    Select {
        /// The freshly committed selection.
        selection: Arc<Selection>,
    },
}

impl EventData {
    /// The picked selection from a Select payload.
    pub fn selection(&self) -> Option<&Arc<Selection>> {
        match self {
            EventData::Select { selection } => Some(selection),
            EventData::None => None,
        }
    }
}

/// Context bundle passed to handlers: the triggering pointer event, the
/// event payload, and flow control.
pub struct HandlerContext<'a> {
    event: Option<&'a PointerEvent>,
    flow: Option<&'a EventFlow>,
    event_data: EventData,
}

impl<'a> HandlerContext<'a> {
    /// Context for a dispatched pointer event.
    pub fn for_pointer(event: &'a PointerEvent, flow: &'a EventFlow) -> Self {
        Self {
            event: Some(event),
            flow: Some(flow),
            event_data: EventData::None,
        }
    }

    /// Context carrying only a payload (no pointer event in flight).
    pub fn for_data(event_data: EventData) -> Self {
        Self {
            event: None,
            flow: None,
            event_data,
        }
    }

    /// Derive a context sharing this one's event and flow, with a payload
    /// attached.
    pub fn with_data(&self, event_data: EventData) -> HandlerContext<'a> {
        HandlerContext {
            event: self.event,
            flow: self.flow,
            event_data,
        }
    }

    /// The triggering pointer event, if any.
    pub fn event(&self) -> Option<&PointerEvent> {
        self.event
    }

    /// The event payload.
    pub fn data(&self) -> &EventData {
        &self.event_data
    }

    /// Kind of the triggering pointer event.
    pub fn kind(&self) -> Option<EventKind> {
        self.event.map(|event| event.kind)
    }

    /// Button of the triggering pointer event.
    pub fn button(&self) -> Option<MouseButton> {
        self.event.and_then(|event| event.button)
    }

    /// Keep the event from reaching document-level listeners.
    pub fn stop_propagation(&self) {
        if let Some(flow) = self.flow {
            flow.stop_propagation();
        }
    }

    /// Tell the host to skip its default action for this interaction.
    pub fn prevent_default(&self) {
        if let Some(flow) = self.flow {
            flow.prevent_default();
        }
    }
}

/// Registry for widget event handlers.
///
/// Maps (element_id, event_name) to handler closures. Cleared at the
/// start of each render pass so handlers from previous renders don't
/// persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    ///
    /// # Arguments
    /// - `element_id`: The element's unique ID (from Element.id)
    /// - `event`: The event name (e.g., "on_mousedown", "on_click")
    /// - `handler`: The handler closure
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().map(|h| h.is_empty()).unwrap_or(true)
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}
