//! Dropdown widget - a select control over class-styled element trees.

pub mod classes;
mod events;
mod render;
mod state;

use eldom::Element;

use crate::config::DropdownConfig;
use crate::handler::{HandlerRegistry, WidgetHandlers};
use crate::option::{self, DropdownOption, SelectedValue};

use classes::{ClassNames, DEFAULT_BASE_CLASS, IS_OPEN};

pub use events::DropdownBinding;
pub use state::{DropdownId, DropdownState};

/// Typestate marker: dropdown needs a state reference.
pub struct NeedsState;

/// Typestate marker: dropdown has a state reference.
pub struct HasState<'a>(&'a DropdownState);

/// A dropdown widget builder.
///
/// Uses typestate to enforce `state()` is called before `build()`.
/// Building reconciles the external `value` input, renders the control
/// and (while open) the menu, and registers the press and pick handlers.
///
/// # Example
///
/// ```ignore
/// let state = DropdownState::new();
/// let registry = HandlerRegistry::new();
/// let root = Dropdown::new()
///     .options(["one", "two", "three"])
///     .placeholder("Pick one...")
///     .state(&state)
///     .build(&registry, &handlers);
/// ```
#[derive(Clone, Debug)]
pub struct Dropdown<S = NeedsState> {
    state_marker: S,
    options: Vec<DropdownOption>,
    value: Option<SelectedValue>,
    placeholder: Option<String>,
    disabled: bool,
    base_class: Option<String>,
}

impl Default for Dropdown<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Dropdown<NeedsState> {
    /// Create a new dropdown builder.
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            options: Vec::new(),
            value: None,
            placeholder: None,
            disabled: false,
            base_class: None,
        }
    }

    /// Seed a builder from a loaded config.
    pub fn from_config(config: DropdownConfig) -> Self {
        let mut dropdown = Self::new();
        dropdown.options = config.options;
        dropdown.value = config.value.map(Into::into);
        dropdown.placeholder = config.placeholder;
        dropdown.disabled = config.disabled;
        dropdown.base_class = config.base_class;
        dropdown
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &DropdownState) -> Dropdown<HasState<'_>> {
        Dropdown {
            state_marker: HasState(s),
            options: self.options,
            value: self.value,
            placeholder: self.placeholder,
            disabled: self.disabled,
            base_class: self.base_class,
        }
    }
}

impl<S> Dropdown<S> {
    /// Set the options list.
    pub fn options(
        mut self,
        options: impl IntoIterator<Item = impl Into<DropdownOption>>,
    ) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Set the externally controlled value.
    pub fn value(mut self, value: impl Into<SelectedValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the placeholder text shown when nothing is selected.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Mark the dropdown as disabled. The control still suppresses its
    /// events, but open/close no longer reacts.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the base prefix all presentational classes derive from.
    pub fn base_class(mut self, base: impl Into<String>) -> Self {
        self.base_class = Some(base.into());
        self
    }
}

impl<'a> Dropdown<HasState<'a>> {
    /// Build the dropdown element tree.
    ///
    /// Runs the external-input reconciliation, then renders. The menu
    /// element exists in the output only while open.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        state.sync_value(self.value.as_ref(), self.placeholder.as_deref());

        let id = state.id_string();
        let classes = ClassNames::new(self.base_class.as_deref().unwrap_or(DEFAULT_BASE_CLASS));
        let selected = state.selected();
        let open = state.is_open();
        let has_value = option::has_value(&self.options, &selected);

        log::debug!(
            "Dropdown::build id={} open={} options_count={}",
            id,
            open,
            self.options.len()
        );

        let control = render::control(&id, &classes, &selected, has_value, open, self.disabled);
        events::register_toggle(registry, &format!("{id}-control"), state, self.disabled);

        let mut root = Element::col().id(&id).class(classes.root());
        if open {
            root = root.class(IS_OPEN);
        }
        root = root.child(control);
        if open {
            root = root.child(render::menu(
                &id,
                &classes,
                &self.options,
                &selected,
                state,
                registry,
                handlers,
            ));
        }
        root
    }
}
