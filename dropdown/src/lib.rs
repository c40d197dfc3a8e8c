//! A reusable select/dropdown widget over class-styled element trees.
//!
//! The widget owns its open/closed and selection state, normalizes the
//! three accepted option shapes (bare strings, explicit value/label
//! pairs, named groups), and renders a control plus - only while open -
//! a menu of rows, all carrying class names derived from one base
//! prefix. Outside interactions close the menu via a pair of
//! document-level listeners scoped to a [`DropdownBinding`] mount guard.

pub mod config;
pub mod dispatch;
pub mod handler;
pub mod option;
pub mod widget;

pub use config::{ConfigError, DropdownConfig, ValueConfig};
pub use dispatch::{DispatchResult, EventDispatcher};
pub use handler::{EventData, Handler, HandlerContext, HandlerRegistry, WidgetHandlers};
pub use option::{DropdownOption, OptionEntry, OptionGroup, SelectedValue, Selection};
pub use widget::{Dropdown, DropdownBinding, DropdownId, DropdownState};

pub mod prelude {
    pub use crate::config::{ConfigError, DropdownConfig};
    pub use crate::dispatch::{DispatchResult, EventDispatcher};
    pub use crate::handler::{EventData, Handler, HandlerContext, HandlerRegistry, WidgetHandlers};
    pub use crate::option::{
        has_value, DropdownOption, OptionEntry, OptionGroup, SelectedValue, Selection,
    };
    pub use crate::widget::classes::ClassNames;
    pub use crate::widget::{Dropdown, DropdownBinding, DropdownState};

    pub use eldom::{Document, Element, EventKind, MouseButton, PointerEvent};
}
