//! Element-tree construction for the dropdown.

use eldom::Element;

use crate::handler::{HandlerRegistry, WidgetHandlers};
use crate::option::{DropdownOption, OptionEntry, SelectedValue};

use super::classes::{ClassNames, HAS_VALUE, IS_SELECTED};
use super::events;
use super::state::DropdownState;

/// Build the closed control: current text plus the arrow marker.
pub(super) fn control(
    id: &str,
    classes: &ClassNames,
    selected: &SelectedValue,
    has_value: bool,
    open: bool,
    disabled: bool,
) -> Element {
    let mut text = Element::text(selected.display_label())
        .id(format!("{id}-placeholder"))
        .class(classes.placeholder());
    if has_value {
        text = text.class(HAS_VALUE);
    }

    let arrow = Element::text(if open { "▲" } else { "▼" })
        .id(format!("{id}-arrow"))
        .class(classes.arrow());

    let mut element = Element::row()
        .id(format!("{id}-control"))
        .class(classes.control())
        .gap(1)
        .clickable(true)
        .disabled(disabled)
        .child(text)
        .child(arrow);
    if disabled {
        element = element.class(classes.disabled());
    }
    if has_value {
        element = element.class(HAS_VALUE);
    }
    element
}

/// Build the open menu: one row per top-level entry, groups expanded to a
/// heading plus their items, or the no-results row for an empty list.
pub(super) fn menu(
    id: &str,
    classes: &ClassNames,
    options: &[DropdownOption],
    selected: &SelectedValue,
    state: &DropdownState,
    registry: &HandlerRegistry,
    handlers: &WidgetHandlers,
) -> Element {
    let menu = Element::col().id(format!("{id}-menu")).class(classes.menu());

    if options.is_empty() {
        return menu.child(
            Element::text("No options found")
                .id(format!("{id}-noresults"))
                .class(classes.noresults()),
        );
    }

    let selected_token = selected.value_token().to_string();
    let mut rows = Vec::new();
    let mut row_index = 0usize;
    for (position, option) in options.iter().enumerate() {
        match option {
            DropdownOption::Entry(entry) => {
                rows.push(option_row(
                    id,
                    classes,
                    entry,
                    &selected_token,
                    row_index,
                    state,
                    registry,
                    handlers,
                ));
                row_index += 1;
            }
            DropdownOption::Group(group) => {
                let title = Element::text(&group.name)
                    .id(format!("{id}-group-{position}-title"))
                    .class(classes.title());
                let mut group_element = Element::col()
                    .id(format!("{id}-group-{position}"))
                    .class(classes.group())
                    .child(title);
                for item in &group.items {
                    group_element = group_element.child(option_row(
                        id,
                        classes,
                        item,
                        &selected_token,
                        row_index,
                        state,
                        registry,
                        handlers,
                    ));
                    row_index += 1;
                }
                rows.push(group_element);
            }
        }
    }

    menu.children(rows)
}

#[allow(clippy::too_many_arguments)]
fn option_row(
    id: &str,
    classes: &ClassNames,
    entry: &OptionEntry,
    selected_token: &str,
    row_index: usize,
    state: &DropdownState,
    registry: &HandlerRegistry,
    handlers: &WidgetHandlers,
) -> Element {
    let selection = entry.resolve();
    let row_id = format!("{id}-opt-{row_index}");

    let mut row = Element::text(&selection.label)
        .id(&row_id)
        .class(classes.option())
        .clickable(true);
    if entry.value_token() == selected_token {
        row = row.class(IS_SELECTED);
    }

    events::register_select(registry, handlers, &row_id, state, selection);
    row
}
