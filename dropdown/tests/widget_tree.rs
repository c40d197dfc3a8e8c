use dropdown::prelude::*;
use eldom::{find_element, Element};

fn build(state: &DropdownState, dropdown: Dropdown) -> Element {
    let registry = HandlerRegistry::new();
    let handlers = WidgetHandlers::new();
    dropdown.state(state).build(&registry, &handlers)
}

fn find_by_class<'a>(root: &'a Element, class: &str) -> Option<&'a Element> {
    if root.has_class(class) {
        return Some(root);
    }
    for child in root.child_elements() {
        if let Some(found) = find_by_class(child, class) {
            return Some(found);
        }
    }
    None
}

fn collect_texts(root: &Element, out: &mut Vec<String>) {
    if let Some(text) = root.text_content() {
        out.push(text.to_string());
    }
    for child in root.child_elements() {
        collect_texts(child, out);
    }
}

#[test]
fn test_closed_tree_has_no_menu_element() {
    let state = DropdownState::new();
    let root = build(&state, Dropdown::new().options(["a", "b"]));

    assert!(root.has_class("Dropdown-root"));
    assert!(!root.has_class("is-open"));
    // Absent from the tree, not merely hidden.
    assert!(find_by_class(&root, "Dropdown-menu").is_none());
    assert!(find_by_class(&root, "Dropdown-option").is_none());
}

#[test]
fn test_open_tree_lists_one_row_per_entry() {
    let state = DropdownState::new();
    state.open();
    let root = build(&state, Dropdown::new().options(["a", "b", "c"]));

    assert!(root.has_class("is-open"));
    let menu = find_by_class(&root, "Dropdown-menu").expect("menu present while open");
    assert_eq!(menu.child_elements().len(), 3);

    let mut labels = Vec::new();
    collect_texts(menu, &mut labels);
    assert_eq!(labels, vec!["a", "b", "c"]);
}

#[test]
fn test_group_renders_heading_then_items() {
    let state = DropdownState::new();
    state.open();
    let root = build(
        &state,
        Dropdown::new().options([DropdownOption::group("G", ["x", "y"])]),
    );

    let menu = find_by_class(&root, "Dropdown-menu").unwrap();
    assert_eq!(menu.child_elements().len(), 1);

    let group = find_by_class(menu, "Dropdown-group").expect("group container");
    let title = find_by_class(group, "Dropdown-title").expect("group heading");
    assert_eq!(title.text_content(), Some("G"));

    let mut labels = Vec::new();
    collect_texts(group, &mut labels);
    assert_eq!(labels, vec!["G", "x", "y"]);
}

#[test]
fn test_empty_options_render_noresults_row() {
    let state = DropdownState::new();
    state.open();
    let root = build(&state, Dropdown::new().options(Vec::<DropdownOption>::new()));

    let menu = find_by_class(&root, "Dropdown-menu").unwrap();
    let row = find_by_class(menu, "Dropdown-noresults").expect("placeholder row");
    assert_eq!(row.text_content(), Some("No options found"));
    assert!(find_by_class(menu, "Dropdown-option").is_none());
}

#[test]
fn test_matching_selection_is_highlighted() {
    let state = DropdownState::new();
    state.open();
    let root = build(
        &state,
        Dropdown::new()
            .options(["a", "b"])
            .value(SelectedValue::choice(Selection::new("b", "b"))),
    );

    let menu = find_by_class(&root, "Dropdown-menu").unwrap();
    let selected = find_by_class(menu, "is-selected").expect("highlighted row");
    assert_eq!(selected.text_content(), Some("b"));
}

#[test]
fn test_control_reflects_value_and_disabled() {
    let state = DropdownState::new();
    let root = build(
        &state,
        Dropdown::new()
            .options(["a", "b"])
            .value(SelectedValue::choice(Selection::new("b", "b")))
            .disabled(),
    );

    let control = find_by_class(&root, "Dropdown-control").unwrap();
    assert!(control.has_class("Dropdown-disabled"));
    assert!(control.has_class("has-value"));
    assert!(control.disabled);

    let placeholder = find_by_class(&root, "Dropdown-placeholder").unwrap();
    assert!(placeholder.has_class("has-value"));
    assert_eq!(placeholder.text_content(), Some("b"));
}

#[test]
fn test_control_without_match_has_no_value_class() {
    let state = DropdownState::new();
    let root = build(&state, Dropdown::new().options(["a", "b"]));

    let control = find_by_class(&root, "Dropdown-control").unwrap();
    assert!(!control.has_class("has-value"));

    let placeholder = find_by_class(&root, "Dropdown-placeholder").unwrap();
    assert_eq!(placeholder.text_content(), Some("Select..."));
}

#[test]
fn test_arrow_tracks_open_state() {
    let state = DropdownState::new();
    let closed = build(&state, Dropdown::new().options(["a"]));
    assert_eq!(
        find_by_class(&closed, "Dropdown-arrow").unwrap().text_content(),
        Some("▼")
    );

    state.open();
    let open = build(&state, Dropdown::new().options(["a"]));
    assert_eq!(
        find_by_class(&open, "Dropdown-arrow").unwrap().text_content(),
        Some("▲")
    );
}

#[test]
fn test_base_class_rethemes_every_derived_name() {
    let state = DropdownState::new();
    state.open();
    let root = build(
        &state,
        Dropdown::new().options(["a"]).base_class("Picker"),
    );

    assert!(root.has_class("Picker-root"));
    assert!(find_by_class(&root, "Picker-control").is_some());
    assert!(find_by_class(&root, "Picker-menu").is_some());
    assert!(find_by_class(&root, "Picker-option").is_some());
    assert!(find_by_class(&root, "Dropdown-root").is_none());
}

#[test]
fn test_root_element_id_matches_state_id() {
    let state = DropdownState::new();
    let root = build(&state, Dropdown::new().options(["a"]));
    assert_eq!(root.id, state.id_string());
    assert!(find_element(&root, &format!("{}-control", state.id_string())).is_some());
}
