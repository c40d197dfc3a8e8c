use std::sync::Arc;

use dropdown::option::{
    has_value, selectable_entries, DropdownOption, OptionEntry, SelectedValue, Selection,
};

#[test]
fn test_plain_string_normalizes_to_itself() {
    let entry = OptionEntry::from("apple");
    assert_eq!(entry.value_token(), "apple");
    assert_eq!(entry.label_text(), "apple");
    assert_eq!(entry.resolve(), Selection::new("apple", "apple"));
}

#[test]
fn test_missing_value_falls_back_to_label() {
    let entry = OptionEntry::Labeled {
        value: None,
        label: Some("Berlin".to_string()),
    };
    assert_eq!(entry.value_token(), "Berlin");
    assert_eq!(entry.resolve(), Selection::new("Berlin", "Berlin"));
}

#[test]
fn test_missing_label_falls_back_to_value() {
    let entry = OptionEntry::Labeled {
        value: Some("de-ber".to_string()),
        label: None,
    };
    assert_eq!(entry.label_text(), "de-ber");
    assert_eq!(entry.resolve(), Selection::new("de-ber", "de-ber"));
}

#[test]
fn test_empty_field_counts_as_missing() {
    let entry = OptionEntry::Labeled {
        value: Some(String::new()),
        label: Some("Paris".to_string()),
    };
    assert_eq!(entry.value_token(), "Paris");

    let hollow = OptionEntry::Labeled {
        value: None,
        label: None,
    };
    assert_eq!(hollow.value_token(), "");
    assert_eq!(hollow.label_text(), "");
}

#[test]
fn test_selectable_entries_flatten_groups_in_order() {
    let options = vec![
        DropdownOption::from("a"),
        DropdownOption::group("G", ["x", "y"]),
        DropdownOption::from("c"),
    ];
    let tokens: Vec<&str> = selectable_entries(&options)
        .map(|entry| entry.value_token())
        .collect();
    assert_eq!(tokens, vec!["a", "x", "y", "c"]);
}

#[test]
fn test_has_value_matches_effective_token() {
    let options: Vec<DropdownOption> = ["a", "b", "c"].into_iter().map(Into::into).collect();

    let selected = SelectedValue::choice(Selection::new("b", ""));
    assert!(has_value(&options, &selected));

    let missing = SelectedValue::choice(Selection::new("z", ""));
    assert!(!has_value(&options, &missing));
}

#[test]
fn test_has_value_scan_is_flat_and_not_group_aware() {
    let options = vec![
        DropdownOption::from("a"),
        DropdownOption::group("Cities", [("de-ber", "Berlin")]),
    ];

    // Neither the heading nor the group's items are consulted.
    let inside = SelectedValue::choice(Selection::new("de-ber", "Berlin"));
    assert!(!has_value(&options, &inside));
    let heading = SelectedValue::choice(Selection::new("Cities", "Cities"));
    assert!(!has_value(&options, &heading));

    let top_level = SelectedValue::choice(Selection::new("a", "a"));
    assert!(has_value(&options, &top_level));
}

#[test]
fn test_placeholder_state_token_is_its_label() {
    let placeholder = SelectedValue::placeholder(None);
    assert_eq!(placeholder.display_label(), "Select...");
    // Empty value falls through to the label.
    assert_eq!(placeholder.value_token(), "Select...");
    assert!(!placeholder.is_empty());
}

#[test]
fn test_bare_text_value_semantics() {
    let text = SelectedValue::from("pick something");
    assert_eq!(text.display_label(), "pick something");
    assert_eq!(text.value_token(), "pick something");
    assert!(!text.is_empty());
    assert!(SelectedValue::from("").is_empty());
}

#[test]
fn test_identity_is_pointer_for_choices_text_for_strings() {
    let selection = Arc::new(Selection::new("b", "B"));
    let first = SelectedValue::Choice(Arc::clone(&selection));
    let second = SelectedValue::Choice(selection);
    assert!(first.same_identity(&second));

    // Equal contents, distinct allocations: not the same identity.
    let rebuilt = SelectedValue::choice(Selection::new("b", "B"));
    assert!(!first.same_identity(&rebuilt));

    assert!(SelectedValue::from("x").same_identity(&SelectedValue::from("x")));
    assert!(!SelectedValue::from("x").same_identity(&first));
}

// -----------------------------------------------------------------------------
// Wire shapes
// -----------------------------------------------------------------------------

#[test]
fn test_decode_bare_string() {
    let option: DropdownOption = serde_json::from_str("\"apple\"").unwrap();
    assert_eq!(option, DropdownOption::from("apple"));
}

#[test]
fn test_decode_pair() {
    let option: DropdownOption =
        serde_json::from_str(r#"{"value": "b", "label": "B"}"#).unwrap();
    assert_eq!(option, DropdownOption::from(("b", "B")));
}

#[test]
fn test_decode_partial_pair() {
    let option: OptionEntry = serde_json::from_str(r#"{"label": "B"}"#).unwrap();
    assert_eq!(option.value_token(), "B");
}

#[test]
fn test_decode_group() {
    let raw = r#"{"type": "group", "name": "G", "items": ["x", {"value": "y"}]}"#;
    let option: DropdownOption = serde_json::from_str(raw).unwrap();

    let expected = DropdownOption::group(
        "G",
        [
            OptionEntry::from("x"),
            OptionEntry::Labeled {
                value: Some("y".to_string()),
                label: None,
            },
        ],
    );
    assert_eq!(option, expected);
}

#[test]
fn test_pair_does_not_decode_as_group() {
    let option: DropdownOption = serde_json::from_str(r#"{"value": "b"}"#).unwrap();
    assert!(matches!(option, DropdownOption::Entry(_)));
}

#[test]
fn test_group_serializes_with_tag() {
    let option = DropdownOption::group("G", ["x"]);
    let value = serde_json::to_value(&option).unwrap();
    assert_eq!(value["type"], "group");
    assert_eq!(value["name"], "G");

    let back: DropdownOption = serde_json::from_value(value).unwrap();
    assert_eq!(back, option);
}
