//! Option and selection types.
//!
//! Options reach the widget in three shapes: a bare string, an explicit
//! (value, label) pair, and a named group of entries. All of them funnel
//! through one effective value/label extraction, so membership checks and
//! highlighting never re-derive the fallback chain at call sites.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Label shown when nothing is selected and no placeholder was supplied.
pub const DEFAULT_PLACEHOLDER: &str = "Select...";

/// One selectable entry, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionEntry {
    /// Bare string: value and label are the same text.
    Plain(String),
    /// Explicit pair; a missing or empty field falls back to the other.
    Labeled {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.is_empty())
}

impl OptionEntry {
    pub fn labeled(value: impl Into<String>, label: impl Into<String>) -> Self {
        OptionEntry::Labeled {
            value: Some(value.into()),
            label: Some(label.into()),
        }
    }

    /// The token used for equality comparisons: value, else label, else
    /// the raw text, else empty.
    pub fn value_token(&self) -> &str {
        match self {
            OptionEntry::Plain(text) => text,
            OptionEntry::Labeled { value, label } => {
                non_empty(value).or_else(|| non_empty(label)).unwrap_or("")
            }
        }
    }

    /// The display text: label, else value, else the raw text.
    pub fn label_text(&self) -> &str {
        match self {
            OptionEntry::Plain(text) => text,
            OptionEntry::Labeled { value, label } => {
                non_empty(label).or_else(|| non_empty(value)).unwrap_or("")
            }
        }
    }

    /// Normalize to a concrete (value, label) pair.
    pub fn resolve(&self) -> Selection {
        Selection {
            value: self.value_token().to_string(),
            label: self.label_text().to_string(),
        }
    }
}

impl From<&str> for OptionEntry {
    fn from(text: &str) -> Self {
        OptionEntry::Plain(text.to_string())
    }
}

impl From<String> for OptionEntry {
    fn from(text: String) -> Self {
        OptionEntry::Plain(text)
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for OptionEntry {
    fn from((value, label): (V, L)) -> Self {
        OptionEntry::labeled(value, label)
    }
}

/// Serde tag for the group table shape (`type = "group"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum GroupTag {
    #[serde(rename = "group")]
    Group,
}

/// A non-selectable heading wrapping a flat list of entries.
///
/// The item type keeps groups one level deep; a group cannot hold another
/// group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    #[serde(rename = "type")]
    kind: GroupTag,
    pub name: String,
    pub items: Vec<OptionEntry>,
}

impl OptionGroup {
    pub fn new(
        name: impl Into<String>,
        items: impl IntoIterator<Item = impl Into<OptionEntry>>,
    ) -> Self {
        Self {
            kind: GroupTag::Group,
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// One top-level menu entry.
///
/// `Group` is listed first so the tagged table shape wins during untagged
/// decoding; a labeled pair would otherwise swallow any table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DropdownOption {
    Group(OptionGroup),
    Entry(OptionEntry),
}

impl DropdownOption {
    pub fn group(
        name: impl Into<String>,
        items: impl IntoIterator<Item = impl Into<OptionEntry>>,
    ) -> Self {
        DropdownOption::Group(OptionGroup::new(name, items))
    }
}

impl From<OptionEntry> for DropdownOption {
    fn from(entry: OptionEntry) -> Self {
        DropdownOption::Entry(entry)
    }
}

impl From<OptionGroup> for DropdownOption {
    fn from(group: OptionGroup) -> Self {
        DropdownOption::Group(group)
    }
}

impl From<&str> for DropdownOption {
    fn from(text: &str) -> Self {
        DropdownOption::Entry(text.into())
    }
}

impl From<String> for DropdownOption {
    fn from(text: String) -> Self {
        DropdownOption::Entry(text.into())
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for DropdownOption {
    fn from(pair: (V, L)) -> Self {
        DropdownOption::Entry(pair.into())
    }
}

/// Iterate every selectable entry, groups flattened in order. Group
/// headings themselves never appear.
pub fn selectable_entries(options: &[DropdownOption]) -> impl Iterator<Item = &OptionEntry> {
    options.iter().flat_map(|option| match option {
        DropdownOption::Entry(entry) => std::slice::from_ref(entry).iter(),
        DropdownOption::Group(group) => group.items.iter(),
    })
}

/// The chosen (value, label) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub value: String,
    pub label: String,
}

impl Selection {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The "nothing chosen" sentinel: empty value, placeholder label.
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: text.into(),
        }
    }

    /// Comparison token: value, else label, else empty.
    pub fn value_token(&self) -> &str {
        if !self.value.is_empty() {
            &self.value
        } else {
            &self.label
        }
    }
}

/// The selection state, and also the shape of the external `value` input.
#[derive(Debug, Clone)]
pub enum SelectedValue {
    /// Bare string: nothing chosen, display this text.
    Text(String),
    /// A concrete selection. The `Arc` carries the reference identity the
    /// change-suppression check compares.
    Choice(Arc<Selection>),
}

impl SelectedValue {
    /// The placeholder state for the given (optional) placeholder text.
    pub fn placeholder(text: Option<&str>) -> Self {
        SelectedValue::Choice(Arc::new(Selection::placeholder(
            text.unwrap_or(DEFAULT_PLACEHOLDER),
        )))
    }

    pub fn choice(selection: Selection) -> Self {
        SelectedValue::Choice(Arc::new(selection))
    }

    /// What the control displays.
    pub fn display_label(&self) -> &str {
        match self {
            SelectedValue::Text(text) => text,
            SelectedValue::Choice(selection) => &selection.label,
        }
    }

    /// Comparison token: value, else label, else the raw text.
    pub fn value_token(&self) -> &str {
        match self {
            SelectedValue::Text(text) => text,
            SelectedValue::Choice(selection) => selection.value_token(),
        }
    }

    /// An empty external value means "no value supplied". Only the bare
    /// empty string qualifies; a `Choice` is never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, SelectedValue::Text(text) if text.is_empty())
    }

    /// Identity comparison: pointer identity for choices, text equality
    /// for bare strings.
    pub fn same_identity(&self, other: &SelectedValue) -> bool {
        match (self, other) {
            (SelectedValue::Text(a), SelectedValue::Text(b)) => a == b,
            (SelectedValue::Choice(a), SelectedValue::Choice(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn as_choice(&self) -> Option<&Arc<Selection>> {
        match self {
            SelectedValue::Choice(selection) => Some(selection),
            SelectedValue::Text(_) => None,
        }
    }
}

impl From<&str> for SelectedValue {
    fn from(text: &str) -> Self {
        SelectedValue::Text(text.to_string())
    }
}

impl From<String> for SelectedValue {
    fn from(text: String) -> Self {
        SelectedValue::Text(text)
    }
}

impl From<Selection> for SelectedValue {
    fn from(selection: Selection) -> Self {
        SelectedValue::choice(selection)
    }
}

impl From<Arc<Selection>> for SelectedValue {
    fn from(selection: Arc<Selection>) -> Self {
        SelectedValue::Choice(selection)
    }
}

/// Whether the current selection's token matches a top-level entry.
/// Drives the `has-value` class.
///
/// The scan is flat and not group-aware: a group container never matches
/// and its items are not consulted, so a selection picked from inside a
/// group does not count as "has a value" here.
pub fn has_value(options: &[DropdownOption], selected: &SelectedValue) -> bool {
    let token = selected.value_token();
    options.iter().any(|option| match option {
        DropdownOption::Entry(entry) => entry.value_token() == token,
        DropdownOption::Group(_) => false,
    })
}
