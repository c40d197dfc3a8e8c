//! Class-name derivation.
//!
//! Every presentational class is derived from one base prefix so
//! consumers can retheme the whole structure by swapping the base.

/// Modifier class on the root while the menu is open.
pub const IS_OPEN: &str = "is-open";
/// Modifier class on the option row matching the current selection.
pub const IS_SELECTED: &str = "is-selected";
/// Modifier class on the control when the selection matches an option.
pub const HAS_VALUE: &str = "has-value";

/// Default base prefix.
pub const DEFAULT_BASE_CLASS: &str = "Dropdown";

/// Derives the prefixed class names from a base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    base: String,
}

impl ClassNames {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn root(&self) -> String {
        format!("{}-root", self.base)
    }

    pub fn control(&self) -> String {
        format!("{}-control", self.base)
    }

    pub fn disabled(&self) -> String {
        format!("{}-disabled", self.base)
    }

    pub fn placeholder(&self) -> String {
        format!("{}-placeholder", self.base)
    }

    pub fn arrow(&self) -> String {
        format!("{}-arrow", self.base)
    }

    pub fn menu(&self) -> String {
        format!("{}-menu", self.base)
    }

    pub fn option(&self) -> String {
        format!("{}-option", self.base)
    }

    pub fn group(&self) -> String {
        format!("{}-group", self.base)
    }

    pub fn title(&self) -> String {
        format!("{}-title", self.base)
    }

    pub fn noresults(&self) -> String {
        format!("{}-noresults", self.base)
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_CLASS)
    }
}
