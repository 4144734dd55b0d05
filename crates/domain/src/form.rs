//! Configuration form model.
//!
//! Plugins describe their settings form as a set of named elements. The host
//! renders it, collects values into a [`FormState`], and passes both back for
//! validation and submission.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Kind of input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormElementKind {
    /// Single line text input.
    Textfield,
    /// Multi line text input.
    Textarea,
    /// Boolean toggle.
    Checkbox,
}

/// One form element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormElement {
    /// Widget kind.
    pub kind: FormElementKind,
}

impl FormElement {
    /// Creates an element of the given kind.
    #[must_use]
    pub const fn new(kind: FormElementKind) -> Self {
        Self { kind }
    }
}

/// A form: element name to element, in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// Elements keyed by name.
    pub elements: BTreeMap<String, FormElement>,
}

impl Form {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
        }
    }

    /// Adds or replaces an element.
    pub fn insert(&mut self, name: impl Into<String>, element: FormElement) {
        self.elements.insert(name.into(), element);
    }

    /// Gets an element by name.
    #[must_use]
    pub fn element(&self, name: &str) -> Option<&FormElement> {
        self.elements.get(name)
    }
}

/// Values submitted for a form, keyed by element name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<String, Value>,
}

impl FormState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a submitted value, returning the state.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}
