use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot of a form's named field values, sent as a flat JSON object of strings
///
/// Field names are unique; setting a name that already exists replaces its value, so
/// building a submission from pairs with duplicate names keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission {
    fields: BTreeMap<String, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a submission holding the given fields, each with an empty value
    ///
    /// Mirrors a freshly rendered form: every named input is part of the body even
    /// before the user types anything into it.
    pub fn with_fields(names: &[&str]) -> Self {
        Self::from_pairs(names.iter().map(|name| (*name, "")))
    }

    /// Build a submission from name/value pairs, last duplicate wins
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut form = Self::new();
        for (name, value) in pairs {
            form.set(name, value);
        }

        form
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Value of a field for binding to an input, empty when the field is unknown
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reset every value to the empty string, keeping the field names
    pub fn clear(&mut self) {
        for value in self.fields.values_mut() {
            value.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
