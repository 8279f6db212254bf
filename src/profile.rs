//! The structured result of `describe()`.
//!
//! Every type in this crate renders itself as a [`Profile`]: a kind plus an
//! ordered list of labelled fields. Tests assert on the fields, binaries print
//! the `Display` form.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    kind: &'static str,
    fields: Vec<Field>,
}

impl Profile {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    /// Appends a field. Builder-style so variants can chain their ancestor's
    /// fields before their own.
    pub fn field(mut self, label: &'static str, value: impl ToString) -> Self {
        self.fields.push(Field {
            label,
            value: value.to_string(),
        });
        self
    }

    /// Re-labels an ancestor's profile as a more derived kind, keeping its fields.
    pub fn extend(mut self, kind: &'static str) -> Self {
        self.kind = kind;
        self
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    pub fn count(&self, label: &str) -> usize {
        self.fields.iter().filter(|f| f.label == label).count()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.label).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== {} ===", self.kind.to_uppercase())?;
        for field in &self.fields {
            writeln!(f, "{}: {}", field.label, field.value)?;
        }
        Ok(())
    }
}

/// Root capability: anything that can render itself.
pub trait Describe {
    fn describe(&self) -> Profile;
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe(&self) -> Profile {
        (**self).describe()
    }
}
