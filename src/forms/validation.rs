use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{EMAIL_PATTERN, MAX_FIELD_LEN};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex");
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Secret,
    /// Picked from a list rather than typed.
    Choice,
}

/// Validation and display rules for one form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required_message: &'static str,
    pub too_long_message: Option<&'static str>,
}

impl FieldRule {
    /// Checks run in order: required, max length, email pattern. First failure wins.
    /// Whitespace-only input counts as missing, which is stricter than a plain non-empty check.
    pub fn check(&self, value: &str) -> Option<String> {
        if value.trim().is_empty() {
            return Some(self.required_message.to_string());
        }

        if let Some(message) = self.too_long_message {
            if value.chars().count() > MAX_FIELD_LEN {
                return Some(message.to_string());
            }
        }

        if self.kind == FieldKind::Email && !is_valid_email(value) {
            return Some("Invalid email address".to_string());
        }

        None
    }
}

/// Per-field validation messages, keyed by field key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        f.write_str(&parts.join("; "))
    }
}
