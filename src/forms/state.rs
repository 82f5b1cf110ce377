use super::fields::FormFields;
use super::validation::{FieldErrors, FieldKind};
use crate::error::{DashboardError, DashboardResult};

/// Whether a form creates a new entity or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn edit_target(self) -> Option<i64> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Edit(_) => "Update",
        }
    }
}

/// A popup form: visibility, mode, field values, inline errors and the focused field.
#[derive(Debug, Clone, Default)]
pub struct FormState<F> {
    pub open: bool,
    pub mode: FormMode,
    pub fields: F,
    pub errors: FieldErrors,
    pub active_field: usize,
    /// Set while an edit target's current values are being fetched.
    pub loading: bool,
}

impl<F: FormFields> FormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the form in create mode with empty fields. Clears any edit target.
    pub fn open_create(&mut self) {
        self.open = true;
        self.mode = FormMode::Create;
        self.clear_values();
    }

    /// Show the form in edit mode. Fields stay empty until `populate` is called.
    pub fn open_edit(&mut self, id: i64) {
        self.open = true;
        self.mode = FormMode::Edit(id);
        self.clear_values();
        self.loading = true;
    }

    pub fn populate(&mut self, fields: F) {
        self.fields = fields;
        self.loading = false;
    }

    /// Hide the form; the edit target is left as is.
    pub fn close(&mut self) {
        self.open = false;
        self.loading = false;
    }

    pub fn edit_target(&self) -> Option<i64> {
        self.mode.edit_target()
    }

    /// Drop the edit target, e.g. after that entity was deleted.
    pub fn reset_target(&mut self) {
        if self.mode != FormMode::Create {
            self.mode = FormMode::Create;
            self.clear_values();
        }
    }

    /// Run field validation, keeping the messages for inline display.
    pub fn validate(&mut self) -> DashboardResult<()> {
        self.errors = self.fields.validate();
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DashboardError::Validation(self.errors.clone()))
        }
    }

    /// After a confirmed submit: close, reset fields, back to create mode.
    pub fn complete_submit(&mut self) {
        self.open = false;
        self.mode = FormMode::Create;
        self.clear_values();
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.mode.verb(), F::ENTITY)
    }

    pub fn error_for(&self, index: usize) -> Option<&str> {
        F::rules().get(index).and_then(|rule| self.errors.get(rule.key))
    }

    pub fn active_kind(&self) -> Option<FieldKind> {
        F::rules().get(self.active_field).map(|rule| rule.kind)
    }

    pub fn next_field(&mut self) {
        let count = F::field_count();
        if count > 0 {
            self.active_field = (self.active_field + 1) % count;
        }
    }

    pub fn prev_field(&mut self) {
        let count = F::field_count();
        if count > 0 {
            self.active_field = (self.active_field + count - 1) % count;
        }
    }

    /// Type into the focused field. Choice fields ignore typing.
    pub fn type_char(&mut self, c: char) {
        if self.active_kind() == Some(FieldKind::Choice) {
            return;
        }
        if let Some(value) = self.fields.value_mut(self.active_field) {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.active_kind() == Some(FieldKind::Choice) {
            return;
        }
        if let Some(value) = self.fields.value_mut(self.active_field) {
            value.pop();
        }
    }

    pub fn set_value(&mut self, index: usize, new_value: impl Into<String>) {
        if let Some(value) = self.fields.value_mut(index) {
            *value = new_value.into();
        }
    }

    fn clear_values(&mut self) {
        self.fields = F::default();
        self.errors.clear();
        self.active_field = 0;
        self.loading = false;
    }
}
