use super::validation::{FieldErrors, FieldKind, FieldRule};

/// The editable values behind a form, addressed by field index.
pub trait FormFields: Default + Clone {
    /// Singular entity name used in titles, e.g. "Team".
    const ENTITY: &'static str;

    fn rules() -> &'static [FieldRule];

    fn value(&self, index: usize) -> &str;

    fn value_mut(&mut self, index: usize) -> Option<&mut String>;

    fn field_count() -> usize {
        Self::rules().len()
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (index, rule) in Self::rules().iter().enumerate() {
            if let Some(message) = rule.check(self.value(index)) {
                errors.insert(rule.key, message);
            }
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamFields {
    pub team_name: String,
}

const TEAM_RULES: &[FieldRule] = &[FieldRule {
    key: "teamName",
    label: "Team name",
    kind: FieldKind::Text,
    required_message: "Please enter team name",
    too_long_message: Some("Team name cannot exceed 50 characters"),
}];

impl FormFields for TeamFields {
    const ENTITY: &'static str = "Team";

    fn rules() -> &'static [FieldRule] {
        TEAM_RULES
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.team_name,
            _ => "",
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.team_name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub designation: String,
    pub team_name: String,
}

impl EmployeeFields {
    pub const TEAM_FIELD: usize = 3;
}

const EMPLOYEE_RULES: &[FieldRule] = &[
    FieldRule {
        key: "employeeName",
        label: "Name",
        kind: FieldKind::Text,
        required_message: "Please enter your name",
        too_long_message: Some("Name cannot exceed 50 characters"),
    },
    FieldRule {
        key: "employeeEmail",
        label: "Email",
        kind: FieldKind::Email,
        required_message: "Please enter your email",
        too_long_message: Some("Email cannot exceed 50 characters"),
    },
    FieldRule {
        key: "employeeDesignation",
        label: "Designation",
        kind: FieldKind::Text,
        required_message: "Please enter your designation",
        too_long_message: Some("Designation cannot exceed 50 characters"),
    },
    FieldRule {
        key: "employeePlatform",
        label: "Team",
        kind: FieldKind::Choice,
        required_message: "Please select a team",
        too_long_message: None,
    },
];

impl FormFields for EmployeeFields {
    const ENTITY: &'static str = "Employee";

    fn rules() -> &'static [FieldRule] {
        EMPLOYEE_RULES
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.email,
            2 => &self.designation,
            3 => &self.team_name,
            _ => "",
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.designation),
            3 => Some(&mut self.team_name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

const LOGIN_RULES: &[FieldRule] = &[
    FieldRule {
        key: "email",
        label: "Email",
        kind: FieldKind::Email,
        required_message: "Please enter your email",
        too_long_message: Some("Email cannot exceed 50 characters"),
    },
    FieldRule {
        key: "password",
        label: "Password",
        kind: FieldKind::Secret,
        required_message: "Please enter your password",
        too_long_message: Some("Password cannot exceed 50 characters"),
    },
];

impl FormFields for LoginFields {
    const ENTITY: &'static str = "Login";

    fn rules() -> &'static [FieldRule] {
        LOGIN_RULES
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.email,
            1 => &self.password,
            _ => "",
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.email),
            1 => Some(&mut self.password),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

const REGISTER_RULES: &[FieldRule] = &[
    FieldRule {
        key: "name",
        label: "Name",
        kind: FieldKind::Text,
        required_message: "Name is required",
        too_long_message: Some("Name cannot exceed 50 characters"),
    },
    FieldRule {
        key: "email",
        label: "Email",
        kind: FieldKind::Email,
        required_message: "Please enter your email",
        too_long_message: Some("Email cannot exceed 50 characters"),
    },
    FieldRule {
        key: "password",
        label: "Password",
        kind: FieldKind::Secret,
        required_message: "Please enter your password",
        too_long_message: Some("Password cannot exceed 50 characters"),
    },
];

impl FormFields for RegisterFields {
    const ENTITY: &'static str = "Register";

    fn rules() -> &'static [FieldRule] {
        REGISTER_RULES
    }

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.email,
            2 => &self.password,
            _ => "",
        }
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.password),
            _ => None,
        }
    }
}
