use crate::forms::{
    is_valid_email, EmployeeFields, FieldKind, FormFields, FormMode, FormState, LoginFields, TeamFields,
};

fn long(n: usize) -> String {
    "x".repeat(n)
}

#[test]
fn test_email_pattern() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("first.last+tag@sub.example.org"));
    assert!(!is_valid_email("ada@"));
    assert!(!is_valid_email("ada.example.com"));
    assert!(!is_valid_email("ada@example"));
}

#[test]
fn test_team_name_rules() {
    let mut fields = TeamFields::default();
    assert_eq!(fields.validate().get("teamName"), Some("Please enter team name"));

    fields.team_name = "   ".to_string();
    assert_eq!(fields.validate().get("teamName"), Some("Please enter team name"));

    fields.team_name = long(50);
    assert!(fields.validate().is_empty());

    fields.team_name = long(51);
    assert_eq!(
        fields.validate().get("teamName"),
        Some("Team name cannot exceed 50 characters")
    );
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let fields = TeamFields { team_name: "é".repeat(50) };
    assert!(fields.validate().is_empty());
}

#[test]
fn test_employee_rules_report_every_field() {
    let errors = EmployeeFields::default().validate();
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get("employeeName"), Some("Please enter your name"));
    assert_eq!(errors.get("employeeEmail"), Some("Please enter your email"));
    assert_eq!(errors.get("employeeDesignation"), Some("Please enter your designation"));
    assert_eq!(errors.get("employeePlatform"), Some("Please select a team"));
}

#[test]
fn test_too_long_email_reports_length_before_pattern() {
    let fields = LoginFields {
        email: format!("{}@example.com", long(45)),
        password: "secret".to_string(),
    };
    assert_eq!(
        fields.validate().get("email"),
        Some("Email cannot exceed 50 characters")
    );
}

#[test]
fn test_form_title_follows_mode() {
    let mut form: FormState<TeamFields> = FormState::new();
    form.open_create();
    assert_eq!(form.title(), "Create Team");
    assert_eq!(form.mode.verb(), "Create");

    form.open_edit(3);
    assert_eq!(form.title(), "Update Team");
    assert_eq!(form.edit_target(), Some(3));
    assert!(form.loading);

    let mut employees: FormState<EmployeeFields> = FormState::new();
    employees.open_edit(9);
    assert_eq!(employees.title(), "Update Employee");
}

#[test]
fn test_create_after_edit_starts_clean() {
    let mut form: FormState<TeamFields> = FormState::new();
    form.open_edit(4);
    form.populate(TeamFields { team_name: "Platform".to_string() });
    assert!(!form.loading);
    form.close();

    // The edit target outlives close...
    assert_eq!(form.mode, FormMode::Edit(4));

    // ...but an explicit create clears it.
    form.open_create();
    assert_eq!(form.mode, FormMode::Create);
    assert_eq!(form.fields.team_name, "");
}

#[test]
fn test_failed_validation_keeps_form_open() {
    let mut form: FormState<TeamFields> = FormState::new();
    form.open_create();
    let error = form.validate().unwrap_err();

    assert!(error.is_validation());
    assert!(form.open);
    assert_eq!(form.error_for(0), Some("Please enter team name"));
}

#[test]
fn test_complete_submit_resets_to_create() {
    let mut form: FormState<TeamFields> = FormState::new();
    form.open_edit(2);
    form.populate(TeamFields { team_name: "Ops".to_string() });
    form.complete_submit();

    assert!(!form.open);
    assert_eq!(form.mode, FormMode::Create);
    assert!(form.fields.team_name.is_empty());
    assert!(form.errors.is_empty());
}

#[test]
fn test_reset_target_only_touches_edit_mode() {
    let mut form: FormState<TeamFields> = FormState::new();
    form.open_create();
    form.set_value(0, "Draft");
    form.reset_target();
    assert_eq!(form.fields.team_name, "Draft");

    form.open_edit(5);
    form.set_value(0, "Old");
    form.reset_target();
    assert_eq!(form.mode, FormMode::Create);
    assert!(form.fields.team_name.is_empty());
}

#[test]
fn test_typing_skips_choice_fields() {
    let mut form: FormState<EmployeeFields> = FormState::new();
    form.open_create();
    form.type_char('A');
    form.next_field();
    form.next_field();
    form.next_field();
    assert_eq!(form.active_kind(), Some(FieldKind::Choice));
    form.type_char('B');
    form.backspace();

    assert_eq!(form.fields.name, "A");
    assert!(form.fields.team_name.is_empty());

    form.next_field();
    assert_eq!(form.active_field, 0);
    form.prev_field();
    assert_eq!(form.active_field, EmployeeFields::TEAM_FIELD);
}
