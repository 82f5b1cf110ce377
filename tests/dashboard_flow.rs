use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use evallo::context::AppContextBuilder;
use evallo::dashboard::Dashboard;
use evallo::error::DashboardError;
use evallo::forms::{FormMode, FormState, LoginFields, RegisterFields};
use evallo::routes::Route;
use evallo::ApiClient;

const TOKEN: &str = "token-abc";

fn signed_in_client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri()).unwrap().with_token(TOKEN)
}

async fn mock_get(server: &MockServer, route: &str, body: serde_json::Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1{}", route)))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// The four reads a mutation triggers, each expected `times` times.
async fn mock_refresh(server: &MockServer, times: u64) {
    mock_get(
        server,
        "/user/teams",
        json!({ "teams": [{ "id": 1, "team_name": "Ops" }, { "id": 2, "team_name": "Design" }] }),
        times,
    )
    .await;
    mock_get(
        server,
        "/user/employeeTeam",
        json!({ "counts": [{ "team_id": 1, "count": "3" }] }),
        times,
    )
    .await;
    mock_get(server, "/user/employee", json!({ "employee": [] }), times).await;
    mock_get(server, "/user/logs", json!({ "logs": ["Team Ops created"] }), times).await;
}

fn loaded_dashboard() -> Dashboard {
    let mut dashboard = Dashboard::new();
    dashboard.teams = serde_json::from_value(json!([
        { "id": 1, "team_name": "Ops" },
        { "id": 2, "team_name": "Design" }
    ]))
    .unwrap();
    dashboard
}

#[tokio::test]
async fn login_persists_token_and_opens_dashboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({ "email": "ada@example.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": TOKEN })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut context = AppContextBuilder::new()
        .with_session_file(dir.path().join("session.json"))
        .with_api_url(server.uri())
        .build()
        .unwrap();
    let mut form: FormState<LoginFields> = FormState::new();
    form.open_create();
    form.fields.email = "ada@example.com".to_string();
    form.fields.password = "secret".to_string();

    context.login(&mut form).await.unwrap();

    assert_eq!(context.route(), Route::Dashboard);
    assert!(context.is_authenticated());
    assert_eq!(context.client().token(), Some(TOKEN));
    assert_eq!(context.store().persisted_token().as_deref(), Some(TOKEN));
    assert!(form.fields.email.is_empty());
}

#[tokio::test]
async fn rejected_login_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut context = AppContextBuilder::new()
        .with_session_file(dir.path().join("session.json"))
        .with_api_url(server.uri())
        .build()
        .unwrap();
    let mut form: FormState<LoginFields> = FormState::new();
    form.fields.email = "ada@example.com".to_string();
    form.fields.password = "wrong".to_string();

    let result = context.login(&mut form).await;

    assert!(matches!(result, Err(DashboardError::UnexpectedStatus { status: 401, .. })));
    assert_eq!(context.route(), Route::Login);
    assert!(!context.is_authenticated());
    assert_eq!(form.fields.email, "ada@example.com");
}

#[tokio::test]
async fn login_only_accepts_ok() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "token": TOKEN })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let credentials = evallo::Credentials {
        email: "ada@example.com".to_string(),
        password: "secret".to_string(),
    };
    assert!(client.login(&credentials).await.is_err());
}

#[tokio::test]
async fn register_returns_to_login_without_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .and(body_json(json!({ "name": "Ada", "email": "ada@example.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "created" })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut context = AppContextBuilder::new()
        .with_session_file(dir.path().join("session.json"))
        .with_api_url(server.uri())
        .build()
        .unwrap();
    context.navigate(Route::Register);
    let mut form: FormState<RegisterFields> = FormState::new();
    form.fields.name = "Ada".to_string();
    form.fields.email = "ada@example.com".to_string();
    form.fields.password = "secret".to_string();

    context.register(&mut form).await.unwrap();

    assert_eq!(context.route(), Route::Login);
    assert!(!context.is_authenticated());
}

#[tokio::test]
async fn mount_loads_every_slice() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/user/profile",
        json!({ "user": { "id": 1, "name": "Ada", "email": "ada@example.com", "org_name": "Acme" } }),
        1,
    )
    .await;
    mock_refresh(&server, 1).await;

    let mut dashboard = Dashboard::new();
    let report = dashboard.mount(&signed_in_client(&server)).await;

    assert!(report.is_ok());
    assert_eq!(dashboard.organization_name(), "Acme");
    assert_eq!(dashboard.teams.len(), 2);
    assert_eq!(dashboard.teams[0].member_count, 3);
    assert_eq!(dashboard.teams[1].member_count, 0);
    assert_eq!(dashboard.logs.len(), 1);
}

#[tokio::test]
async fn mount_keeps_going_when_one_slice_fails() {
    let server = MockServer::start().await;
    mock_get(&server, "/user/profile", json!({ "user": { "name": "Ada", "email": "a@b.co" } }), 1).await;
    mock_get(&server, "/user/teams", json!({ "teams": [{ "id": 1, "team_name": "Ops" }] }), 1).await;
    mock_get(&server, "/user/employeeTeam", json!({ "counts": [] }), 1).await;
    mock_get(&server, "/user/employee", json!({ "employee": [] }), 1).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/logs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut dashboard = Dashboard::new();
    let report = dashboard.mount(&signed_in_client(&server)).await;

    assert!(!report.is_ok());
    assert!(report.failed("logs"));
    assert!(!report.failed("teams"));
    assert_eq!(dashboard.teams.len(), 1);
    assert!(dashboard.logs.is_empty());
}

#[tokio::test]
async fn create_team_refreshes_dependent_views() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/user/createTeam"))
        .and(body_json(json!({ "teamName": "Ops" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;
    mock_refresh(&server, 1).await;

    let mut dashboard = Dashboard::new();
    dashboard.open_create_team();
    dashboard.team_form.fields.team_name = "  Ops ".to_string();

    let message = dashboard.submit_team(&signed_in_client(&server)).await.unwrap();

    assert_eq!(message, "Team created successfully");
    assert!(!dashboard.team_form.open);
    assert_eq!(dashboard.team_form.mode, FormMode::Create);
    assert_eq!(dashboard.teams.len(), 2);
    assert_eq!(dashboard.logs.len(), 1);
}

#[tokio::test]
async fn create_team_with_wrong_status_changes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/user/createTeam"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    mock_refresh(&server, 0).await;

    let mut dashboard = Dashboard::new();
    dashboard.open_create_team();
    dashboard.team_form.fields.team_name = "Ops".to_string();

    let result = dashboard.submit_team(&signed_in_client(&server)).await;

    assert!(matches!(result, Err(DashboardError::UnexpectedStatus { status: 200, .. })));
    assert!(dashboard.team_form.open);
    assert_eq!(dashboard.team_form.fields.team_name, "Ops");
}

#[tokio::test]
async fn edit_team_loads_then_updates_by_id() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/user/teams/2",
        json!({ "team": { "id": 2, "team_name": "Design" } }),
        1,
    )
    .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/user/teams/update"))
        .and(body_json(json!({ "teamName": "Product Design", "teamId": 2 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    mock_refresh(&server, 1).await;

    let client = signed_in_client(&server);
    let mut dashboard = loaded_dashboard();
    dashboard.open_edit_team(&client, 2).await.unwrap();

    assert_eq!(dashboard.team_form.title(), "Update Team");
    assert_eq!(dashboard.team_form.fields.team_name, "Design");
    assert!(!dashboard.team_form.loading);

    dashboard.team_form.fields.team_name = "Product Design".to_string();
    let message = dashboard.submit_team(&client).await.unwrap();
    assert_eq!(message, "Team updated successfully");
    assert_eq!(dashboard.team_form.edit_target(), None);
}

#[tokio::test]
async fn employee_create_sends_resolved_team_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/user/createEmployee"))
        .and(body_json(json!({
            "employeeName": "Ada",
            "employeeEmail": "ada@example.com",
            "employeeDesignation": "Engineer",
            "employeePlatform": "Design",
            "teamId": 2
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    mock_refresh(&server, 1).await;

    let mut dashboard = loaded_dashboard();
    dashboard.open_create_employee();
    assert_eq!(dashboard.employee_form.fields.team_name, "Ops");
    dashboard.cycle_employee_team(1);
    let fields = &mut dashboard.employee_form.fields;
    fields.name = "Ada".to_string();
    fields.email = "ada@example.com".to_string();
    fields.designation = "Engineer".to_string();

    let message = dashboard.submit_employee(&signed_in_client(&server)).await.unwrap();
    assert_eq!(message, "Employee created successfully");
}

#[tokio::test]
async fn employee_with_unknown_team_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/user/createEmployee"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut dashboard = loaded_dashboard();
    dashboard.open_create_employee();
    let fields = &mut dashboard.employee_form.fields;
    fields.name = "Ada".to_string();
    fields.email = "ada@example.com".to_string();
    fields.designation = "Engineer".to_string();
    fields.team_name = "Marketing".to_string();

    let error = dashboard
        .submit_employee(&signed_in_client(&server))
        .await
        .unwrap_err();

    assert!(error.is_validation());
    assert_eq!(
        dashboard.employee_form.errors.get("employeePlatform"),
        Some("Please select a team")
    );
    assert!(dashboard.employee_form.open);
}

#[tokio::test]
async fn employee_team_must_match_exactly() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/user/createEmployee"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut dashboard = loaded_dashboard();
    dashboard.open_create_employee();
    let fields = &mut dashboard.employee_form.fields;
    fields.name = "Ada".to_string();
    fields.email = "ada@example.com".to_string();
    fields.designation = "Engineer".to_string();
    fields.team_name = "Ops ".to_string();

    let error = dashboard
        .submit_employee(&signed_in_client(&server))
        .await
        .unwrap_err();

    assert!(error.is_validation());
    assert_eq!(
        dashboard.employee_form.errors.get("employeePlatform"),
        Some("Please select a team")
    );
}

#[tokio::test]
async fn employee_update_carries_employee_id() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/user/employee/11",
        json!({ "employee": {
            "id": 11,
            "employee_name": "Ada",
            "employee_email": "ada@example.com",
            "employee_designation": "Engineer",
            "employee_platform": "Ops"
        } }),
        1,
    )
    .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/user/employee/update"))
        .and(body_json(json!({
            "employeeName": "Ada",
            "employeeEmail": "ada@example.com",
            "employeeDesignation": "Lead Engineer",
            "employeePlatform": "Ops",
            "teamId": 1,
            "employeeId": 11
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    mock_refresh(&server, 1).await;

    let client = signed_in_client(&server);
    let mut dashboard = loaded_dashboard();
    dashboard.open_edit_employee(&client, 11).await.unwrap();
    assert_eq!(dashboard.employee_form.title(), "Update Employee");
    dashboard.employee_form.fields.designation = "Lead Engineer".to_string();

    let message = dashboard.submit_employee(&client).await.unwrap();
    assert_eq!(message, "Employee updated successfully");
}

#[tokio::test]
async fn deleting_the_team_under_edit_resets_the_form() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/user/teams/2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    mock_refresh(&server, 1).await;

    let mut dashboard = loaded_dashboard();
    dashboard.team_form.open_edit(2);
    dashboard.team_form.close();

    let message = dashboard.delete_team(&signed_in_client(&server), 2).await.unwrap();

    assert_eq!(message, "Team deleted successfully");
    assert_eq!(dashboard.team_form.mode, FormMode::Create);
}

#[tokio::test]
async fn deleting_the_employee_under_edit_resets_the_form() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/user/employee/11"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    mock_refresh(&server, 1).await;

    let mut dashboard = loaded_dashboard();
    dashboard.employee_form.open_edit(11);
    assert_eq!(dashboard.employee_form.mode, FormMode::Edit(11));

    let message = dashboard
        .delete_employee(&signed_in_client(&server), 11)
        .await
        .unwrap();

    assert_eq!(message, "Employee deleted successfully");
    assert_eq!(dashboard.employee_form.mode, FormMode::Create);
    assert_eq!(dashboard.teams.len(), 2);
    assert_eq!(dashboard.logs.len(), 1);
}

#[tokio::test]
async fn calls_without_token_never_leave_the_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "teams": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    assert!(matches!(client.get_teams().await, Err(DashboardError::NotAuthenticated)));
}
