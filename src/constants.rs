pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const API_PREFIX: &str = "/api/v1";
pub const CONFIG_FILE: &str = ".evallo-config.json";
pub const SESSION_FILE: &str = "session.json";
pub const APP_DIR: &str = "evallo";

pub const API_URL_ENV: &str = "EVALLO_API_URL";
pub const SESSION_FILE_ENV: &str = "EVALLO_SESSION_FILE";

// Form validation
pub const MAX_FIELD_LEN: usize = 50;
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

// REST endpoints, relative to API_PREFIX
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const PROFILE_PATH: &str = "/user/profile";
pub const TEAMS_PATH: &str = "/user/teams";
pub const CREATE_TEAM_PATH: &str = "/user/createTeam";
pub const UPDATE_TEAM_PATH: &str = "/user/teams/update";
pub const EMPLOYEES_PATH: &str = "/user/employee";
pub const CREATE_EMPLOYEE_PATH: &str = "/user/createEmployee";
pub const UPDATE_EMPLOYEE_PATH: &str = "/user/employee/update";
pub const MEMBER_COUNTS_PATH: &str = "/user/employeeTeam";
pub const LOGS_PATH: &str = "/user/logs";

// How long success/info notifications stay on screen
pub const NOTIFICATION_TTL_SECS: u64 = 5;
