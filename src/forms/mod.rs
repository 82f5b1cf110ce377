//! Form state shared by the login, register, team and employee screens.

pub mod fields;
pub mod state;
pub mod validation;

pub use fields::{EmployeeFields, FormFields, LoginFields, RegisterFields, TeamFields};
pub use state::{FormMode, FormState};
pub use validation::{is_valid_email, FieldErrors, FieldKind, FieldRule};
