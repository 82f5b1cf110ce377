pub mod output;
pub mod utils;

pub use output::{print_employees, print_logs, print_profile, print_teams, OutputFormat};
pub use utils::{extract_first_name, format_relative_time, parse_timestamp, truncate};
