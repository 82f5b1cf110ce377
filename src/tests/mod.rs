mod error_tests;
mod form_tests;
