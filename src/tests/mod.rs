//! Cross-module test suites.

mod client_tests;
mod commands_tests;
