//! Integration tests for the instrumentation pass.

mod pass_tests;
mod property_tests;
mod route_tests;
