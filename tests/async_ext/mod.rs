//! Integration tests for async extensions.

mod future_ext_tests;
mod lift_tests;
mod macro_tests;
