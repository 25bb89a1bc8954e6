//! Integration test harness.

mod helpers;

mod cli_test;
