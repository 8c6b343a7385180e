//! Integration tests against mocked PageSpeed, DeepSeek and lead intake
//! servers.

// Allow unwrap and panic in tests
#![allow(clippy::unwrap_used, clippy::panic)]

mod support;

mod staged_audit_tests;
