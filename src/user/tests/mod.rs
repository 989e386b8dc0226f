//! Unit tests for the user module.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
