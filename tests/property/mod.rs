//! Property-based tests for infinity-format
