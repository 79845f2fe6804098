//! Property-based tests for formula evaluation.
