//! Property-based tests

mod credentials_proptest;
