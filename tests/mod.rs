//! Test suite for user-api
//!
//! This module organizes all tests

pub mod integration;
pub mod property;
