//! Shared fixtures for the SLA engine integration tests.

pub mod calendar;
