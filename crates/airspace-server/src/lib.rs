//! Shared library surface for the dashboard backend and its tests.

pub mod api;
pub mod config;
pub mod state;
