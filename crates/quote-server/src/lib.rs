//! Shared library surface for the quote server and its tests.

pub mod api;
pub mod config;
pub mod state;
