//! Command-line client for the ideas server.

pub mod api;
pub mod cli;
pub mod config;
pub mod identity_store;
pub mod shell;
