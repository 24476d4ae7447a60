//! Axum request handlers, one submodule per resource.

pub mod accounts;
pub mod ideas;
