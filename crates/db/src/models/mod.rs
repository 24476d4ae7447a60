//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row
//! - A `Serialize` public shape returned to API callers
//! - A create DTO for inserts

pub mod account;
pub mod idea;
