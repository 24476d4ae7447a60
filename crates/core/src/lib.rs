//! Domain vocabulary shared by the store, the HTTP API and the client.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod idea_status;
pub mod inputs;
pub mod tags;
pub mod types;
pub mod validation;
