//! The shared library for Mergington, the extracurricular activity sign-up service.
//!
//! This library provides the wire data structures, typed names, error types and
//! logging setup used by the backend and by anything talking to it.

pub mod data;
pub mod errors;
pub mod log;
pub mod name;

pub use serde;
pub use serde_json;
pub use tracing;
