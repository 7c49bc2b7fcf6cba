//! Backend services for activity and participant management.
//!
//! This module provides the service layer abstraction over the activity store
//! and its in-memory implementation, plus the seed data the store starts from.

pub mod activities;
pub mod seed;

pub use activities::*;
