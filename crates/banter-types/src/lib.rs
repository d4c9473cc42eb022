//! Shared domain types for banter.
//!
//! This crate holds the types that cross the engine/application boundary:
//! dispatch outcomes and error enums. It depends on nothing but `thiserror`.

pub mod dispatch;
pub mod error;
