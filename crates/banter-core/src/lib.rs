//! The banter engine: input classification and response dispatch.
//!
//! Everything here is synchronous and I/O-free. The application crate feeds
//! normalized lines in and renders the outcomes; randomness and time come in
//! through the capability traits in [`capability`], so the whole engine runs
//! deterministically under test.

pub mod calculator;
pub mod capability;
pub mod content;
pub mod dispatch;
pub mod normalize;
pub mod session;
