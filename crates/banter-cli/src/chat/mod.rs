//! The interactive chat session: banner, welcome sequence, input loop,
//! outcome rendering, and the calculator sub-loop.

pub mod banner;
pub mod help;
pub mod input;
pub mod loop_runner;
pub mod render;
