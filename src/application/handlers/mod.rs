//! Application use-case handlers.

pub mod billing;
pub mod wisdom;
