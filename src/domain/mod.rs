//! Domain layer: pure types and rules with no I/O.

pub mod billing;
pub mod content;
pub mod foundation;
pub mod profile;
pub mod session;
pub mod wisdom;
