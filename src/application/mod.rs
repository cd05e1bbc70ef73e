//! Application layer: use cases wiring domain rules to ports.

pub mod handlers;
pub mod session_bridge;

pub use session_bridge::SessionBridge;
