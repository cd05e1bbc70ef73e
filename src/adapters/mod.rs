//! Adapters: concrete implementations of the ports.

pub mod ai;
pub mod auth;
pub mod http;
pub mod payments;
pub mod postgres;
