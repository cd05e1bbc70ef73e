//! Bhagwat Wisdom backend.
//!
//! Subscription payments (PayPal and Razorpay), AI-generated spiritual
//! guidance with static fallbacks, session state bridging, and reference
//! content, organized hexagonally:
//!
//! - [`domain`]: pure types and rules, no I/O
//! - [`ports`]: async trait boundaries
//! - [`application`]: use-case handlers wiring domain to ports
//! - [`adapters`]: HTTP surface, payment gateways, Gemini, GoTrue, Postgres
//! - [`config`]: typed environment configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
