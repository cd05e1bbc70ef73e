//! Payment gateway adapters.

mod paypal;
mod razorpay;

pub use paypal::PaypalGateway;
pub use razorpay::RazorpayGateway;
