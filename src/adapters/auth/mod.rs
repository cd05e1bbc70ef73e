//! Authentication adapters.

mod gotrue;
mod mock;

pub use gotrue::GotrueValidator;
pub use mock::MockSessionValidator;
