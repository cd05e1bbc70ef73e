//! Wisdom use cases.

mod get_wisdom;
mod interpret_dream;
mod solve_problem;

pub use get_wisdom::{GetWisdomCommand, GetWisdomHandler, WisdomOutcome};
pub use interpret_dream::{InterpretDreamCommand, InterpretDreamHandler, InterpretDreamResult};
pub use solve_problem::{SolveProblemCommand, SolveProblemHandler, SolveProblemResult};
