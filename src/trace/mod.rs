//! Valid Parentheses trace generation
//!
//! This module holds everything needed to turn an input string into an
//! inspectable, step-by-step trace:
//! - [`Bracket`]: the six-symbol alphabet and its pairing rules
//! - [`Mode`]: stack (LIFO) or queue (FIFO) removal
//! - [`Buffer`]: the working sequence of unmatched openers
//! - [`Step`] / [`StepAction`]: one recorded moment of the scan
//! - [`generate`]: the scan itself, producing a [`ValidationResult`]

pub mod bracket;
pub mod buffer;
pub mod generator;
pub mod mode;
pub mod step;

pub use bracket::{parse_brackets, sanitize, Bracket};
pub use buffer::Buffer;
pub use generator::{compare, generate, validate, Comparison, ValidationResult};
pub use mode::Mode;
pub use step::{Step, StepAction};
