//! # Introduction
//!
//! BrackeTTY animates the "Valid Parentheses" check, running the same input
//! through a stack (LIFO) and a queue (FIFO) so the two can be compared step
//! by step. The whole trace is computed up front and then navigated forward
//! and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Brackets → Trace generator → Steps → Replay → TUI
//! ```
//!
//! 1. [`trace`]: bracket alphabet, the mode-driven buffer, and
//!    [`trace::generate`], which records a [`trace::Step`] per decision.
//! 2. [`replay`]: a clamped cursor over the steps with timed auto-play.
//! 3. [`explain`]: optional prose explanation from a text-generation
//!    service, fetched off the UI thread.
//! 4. [`config`] / [`logging`]: settings file, env overrides, tracing setup.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use bracketty::trace::{validate, Mode};
//!
//! let stack = validate("([)]", Mode::Stack).unwrap();
//! let queue = validate("([)]", Mode::Queue).unwrap();
//! assert!(!stack.is_valid);
//! assert_eq!(stack.error_index, Some(2));
//! assert!(queue.is_valid);
//! ```

pub mod config;
pub mod error;
pub mod explain;
pub mod logging;
pub mod replay;
pub mod trace;
pub mod ui;
