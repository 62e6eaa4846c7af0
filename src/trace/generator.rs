//! Trace generation
//!
//! [`generate`] scans the input once, left to right, and records a [`Step`]
//! for every decision. It is pure: no shared state, no I/O, and an invalid
//! bracket sequence is an ordinary [`ValidationResult`], never an error.

use super::bracket::{parse_brackets, Bracket};
use super::buffer::Buffer;
use super::mode::Mode;
use super::step::{Step, StepAction};
use crate::error::InputError;
use serde::Serialize;
use std::fmt;

/// Verdict plus the full ordered trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub mode: Mode,
    pub is_valid: bool,
    pub steps: Vec<Step>,
    /// Position of the offending closer. Only set for a mismatch or an
    /// empty-buffer removal, never for leftovers found at the final check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_index: Option<usize>,
}

impl ValidationResult {
    pub fn last_step(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Characters handled without failure. On early termination this
    /// excludes the offending closer, so it equals `error_index`.
    pub fn characters_processed(&self) -> usize {
        self.steps.len().saturating_sub(2)
    }
}

/// Plain-text report: a mode header, one `[index] action: message` line per
/// step, then the verdict
impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.mode.upper())?;
        for step in &self.steps {
            writeln!(
                f,
                "[{}] {}: {}",
                step.index(),
                step.action().tag(),
                step.message()
            )?;
        }
        match self.error_index {
            Some(index) => write!(f, "=> INVALID (failed at position {})", index),
            None if self.is_valid => write!(f, "=> VALID"),
            None => write!(f, "=> INVALID (unclosed brackets at end of input)"),
        }
    }
}

/// Both disciplines applied to the same input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub stack: ValidationResult,
    pub queue: ValidationResult,
}

impl Comparison {
    pub fn get(&self, mode: Mode) -> &ValidationResult {
        match mode {
            Mode::Stack => &self.stack,
            Mode::Queue => &self.queue,
        }
    }

    /// Whether the two modes disagree on the verdict
    pub fn diverges(&self) -> bool {
        self.stack.is_valid != self.queue.is_valid
    }
}

/// Produce the full trace for `input` under `mode`
pub fn generate(input: &[Bracket], mode: Mode) -> ValidationResult {
    let mut buffer = Buffer::new();
    let mut steps = Vec::with_capacity(input.len() + 2);

    steps.push(Step::new(StepAction::Start, Vec::new(), mode));

    for (index, &ch) in input.iter().enumerate() {
        if ch.is_opener() {
            buffer.push_tail(ch);
            steps.push(Step::new(
                StepAction::Push { index, opener: ch },
                buffer.snapshot(),
                mode,
            ));
            continue;
        }

        let before = buffer.snapshot();
        let Some(removed) = buffer.remove(mode) else {
            steps.push(Step::new(
                StepAction::EmptyError { index, closer: ch },
                Vec::new(),
                mode,
            ));
            return fail_at(mode, steps, index);
        };

        if !ch.closes(removed) {
            // Shows the buffer as it stood before the attempted removal
            steps.push(Step::new(
                StepAction::Mismatch {
                    index,
                    closer: ch,
                    removed,
                },
                before,
                mode,
            ));
            return fail_at(mode, steps, index);
        }

        steps.push(Step::new(
            StepAction::Match {
                index,
                closer: ch,
                removed,
            },
            buffer.snapshot(),
            mode,
        ));
    }

    let is_valid = buffer.is_empty();
    steps.push(Step::new(
        StepAction::FinalCheck { index: input.len() },
        buffer.snapshot(),
        mode,
    ));

    tracing::debug!(
        mode = %mode,
        len = input.len(),
        steps = steps.len(),
        is_valid,
        "trace generated"
    );

    ValidationResult {
        mode,
        is_valid,
        steps,
        error_index: None,
    }
}

fn fail_at(mode: Mode, steps: Vec<Step>, index: usize) -> ValidationResult {
    tracing::debug!(mode = %mode, steps = steps.len(), error_index = index, "trace stopped early");
    ValidationResult {
        mode,
        is_valid: false,
        steps,
        error_index: Some(index),
    }
}

/// Parse `input` strictly and generate its trace
pub fn validate(input: &str, mode: Mode) -> Result<ValidationResult, InputError> {
    let brackets = parse_brackets(input)?;
    Ok(generate(&brackets, mode))
}

/// Run both modes over the same input
pub fn compare(input: &[Bracket]) -> Comparison {
    Comparison {
        stack: generate(input, Mode::Stack),
        queue: generate(input, Mode::Queue),
    }
}
