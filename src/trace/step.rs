//! Recorded moments of a trace
//!
//! A [`Step`] pairs one [`StepAction`] with an owned snapshot of the buffer.
//! The action is a closed variant: each tag carries only the data that makes
//! sense for it, so consumers (replay, render) must handle every case.
//! Steps are built once by the generator and never mutated afterwards.

use super::bracket::Bracket;
use super::mode::Mode;
use serde::{Serialize, Serializer};

/// What happened at a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Synthetic step before any character is read
    Start,
    /// An opener was appended to the tail
    Push { index: usize, opener: Bracket },
    /// A closer removed an opener of the same family
    Match {
        index: usize,
        closer: Bracket,
        removed: Bracket,
    },
    /// A closer removed an opener of a different family
    Mismatch {
        index: usize,
        closer: Bracket,
        removed: Bracket,
    },
    /// A closer arrived with nothing left to remove
    EmptyError { index: usize, closer: Bracket },
    /// Synthetic step after the last character; `index` is the input length
    FinalCheck { index: usize },
}

impl StepAction {
    /// Wire tag, matching the names used in exported traces
    pub fn tag(&self) -> &'static str {
        match self {
            StepAction::Start => "start",
            StepAction::Push { .. } => "push",
            StepAction::Match { .. } => "match",
            StepAction::Mismatch { .. } => "mismatch",
            StepAction::EmptyError { .. } => "empty-error",
            StepAction::FinalCheck { .. } => "final-check",
        }
    }

    /// Input position, `-1` for the start step
    pub fn index(&self) -> isize {
        match *self {
            StepAction::Start => -1,
            StepAction::Push { index, .. }
            | StepAction::Match { index, .. }
            | StepAction::Mismatch { index, .. }
            | StepAction::EmptyError { index, .. }
            | StepAction::FinalCheck { index } => index as isize,
        }
    }

    /// Character read at this step, absent for the synthetic steps
    pub fn current_char(&self) -> Option<Bracket> {
        match *self {
            StepAction::Start | StepAction::FinalCheck { .. } => None,
            StepAction::Push { opener, .. } => Some(opener),
            StepAction::Match { closer, .. }
            | StepAction::Mismatch { closer, .. }
            | StepAction::EmptyError { closer, .. } => Some(closer),
        }
    }

    /// Opener taken out of the buffer, if a removal happened
    pub fn removed(&self) -> Option<Bracket> {
        match *self {
            StepAction::Match { removed, .. } | StepAction::Mismatch { removed, .. } => {
                Some(removed)
            }
            _ => None,
        }
    }

    /// Failure pinned to a specific input position
    pub fn is_structural_failure(&self) -> bool {
        matches!(
            self,
            StepAction::Mismatch { .. } | StepAction::EmptyError { .. }
        )
    }
}

/// One immutable entry of a trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    action: StepAction,
    structure: Vec<Bracket>,
    message: String,
    is_valid_so_far: bool,
}

impl Step {
    /// Build a step, deriving the narrative and validity flag from the action.
    ///
    /// `structure` must already be the snapshot the step should display.
    pub fn new(action: StepAction, structure: Vec<Bracket>, mode: Mode) -> Self {
        let is_valid_so_far = match action {
            StepAction::Start | StepAction::Push { .. } | StepAction::Match { .. } => true,
            StepAction::Mismatch { .. } | StepAction::EmptyError { .. } => false,
            StepAction::FinalCheck { .. } => structure.is_empty(),
        };
        let message = describe(&action, &structure, mode);
        Step {
            action,
            structure,
            message,
            is_valid_so_far,
        }
    }

    pub fn action(&self) -> &StepAction {
        &self.action
    }

    /// Buffer contents at this step, oldest first
    pub fn structure(&self) -> &[Bracket] {
        &self.structure
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_valid_so_far(&self) -> bool {
        self.is_valid_so_far
    }

    pub fn index(&self) -> isize {
        self.action.index()
    }

    pub fn current_char(&self) -> Option<Bracket> {
        self.action.current_char()
    }
}

fn describe(action: &StepAction, structure: &[Bracket], mode: Mode) -> String {
    match *action {
        StepAction::Start => format!("Initializing validation using {} logic...", mode.upper()),
        StepAction::Push { opener, .. } => format!(
            "Opening {} found. Adding '{}' to the {}.",
            opener.name(),
            opener,
            mode
        ),
        StepAction::Match {
            closer, removed, ..
        } => format!(
            "Success! '{}' matches with the '{}' from the {}. Removing...",
            closer, removed, mode
        ),
        StepAction::Mismatch {
            closer, removed, ..
        } => format!(
            "{} Mismatch! Found '{}' but expected match for '{}' ({} of {}).",
            mode.upper(),
            closer,
            removed,
            mode.removal_end(),
            mode
        ),
        StepAction::EmptyError { closer, .. } => format!(
            "Closing {} found, but the {} is empty! No match found.",
            closer.name(),
            mode
        ),
        StepAction::FinalCheck { .. } if structure.is_empty() => format!(
            "End of string. {} is empty. The input is VALID under {} logic.",
            mode.capitalized(),
            mode
        ),
        StepAction::FinalCheck { .. } => format!(
            "End of string. {} still has {} {}. The input is INVALID.",
            mode,
            structure.len(),
            if structure.len() == 1 { "item" } else { "items" }
        ),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StepRecord<'a> {
    index: isize,
    structure: &'a [Bracket],
    current_char: Option<Bracket>,
    action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    removed: Option<Bracket>,
    message: &'a str,
    is_valid_so_far: bool,
}

impl Serialize for Step {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StepRecord {
            index: self.index(),
            structure: &self.structure,
            current_char: self.current_char(),
            action: self.action.tag(),
            removed: self.action.removed(),
            message: &self.message,
            is_valid_so_far: self.is_valid_so_far,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_step() {
        let step = Step::new(StepAction::Start, vec![], Mode::Queue);
        assert_eq!(step.index(), -1);
        assert_eq!(step.current_char(), None);
        assert!(step.is_valid_so_far());
        assert_eq!(step.message(), "Initializing validation using QUEUE logic...");
    }

    #[test]
    fn test_final_check_validity_follows_structure() {
        let ok = Step::new(StepAction::FinalCheck { index: 4 }, vec![], Mode::Stack);
        assert!(ok.is_valid_so_far());
        assert_eq!(ok.index(), 4);
        assert!(ok.message().contains("VALID under stack logic"));

        let left_over = Step::new(
            StepAction::FinalCheck { index: 2 },
            vec![Bracket::OpenParen, Bracket::OpenCurly],
            Mode::Stack,
        );
        assert!(!left_over.is_valid_so_far());
        assert_eq!(
            left_over.message(),
            "End of string. stack still has 2 items. The input is INVALID."
        );
    }

    #[test]
    fn test_failure_steps_are_invalid() {
        let mismatch = Step::new(
            StepAction::Mismatch {
                index: 1,
                closer: Bracket::CloseSquare,
                removed: Bracket::OpenParen,
            },
            vec![Bracket::OpenParen],
            Mode::Stack,
        );
        assert!(!mismatch.is_valid_so_far());
        assert!(mismatch.action().is_structural_failure());
        assert_eq!(
            mismatch.message(),
            "STACK Mismatch! Found ']' but expected match for '(' (Top of stack)."
        );

        let empty = Step::new(
            StepAction::EmptyError {
                index: 0,
                closer: Bracket::CloseCurly,
            },
            vec![],
            Mode::Queue,
        );
        assert!(!empty.is_valid_so_far());
        assert_eq!(
            empty.message(),
            "Closing Curly Brace found, but the queue is empty! No match found."
        );
    }

    #[test]
    fn test_serialized_shape() {
        let step = Step::new(
            StepAction::Match {
                index: 1,
                closer: Bracket::CloseParen,
                removed: Bracket::OpenParen,
            },
            vec![],
            Mode::Stack,
        );
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["index"], 1);
        assert_eq!(json["action"], "match");
        assert_eq!(json["currentChar"], ")");
        assert_eq!(json["removed"], "(");
        assert_eq!(json["isValidSoFar"], true);
        assert_eq!(json["structure"], serde_json::json!([]));
    }
}
