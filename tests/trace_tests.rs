// Integration tests for the trace generator

use bracketty::trace::{generate, parse_brackets, validate, Bracket, Mode, StepAction};

fn tags(input: &str, mode: Mode) -> Vec<&'static str> {
    validate(input, mode)
        .expect("valid alphabet")
        .steps
        .iter()
        .map(|s| s.action().tag())
        .collect()
}

fn brackets(s: &str) -> Vec<Bracket> {
    parse_brackets(s).expect("valid alphabet")
}

#[test]
fn test_scenario_simple_pair() {
    let result = validate("()", Mode::Stack).unwrap();
    assert!(result.is_valid);
    assert_eq!(result.error_index, None);
    assert_eq!(tags("()", Mode::Stack), ["start", "push", "match", "final-check"]);

    let steps = &result.steps;
    assert_eq!(steps[0].index(), -1);
    assert!(steps[0].structure().is_empty());
    assert_eq!(steps[0].current_char(), None);

    assert_eq!(steps[1].index(), 0);
    assert_eq!(steps[1].structure(), &[Bracket::OpenParen]);
    assert_eq!(steps[1].current_char(), Some(Bracket::OpenParen));

    assert_eq!(steps[2].index(), 1);
    assert!(steps[2].structure().is_empty());
    assert_eq!(steps[2].current_char(), Some(Bracket::CloseParen));

    assert_eq!(steps[3].index(), 2);
    assert!(steps[3].structure().is_empty());
    assert!(steps[3].is_valid_so_far());
}

#[test]
fn test_scenario_mismatch_keeps_pre_removal_snapshot() {
    let result = validate("(]", Mode::Stack).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.error_index, Some(1));
    assert_eq!(tags("(]", Mode::Stack), ["start", "push", "mismatch"]);

    let last = result.last_step().unwrap();
    assert_eq!(last.index(), 1);
    assert_eq!(last.structure(), &[Bracket::OpenParen]);
    assert_eq!(last.current_char(), Some(Bracket::CloseSquare));
    assert!(!last.is_valid_so_far());
}

#[test]
fn test_queue_mismatch_keeps_pre_removal_snapshot() {
    let result = validate("([])", Mode::Queue).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.error_index, Some(2));
    assert_eq!(tags("([])", Mode::Queue), ["start", "push", "push", "mismatch"]);

    // `]` meets `(` at the front; both openers are still shown
    let last = result.last_step().unwrap();
    assert_eq!(last.structure(), &[Bracket::OpenParen, Bracket::OpenSquare]);
    assert_eq!(last.action().removed(), Some(Bracket::OpenParen));
    assert_eq!(last.current_char(), Some(Bracket::CloseSquare));
}

#[test]
fn test_scenario_lone_closer() {
    let result = validate(")", Mode::Stack).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.error_index, Some(0));
    assert_eq!(tags(")", Mode::Stack), ["start", "empty-error"]);

    let last = result.last_step().unwrap();
    assert_eq!(last.index(), 0);
    assert!(last.structure().is_empty());
    assert!(!last.is_valid_so_far());
}

#[test]
fn test_scenario_crossed_pairs_stack() {
    let result = validate("([)]", Mode::Stack).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.error_index, Some(2));
    assert_eq!(tags("([)]", Mode::Stack), ["start", "push", "push", "mismatch"]);

    match result.last_step().unwrap().action() {
        StepAction::Mismatch {
            index,
            closer,
            removed,
        } => {
            assert_eq!(*index, 2);
            assert_eq!(*closer, Bracket::CloseParen);
            assert_eq!(*removed, Bracket::OpenSquare);
        }
        other => panic!("expected mismatch, got {:?}", other),
    }
    assert_eq!(
        result.last_step().unwrap().structure(),
        &[Bracket::OpenParen, Bracket::OpenSquare]
    );
}

#[test]
fn test_scenario_crossed_pairs_queue() {
    let result = validate("([)]", Mode::Queue).unwrap();
    assert!(result.is_valid);
    assert_eq!(result.error_index, None);
    assert_eq!(
        tags("([)]", Mode::Queue),
        ["start", "push", "push", "match", "match", "final-check"]
    );

    // `)` takes `(` from the front, leaving `[`
    assert_eq!(result.steps[3].structure(), &[Bracket::OpenSquare]);
    assert_eq!(result.steps[3].action().removed(), Some(Bracket::OpenParen));
    assert!(result.steps[4].structure().is_empty());
}

#[test]
fn test_scenario_empty_input() {
    for mode in [Mode::Stack, Mode::Queue] {
        let result = validate("", mode).unwrap();
        assert!(result.is_valid);
        assert_eq!(result.error_index, None);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[0].action(), &StepAction::Start);
        assert_eq!(result.steps[1].action(), &StepAction::FinalCheck { index: 0 });
        assert!(result.steps[1].structure().is_empty());
    }
}

#[test]
fn test_unclosed_openers_fail_without_error_index() {
    let result = validate("([", Mode::Stack).unwrap();
    assert!(!result.is_valid);
    assert_eq!(result.error_index, None);

    let last = result.last_step().unwrap();
    assert_eq!(last.action().tag(), "final-check");
    assert_eq!(last.index(), 2);
    assert_eq!(last.structure(), &[Bracket::OpenParen, Bracket::OpenSquare]);
    assert!(!last.is_valid_so_far());
}

#[test]
fn test_only_closers_fail_at_first_character() {
    for mode in [Mode::Stack, Mode::Queue] {
        let result = validate(")]}", mode).unwrap();
        assert_eq!(result.error_index, Some(0));
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.last_step().unwrap().action().tag(), "empty-error");
    }
}

#[test]
fn test_nesting_separates_the_modes() {
    let stack = validate("([])", Mode::Stack).unwrap();
    let queue = validate("([])", Mode::Queue).unwrap();
    assert!(stack.is_valid);
    assert!(!queue.is_valid);
    // queue removes `(` when `]` arrives
    assert_eq!(queue.error_index, Some(2));
}

#[test]
fn test_generate_is_deterministic() {
    for input in ["", "()", "([)]", "{[()]}", "((", "}{"] {
        for mode in [Mode::Stack, Mode::Queue] {
            let b = brackets(input);
            assert_eq!(generate(&b, mode), generate(&b, mode));
        }
    }
}

#[test]
fn test_foreign_characters_are_rejected() {
    assert!(validate("(a)", Mode::Stack).is_err());
    assert!(validate("( )", Mode::Queue).is_err());
}

#[test]
fn test_earlier_snapshots_are_stable() {
    let result = validate("((()))", Mode::Stack).unwrap();
    let depths: Vec<usize> = result.steps.iter().map(|s| s.structure().len()).collect();
    assert_eq!(depths, vec![0, 1, 2, 3, 2, 1, 0, 0]);
}

#[test]
fn test_json_export_shape() {
    let result = validate("(]", Mode::Stack).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["mode"], "stack");
    assert_eq!(json["isValid"], false);
    assert_eq!(json["errorIndex"], 1);
    assert_eq!(json["steps"][0]["index"], -1);
    assert_eq!(json["steps"][0]["currentChar"], serde_json::Value::Null);
    assert_eq!(json["steps"][2]["action"], "mismatch");
    assert_eq!(json["steps"][2]["structure"], serde_json::json!(["("]));

    let valid = serde_json::to_value(validate("()", Mode::Stack).unwrap()).unwrap();
    assert!(valid.get("errorIndex").is_none());
}

#[test]
fn test_plain_report_lines() {
    let report = validate("(]", Mode::Stack).unwrap().to_string();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "== STACK ==");
    assert!(lines[1].starts_with("[-1] start: "));
    assert!(lines[2].starts_with("[0] push: "));
    assert!(lines[3].starts_with("[1] mismatch: STACK Mismatch!"));
    assert_eq!(lines[4], "=> INVALID (failed at position 1)");

    let valid = validate("()", Mode::Queue).unwrap().to_string();
    assert!(valid.contains("[2] final-check: "));
    assert!(valid.ends_with("=> VALID"));
}
