use super::*;

fn full_cycle_ms(cycle: &PlaceholderCycle) -> u64 {
    cycle_duration_ms(&cycle.current_question(), CHARS_PER_SEC, HOLD_MS)
}

#[test]
fn starts_empty_and_types_forward() {
    let mut cycle = PlaceholderCycle::new(QuestionGenerator::default(), 1_000);
    assert_eq!(cycle.tick(1_000), "");
    let partial = cycle.tick(1_500);
    assert!(!partial.is_empty());
    assert!(cycle.current_question().starts_with(&partial));
}

#[test]
fn holds_full_question_before_advancing() {
    let mut cycle = PlaceholderCycle::new(QuestionGenerator::default(), 0);
    let question = cycle.current_question();
    let typed_out = full_cycle_ms(&cycle) - HOLD_MS;
    assert_eq!(cycle.tick(typed_out), question);
    assert_eq!(cycle.tick(typed_out + HOLD_MS - 1), question);
    assert_eq!(cycle.index(), 0);
}

#[test]
fn advances_to_next_question_after_cycle() {
    let mut cycle = PlaceholderCycle::new(QuestionGenerator::default(), 0);
    let end = full_cycle_ms(&cycle);
    assert_eq!(cycle.tick(end), "");
    assert_eq!(cycle.index(), 1);
    assert_eq!(cycle.current_question(), QuestionGenerator::default().question(1));
}

#[test]
fn clock_going_backwards_does_not_panic() {
    let mut cycle = PlaceholderCycle::new(QuestionGenerator::default(), 5_000);
    assert_eq!(cycle.tick(10), "");
}
