use railway::{sequence, sequence_unit, Outcome};

#[test]
fn all_successes_collect_in_order() {
    let outcome = sequence((1..=4).map(Outcome::success));
    assert_eq!(outcome, Outcome::success(vec![1, 2, 3, 4]));
}

#[test]
fn failures_accumulate_in_input_order() {
    let outcome = sequence(vec![
        Outcome::success(1),
        Outcome::failure("second"),
        Outcome::success(3),
        Outcome::failure_many(["fourth-a", "fourth-b"]),
    ]);
    assert_eq!(outcome.errors(), ["second", "fourth-a", "fourth-b"]);
}

#[test]
fn empty_input_is_empty_success() {
    let outcome = sequence(Vec::<Outcome<u8>>::new());
    assert_eq!(outcome, Outcome::success(vec![]));
}

#[test]
fn message_less_failure_still_fails_the_sequence() {
    let outcome = sequence([Outcome::success(1), Outcome::failure_many(Vec::<String>::new())]);
    assert!(outcome.is_failure());
    assert!(outcome.errors().is_empty());
}

#[test]
fn sequence_unit_discards_values() {
    assert_eq!(
        sequence_unit([Outcome::success("a"), Outcome::success("b")]),
        Outcome::unit()
    );
    assert_eq!(
        sequence_unit([Outcome::<()>::failure("x"), Outcome::failure("y")]).errors(),
        ["x", "y"]
    );
}

#[test]
fn collect_into_other_containers() {
    let set: Outcome<std::collections::BTreeSet<i32>> =
        [3, 1, 3].into_iter().map(Outcome::success).collect();
    assert_eq!(set.into_value().map(|s| s.len()), Some(2));
}

#[test]
fn two_failures_report_both_messages() {
    let outcome = sequence([Outcome::<i32>::failure("one"), Outcome::failure("two")]);
    assert_eq!(outcome.errors(), ["one", "two"]);
}

#[test]
fn two_successes_keep_order() {
    let outcome = sequence([Outcome::success(1), Outcome::success(2)]);
    assert_eq!(outcome.into_value(), Some(vec![1, 2]));
}
