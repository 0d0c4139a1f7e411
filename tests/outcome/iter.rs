use railway::Outcome;

#[test]
fn success_yields_its_value_once() {
    let outcome = Outcome::success(3);
    assert_eq!(outcome.iter().copied().collect::<Vec<_>>(), vec![3]);
    assert_eq!(outcome.into_iter().collect::<Vec<_>>(), vec![3]);
}

#[test]
fn failure_yields_nothing() {
    let outcome = Outcome::<i32>::failure("x");
    assert_eq!(outcome.iter().count(), 0);
    assert_eq!(outcome.into_iter().next(), None);
}

#[test]
fn iter_errors_walks_messages_in_order() {
    let outcome = Outcome::<i32>::failure_many(["a", "b", "c"]);
    let messages: Vec<&str> = outcome.iter_errors().map(String::as_str).collect();
    assert_eq!(messages, ["a", "b", "c"]);
    assert_eq!(Outcome::success(1).iter_errors().count(), 0);
}

#[test]
fn borrowed_outcome_in_for_loop() {
    let outcome = Outcome::success(vec![1, 2]);
    let mut seen = 0;
    for value in &outcome {
        seen += value.len();
    }
    assert_eq!(seen, 2);
}
