use railway::convert::*;
use railway::{Errors, Outcome};

#[test]
fn result_to_outcome_renders_error() {
    assert_eq!(result_to_outcome(Ok::<_, &str>(1)), Outcome::success(1));
    assert_eq!(result_to_outcome(Err::<i32, _>("boom")).errors(), ["boom"]);
}

#[test]
fn outcome_to_result_keeps_all_messages() {
    let result = outcome_to_result(Outcome::<i32>::failure_many(["a", "b"]));
    assert_eq!(result, Err(Errors::from_iter(["a", "b"])));
}

#[test]
fn outcome_to_first_error_takes_head() {
    assert_eq!(
        outcome_to_first_error(Outcome::<i32>::failure_many(["a", "b"])),
        Err("a".to_string())
    );
    assert_eq!(
        outcome_to_first_error(Outcome::<i32>::failure_many(Vec::<String>::new())),
        Err(String::new())
    );
    assert_eq!(outcome_to_first_error(Outcome::success(2)), Ok(2));
}

#[test]
fn option_to_outcome_uses_message() {
    assert_eq!(option_to_outcome(Some(1), "missing"), Outcome::success(1));
    assert_eq!(option_to_outcome(None::<i32>, "missing").errors(), ["missing"]);
}

#[test]
fn collect_results_does_not_stop_early() {
    let outcome = collect_results(["1", "x", "3", "y"].iter().map(|s| s.parse::<i32>()));
    assert_eq!(outcome.errors().len(), 2);

    let ok = collect_results(["1", "2"].iter().map(|s| s.parse::<i32>()));
    assert_eq!(ok, Outcome::success(vec![1, 2]));
}
