use railway::{combine, lift, Invoke, Outcome};
use std::cell::Cell;

#[test]
fn map_over_all_successes() {
    let outcome = combine((Outcome::success(2), Outcome::success(3))).map(|a, b| a * b);
    assert_eq!(outcome, Outcome::success(6));
}

#[test]
fn map_skips_function_when_any_input_failed() {
    let calls = Cell::new(0);
    let outcome = combine((
        Outcome::success(1),
        Outcome::<i32>::failure("bad"),
        Outcome::success(3),
    ))
    .map(|a, b, c| {
        calls.set(calls.get() + 1);
        a + b + c
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(outcome.errors(), ["bad"]);
}

#[test]
fn bind_accumulates_inputs_then_runs_function() {
    let outcome = combine((Outcome::success(10), Outcome::success(0))).bind(|a: i32, b: i32| {
        a.checked_div(b)
            .map_or_else(|| Outcome::failure("division by zero"), Outcome::success)
    });
    assert_eq!(outcome.errors(), ["division by zero"]);
}

#[test]
fn merge_reports_failures_in_position_order() {
    let merged = combine((
        Outcome::<u8>::failure("one"),
        Outcome::<u8>::failure_many(["two", "three"]),
        Outcome::success(3u8),
        Outcome::<u8>::failure("four"),
    ))
    .merge();
    assert_eq!(merged.errors(), ["one", "two", "three", "four"]);
}

#[test]
fn single_input_combine() {
    let outcome = combine((Outcome::success("solo"),)).map(str::len);
    assert_eq!(outcome, Outcome::success(4));
}

#[test]
fn into_inner_returns_untouched_outcomes() {
    let (a, b) = combine((Outcome::success(1), Outcome::<i32>::failure("x"))).into_inner();
    assert_eq!(a, Outcome::success(1));
    assert_eq!(b.errors(), ["x"]);
}

#[test]
fn combine_equals_lift_apply_at_arity_ten() {
    let f = |a: i64, b: i64, c: i64, d: i64, e: i64, g: i64, h: i64, i: i64, j: i64, k: i64| {
        a - b + c - d + e - g + h - i + j - k
    };
    let inputs = || {
        (
            Outcome::success(1),
            Outcome::success(2),
            Outcome::<i64>::failure("c"),
            Outcome::success(4),
            Outcome::success(5),
            Outcome::success(6),
            Outcome::<i64>::failure("h"),
            Outcome::success(8),
            Outcome::success(9),
            Outcome::success(10),
        )
    };

    let (a, b, c, d, e, g, h, i, j, k) = inputs();
    let applied = lift(f)
        .apply(a)
        .apply(b)
        .apply(c)
        .apply(d)
        .apply(e)
        .apply(g)
        .apply(h)
        .apply(i)
        .apply(j)
        .apply(k)
        .invoke(());

    assert_eq!(combine(inputs()).map(f), applied);
    assert_eq!(applied.errors(), ["c", "h"]);
}
