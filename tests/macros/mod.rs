use railway::{combine, Outcome};

#[test]
fn combine_macro_matches_function_form() {
    let by_macro = combine!(Outcome::success(1), Outcome::success(2)).map(|a, b| a + b);
    let by_function = combine((Outcome::success(1), Outcome::success(2))).map(|a, b| a + b);
    assert_eq!(by_macro, by_function);
}

#[test]
fn combine_macro_accepts_trailing_comma() {
    let outcome = combine!(
        Outcome::<u8>::failure("x"),
        Outcome::<u8>::failure("y"),
    )
    .merge();
    assert_eq!(outcome.errors(), ["x", "y"]);
}

#[test]
fn combine_macro_single_argument() {
    let outcome = combine!(Outcome::success(5)).map(|n: i32| n * 2);
    assert_eq!(outcome, Outcome::success(10));
}
