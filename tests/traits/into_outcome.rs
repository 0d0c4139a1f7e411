use railway::{IntoOutcome, Outcome, NOT_INITIALIZED};

#[test]
fn result_into_outcome() {
    assert_eq!("7".parse::<u8>().into_outcome(), Outcome::success(7));
    assert_eq!(
        "-1".parse::<u8>().into_outcome().errors(),
        ["invalid digit found in string"]
    );
}

#[test]
fn result_into_outcome_or_replaces_message() {
    let outcome = "x".parse::<u8>().into_outcome_or("expected a byte");
    assert_eq!(outcome.errors(), ["expected a byte"]);
}

#[test]
fn option_into_outcome() {
    assert_eq!(Some(1).into_outcome(), Outcome::success(1));
    assert_eq!(None::<u8>.into_outcome().errors(), [NOT_INITIALIZED]);
    assert_eq!(None::<u8>.into_outcome_or("absent").errors(), ["absent"]);
}
