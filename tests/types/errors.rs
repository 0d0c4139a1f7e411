use railway::{ErrorVec, Errors};

#[test]
fn display_joins_with_semicolons() {
    let errors: Errors = ["a", "b", "c"].into_iter().collect();
    assert_eq!(errors.to_string(), "a; b; c");
    assert_eq!(Errors::new().to_string(), "");
}

#[test]
fn append_preserves_order_and_duplicates() {
    let mut left = Errors::from("x");
    let right: Errors = ["y", "x"].into_iter().collect();
    left.append(right);
    assert_eq!(left.as_slice(), ["x", "y", "x"]);
}

#[test]
fn extend_and_push() {
    let mut errors = Errors::new();
    assert!(errors.is_empty());
    errors.push("one");
    errors.extend(vec![String::from("two"), String::from("three")]);
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.first(), Some("one"));
}

#[test]
fn map_rewrites_each_message() {
    let errors = Errors::from_iter(["a", "b"]).map(|m| format!("[{m}]"));
    assert_eq!(errors.as_slice(), ["[a]", "[b]"]);
}

#[test]
fn single_message_stays_inline() {
    let errors = Errors::from("only");
    let inner: ErrorVec<String> = errors.into_inner();
    assert!(!inner.spilled());
}

#[test]
fn owned_and_borrowed_iteration() {
    let errors = Errors::from_iter(["a", "b"]);
    let borrowed: Vec<&String> = (&errors).into_iter().collect();
    assert_eq!(borrowed.len(), 2);
    let owned: Vec<String> = errors.into_iter().collect();
    assert_eq!(owned, ["a", "b"]);
}

#[cfg(feature = "std")]
#[test]
fn errors_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Errors::from("e"));
}
