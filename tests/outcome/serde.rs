use railway::{Errors, Outcome};

#[test]
fn success_serializes_as_tagged_variant() {
    let json = serde_json::to_string(&Outcome::success(5)).unwrap();
    assert_eq!(json, r#"{"Success":5}"#);
}

#[test]
fn failure_serializes_messages_as_list() {
    let json = serde_json::to_string(&Outcome::<u8>::failure_many(["a", "b"])).unwrap();
    assert_eq!(json, r#"{"Failure":["a","b"]}"#);
}

#[test]
fn failure_deserializes_in_order() {
    let outcome: Outcome<u8> = serde_json::from_str(r#"{"Failure":["x","y"]}"#).unwrap();
    assert_eq!(outcome.errors(), ["x", "y"]);
}

#[test]
fn errors_serialize_transparently() {
    let errors: Errors = ["one", "two"].into_iter().collect();
    assert_eq!(serde_json::to_string(&errors).unwrap(), r#"["one","two"]"#);
}
