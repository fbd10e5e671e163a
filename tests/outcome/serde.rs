use outcome_rail::Outcome;

#[test]
fn outcome_is_externally_tagged() {
    let ok = Outcome::<i32, String>::success(7);
    assert_eq!(serde_json::to_string(&ok).ok(), Some(r#"{"Success":7}"#.to_string()));

    let failed = Outcome::<i32, String>::failure("bad".to_string());
    assert_eq!(
        serde_json::to_string(&failed).ok(),
        Some(r#"{"Failure":"bad"}"#.to_string())
    );
}

#[test]
fn outcome_deserializes_from_tagged_json() {
    let parsed: Outcome<i32, String> =
        serde_json::from_str(r#"{"Failure":"bad"}"#).unwrap_or(Outcome::Success(0));
    assert_eq!(parsed, Outcome::Failure("bad".to_string()));
}

#[test]
fn partitioned_errors_serialize_as_a_sequence() {
    let (_, errors) = outcome_rail::partition([
        Outcome::<(), _>::failure(1),
        Outcome::success(()),
        Outcome::failure(2),
    ]);
    assert_eq!(serde_json::to_string(&errors).ok(), Some("[1,2]".to_string()));
}
