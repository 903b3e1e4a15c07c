//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn jane() -> User {
    let username = Username::new("Jane Doe");
    User::from_draft(UserId::new(7), NewUser::new(username, "Jane", "Doe", 30))
}

#[rstest]
#[case("", "")]
#[case("   ", "")]
#[case("!!!", "")]
#[case(" Jane Doe ", "jane-doe")]
fn usernames_are_kept_verbatim(#[case] value: &str, #[case] slug: &str) {
    let username = Username::new(value);
    assert_eq!(username.as_ref(), value);
    assert_eq!(username.slug().as_ref(), slug);
}

#[rstest]
fn blank_username_deserialises() {
    let username: Username = serde_json::from_value(json!("  ")).expect("any string is accepted");
    assert_eq!(username.as_ref(), "  ");
}

#[rstest]
fn draft_derives_slug_from_username() {
    let username = Username::new("Ada Lovelace");
    let draft = NewUser::new(username, "Ada", "Lovelace", 36);
    assert_eq!(draft.slug().as_ref(), "ada-lovelace");
}

#[rstest]
fn user_serialises_to_wire_shape(jane: User) {
    let value = serde_json::to_value(&jane).expect("serialise user");
    assert_eq!(
        value,
        json!({
            "id": 7,
            "username": "Jane Doe",
            "firstname": "Jane",
            "lastname": "Doe",
            "age": 30,
            "slug": "jane-doe",
        })
    );
}

#[rstest]
fn with_changes_only_touches_supplied_fields(jane: User) {
    let changes = UserChanges {
        firstname: Some("Janet".to_owned()),
        ..UserChanges::default()
    };

    let updated = jane.clone().with_changes(&changes);

    assert_eq!(updated.firstname(), "Janet");
    assert_eq!(updated.lastname(), jane.lastname());
    assert_eq!(updated.age(), jane.age());
    assert_eq!(updated.id(), jane.id());
    assert_eq!(updated.username(), jane.username());
    assert_eq!(updated.slug(), jane.slug());
}

#[rstest]
fn with_changes_overwrites_all_mutable_fields(jane: User) {
    let changes = UserChanges {
        firstname: Some("J".to_owned()),
        lastname: Some("Roe".to_owned()),
        age: Some(31),
    };

    let updated = jane.with_changes(&changes);

    assert_eq!(
        (updated.firstname(), updated.lastname(), updated.age()),
        ("J", "Roe", 31)
    );
    assert_eq!(updated.slug().as_ref(), "jane-doe");
}

#[rstest]
fn empty_changes_are_detected() {
    assert!(UserChanges::default().is_empty());
    assert!(
        !UserChanges {
            age: Some(1),
            ..UserChanges::default()
        }
        .is_empty()
    );
}
