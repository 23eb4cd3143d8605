use crate::User;

use chrono::Utc;
use googletest::prelude::*;

fn stored_user() -> User {
    let now = Utc::now();
    User {
        id: 7,
        username: "alice".to_string(),
        email: "a@x.com".to_string(),
        password: "$argon2id$v=19$hash".to_string(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

#[test]
fn given_user_when_identifier_then_carries_id_and_username() {
    let user = stored_user();

    let identifier = user.identifier();

    assert_that!(identifier.id, eq(7));
    assert_that!(identifier.username, eq("alice"));
}

#[test]
fn given_user_when_personal_then_carries_email() {
    let user = stored_user();

    let personal = user.personal();

    assert_that!(personal.id, eq(7));
    assert_that!(personal.username, eq("alice"));
    assert_that!(personal.email, eq("a@x.com"));
}

#[test]
fn given_user_when_serialized_then_password_is_omitted() {
    let user = stored_user();

    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password").is_none());
    assert_eq!(json["username"], "alice");
}

#[test]
fn given_soft_deleted_user_then_is_deleted() {
    let mut user = stored_user();
    assert!(!user.is_deleted());

    user.deleted_at = Some(Utc::now());

    assert!(user.is_deleted());
}
