use crate::{ApiError, RegisterUserRequest};

use googletest::prelude::*;

fn request(username: &str, email: &str, password: &str, confirm: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        password_confirm: confirm.to_string(),
    }
}

fn invalid_field(req: RegisterUserRequest) -> Option<String> {
    match req.validate() {
        Err(ApiError::Validation { field, .. }) => field,
        _ => None,
    }
}

#[test]
fn given_complete_request_when_validated_then_ok() {
    let req = request("alice", "a@x.com", "secret123", "secret123");

    assert_that!(req.validate(), ok(anything()));
}

#[test]
fn given_blank_username_when_validated_then_username_field() {
    let req = request("  ", "a@x.com", "secret123", "secret123");

    assert_that!(invalid_field(req), some(eq("username")));
}

#[test]
fn given_missing_email_when_validated_then_email_field() {
    let req = request("alice", "", "secret123", "secret123");

    assert_that!(invalid_field(req), some(eq("email")));
}

#[test]
fn given_malformed_emails_when_validated_then_email_field() {
    for email in ["alice", "@x.com", "a@x", "a@@x.com", "a@x..com", "a b@x.com"] {
        let req = request("alice", email, "secret123", "secret123");

        assert_that!(invalid_field(req), some(eq("email")));
    }
}

#[test]
fn given_short_password_when_validated_then_password_field() {
    let req = request("alice", "a@x.com", "short", "short");

    assert_that!(invalid_field(req), some(eq("password")));
}

#[test]
fn given_mismatched_confirmation_when_validated_then_confirm_field() {
    let req = request("alice", "a@x.com", "secret123", "secret124");

    assert_that!(invalid_field(req), some(eq("password_confirm")));
}

#[test]
fn given_request_when_debug_formatted_then_password_omitted() {
    let req = request("alice", "a@x.com", "secret123", "secret123");

    assert_that!(format!("{:?}", req), not(contains_substring("secret123")));
}
