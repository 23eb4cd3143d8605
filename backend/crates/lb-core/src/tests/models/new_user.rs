use crate::NewUser;

use googletest::prelude::*;

#[test]
fn given_new_user_when_debug_formatted_then_password_is_redacted() {
    let user = NewUser::new("alice", "a@x.com", "$argon2id$secret-hash");

    let rendered = format!("{:?}", user);

    assert_that!(rendered, contains_substring("alice"));
    assert_that!(rendered, not(contains_substring("secret-hash")));
}
