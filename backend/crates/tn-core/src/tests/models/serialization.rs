use crate::{Post, Relation, User};

use googletest::prelude::*;
use serde_json::{Value, json};

#[test]
fn given_user_when_serialized_then_camel_case_keys_and_null_for_unloaded() {
    let mut user = User::new(Some(4), "carol", "carol@example.com", "hunter2");
    user.logged_in = true;
    user.posts = Relation::from(vec![Post {
        id: Some(10),
        title: "Hi".to_string(),
        post_url: "https://example.com".to_string(),
        user_id: Some(4),
    }]);

    let value = serde_json::to_value(&user).unwrap();

    assert_that!(
        value,
        eq(&json!({
            "id": 4,
            "username": "carol",
            "email": "carol@example.com",
            "password": "hunter2",
            "loggedIn": true,
            "posts": [{"id": 10, "title": "Hi", "postUrl": "https://example.com", "userId": 4}],
            "votes": null,
            "comments": null
        }))
    );
}

#[test]
fn given_serialized_user_then_no_lazy_loading_artifacts() {
    let value = serde_json::to_value(User::default()).unwrap();
    let object = value.as_object().unwrap();

    assert_that!(object.contains_key("hibernateLazyInitializer"), eq(false));
    assert_that!(object.contains_key("handler"), eq(false));
}

#[test]
fn given_json_with_lazy_loading_artifacts_when_deserialized_then_ignored() {
    let input = json!({
        "id": 2,
        "username": "dave",
        "email": "dave@example.com",
        "password": "pw",
        "hibernateLazyInitializer": {},
        "handler": {},
        "votes": []
    });

    let user: User = serde_json::from_value(input).unwrap();

    assert_that!(user.id, some(eq(2)));
    assert_that!(user.logged_in, eq(false));
    assert_that!(user.posts, eq(&Relation::NotLoaded));
    assert_that!(user.votes, eq(&Relation::empty()));
}

#[test]
fn given_user_when_json_round_tripped_then_equal() {
    let mut user = User::new(Some(7), "erin", "erin@example.com", "pw");
    user.posts = Relation::from(vec![Post::new("t", "u")]);

    let text = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&text).unwrap();

    assert_that!(back, eq(&user));
    assert_that!(serde_json::to_value(&back).unwrap()["votes"], eq(&Value::Null));
}
