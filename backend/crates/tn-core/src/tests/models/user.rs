use crate::{Comment, Post, Relation, User, Vote};

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use googletest::prelude::*;

fn hash_of(user: &User) -> u64 {
    let mut hasher = DefaultHasher::new();
    user.hash(&mut hasher);
    hasher.finish()
}

fn bob() -> User {
    User::new(Some(1), "bob", "b@x.com", "pw")
}

#[test]
fn given_no_arguments_when_default_then_all_fields_unset() {
    let user = User::default();

    assert_that!(user.id, none());
    assert_that!(user.username.as_str(), eq(""));
    assert_that!(user.email.as_str(), eq(""));
    assert_that!(user.password.as_str(), eq(""));
    assert_that!(user.is_logged_in(), eq(false));
    assert_that!(user.posts, eq(&Relation::NotLoaded));
    assert_that!(user.votes, eq(&Relation::NotLoaded));
    assert_that!(user.comments, eq(&Relation::NotLoaded));
    assert_that!(user.is_persisted(), eq(false));
}

#[test]
fn given_full_arguments_without_id_when_new_then_unsaved_user() {
    let user = User::new(None, "alice", "alice@example.com", "secret");

    assert_that!(user.id, none());
    assert_that!(user.username.as_str(), eq("alice"));
    assert_that!(user.email.as_str(), eq("alice@example.com"));
    assert_that!(user.password.as_str(), eq("secret"));
    assert_that!(user.is_logged_in(), eq(false));
    assert_that!(user.posts.is_loaded(), eq(false));
    assert_that!(user.votes.is_loaded(), eq(false));
    assert_that!(user.comments.is_loaded(), eq(false));
}

#[test]
fn given_identical_fields_when_compared_then_equal_with_same_hash() {
    let left = bob();
    let right = bob();

    assert_that!(left, eq(&right));
    assert_that!(hash_of(&left), eq(hash_of(&right)));
}

#[test]
fn given_identical_loaded_relations_when_compared_then_equal_with_same_hash() {
    let mut left = bob();
    left.posts = Relation::from(vec![Post::new("Rust 2024", "https://example.com/rust")]);
    left.votes = Relation::empty();
    left.comments = Relation::from(vec![Comment::new(3, "nice")]);
    let right = left.clone();

    assert_that!(left, eq(&right));
    assert_that!(hash_of(&left), eq(hash_of(&right)));
}

#[test]
fn given_users_differing_in_one_field_when_compared_then_not_equal() {
    let base = bob();
    let variants: Vec<User> = vec![
        User { id: Some(2), ..bob() },
        User { id: None, ..bob() },
        User { username: "bobby".to_string(), ..bob() },
        User { email: "other@x.com".to_string(), ..bob() },
        User { password: "pw2".to_string(), ..bob() },
        User { logged_in: true, ..bob() },
        User { posts: Relation::empty(), ..bob() },
        User { votes: Relation::from(vec![Vote::new(1)]), ..bob() },
        User { comments: Relation::empty(), ..bob() },
    ];

    for variant in variants {
        assert_that!(variant, not(eq(&base)));
    }
}

#[test]
fn given_not_loaded_and_empty_loaded_relation_when_compared_then_not_equal() {
    let mut fetched = bob();
    fetched.posts = Relation::empty();

    assert_that!(fetched, not(eq(&bob())));
}

#[test]
fn given_user_when_displayed_then_password_in_clear_text() {
    let rendered = bob().to_string();

    assert_that!(rendered, contains_substring("password='pw'"));
    assert_that!(
        rendered,
        eq("User{id=1, username='bob', email='b@x.com', password='pw', loggedIn=false, \
            posts=<not loaded>, votes=<not loaded>, comments=<not loaded>}")
    );
}

#[test]
fn given_unsaved_user_with_posts_when_displayed_then_renders_nested_records() {
    let mut user = User::new(None, "alice", "alice@example.com", "secret");
    user.posts.push(Post::new("Hello", "https://example.com"));
    user.votes = Relation::empty();

    let rendered = user.to_string();

    assert_that!(rendered, starts_with("User{id=null,"));
    assert_that!(
        rendered,
        contains_substring(
            "posts=[Post{id=null, title='Hello', postUrl='https://example.com', userId=null}]"
        )
    );
    assert_that!(rendered, contains_substring("votes=[]"));
}
