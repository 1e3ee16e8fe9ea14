use crate::{Post, Relation};

use googletest::prelude::*;

#[test]
fn given_default_relation_then_not_loaded_and_empty() {
    let relation: Relation<Post> = Relation::default();

    assert_that!(relation.is_loaded(), eq(false));
    assert_that!(relation.as_slice(), none());
    assert_that!(relation.len(), eq(0));
    assert_that!(relation.iter().count(), eq(0));
}

#[test]
fn given_not_loaded_relation_when_push_then_becomes_loaded() {
    let mut relation = Relation::NotLoaded;

    relation.push(Post::new("First", "https://example.com/1"));
    relation.push(Post::new("Second", "https://example.com/2"));

    assert_that!(relation.is_loaded(), eq(true));
    assert_that!(relation.len(), eq(2));
    let titles: Vec<&str> = relation.iter().map(|p| p.title.as_str()).collect();
    assert_that!(titles, eq(&vec!["First", "Second"]));
}

#[test]
fn given_loaded_relation_when_iter_mut_then_items_updated() {
    let mut relation = Relation::from(vec![Post::default(), Post::default()]);

    for post in relation.iter_mut() {
        post.user_id = Some(9);
    }

    assert_that!(relation.iter().all(|p| p.user_id == Some(9)), eq(true));
}

#[test]
fn given_option_when_converted_then_matches_load_state() {
    let missing: Relation<Post> = Relation::from(None);
    let present: Relation<Post> = Relation::from(Some(Vec::new()));

    assert_that!(missing, eq(&Relation::NotLoaded));
    assert_that!(present, eq(&Relation::empty()));
    assert_that!(present.into_vec(), eq(&Some(Vec::<Post>::new())));
}
