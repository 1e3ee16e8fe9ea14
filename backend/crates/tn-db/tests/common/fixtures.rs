use tn_core::{Comment, Post, User, Vote};

/// Creates an unsaved User with an email derived from the username
pub fn create_test_user(username: &str) -> User {
    User::new(
        None,
        username,
        format!("{}@example.com", username),
        format!("{}-password", username),
    )
}

/// Creates an unsaved Post
pub fn create_test_post(title: &str) -> Post {
    Post::new(title, format!("https://example.com/{}", title.to_lowercase()))
}

/// Creates an unsaved Vote on `post_id`
pub fn create_test_vote(post_id: i32) -> Vote {
    Vote::new(post_id)
}

/// Creates an unsaved Comment on `post_id`
pub fn create_test_comment(post_id: i32) -> Comment {
    Comment::new(post_id, "Test comment content")
}
