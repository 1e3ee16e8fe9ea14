pub mod connection;
pub mod error;
pub mod repositories;

mod rows;

pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::comment_repository::CommentRepository;
pub use repositories::post_repository::PostRepository;
pub use repositories::user_repository::UserRepository;
pub use repositories::vote_repository::VoteRepository;
