pub mod mapping;
pub mod models;

#[cfg(test)]
mod tests;

pub use error_location::ErrorLocation;
pub use mapping::{
    CascadeType, ColumnMapping, EntityMapping, FetchType, RelationMapping, USER_MAPPING,
};
pub use models::comment::Comment;
pub use models::post::Post;
pub use models::relation::Relation;
pub use models::user::User;
pub use models::vote::Vote;
