use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum UserCommands {
    /// Register a new user
    Create {
        #[arg(long)]
        username: String,

        /// Must not already be registered
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Show a user with its posts
    Get {
        id: i32,

        /// Also load the user's votes
        #[arg(long)]
        with_votes: bool,

        /// Also load the user's comments
        #[arg(long)]
        with_comments: bool,
    },

    /// Look a user up by email
    GetByEmail { email: String },

    /// List all users
    List,

    /// Delete a user together with its posts, votes and comments
    Delete { id: i32 },
}
