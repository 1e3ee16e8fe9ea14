use crate::{post_commands::PostCommands, user_commands::UserCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// User account operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Post operations
    Post {
        #[command(subcommand)]
        action: PostCommands,
    },
}
