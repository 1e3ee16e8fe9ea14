use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum PostCommands {
    /// Submit a post on behalf of a user
    Create {
        #[arg(long)]
        user_id: i32,

        #[arg(long)]
        title: String,

        #[arg(long)]
        url: String,
    },
}
