use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::{CliError, CliResult};
use crate::logger;
use crate::post_commands::PostCommands;
use crate::user_commands::UserCommands;

use tn_config::Config;
use tn_core::{Post, User};
use tn_db::{Database, PostRepository, UserRepository};

use log::info;
use serde_json::{Value, json};

/// Load config, set up logging, open the store and run the parsed command.
/// Returns the rendered JSON output.
pub async fn execute(cli: Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let db_path = match cli.database {
        Some(path) => path,
        None => config.database_path()?,
    };
    let db = Database::open(&db_path).await?;

    let result = run(cli.command, &db).await;
    db.close().await;

    render(&result?, cli.pretty)
}

pub(crate) async fn run(command: Commands, db: &Database) -> CliResult<Value> {
    match command {
        Commands::User { action } => run_user(action, db).await,
        Commands::Post { action } => run_post(action, db).await,
    }
}

async fn run_user(action: UserCommands, db: &Database) -> CliResult<Value> {
    let repo = UserRepository::new(db.pool().clone());

    match action {
        UserCommands::Create {
            username,
            email,
            password,
        } => {
            let mut user = User::new(None, username, email, password);
            repo.create(&mut user).await?;
            Ok(serde_json::to_value(&user)?)
        }
        UserCommands::Get {
            id,
            with_votes,
            with_comments,
        } => {
            let mut user = repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| CliError::not_found("User", id))?;
            if with_votes {
                repo.load_votes(&mut user).await?;
            }
            if with_comments {
                repo.load_comments(&mut user).await?;
            }
            Ok(serde_json::to_value(&user)?)
        }
        UserCommands::GetByEmail { email } => {
            let user = repo
                .find_by_email(&email)
                .await?
                .ok_or_else(|| CliError::not_found("User", &email))?;
            Ok(serde_json::to_value(&user)?)
        }
        UserCommands::List => Ok(serde_json::to_value(repo.find_all().await?)?),
        UserCommands::Delete { id } => {
            let deleted = repo.delete(id).await?;
            if !deleted {
                return Err(CliError::not_found("User", id));
            }
            info!("User {} deleted with its posts, votes and comments", id);
            Ok(json!({ "id": id, "deleted": true }))
        }
    }
}

async fn run_post(action: PostCommands, db: &Database) -> CliResult<Value> {
    match action {
        PostCommands::Create {
            user_id,
            title,
            url,
        } => {
            let repo = UserRepository::new(db.pool().clone());
            if repo.find_by_id(user_id).await?.is_none() {
                return Err(CliError::not_found("User", user_id));
            }

            let mut post = Post::new(title, url);
            post.user_id = Some(user_id);
            PostRepository::create(db.pool(), &mut post).await?;
            Ok(serde_json::to_value(&post)?)
        }
    }
}

pub(crate) fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}
