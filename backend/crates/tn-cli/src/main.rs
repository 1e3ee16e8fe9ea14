//! tn - technews account administration
//!
//! Works directly against the SQLite store named in the config.
//!
//! # Examples
//!
//! ```bash
//! # Register a user
//! tn user create --username alice --email alice@example.com --password secret
//!
//! # Show a user with everything loaded
//! tn user get 1 --with-votes --with-comments --pretty
//!
//! # Remove a user and all of its posts, votes and comments
//! tn user delete 1
//! ```

use tn_cli::{Cli, execute};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
