//! CLI interface module
//!
//! One-shot commands sharing the query service graph with the server.

pub mod commands;

use std::fmt;

use crate::cli::Commands;
use crate::config::get_config;
use crate::runtime::lifetime::shutdown::close_database;
use crate::runtime::lifetime::startup::build_query_handler;
use crate::storage::StorageFactory;
use commands::{echo_text, generate_config, list_logs, top_by_density};

#[derive(Debug)]
pub enum CliError {
    /// Storage could not be opened or queried
    Storage(String),
    /// The command itself failed
    Command(String),
}

impl CliError {
    fn label(&self) -> &'static str {
        match self {
            CliError::Storage(_) => "Storage error:",
            CliError::Command(_) => "Command error:",
        }
    }

    fn detail(&self) -> &str {
        match self {
            CliError::Storage(msg) | CliError::Command(msg) => msg,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{} {}", self.label(), self.detail())
    }

    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!("{} {}", self.label().red().bold(), self.detail())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::AppError> for CliError {
    fn from(err: crate::errors::AppError) -> Self {
        CliError::Storage(err.to_string())
    }
}

/// Commands that read or write the audit log
enum StorageCommand {
    Top { count: i64, user: Option<String> },
    Logs,
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Serve => Err(CliError::Command(
            "serve runs the HTTP server, not a one-shot command".to_string(),
        )),
        Commands::GenerateConfig { output_path } => generate_config(output_path).await,
        Commands::Echo { text } => {
            echo_text(text.as_deref());
            Ok(())
        }
        Commands::Top { count, user } => {
            run_with_storage(StorageCommand::Top { count, user }).await
        }
        Commands::Logs => run_with_storage(StorageCommand::Logs).await,
    }
}

async fn run_with_storage(cmd: StorageCommand) -> Result<(), CliError> {
    let storage = StorageFactory::create().await?;
    let handler = build_query_handler(storage.clone(), &get_config());

    let result = match cmd {
        StorageCommand::Top { count, user } => {
            top_by_density(&handler, count, user.as_deref()).await
        }
        StorageCommand::Logs => list_logs(&handler).await,
    };

    close_database(storage.get_db().clone()).await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_is_not_a_one_shot_command() {
        let err = run_cli_command(Commands::Serve).await.unwrap_err();
        assert!(matches!(err, CliError::Command(_)));
    }

    #[tokio::test]
    async fn test_echo_runs_without_storage() {
        assert!(run_cli_command(Commands::Echo { text: None }).await.is_ok());
        assert!(
            run_cli_command(Commands::Echo {
                text: Some("hi".to_string())
            })
            .await
            .is_ok()
        );
    }
}
