//! Error handling and display for the CLI.

use colored::Colorize;
use semid::IdError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Id(#[from] IdError),

    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("'{id}' cannot be decoded with prefix '{prefix}'")]
    Rejected { id: String, prefix: String },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::Id(IdError::MalformedId { .. }) | CliError::Rejected { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Check the prefix with --prefix or SEMID_PREFIX.".yellow()
                );
            }
            CliError::Id(IdError::InvalidArgument { .. }) => {
                eprintln!(
                    "\n{}",
                    "Hint: Byte IDs hold 1 to 256 bytes; sizes must be positive.".yellow()
                );
            }
            _ => {}
        }
    }
}
