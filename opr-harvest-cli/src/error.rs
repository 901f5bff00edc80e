use opr_harvest_forge::ForgeError;
use opr_harvest_lib::HarvestError;
use thiserror::Error;

/// Errors that end the CLI with a non-zero exit status.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The API client could not be set up
    #[error("Client error: {0}")]
    Client(#[from] ForgeError),

    /// Output could not be written
    #[error("Output error: {0}")]
    Output(#[from] HarvestError),
}
