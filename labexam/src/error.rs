use algorithms::AlgoError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::reader::InputError;

#[derive(Debug, Error)]
pub enum LabError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Algorithm(#[from] AlgoError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("verification failed for `{program}`: {reason}")]
    VerificationFailed { program: &'static str, reason: String },
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
    #[error("failed to render output")]
    Format(#[from] std::fmt::Error),
}
