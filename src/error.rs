//! Error kinds surfaced by dataset loading and registration.

use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while loading or registering a dataset.
#[derive(Debug, Error)]
pub enum Error {
    /// A required ground truth file or image folder is absent.
    #[error("'{}' does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// The ground truth table is unreadable or has malformed rows.
    #[error("malformed ground truth table '{}': {source}", .path.display())]
    MalformedGroundTruth { path: PathBuf, source: csv::Error },

    /// An image file name does not encode an integer frame number.
    #[error("image file name '{name}' does not encode a frame number")]
    InvalidFrameNumber { name: String },

    /// A dataset name was registered twice.
    #[error("dataset '{name}' is already registered")]
    DatasetExists { name: String },

    /// No producer was registered under the requested name.
    #[error("dataset '{name}' is not registered")]
    UnknownDataset { name: String },

    /// The configuration file is malformed.
    #[error("failed to parse config '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}
