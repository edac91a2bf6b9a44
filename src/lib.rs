//! MOT17 ground truth loading toolkit.
//!
//! Converts MOTChallenge ground truth trees into per-image annotation
//! records and registers them with a dataset catalog for detection
//! training.

mod common;
pub mod config;
pub mod dataset;
pub mod error;
pub mod registry;

pub use error::{Error, Result};
