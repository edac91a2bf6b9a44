//! Common imports from external crates.

pub use indexmap::{IndexMap, IndexSet};
pub use itertools::Itertools as _;
pub use log::info;
pub use noisy_float::prelude::*;
pub use once_cell::sync::Lazy;
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::HashMap,
    fmt,
    fmt::Debug,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

pub use crate::error::{Error, Result};
