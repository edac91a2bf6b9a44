//! Dataset loading configuration format.

use crate::common::*;

/// The top level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
}

/// Dataset options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// The directory containing the `train` and `test` split trees.
    pub dataset_dir: PathBuf,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text).map_err(|err| Error::Config {
            path: path.to_owned(),
            message: err.to_string(),
        })?;
        Ok(config)
    }
}
