//! Dataset registry and metadata catalog.
//!
//! Producer functions are registered under a dataset name and invoked
//! lazily by the consumer of the registry.

use crate::{
    common::*,
    config::DatasetConfig,
    dataset::{mot_classes, ImageRecord, MotDataset, Split},
};

/// Name under which [`register_mot17`] registers the training split.
pub const MOT17_TRAIN: &str = "mot17_train";

/// Name under which [`register_mot17`] registers the test split.
pub const MOT17_TEST: &str = "mot17_test";

type Producer = Box<dyn Fn() -> Result<Vec<Arc<ImageRecord>>> + Send + Sync>;

/// The catalog of record producer functions, keyed by dataset name.
#[derive(Default)]
pub struct DatasetRegistry {
    producers: IndexMap<String, Producer>,
}

impl Debug for DatasetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatasetRegistry")
            .field("names", &self.producers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl DatasetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record producer under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, producer: F) -> Result<()>
    where
        F: Fn() -> Result<Vec<Arc<ImageRecord>>> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.producers.contains_key(&name) {
            return Err(Error::DatasetExists { name });
        }
        self.producers.insert(name, Box::new(producer));
        Ok(())
    }

    /// Invoke the producer registered under `name`.
    pub fn get(&self, name: &str) -> Result<Vec<Arc<ImageRecord>>> {
        let producer = self
            .producers
            .get(name)
            .ok_or_else(|| Error::UnknownDataset {
                name: name.to_owned(),
            })?;
        producer()
    }

    /// Registered dataset names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.producers.keys().map(String::as_str)
    }
}

/// Static per-dataset metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetMetadata {
    /// Class names, indexed by category id.
    pub thing_classes: IndexSet<String>,
}

/// The catalog of static dataset metadata, keyed by dataset name.
#[derive(Debug, Clone, Default)]
pub struct MetadataCatalog {
    metadata: IndexMap<String, DatasetMetadata>,
}

impl MetadataCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the metadata of the named dataset.
    pub fn set(&mut self, name: impl Into<String>, metadata: DatasetMetadata) {
        self.metadata.insert(name.into(), metadata);
    }

    /// Look up the metadata of the named dataset.
    pub fn get(&self, name: &str) -> Result<&DatasetMetadata> {
        self.metadata.get(name).ok_or_else(|| Error::UnknownDataset {
            name: name.to_owned(),
        })
    }
}

/// Register the producers and metadata of both MOT17 splits.
pub fn register_mot17(
    registry: &mut DatasetRegistry,
    catalog: &mut MetadataCatalog,
    config: &DatasetConfig,
) -> Result<()> {
    for (name, split) in [(MOT17_TRAIN, Split::Train), (MOT17_TEST, Split::Test)] {
        let dataset_dir = config.dataset_dir.clone();
        registry.register(name, move || {
            let dataset = MotDataset::load(&dataset_dir, split)?;
            Ok(dataset.records)
        })?;
        catalog.set(
            name,
            DatasetMetadata {
                thing_classes: mot_classes(),
            },
        );
    }
    Ok(())
}
