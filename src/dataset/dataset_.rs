use super::*;
use crate::common::*;

/// The generic dataset trait.
pub trait GenericDataset
where
    Self: Debug + Send,
{
    /// The number of color channels of the dataset.
    fn input_channels(&self) -> usize;

    /// The list of class names of the dataset.
    fn classes(&self) -> &IndexSet<String>;
}

/// The dataset with a list of per-image records.
pub trait FileDataset
where
    Self: GenericDataset,
{
    /// Get the list of image records in the dataset.
    fn records(&self) -> &[Arc<ImageRecord>];
}
