use super::*;
use crate::common::*;

/// Suffix of sequence directories whose ground truth is kept.
const GT_DETECTOR_SUFFIX: &str = "FRCNN";

/// The split of a MOT17 dataset tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    /// The subdirectory of the dataset root holding this split.
    pub fn subdir(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }

    /// Sequences whose name starts with this prefix were recorded at
    /// reduced resolution.
    fn reduced_size_prefix(&self) -> &'static str {
        match self {
            Self::Train => "MOT17-05",
            Self::Test => "MOT17-06",
        }
    }

    /// Fixed frame size of the named sequence, as (width, height).
    ///
    /// The size is a static per-name lookup, never read from the image
    /// files.
    pub fn sequence_size(&self, sequence_name: &str) -> (u32, u32) {
        if sequence_name.starts_with(self.reduced_size_prefix()) {
            (640, 480)
        } else {
            (1920, 1080)
        }
    }

    /// Map a ground truth class id to the category id stored in records.
    ///
    /// Test split category ids start at zero, one below the ground truth
    /// class ids.
    pub fn category_id(&self, class: i64) -> i64 {
        match self {
            Self::Train => class,
            Self::Test => class - 1,
        }
    }

    /// The track id carried into an annotation entry, if this split keeps
    /// it.
    fn track_id(&self, id_nb: i64) -> Option<i64> {
        match self {
            Self::Train => Some(id_nb),
            Self::Test => None,
        }
    }
}

/// The MOT17 tracking dataset.
#[derive(Debug, Clone)]
pub struct MotDataset {
    pub split: Split,
    pub classes: IndexSet<String>,
    pub samples: Vec<MotSample>,
    pub records: Vec<Arc<ImageRecord>>,
}

impl GenericDataset for MotDataset {
    fn input_channels(&self) -> usize {
        3
    }

    fn classes(&self) -> &IndexSet<String> {
        &self.classes
    }
}

impl FileDataset for MotDataset {
    fn records(&self) -> &[Arc<ImageRecord>] {
        &self.records
    }
}

impl MotDataset {
    /// Load the training split under `dataset_dir`.
    pub fn load_train<P>(dataset_dir: P) -> Result<MotDataset>
    where
        P: AsRef<Path>,
    {
        Self::load(dataset_dir, Split::Train)
    }

    /// Load the test split under `dataset_dir`.
    pub fn load_test<P>(dataset_dir: P) -> Result<MotDataset>
    where
        P: AsRef<Path>,
    {
        Self::load(dataset_dir, Split::Test)
    }

    /// Load one split of a MOT17 dataset tree.
    ///
    /// Every image file under a kept sequence's `img1/` directory yields
    /// one record, annotated with the ground truth rows of its frame.
    /// Records follow directory listing order, which is not sorted.
    pub fn load<P>(dataset_dir: P, split: Split) -> Result<MotDataset>
    where
        P: AsRef<Path>,
    {
        let split_dir = dataset_dir.as_ref().join(split.subdir());
        info!(
            "loading MOT17 {} split from '{}'",
            split.subdir(),
            split_dir.display()
        );
        if !split_dir.is_dir() {
            return Err(Error::NotFound { path: split_dir });
        }

        let mut num_sequences = 0;
        let mut samples = vec![];
        let mut records = vec![];

        for entry in fs::read_dir(&split_dir)? {
            let entry = entry?;
            let dir_name = entry.file_name().to_string_lossy().into_owned();
            if !dir_name.ends_with(GT_DETECTOR_SUFFIX) {
                continue;
            }
            let sequence_dir = entry.path();

            let sequence_samples = load_gt_file(sequence_dir.join("gt").join("gt.txt"))?;

            let image_dir = sequence_dir.join("img1");
            if !image_dir.is_dir() {
                return Err(Error::NotFound { path: image_dir });
            }

            let (width, height) = split.sequence_size(&dir_name);
            let samples_by_frame: HashMap<i64, Vec<&MotSample>> = sequence_samples
                .iter()
                .map(|sample| (sample.frame_nb, sample))
                .into_group_map();

            for image in fs::read_dir(&image_dir)? {
                let image = image?;
                let image_name = image.file_name().to_string_lossy().into_owned();
                let frame_nb = frame_number(&image_name)?;

                let annotations: Vec<_> = samples_by_frame
                    .get(&frame_nb)
                    .map(|frame_samples| frame_samples.as_slice())
                    .unwrap_or(&[])
                    .iter()
                    .map(|sample| {
                        let MotSample {
                            id_nb,
                            bb_left,
                            bb_top,
                            bb_width,
                            bb_height,
                            class,
                            ..
                        } = **sample;

                        AnnotationEntry {
                            bbox: [bb_left, bb_top, bb_width, bb_height],
                            bbox_mode: BboxMode::XywhAbs,
                            category_id: split.category_id(class),
                            ped_id: split.track_id(id_nb),
                        }
                    })
                    .collect();

                records.push(Arc::new(ImageRecord {
                    file_name: image.path(),
                    image_id: format!("{}/{}", dir_name, image_name),
                    height,
                    width,
                    annotations,
                }));
            }

            samples.extend(sequence_samples);
            num_sequences += 1;
        }

        info!(
            "loaded {} records from {} sequences",
            records.len(),
            num_sequences
        );

        Ok(MotDataset {
            split,
            classes: mot_classes(),
            samples,
            records,
        })
    }
}

/// Parse a headerless nine-column ground truth table.
pub fn load_gt_file(path: impl AsRef<Path>) -> Result<Vec<MotSample>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFound {
            path: path.to_owned(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| Error::MalformedGroundTruth {
            path: path.to_owned(),
            source,
        })?;
    let samples: Vec<MotSample> =
        reader
            .deserialize()
            .try_collect()
            .map_err(|source| Error::MalformedGroundTruth {
                path: path.to_owned(),
                source,
            })?;
    Ok(samples)
}
