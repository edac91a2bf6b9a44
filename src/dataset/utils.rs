use crate::common::*;

/// MOT annotation class names, indexed by ground truth class id.
pub const MOT_CLASS_NAMES: &[&str] = &[
    "other",
    "pedestrian",
    "person on vehicle",
    "car",
    "bicycle",
    "Motorbike",
    "NMVehicle",
    "Static person",
    "Distractor",
    "occluder",
    "occluder_ground",
    "occluder_full",
    "reflection",
];

static CLASSES: Lazy<IndexSet<String>> = Lazy::new(|| {
    MOT_CLASS_NAMES
        .iter()
        .map(|name| (*name).to_owned())
        .collect()
});

/// The MOT class name list as an ordered set.
pub fn mot_classes() -> IndexSet<String> {
    CLASSES.clone()
}

/// Parse the frame number encoded in an image file name.
///
/// The stem is the portion of the name before the first `.`, so that
/// `000001.jpg` gives frame 1.
pub fn frame_number(file_name: &str) -> Result<i64> {
    let stem = file_name.split('.').next().unwrap_or(file_name);
    stem.parse().map_err(|_| Error::InvalidFrameNumber {
        name: file_name.to_owned(),
    })
}
