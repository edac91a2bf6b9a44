use crate::common::*;

/// Bounding box encoding of an annotation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BboxMode {
    /// Absolute pixel (left, top, width, height).
    XywhAbs,
}

/// One row of a `gt/gt.txt` ground truth table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct MotSample {
    pub frame_nb: i64,
    pub id_nb: i64,
    pub bb_left: R64,
    pub bb_top: R64,
    pub bb_width: R64,
    pub bb_height: R64,
    pub conf_score: R64,
    pub class: i64,
    pub visibility: R64,
}

/// One annotation attached to an image record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AnnotationEntry {
    /// Bounding box in pixel units.
    pub bbox: [R64; 4],
    pub bbox_mode: BboxMode,
    pub category_id: i64,
    /// Track id of the annotated object, kept for the training split.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ped_id: Option<i64>,
}

/// The record with image path and annotations, but without image pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImageRecord {
    pub file_name: PathBuf,
    /// `<sequence directory>/<image file name>`, unique across the dataset.
    pub image_id: String,
    pub height: u32,
    pub width: u32,
    pub annotations: Vec<AnnotationEntry>,
}
