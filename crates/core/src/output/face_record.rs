use std::collections::BTreeMap;

use serde::Serialize;

use crate::shared::geometry::{BoundingBox, Point};

/// One face as delivered to the host for a single frame.
///
/// Optional fields are present only when the corresponding detector mode
/// was enabled at construction, and a landmark/contour kind the detector
/// did not report is omitted from its map rather than zero-filled.
/// Key order inside the maps is the canonical name order (BTreeMap), so
/// serialized output is stable.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceRecord {
    pub bounds: BoundingBox,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<BTreeMap<&'static str, Point>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contours: Option<BTreeMap<&'static str, Vec<Point>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_eye_open_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_eye_open_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smiling_probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<i32>,
    pub roll_angle: f64,
    pub pitch_angle: f64,
    pub yaw_angle: f64,
}
