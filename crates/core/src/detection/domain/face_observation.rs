use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::detection::domain::contour::ContourKind;
use crate::detection::domain::landmark::LandmarkKind;
use crate::shared::geometry::{BoundingBox, Point};

/// One detected face, exactly as the detector reported it.
///
/// Everything here is in raw frame coordinates; coordinate correction and
/// config-driven field gating happen later, in the output marshaller.
/// Landmark and contour maps hold only the kinds the detector actually
/// reported; an absent kind stays absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceObservation {
    pub bounds: BoundingBox,
    #[serde(default)]
    pub landmarks: HashMap<LandmarkKind, Point>,
    #[serde(default)]
    pub contours: HashMap<ContourKind, Vec<Point>>,
    #[serde(default)]
    pub left_eye_open_probability: Option<f64>,
    #[serde(default)]
    pub right_eye_open_probability: Option<f64>,
    #[serde(default)]
    pub smiling_probability: Option<f64>,
    /// Stable across frames, assigned by the detector; never computed here.
    #[serde(default)]
    pub tracking_id: Option<i32>,
    pub roll_angle: f64,
    pub pitch_angle: f64,
    pub yaw_angle: f64,
}

impl FaceObservation {
    /// Observation with only a bounding box and head pose; optional fields
    /// empty. Convenient base for builders and fixtures.
    pub fn with_bounds(bounds: BoundingBox) -> Self {
        Self {
            bounds,
            landmarks: HashMap::new(),
            contours: HashMap::new(),
            left_eye_open_probability: None,
            right_eye_open_probability: None,
            smiling_probability: None,
            tracking_id: None,
            roll_angle: 0.0,
            pitch_angle: 0.0,
            yaw_angle: 0.0,
        }
    }
}
