use serde::{Deserialize, Serialize};

/// The ten named landmark points a detector can report per face.
///
/// Serialized names are the canonical SCREAMING_SNAKE identifiers used in
/// the per-face output map and in fixture files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LandmarkKind {
    LeftCheek,
    LeftEar,
    LeftEye,
    MouthBottom,
    MouthLeft,
    MouthRight,
    NoseBase,
    RightCheek,
    RightEar,
    RightEye,
}

impl LandmarkKind {
    pub const ALL: [LandmarkKind; 10] = [
        LandmarkKind::LeftCheek,
        LandmarkKind::LeftEar,
        LandmarkKind::LeftEye,
        LandmarkKind::MouthBottom,
        LandmarkKind::MouthLeft,
        LandmarkKind::MouthRight,
        LandmarkKind::NoseBase,
        LandmarkKind::RightCheek,
        LandmarkKind::RightEar,
        LandmarkKind::RightEye,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LandmarkKind::LeftCheek => "LEFT_CHEEK",
            LandmarkKind::LeftEar => "LEFT_EAR",
            LandmarkKind::LeftEye => "LEFT_EYE",
            LandmarkKind::MouthBottom => "MOUTH_BOTTOM",
            LandmarkKind::MouthLeft => "MOUTH_LEFT",
            LandmarkKind::MouthRight => "MOUTH_RIGHT",
            LandmarkKind::NoseBase => "NOSE_BASE",
            LandmarkKind::RightCheek => "RIGHT_CHEEK",
            LandmarkKind::RightEar => "RIGHT_EAR",
            LandmarkKind::RightEye => "RIGHT_EYE",
        }
    }
}
