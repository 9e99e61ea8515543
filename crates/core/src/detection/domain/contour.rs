use serde::{Deserialize, Serialize};

/// The fifteen named contours a detector can report per face.
///
/// Each contour is an ordered point sequence outlining one facial feature;
/// point order within a sequence is detector-defined and preserved as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContourKind {
    Face,
    LeftCheek,
    LeftEye,
    LeftEyebrowBottom,
    LeftEyebrowTop,
    LowerLipBottom,
    LowerLipTop,
    NoseBottom,
    NoseBridge,
    RightCheek,
    RightEye,
    RightEyebrowBottom,
    RightEyebrowTop,
    UpperLipBottom,
    UpperLipTop,
}

impl ContourKind {
    pub const ALL: [ContourKind; 15] = [
        ContourKind::Face,
        ContourKind::LeftCheek,
        ContourKind::LeftEye,
        ContourKind::LeftEyebrowBottom,
        ContourKind::LeftEyebrowTop,
        ContourKind::LowerLipBottom,
        ContourKind::LowerLipTop,
        ContourKind::NoseBottom,
        ContourKind::NoseBridge,
        ContourKind::RightCheek,
        ContourKind::RightEye,
        ContourKind::RightEyebrowBottom,
        ContourKind::RightEyebrowTop,
        ContourKind::UpperLipBottom,
        ContourKind::UpperLipTop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContourKind::Face => "FACE",
            ContourKind::LeftCheek => "LEFT_CHEEK",
            ContourKind::LeftEye => "LEFT_EYE",
            ContourKind::LeftEyebrowBottom => "LEFT_EYEBROW_BOTTOM",
            ContourKind::LeftEyebrowTop => "LEFT_EYEBROW_TOP",
            ContourKind::LowerLipBottom => "LOWER_LIP_BOTTOM",
            ContourKind::LowerLipTop => "LOWER_LIP_TOP",
            ContourKind::NoseBottom => "NOSE_BOTTOM",
            ContourKind::NoseBridge => "NOSE_BRIDGE",
            ContourKind::RightCheek => "RIGHT_CHEEK",
            ContourKind::RightEye => "RIGHT_EYE",
            ContourKind::RightEyebrowBottom => "RIGHT_EYEBROW_BOTTOM",
            ContourKind::RightEyebrowTop => "RIGHT_EYEBROW_TOP",
            ContourKind::UpperLipBottom => "UPPER_LIP_BOTTOM",
            ContourKind::UpperLipTop => "UPPER_LIP_TOP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_lists_fifteen_distinct_kinds() {
        assert_eq!(ContourKind::ALL.len(), 15);
        let names: HashSet<_> = ContourKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn test_name_matches_serde_form() {
        for kind in ContourKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.name().to_string()));
        }
    }

    #[test]
    fn test_deserializes_from_canonical_name() {
        let kind: ContourKind = serde_json::from_str("\"LEFT_EYEBROW_TOP\"").unwrap();
        assert_eq!(kind, ContourKind::LeftEyebrowTop);
    }
}
