use serde::Serialize;

use crate::output::face_record::FaceRecord;

/// Everything the plugin returns to the host for one frame.
///
/// Produced and consumed within a single callback; nothing here refers
/// back to the host's frame memory. An empty `faces` list also stands in
/// for "no result available" after a detector failure; the two states are
/// indistinguishable by design, and callers must not read an empty list as
/// proof that no face was present.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameOutput {
    pub faces: Vec<FaceRecord>,
    pub brightness: f64,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<FramePayload>,
}

impl FrameOutput {
    /// Result for a frame that could not be read at all.
    pub fn empty() -> Self {
        Self {
            faces: Vec::new(),
            brightness: 0.0,
            width: 0,
            height: 0,
            frame: None,
        }
    }
}

/// Optional copies of the frame itself, gated by `returnOriginal` /
/// `convertFrame`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FramePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<RawPixels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<EncodedImage>,
}

/// Packed copy of the frame's pixel samples (row padding stripped).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RawPixels {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub data: Vec<u8>,
}

/// PNG-encoded rendering of the frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EncodedImage {
    pub format: &'static str,
    pub data: Vec<u8>,
}
