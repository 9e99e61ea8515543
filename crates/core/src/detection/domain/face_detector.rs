use crate::detection::domain::face_observation::FaceObservation;
use crate::shared::frame_view::FrameView;

/// Domain interface for face detection.
///
/// Implementations wrap an on-device model or SDK constructed from a
/// `DetectorConfig` and may keep internal state (e.g. track assignment),
/// hence `&mut self`. The call is synchronous and blocks the callback;
/// face ordering in the result is implementation-defined and callers must
/// treat it as arbitrary. A failed call fails the whole frame; there is
/// no retry.
pub trait FaceDetector: Send {
    fn detect(
        &mut self,
        frame: &FrameView,
    ) -> Result<Vec<FaceObservation>, Box<dyn std::error::Error>>;
}
