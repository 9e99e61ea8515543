use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::face_observation::FaceObservation;
use crate::shared::frame_view::FrameView;

/// Replays pre-recorded face observations instead of running a model.
///
/// Stands in for the on-device SDK in the CLI harness and in tests, so the
/// full callback path (config gating, coordinate correction, marshalling)
/// can run without any vendor runtime. Sequence playback is keyed by call
/// ordinal: the Nth `detect` call returns the Nth recorded frame, and calls
/// past the end return no faces.
pub struct FixtureDetector {
    playback: Playback,
    calls: usize,
}

enum Playback {
    Sequence(Vec<Vec<FaceObservation>>),
    Repeat(Vec<FaceObservation>),
}

impl FixtureDetector {
    /// One recorded observation list per expected frame.
    pub fn new(frames: Vec<Vec<FaceObservation>>) -> Self {
        Self {
            playback: Playback::Sequence(frames),
            calls: 0,
        }
    }

    /// The same observation list for every frame.
    pub fn repeating(faces: Vec<FaceObservation>) -> Self {
        Self {
            playback: Playback::Repeat(faces),
            calls: 0,
        }
    }

    /// Parse a fixture from JSON: an array of face observations that is
    /// replayed for every frame.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let faces: Vec<FaceObservation> = serde_json::from_str(json)?;
        Ok(Self::repeating(faces))
    }
}

impl FaceDetector for FixtureDetector {
    fn detect(
        &mut self,
        _frame: &FrameView,
    ) -> Result<Vec<FaceObservation>, Box<dyn std::error::Error>> {
        let ordinal = self.calls;
        self.calls += 1;
        let faces = match &self.playback {
            Playback::Sequence(frames) => frames.get(ordinal).cloned().unwrap_or_default(),
            Playback::Repeat(faces) => faces.clone(),
        };
        log::debug!("Fixture frame {ordinal}: {} face(s)", faces.len());
        Ok(faces)
    }
}
