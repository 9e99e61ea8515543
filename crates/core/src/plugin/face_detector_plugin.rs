use serde_json::{Map, Value};

use crate::brightness::estimator;
use crate::config::detector_config::DetectorConfig;
use crate::detection::domain::face_detector::FaceDetector;
use crate::output::bounds_transform::BoundsTransform;
use crate::output::frame_encoder;
use crate::output::frame_output::{FrameOutput, FramePayload};
use crate::output::marshal::marshal_face;
use crate::plugin::frame_plugin::FramePlugin;
use crate::shared::display_metrics::DisplayMetrics;
use crate::shared::frame_view::FrameView;

/// Face detection adapter between the host pipeline and a detector backend.
///
/// Configuration is parsed once at construction and never changes; per
/// frame the plugin estimates brightness straight from the pixel buffer,
/// runs the detector, and marshals its observations. A detector failure is
/// logged and yields an empty face list for that frame only; brightness
/// and frame metadata are still reported.
pub struct FaceDetectorPlugin {
    detector: Box<dyn FaceDetector>,
    config: DetectorConfig,
    display: DisplayMetrics,
}

impl FaceDetectorPlugin {
    /// Construct from the host options bag (permissively parsed).
    pub fn new(
        detector: Box<dyn FaceDetector>,
        options: &Map<String, Value>,
        display: DisplayMetrics,
    ) -> Self {
        Self::with_config(detector, DetectorConfig::from_options(options), display)
    }

    pub fn with_config(
        detector: Box<dyn FaceDetector>,
        config: DetectorConfig,
        display: DisplayMetrics,
    ) -> Self {
        Self {
            detector,
            config,
            display,
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    fn frame_payload(&self, frame: &FrameView) -> Option<FramePayload> {
        if !self.config.return_original && !self.config.convert_frame {
            return None;
        }

        let original = self
            .config
            .return_original
            .then(|| frame_encoder::original_payload(frame));
        let converted = if self.config.convert_frame {
            match frame_encoder::convert_to_png(frame) {
                Ok(encoded) => Some(encoded),
                Err(e) => {
                    log::error!("Frame conversion failed: {e}");
                    None
                }
            }
        } else {
            None
        };

        Some(FramePayload {
            original,
            converted,
        })
    }
}

impl FramePlugin for FaceDetectorPlugin {
    fn callback(&mut self, frame: &FrameView) -> FrameOutput {
        let brightness = estimator::estimate(frame);
        let transform =
            BoundsTransform::select(&self.config, &self.display, frame.width(), frame.height());

        let faces = match self.detector.detect(frame) {
            Ok(observations) => observations
                .iter()
                .map(|obs| marshal_face(obs, &self.config, transform))
                .collect(),
            Err(e) => {
                log::error!("Error processing face detection: {e}");
                Vec::new()
            }
        };

        FrameOutput {
            faces,
            brightness,
            width: frame.width(),
            height: frame.height(),
            frame: self.frame_payload(frame),
        }
    }
}
