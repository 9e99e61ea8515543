use serde_json::{Map, Value};

use crate::config::options_bag;

pub const DEFAULT_MIN_FACE_SIZE: f64 = 0.15;

/// Detector speed/accuracy trade-off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PerformanceMode {
    #[default]
    Fast,
    Accurate,
}

/// Whether the detector reports named landmark points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LandmarkMode {
    #[default]
    None,
    All,
}

/// Whether the detector reports eye-open / smiling probabilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClassificationMode {
    #[default]
    None,
    All,
}

/// Whether the detector reports contour point sequences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContourMode {
    #[default]
    None,
    All,
}

/// Validated detector configuration, immutable for the plugin's lifetime.
///
/// Built once from the host options bag; changing any option requires
/// constructing a new plugin (and with it a new detector instance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectorConfig {
    pub performance_mode: PerformanceMode,
    pub landmark_mode: LandmarkMode,
    pub classification_mode: ClassificationMode,
    pub contour_mode: ContourMode,
    /// Smallest face to report, relative to the frame's larger dimension.
    pub min_face_size: f64,
    pub tracking_enabled: bool,
    pub auto_scale: bool,
    pub return_original: bool,
    pub convert_frame: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            performance_mode: PerformanceMode::Fast,
            landmark_mode: LandmarkMode::None,
            classification_mode: ClassificationMode::None,
            contour_mode: ContourMode::None,
            min_face_size: DEFAULT_MIN_FACE_SIZE,
            tracking_enabled: false,
            auto_scale: false,
            return_original: false,
            convert_frame: false,
        }
    }
}

impl DetectorConfig {
    /// Permissive parse of the host options bag.
    ///
    /// Every key is optional; an absent, unknown, or mistyped value falls
    /// back to its default silently. `minFaceSize` must additionally be a
    /// finite fraction in (0, 1] to be accepted.
    pub fn from_options(options: &Map<String, Value>) -> Self {
        let mut config = Self::default();

        if options_bag::get_str(options, "performanceMode").as_deref() == Some("accurate") {
            config.performance_mode = PerformanceMode::Accurate;
        }
        if options_bag::get_str(options, "landmarkMode").as_deref() == Some("all") {
            config.landmark_mode = LandmarkMode::All;
        }
        if options_bag::get_str(options, "classificationMode").as_deref() == Some("all") {
            config.classification_mode = ClassificationMode::All;
        }
        if options_bag::get_str(options, "contourMode").as_deref() == Some("all") {
            config.contour_mode = ContourMode::All;
        }

        if let Some(size) = options_bag::get_f64(options, "minFaceSize") {
            if size.is_finite() && size > 0.0 && size <= 1.0 {
                config.min_face_size = size;
            } else {
                log::debug!("Ignoring out-of-range minFaceSize {size}");
            }
        }

        config.tracking_enabled =
            options_bag::get_bool(options, "trackingEnabled").unwrap_or(false);
        config.auto_scale = options_bag::get_bool(options, "autoScale").unwrap_or(false);
        config.return_original =
            options_bag::get_bool(options, "returnOriginal").unwrap_or(false);
        config.convert_frame = options_bag::get_bool(options, "convertFrame").unwrap_or(false);

        config
    }
}
