/// Host display data captured once at plugin construction.
///
/// Used for coordinate correction only: `window_width`/`window_height` feed
/// the scale and mirror transforms, and `mirrored` marks a front-camera
/// setup whose preview is horizontally flipped relative to the sensor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    pub window_width: f64,
    pub window_height: f64,
    pub mirrored: bool,
}

impl DisplayMetrics {
    pub fn new(window_width: f64, window_height: f64) -> Self {
        Self {
            window_width,
            window_height,
            mirrored: false,
        }
    }

    pub fn mirrored(mut self) -> Self {
        self.mirrored = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_not_mirrored() {
        let display = DisplayMetrics::new(390.0, 844.0);
        assert!(!display.mirrored);
        assert_eq!(display.window_width, 390.0);
        assert_eq!(display.window_height, 844.0);
    }

    #[test]
    fn test_mirrored_sets_flag() {
        let display = DisplayMetrics::new(390.0, 844.0).mirrored();
        assert!(display.mirrored);
    }
}
