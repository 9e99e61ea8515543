use crate::config::detector_config::DetectorConfig;
use crate::shared::display_metrics::DisplayMetrics;
use crate::shared::geometry::{BoundingBox, Point};

/// Coordinate correction applied to detector output before it reaches the
/// host.
///
/// Exactly one policy is active per plugin: `Mirror` compensates a
/// horizontally flipped front-camera preview against the window width,
/// `Scale` maps frame coordinates onto display coordinates, `Identity`
/// passes the detector's values through. Mirror and scale never compose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundsTransform {
    Identity,
    Scale { sx: f64, sy: f64 },
    Mirror { window_width: f64 },
}

impl BoundsTransform {
    /// Pick the active policy for one frame.
    ///
    /// A mirrored display wins over auto-scaling; without either, the
    /// detector's coordinates are already what the host expects.
    pub fn select(
        config: &DetectorConfig,
        display: &DisplayMetrics,
        frame_width: u32,
        frame_height: u32,
    ) -> Self {
        if display.mirrored {
            return BoundsTransform::Mirror {
                window_width: display.window_width,
            };
        }
        if config.auto_scale {
            return BoundsTransform::Scale {
                sx: display.window_width / f64::from(frame_width),
                sy: display.window_height / f64::from(frame_height),
            };
        }
        BoundsTransform::Identity
    }

    pub fn apply(&self, bounds: BoundingBox) -> BoundingBox {
        match *self {
            BoundsTransform::Identity => bounds,
            BoundsTransform::Scale { sx, sy } => BoundingBox {
                x: bounds.x * sx,
                y: bounds.y * sy,
                width: bounds.width * sx,
                height: bounds.height * sy,
            },
            BoundsTransform::Mirror { window_width } => BoundingBox {
                x: window_width - (bounds.width + bounds.x),
                ..bounds
            },
        }
    }

    /// Correction for landmark and contour points. Scaling moves points
    /// into display coordinates; mirroring only affects the bounding box,
    /// so points pass through unchanged.
    pub fn apply_point(&self, point: Point) -> Point {
        match *self {
            BoundsTransform::Scale { sx, sy } => Point {
                x: point.x * sx,
                y: point.y * sy,
            },
            BoundsTransform::Identity | BoundsTransform::Mirror { .. } => point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn bounds(x: f64, y: f64, w: f64, h: f64) -> BoundingBox {
        BoundingBox {
            x,
            y,
            width: w,
            height: h,
        }
    }

    // ── Selection ────────────────────────────────────────────────────

    #[test]
    fn test_select_identity_by_default() {
        let config = DetectorConfig::default();
        let display = DisplayMetrics::new(390.0, 844.0);
        let t = BoundsTransform::select(&config, &display, 1280, 720);
        assert_eq!(t, BoundsTransform::Identity);
    }

    #[test]
    fn test_select_scale_when_auto_scale_enabled() {
        let config = DetectorConfig {
            auto_scale: true,
            ..DetectorConfig::default()
        };
        let display = DisplayMetrics::new(640.0, 360.0);
        let t = BoundsTransform::select(&config, &display, 1280, 720);
        assert_eq!(t, BoundsTransform::Scale { sx: 0.5, sy: 0.5 });
    }

    #[test]
    fn test_select_mirror_wins_over_auto_scale() {
        let config = DetectorConfig {
            auto_scale: true,
            ..DetectorConfig::default()
        };
        let display = DisplayMetrics::new(411.0, 914.0).mirrored();
        let t = BoundsTransform::select(&config, &display, 1280, 720);
        assert_eq!(
            t,
            BoundsTransform::Mirror {
                window_width: 411.0
            }
        );
    }

    // ── Mirror ───────────────────────────────────────────────────────

    #[test]
    fn test_mirror_reflects_x_against_window_width() {
        let t = BoundsTransform::Mirror {
            window_width: 400.0,
        };
        let out = t.apply(bounds(30.0, 50.0, 120.0, 140.0));
        // x' = W - (w + x)
        assert_relative_eq!(out.x, 400.0 - (120.0 + 30.0));
        assert_relative_eq!(out.y, 50.0);
        assert_relative_eq!(out.width, 120.0);
        assert_relative_eq!(out.height, 140.0);
    }

    #[rstest]
    #[case::at_left_edge(0.0, 100.0, 300.0)]
    #[case::at_right_edge(300.0, 100.0, 0.0)]
    #[case::centered(150.0, 100.0, 150.0)]
    fn test_mirror_exact(#[case] x: f64, #[case] w: f64, #[case] expected_x: f64) {
        let t = BoundsTransform::Mirror {
            window_width: 400.0,
        };
        assert_relative_eq!(t.apply(bounds(x, 0.0, w, 10.0)).x, expected_x);
    }

    #[test]
    fn test_mirror_twice_restores_x() {
        let t = BoundsTransform::Mirror {
            window_width: 400.0,
        };
        let original = bounds(42.0, 7.0, 90.0, 90.0);
        assert_eq!(t.apply(t.apply(original)), original);
    }

    #[test]
    fn test_mirror_leaves_points_unchanged() {
        let t = BoundsTransform::Mirror {
            window_width: 400.0,
        };
        let p = Point { x: 33.0, y: 44.0 };
        assert_eq!(t.apply_point(p), p);
    }

    // ── Scale ────────────────────────────────────────────────────────

    #[test]
    fn test_scale_multiplies_every_component() {
        let t = BoundsTransform::Scale { sx: 0.5, sy: 0.25 };
        let out = t.apply(bounds(100.0, 200.0, 80.0, 40.0));
        assert_relative_eq!(out.x, 50.0);
        assert_relative_eq!(out.y, 50.0);
        assert_relative_eq!(out.width, 40.0);
        assert_relative_eq!(out.height, 10.0);
    }

    #[test]
    fn test_scale_applies_to_points() {
        let t = BoundsTransform::Scale { sx: 2.0, sy: 3.0 };
        assert_eq!(
            t.apply_point(Point { x: 10.0, y: 10.0 }),
            Point { x: 20.0, y: 30.0 }
        );
    }

    #[test]
    fn test_identity_is_exact_passthrough() {
        let original = bounds(12.5, 9.75, 33.0, 46.5);
        assert_eq!(BoundsTransform::Identity.apply(original), original);
        let p = Point { x: 1.0, y: 2.0 };
        assert_eq!(BoundsTransform::Identity.apply_point(p), p);
    }

    #[test]
    fn test_auto_scale_off_means_unit_factor() {
        // Identity and a unit scale must agree everywhere.
        let unit = BoundsTransform::Scale { sx: 1.0, sy: 1.0 };
        let original = bounds(5.0, 6.0, 7.0, 8.0);
        assert_eq!(unit.apply(original), original);
    }
}
