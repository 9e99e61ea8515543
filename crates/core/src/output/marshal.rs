use std::collections::BTreeMap;

use crate::config::detector_config::{ClassificationMode, ContourMode, DetectorConfig, LandmarkMode};
use crate::detection::domain::contour::ContourKind;
use crate::detection::domain::face_observation::FaceObservation;
use crate::detection::domain::landmark::LandmarkKind;
use crate::output::bounds_transform::BoundsTransform;
use crate::output::face_record::FaceRecord;

/// Build the host-facing record for one detected face.
///
/// Field presence follows the construction-time config; an enabled map
/// contains exactly the kinds the detector reported. Head pose angles are
/// always carried.
pub fn marshal_face(
    observation: &FaceObservation,
    config: &DetectorConfig,
    transform: BoundsTransform,
) -> FaceRecord {
    let landmarks = (config.landmark_mode == LandmarkMode::All).then(|| {
        let mut map = BTreeMap::new();
        for kind in LandmarkKind::ALL {
            match observation.landmarks.get(&kind) {
                Some(&point) => {
                    map.insert(kind.name(), transform.apply_point(point));
                }
                None => log::debug!("Landmark {} not reported", kind.name()),
            }
        }
        map
    });

    let contours = (config.contour_mode == ContourMode::All).then(|| {
        let mut map = BTreeMap::new();
        for kind in ContourKind::ALL {
            match observation.contours.get(&kind) {
                Some(points) => {
                    let corrected: Vec<_> =
                        points.iter().map(|&p| transform.apply_point(p)).collect();
                    map.insert(kind.name(), corrected);
                }
                None => log::debug!("Contour {} not reported", kind.name()),
            }
        }
        map
    });

    let classify = config.classification_mode == ClassificationMode::All;

    FaceRecord {
        bounds: transform.apply(observation.bounds),
        landmarks,
        contours,
        left_eye_open_probability: observation.left_eye_open_probability.filter(|_| classify),
        right_eye_open_probability: observation.right_eye_open_probability.filter(|_| classify),
        smiling_probability: observation.smiling_probability.filter(|_| classify),
        tracking_id: observation.tracking_id.filter(|_| config.tracking_enabled),
        roll_angle: observation.roll_angle,
        pitch_angle: observation.pitch_angle,
        yaw_angle: observation.yaw_angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::geometry::{BoundingBox, Point};
    use approx::assert_relative_eq;

    fn observation() -> FaceObservation {
        let mut obs = FaceObservation::with_bounds(BoundingBox {
            x: 40.0,
            y: 60.0,
            width: 100.0,
            height: 110.0,
        });
        obs.roll_angle = 1.0;
        obs.pitch_angle = 2.0;
        obs.yaw_angle = 3.0;
        obs
    }

    fn full_observation() -> FaceObservation {
        let mut obs = observation();
        for (i, kind) in LandmarkKind::ALL.into_iter().enumerate() {
            obs.landmarks.insert(
                kind,
                Point {
                    x: i as f64,
                    y: i as f64 + 0.5,
                },
            );
        }
        for kind in ContourKind::ALL {
            obs.contours
                .insert(kind, vec![Point { x: 1.0, y: 2.0 }, Point { x: 3.0, y: 4.0 }]);
        }
        obs.left_eye_open_probability = Some(0.9);
        obs.right_eye_open_probability = Some(0.8);
        obs.smiling_probability = Some(0.7);
        obs.tracking_id = Some(21);
        obs
    }

    fn config_with_everything() -> DetectorConfig {
        DetectorConfig {
            landmark_mode: LandmarkMode::All,
            contour_mode: ContourMode::All,
            classification_mode: ClassificationMode::All,
            tracking_enabled: true,
            ..DetectorConfig::default()
        }
    }

    // ── Map completeness ─────────────────────────────────────────────

    #[test]
    fn test_all_reported_landmark_kinds_are_present() {
        let record = marshal_face(
            &full_observation(),
            &config_with_everything(),
            BoundsTransform::Identity,
        );
        let landmarks = record.landmarks.unwrap();
        assert_eq!(landmarks.len(), 10);
        for kind in LandmarkKind::ALL {
            assert!(landmarks.contains_key(kind.name()));
        }
    }

    #[test]
    fn test_all_reported_contour_kinds_are_present() {
        let record = marshal_face(
            &full_observation(),
            &config_with_everything(),
            BoundsTransform::Identity,
        );
        let contours = record.contours.unwrap();
        assert_eq!(contours.len(), 15);
        for kind in ContourKind::ALL {
            assert_eq!(contours[kind.name()].len(), 2);
        }
    }

    #[test]
    fn test_unreported_kinds_are_omitted() {
        let mut obs = full_observation();
        obs.landmarks.remove(&LandmarkKind::LeftEar);
        obs.contours.remove(&ContourKind::NoseBridge);

        let record = marshal_face(&obs, &config_with_everything(), BoundsTransform::Identity);

        let landmarks = record.landmarks.unwrap();
        assert_eq!(landmarks.len(), 9);
        assert!(!landmarks.contains_key("LEFT_EAR"));
        let contours = record.contours.unwrap();
        assert_eq!(contours.len(), 14);
        assert!(!contours.contains_key("NOSE_BRIDGE"));
    }

    // ── Config gating ────────────────────────────────────────────────

    #[test]
    fn test_default_config_suppresses_optional_fields() {
        let record = marshal_face(
            &full_observation(),
            &DetectorConfig::default(),
            BoundsTransform::Identity,
        );
        assert!(record.landmarks.is_none());
        assert!(record.contours.is_none());
        assert!(record.left_eye_open_probability.is_none());
        assert!(record.right_eye_open_probability.is_none());
        assert!(record.smiling_probability.is_none());
        assert!(record.tracking_id.is_none());
    }

    #[test]
    fn test_enabled_landmarks_with_empty_observation_yield_empty_map() {
        let record = marshal_face(
            &observation(),
            &config_with_everything(),
            BoundsTransform::Identity,
        );
        assert_eq!(record.landmarks.unwrap().len(), 0);
        assert_eq!(record.contours.unwrap().len(), 0);
    }

    #[test]
    fn test_classification_enabled_but_absent_probability_stays_omitted() {
        let mut obs = full_observation();
        obs.smiling_probability = None;
        let record = marshal_face(&obs, &config_with_everything(), BoundsTransform::Identity);
        assert_eq!(record.left_eye_open_probability, Some(0.9));
        assert!(record.smiling_probability.is_none());
    }

    #[test]
    fn test_tracking_enabled_without_detector_id_stays_omitted() {
        let mut obs = full_observation();
        obs.tracking_id = None;
        let record = marshal_face(&obs, &config_with_everything(), BoundsTransform::Identity);
        assert!(record.tracking_id.is_none());
    }

    #[test]
    fn test_angles_always_carried() {
        let record = marshal_face(
            &observation(),
            &DetectorConfig::default(),
            BoundsTransform::Identity,
        );
        assert_relative_eq!(record.roll_angle, 1.0);
        assert_relative_eq!(record.pitch_angle, 2.0);
        assert_relative_eq!(record.yaw_angle, 3.0);
    }

    // ── Coordinate correction ────────────────────────────────────────

    #[test]
    fn test_bounds_receive_mirror_but_landmarks_do_not() {
        let transform = BoundsTransform::Mirror {
            window_width: 400.0,
        };
        let record = marshal_face(&full_observation(), &config_with_everything(), transform);
        assert_relative_eq!(record.bounds.x, 400.0 - (100.0 + 40.0));
        // landmark for kind index 0 stays at (0.0, 0.5)
        let landmarks = record.landmarks.unwrap();
        assert_relative_eq!(landmarks["LEFT_CHEEK"].y, 0.5);
    }

    #[test]
    fn test_scale_applies_to_bounds_landmarks_and_contours() {
        let transform = BoundsTransform::Scale { sx: 0.5, sy: 2.0 };
        let record = marshal_face(&full_observation(), &config_with_everything(), transform);
        assert_relative_eq!(record.bounds.x, 20.0);
        assert_relative_eq!(record.bounds.height, 220.0);
        let contours = record.contours.unwrap();
        assert_relative_eq!(contours["FACE"][1].x, 1.5);
        assert_relative_eq!(contours["FACE"][1].y, 8.0);
    }
}
