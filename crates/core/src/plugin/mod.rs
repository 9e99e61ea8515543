pub mod face_detector_plugin;
pub mod frame_plugin;
