pub mod display_metrics;
pub mod frame_view;
pub mod geometry;
pub mod orientation;
