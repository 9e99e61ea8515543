pub mod fixture_detector;
