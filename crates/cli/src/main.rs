use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde_json::{json, Map, Value};

use faceframe_core::detection::domain::face_detector::FaceDetector;
use faceframe_core::detection::infrastructure::fixture_detector::FixtureDetector;
use faceframe_core::plugin::face_detector_plugin::FaceDetectorPlugin;
use faceframe_core::plugin::frame_plugin::FramePlugin;
use faceframe_core::shared::display_metrics::DisplayMetrics;
use faceframe_core::shared::frame_view::FrameView;
use faceframe_core::shared::orientation::Orientation;

/// Run the face detection plugin callback once over a still image.
///
/// Detection itself is replayed from a fixture file, so the full plugin
/// path (option parsing, coordinate correction, brightness, marshalling)
/// can be exercised without an on-device model.
#[derive(Parser)]
#[command(name = "faceframe")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// JSON fixture: an array of face observations the detector replays.
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Detector performance mode: fast or accurate.
    #[arg(long, default_value = "fast")]
    performance_mode: String,

    /// Report the ten named landmark points.
    #[arg(long)]
    landmarks: bool,

    /// Report eye-open and smiling probabilities.
    #[arg(long)]
    classifications: bool,

    /// Report the fifteen named contour point sequences.
    #[arg(long)]
    contours: bool,

    /// Smallest face to report, as a fraction of the frame (0-1].
    #[arg(long, default_value = "0.15")]
    min_face_size: f64,

    /// Pass through detector-assigned tracking IDs.
    #[arg(long)]
    tracking: bool,

    /// Scale output coordinates by the window/frame ratio.
    #[arg(long)]
    auto_scale: bool,

    /// Mirror bounding boxes against the window width (front camera).
    #[arg(long)]
    mirrored: bool,

    /// Window width used for coordinate correction.
    #[arg(long, default_value = "400")]
    window_width: f64,

    /// Window height used for coordinate correction.
    #[arg(long, default_value = "800")]
    window_height: f64,

    /// Attach a packed copy of the frame pixels to the result.
    #[arg(long)]
    return_original: bool,

    /// Attach a PNG rendering of the frame to the result.
    #[arg(long)]
    convert_frame: bool,

    /// Frame orientation: portrait, portrait-upside-down, landscape-left,
    /// landscape-right.
    #[arg(long, default_value = "portrait")]
    orientation: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let orientation: Orientation = cli.orientation.parse()?;
    let image = image::open(&cli.input)?.to_rgba8();
    let (width, height) = image.dimensions();
    let data = image.into_raw();
    let frame = FrameView::rgba(&data, width, height, orientation)?;

    let detector = build_detector(&cli)?;
    let options = build_options(&cli);
    let mut display = DisplayMetrics::new(cli.window_width, cli.window_height);
    if cli.mirrored {
        display = display.mirrored();
    }

    let mut plugin = FaceDetectorPlugin::new(detector, &options, display);
    let output = plugin.callback(&frame);

    log::info!("{} face(s) reported", output.faces.len());
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn build_detector(cli: &Cli) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
    match &cli.fixture {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(Box::new(FixtureDetector::from_json_str(&json)?))
        }
        None => Ok(Box::new(FixtureDetector::repeating(Vec::new()))),
    }
}

/// Options bag exactly as a host bridge would hand it over.
fn build_options(cli: &Cli) -> Map<String, Value> {
    let mut options = Map::new();
    options.insert("performanceMode".into(), json!(cli.performance_mode));
    if cli.landmarks {
        options.insert("landmarkMode".into(), json!("all"));
    }
    if cli.classifications {
        options.insert("classificationMode".into(), json!("all"));
    }
    if cli.contours {
        options.insert("contourMode".into(), json!("all"));
    }
    options.insert("minFaceSize".into(), json!(cli.min_face_size));
    options.insert("trackingEnabled".into(), json!(cli.tracking));
    options.insert("autoScale".into(), json!(cli.auto_scale));
    options.insert("returnOriginal".into(), json!(cli.return_original));
    options.insert("convertFrame".into(), json!(cli.convert_frame));
    options
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.performance_mode != "fast" && cli.performance_mode != "accurate" {
        return Err(format!(
            "Performance mode must be 'fast' or 'accurate', got '{}'",
            cli.performance_mode
        )
        .into());
    }
    if !(cli.min_face_size > 0.0 && cli.min_face_size <= 1.0) {
        return Err(format!(
            "Min face size must be in (0, 1], got {}",
            cli.min_face_size
        )
        .into());
    }
    if cli.window_width <= 0.0 || cli.window_height <= 0.0 {
        return Err("Window dimensions must be positive".into());
    }
    Ok(())
}
