/// Physical orientation of a camera frame relative to the device.
///
/// Carried as frame metadata so detector backends can rotate their input
/// accordingly; the pixel buffer itself is never rotated here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    /// Clockwise rotation in degrees needed to bring the frame upright.
    pub fn to_degrees(self) -> u32 {
        match self {
            Orientation::Portrait => 0,
            Orientation::LandscapeRight => 90,
            Orientation::PortraitUpsideDown => 180,
            Orientation::LandscapeLeft => 270,
        }
    }
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Orientation::Portrait),
            "portrait-upside-down" => Ok(Orientation::PortraitUpsideDown),
            "landscape-left" => Ok(Orientation::LandscapeLeft),
            "landscape-right" => Ok(Orientation::LandscapeRight),
            other => Err(format!("Unknown orientation '{other}'")),
        }
    }
}
