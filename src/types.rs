use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// 2D polar plot coordinates: `theta` in radians clockwise from North,
/// `r` in degrees from the zenith.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Polar {
    pub theta: f64,
    pub r: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(&self, other: Vec3) -> f64 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z).length()
    }

    pub fn scaled(&self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    pub fn plus(&self, other: Vec3) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 { *self } else { self.scaled(1.0 / len) }
    }
}

/// One observed body at one instant, as supplied by the ephemeris.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelestialSample {
    pub name: String,
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
    pub magnitude: f64,
}

impl CelestialSample {
    pub fn new(name: &str, altitude_deg: f64, azimuth_deg: f64, magnitude: f64) -> Self {
        Self {
            name: name.to_string(),
            altitude_deg,
            azimuth_deg,
            magnitude,
        }
    }

    pub fn visible(&self) -> bool {
        self.altitude_deg > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coords {
    Polar(Polar),
    Cartesian(Vec3),
}

/// A visible sample with its view-space coordinates and visual attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPoint {
    pub sample: CelestialSample,
    pub coords: Coords,
    pub size: f64,
    pub alpha: f64,
    pub color: String,
}

impl ProjectedPoint {
    pub fn name(&self) -> &str {
        &self.sample.name
    }

    pub fn magnitude(&self) -> f64 {
        self.sample.magnitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    Polar2d,
    Hemisphere3d,
    Dome3d,
}

impl Projection {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "polar2d" | "polar" => Some(Self::Polar2d),
            "hemisphere3d" | "hemisphere" => Some(Self::Hemisphere3d),
            "dome3d" | "dome" => Some(Self::Dome3d),
            _ => None,
        }
    }

    pub fn is_3d(&self) -> bool {
        !matches!(self, Self::Polar2d)
    }

    /// Radius used when none is configured.
    pub fn default_radius(&self) -> f64 {
        match self {
            Self::Polar2d => 90.0,
            Self::Hemisphere3d => 1.0,
            Self::Dome3d => 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    All,
    Top,
    Smart,
}

impl LabelMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" | "todas" => Some(Self::All),
            "top" => Some(Self::Top),
            "smart" | "inteligentes" => Some(Self::Smart),
            _ => None,
        }
    }

    /// Unknown modes select the decluttering mode.
    pub fn parse_or_smart(s: &str) -> Self {
        Self::from_str(&s.to_lowercase()).unwrap_or(Self::Smart)
    }
}

// Small helpers used by multiple modules
pub fn parse_or<T: std::str::FromStr>(s: &str, default: T) -> T {
    s.trim().parse::<T>().unwrap_or(default)
}
