use phf::phf_map;

pub const DEFAULT_MAGNITUDE: f64 = 1.0;
pub const DEFAULT_COLOR: &str = "#FFFFFF";
/// Dome sphere radius for bodies without an entry, on a dome of radius 1000.
pub const DEFAULT_DOME_RADIUS: f64 = 2.5;

// Apparent magnitudes, keyed by lowercase body name (English and Spanish)
static MAGNITUDES: phf::Map<&'static str, f64> = phf_map! {
    "sun" => -26.7,
    "sol" => -26.7,
    "moon" => -12.0,
    "luna" => -12.0,
    "mercury" => 0.0,
    "mercurio" => 0.0,
    "venus" => -4.3,
    "mars" => 0.5,
    "marte" => 0.5,
    "jupiter" => -2.7,
    "júpiter" => -2.7,
    "saturn" => 0.8,
    "saturno" => 0.8,
};

static COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    "sun" => "#FFD54A",
    "sol" => "#FFD54A",
    "moon" => "#D9D9D9",
    "luna" => "#D9D9D9",
    "mercury" => "#B0B0B0",
    "mercurio" => "#B0B0B0",
    "venus" => "#E8D8A8",
    "mars" => "#D14B3A",
    "marte" => "#D14B3A",
    "jupiter" => "#D9B38C",
    "júpiter" => "#D9B38C",
    "saturn" => "#E6D27A",
    "saturno" => "#E6D27A",
};

// Sphere radii on a dome of radius 1000; everything else is DEFAULT_DOME_RADIUS
static DOME_RADII: phf::Map<&'static str, f64> = phf_map! {
    "sun" => 10.0,
    "sol" => 10.0,
    "moon" => 8.0,
    "luna" => 8.0,
};

pub fn magnitude_for(name: &str) -> f64 {
    MAGNITUDES
        .get(name.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_MAGNITUDE)
}

pub fn color_for(name: &str) -> &'static str {
    COLORS
        .get(name.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_COLOR)
}

/// World-space sphere radius of a body on a dome of radius `dome_radius`.
pub fn dome_radius_for(name: &str, dome_radius: f64) -> f64 {
    let r = DOME_RADII
        .get(name.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_DOME_RADIUS);
    r * dome_radius / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    #[test]
    fn known_bodies_resolve_case_insensitively() {
        assert!(approx(magnitude_for("Venus"), -4.3, 1e-12));
        assert!(approx(magnitude_for("SUN"), -26.7, 1e-12));
        assert_eq!(color_for("mars"), "#D14B3A");
        assert_eq!(color_for(" Moon "), "#D9D9D9");
    }

    #[test]
    fn unknown_bodies_use_defaults() {
        assert!(approx(magnitude_for("Pluto"), DEFAULT_MAGNITUDE, 1e-12));
        assert_eq!(color_for("Pluto"), DEFAULT_COLOR);
        assert_eq!(color_for(""), DEFAULT_COLOR);
    }

    #[test]
    fn spanish_names_share_the_english_entries() {
        for (es, en) in [
            ("Sol", "Sun"),
            ("Luna", "Moon"),
            ("Mercurio", "Mercury"),
            ("Marte", "Mars"),
            ("Júpiter", "Jupiter"),
            ("Saturno", "Saturn"),
        ] {
            assert!(approx(magnitude_for(es), magnitude_for(en), 1e-12), "{es}");
            assert_eq!(color_for(es), color_for(en), "{es}");
            assert_ne!(color_for(es), DEFAULT_COLOR, "{es}");
        }
    }

    #[test]
    fn dome_radii_single_out_sun_and_moon() {
        assert!(approx(dome_radius_for("Sun", 1000.0), 10.0, 1e-12));
        assert!(approx(dome_radius_for("luna", 1000.0), 8.0, 1e-12));
        assert!(approx(dome_radius_for("Marte", 1000.0), 2.5, 1e-12));
        assert!(approx(dome_radius_for("Pluto", 1000.0), 2.5, 1e-12));
        // Scales with the dome
        assert!(approx(dome_radius_for("Sun", 1.0), 0.01, 1e-12));
    }

    #[test]
    fn every_catalogued_body_has_a_colour() {
        assert_eq!(MAGNITUDES.len(), COLORS.len());
        for name in MAGNITUDES.keys() {
            assert!(COLORS.contains_key(name), "{name} has no colour");
        }
    }
}
