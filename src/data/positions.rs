use csv::{Reader, ReaderBuilder, Trim};
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::fs::File;

use crate::data::catalog::magnitude_for;
use crate::error::SkyError;
use crate::types::{parse_or, CelestialSample};

// One ephemeris row. Magnitude is optional; unknown or blank values fall back
// to the catalog. Coordinates that fail to parse become NaN and are rejected
// when the render context is built.
#[derive(Debug, Deserialize)]
struct PositionRow {
    name: String,
    altitude_deg: String,
    azimuth_deg: String,
    #[serde(default)]
    magnitude: String,
}

fn parse_samples_from_reader<R: std::io::Read>(
    mut rdr: Reader<R>,
) -> Result<Vec<CelestialSample>, SkyError> {
    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        let row: PositionRow = rec?;
        let magnitude = parse_or(&row.magnitude, f64::NAN);
        let magnitude = if magnitude.is_finite() {
            magnitude
        } else {
            magnitude_for(&row.name)
        };
        out.push(CelestialSample {
            altitude_deg: parse_or(&row.altitude_deg, f64::NAN),
            azimuth_deg: parse_or(&row.azimuth_deg, f64::NAN),
            magnitude,
            name: row.name,
        });
    }
    Ok(out)
}

fn reader_builder() -> ReaderBuilder {
    let mut b = ReaderBuilder::new();
    b.flexible(true).trim(Trim::All);
    b
}

/// Load positions from a CSV file (`name,altitude_deg,azimuth_deg[,magnitude]`),
/// gunzipping it first when the path ends in `.gz`.
pub fn load_samples(path: &str) -> Result<Vec<CelestialSample>, SkyError> {
    let file = File::open(path)?;
    if path.ends_with(".gz") {
        parse_samples_from_reader(reader_builder().from_reader(GzDecoder::new(file)))
    } else {
        parse_samples_from_reader(reader_builder().from_reader(file))
    }
}

/// Build samples from an ephemeris mapping, in its iteration order, with
/// magnitudes taken from the catalog.
pub fn samples_from_positions<'a, I>(positions: I) -> Vec<CelestialSample>
where
    I: IntoIterator<Item = (&'a str, f64, f64)>,
{
    positions
        .into_iter()
        .map(|(name, alt, az)| CelestialSample::new(name, alt, az, magnitude_for(name)))
        .collect()
}
