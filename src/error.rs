use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkyError {
    #[error("invalid coordinate for '{name}': altitude {altitude_deg}, azimuth {azimuth_deg}")]
    InvalidCoordinate {
        name: String,
        altitude_deg: f64,
        azimuth_deg: f64,
    },

    #[error("invalid setting {name} = {value}: expected {expected}")]
    InvalidSetting {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("reading positions: {0}")]
    Io(#[from] std::io::Error),

    #[error("parsing positions: {0}")]
    Csv(#[from] csv::Error),

    #[error("encoding scene: {0}")]
    Json(#[from] serde_json::Error),
}
