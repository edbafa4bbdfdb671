use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CampathError;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lng"` (whitespace around either number is ignored)
impl FromStr for Coordinates {
    type Err = CampathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| CampathError::invalid_value("coordinates", s))?;

        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| CampathError::invalid_value("latitude", lat.trim()))?;
        let longitude: f64 = lng
            .trim()
            .parse()
            .map_err(|_| CampathError::invalid_value("longitude", lng.trim()))?;

        let coords = Coordinates::new(latitude, longitude);
        if !coords.is_valid() {
            return Err(CampathError::invalid_value("coordinates", s));
        }
        Ok(coords)
    }
}
