//! `[geo]` configuration for the geographic meta tags.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeoConfig {
    /// ISO 3166-2 region code, e.g. "IN-KA".
    pub region: String,
    pub placename: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            region: "IN-KA".into(),
            placename: "Bangalore".into(),
            latitude: 12.9716,
            longitude: 77.5946,
        }
    }
}

impl GeoConfig {
    pub const LATITUDE: FieldPath = FieldPath::new("geo.latitude");
    pub const LONGITUDE: FieldPath = FieldPath::new("geo.longitude");

    /// `geo.position` content: `lat;lon`.
    pub fn position(&self) -> String {
        format!("{};{}", self.latitude, self.longitude)
    }

    /// `ICBM` content: `lat, lon`.
    pub fn icbm(&self) -> String {
        format!("{}, {}", self.latitude, self.longitude)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(-90.0..=90.0).contains(&self.latitude) {
            diag.error(
                Self::LATITUDE,
                format!("latitude {} out of range [-90, 90]", self.latitude),
            );
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            diag.error(
                Self::LONGITUDE,
                format!("longitude {} out of range [-180, 180]", self.longitude),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position_strings() {
        let geo = GeoConfig::default();
        assert_eq!(geo.position(), "12.9716;77.5946");
        assert_eq!(geo.icbm(), "12.9716, 77.5946");
    }

    #[test]
    fn out_of_range_coordinates() {
        let geo = GeoConfig {
            latitude: 91.0,
            longitude: -181.0,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        geo.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
