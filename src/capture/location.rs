//! Captured coordinates and their display format

use serde::{Deserialize, Serialize};

use crate::config::CaptureConfig;

/// A captured latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as the display string shown to students and reviewers,
    /// e.g. `27.7172°N, 85.3240°E` at precision 4.
    pub fn display(&self, config: &CaptureConfig) -> String {
        let precision = config.coord_precision as usize;
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        format!(
            "{:.prec$}°{}, {:.prec$}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew,
            prec = precision
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_default_precision() {
        let point = GeoPoint::new(27.7172, 85.3240);
        assert_eq!(
            point.display(&CaptureConfig::default()),
            "27.7172°N, 85.3240°E"
        );
    }

    #[test]
    fn test_display_configured_precision() {
        let point = GeoPoint::new(27.7172, 85.3240);
        assert_eq!(
            point.display(&CaptureConfig::new(6)),
            "27.717200°N, 85.324000°E"
        );
    }

    #[test]
    fn test_display_southern_western_hemispheres() {
        let point = GeoPoint::new(-33.8688, -70.6693);
        assert_eq!(
            point.display(&CaptureConfig::default()),
            "33.8688°S, 70.6693°W"
        );
    }

    #[test]
    fn test_display_rounds() {
        let point = GeoPoint::new(27.717259, 85.32401);
        assert_eq!(
            point.display(&CaptureConfig::default()),
            "27.7173°N, 85.3240°E"
        );
    }
}
