//! Capture configuration

use serde::{Deserialize, Serialize};

/// Lowest coordinate precision the display format accepts.
pub const MIN_COORD_PRECISION: u8 = 4;
/// Highest coordinate precision the display format accepts.
pub const MAX_COORD_PRECISION: u8 = 6;

/// Tunables for the capture side of the marking workflow
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Decimal digits used when formatting captured coordinates (4-6)
    pub coord_precision: u8,
}

impl CaptureConfig {
    /// Create a config with the given precision, clamped to the allowed range.
    pub fn new(coord_precision: u8) -> Self {
        Self {
            coord_precision: coord_precision.clamp(MIN_COORD_PRECISION, MAX_COORD_PRECISION),
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            coord_precision: MIN_COORD_PRECISION,
        }
    }
}
