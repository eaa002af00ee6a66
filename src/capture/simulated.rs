//! Simulated capability providers
//!
//! Stand-ins for the real device camera and geolocation services, used by
//! the demo binary and the workflow tests. Denial and failure are
//! configurable so the error paths can be exercised.

use uuid::Uuid;

use crate::capture::location::GeoPoint;
use crate::capture::provider::{
    CameraCapability, LocationCapability, PermissionStatus, PhotoRef,
};

/// A camera that always succeeds unless told otherwise
#[derive(Debug, Clone)]
pub struct SimulatedCamera {
    pub deny_permission: bool,
    pub fail_capture: bool,
}

impl SimulatedCamera {
    pub fn new() -> Self {
        Self {
            deny_permission: false,
            fail_capture: false,
        }
    }

    pub fn denying() -> Self {
        Self {
            deny_permission: true,
            fail_capture: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            deny_permission: false,
            fail_capture: true,
        }
    }
}

impl Default for SimulatedCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraCapability for SimulatedCamera {
    async fn request_permission(&self) -> PermissionStatus {
        if self.deny_permission {
            PermissionStatus::Denied
        } else {
            PermissionStatus::Granted
        }
    }

    async fn capture_photo(&self) -> Result<PhotoRef, String> {
        if self.fail_capture {
            return Err("camera hardware unavailable".to_string());
        }
        Ok(PhotoRef::new(format!("img://selfie-{}", Uuid::new_v4())))
    }
}

/// A geolocation service pinned to a fixed position
#[derive(Debug, Clone)]
pub struct SimulatedLocation {
    pub position: GeoPoint,
    pub deny_permission: bool,
    pub fail_capture: bool,
}

impl SimulatedLocation {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            position: GeoPoint::new(latitude, longitude),
            deny_permission: false,
            fail_capture: false,
        }
    }

    pub fn denying() -> Self {
        let mut provider = Self::at(0.0, 0.0);
        provider.deny_permission = true;
        provider
    }

    pub fn failing() -> Self {
        let mut provider = Self::at(0.0, 0.0);
        provider.fail_capture = true;
        provider
    }
}

impl LocationCapability for SimulatedLocation {
    async fn request_permission(&self) -> PermissionStatus {
        if self.deny_permission {
            PermissionStatus::Denied
        } else {
            PermissionStatus::Granted
        }
    }

    async fn capture_location(&self) -> Result<GeoPoint, String> {
        if self.fail_capture {
            return Err("position unavailable".to_string());
        }
        Ok(self.position)
    }
}
