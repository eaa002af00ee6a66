//! Capability provider traits
//!
//! Each capability is acquired in two async single-shot steps: a
//! permission request and a one-shot capture. The two capabilities are
//! independent and may be acquired in either order or concurrently.

use serde::{Deserialize, Serialize};

use crate::capture::location::GeoPoint;

/// Which device capability an operation concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    Camera,
    Location,
}

impl CapabilityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityKind::Camera => "camera",
            CapabilityKind::Location => "location",
        }
    }
}

impl std::fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Opaque reference to a captured photo (URI on device)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef(pub String);

impl PhotoRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Device camera: permission request plus one-shot photo capture.
///
/// Capture failures are reported as opaque reason strings; the workflow
/// never inspects them beyond logging.
#[allow(async_fn_in_trait)]
pub trait CameraCapability {
    async fn request_permission(&self) -> PermissionStatus;

    async fn capture_photo(&self) -> Result<PhotoRef, String>;
}

/// Device geolocation: permission request plus one-shot position read.
#[allow(async_fn_in_trait)]
pub trait LocationCapability {
    async fn request_permission(&self) -> PermissionStatus;

    async fn capture_location(&self) -> Result<GeoPoint, String>;
}
