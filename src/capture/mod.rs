//! Device capability adapters for the marking workflow
//!
//! The camera and location capabilities are external platform services;
//! this module defines the trait seams the workflow acquires them through,
//! plus simulated implementations for demos and tests.

pub mod location;
pub mod provider;
pub mod simulated;

pub use location::GeoPoint;
pub use provider::{CameraCapability, CapabilityKind, LocationCapability, PermissionStatus, PhotoRef};
pub use simulated::{SimulatedCamera, SimulatedLocation};
