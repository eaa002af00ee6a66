//! Rollcall - attendance capture and approval workflow for a school portal

pub mod attendance;
pub mod capture;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;

pub use attendance::{
    AttendanceDraft, AttendanceEvent, AttendanceLog, ClassRoster, MarkingSession,
    PendingAttendanceRequest, ReviewDecision, ReviewQueue,
};
pub use capture::{CameraCapability, GeoPoint, LocationCapability, PermissionStatus, PhotoRef};
pub use config::CaptureConfig;
pub use error::{AttendanceError, Result};
pub use notify::{Notice, NoticeKind, Notifier};
