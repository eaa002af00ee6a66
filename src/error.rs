//! Error types for the attendance workflow

use thiserror::Error;

use crate::capture::CapabilityKind;

/// Errors surfaced by the marking workflow.
///
/// Every variant is recoverable by user retry; callers show a transient
/// notice and abort the local operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    #[error("{0} permission denied")]
    PermissionDenied(CapabilityKind),

    #[error("{kind} capture failed: {reason}")]
    CaptureFailed { kind: CapabilityKind, reason: String },

    #[error("Incomplete draft: missing {0}")]
    IncompleteDraft(String),
}

impl AttendanceError {
    /// User-facing text for the transient notice shown on failure.
    pub fn notice_text(&self) -> String {
        match self {
            AttendanceError::PermissionDenied(CapabilityKind::Camera) => {
                "Camera permission denied".to_string()
            }
            AttendanceError::PermissionDenied(CapabilityKind::Location) => {
                "Location permission denied".to_string()
            }
            AttendanceError::CaptureFailed {
                kind: CapabilityKind::Camera,
                ..
            } => "Unable to capture photo".to_string(),
            AttendanceError::CaptureFailed {
                kind: CapabilityKind::Location,
                ..
            } => "Unable to get location".to_string(),
            AttendanceError::IncompleteDraft(_) => "Selfie and location required".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AttendanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AttendanceError::PermissionDenied(CapabilityKind::Camera);
        assert_eq!(format!("{}", err), "camera permission denied");

        let err = AttendanceError::CaptureFailed {
            kind: CapabilityKind::Location,
            reason: "gps unavailable".to_string(),
        };
        assert_eq!(format!("{}", err), "location capture failed: gps unavailable");

        let err = AttendanceError::IncompleteDraft("photo".to_string());
        assert_eq!(format!("{}", err), "Incomplete draft: missing photo");
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(
            AttendanceError::PermissionDenied(CapabilityKind::Location).notice_text(),
            "Location permission denied"
        );
        assert_eq!(
            AttendanceError::IncompleteDraft("photo, location".to_string()).notice_text(),
            "Selfie and location required"
        );
        assert_eq!(
            AttendanceError::CaptureFailed {
                kind: CapabilityKind::Camera,
                reason: "no device".to_string(),
            }
            .notice_text(),
            "Unable to capture photo"
        );
    }

    #[test]
    fn test_error_debug() {
        let err = AttendanceError::IncompleteDraft("location".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("IncompleteDraft"));
    }

    #[test]
    fn test_result_type_alias() {
        fn ok_fn() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(ok_fn().unwrap(), 42);

        fn err_fn() -> Result<i32> {
            Err(AttendanceError::IncompleteDraft("photo".to_string()))
        }
        assert!(err_fn().is_err());
    }
}
