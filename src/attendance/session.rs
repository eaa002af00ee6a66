//! Marking session: capability acquisition and the submission gate
//!
//! One session per student per marking attempt. The session sequences the
//! two independent permission+capture operations, holds the draft, and
//! gates submission on completeness. A failed acquisition leaves the
//! corresponding draft field untouched and emits a transient error notice.

use crate::capture::{CameraCapability, CapabilityKind, LocationCapability, PhotoRef};
use crate::config::CaptureConfig;
use crate::error::{AttendanceError, Result};
use crate::models::Student;
use crate::notify::Notifier;

use super::draft::AttendanceDraft;
use super::queue::ReviewQueue;
use super::request::PendingAttendanceRequest;

/// A student's marking session for one day
pub struct MarkingSession<C, L> {
    student: Student,
    camera: C,
    location: L,
    config: CaptureConfig,
    notifier: Notifier,
    draft: AttendanceDraft,
}

impl<C, L> MarkingSession<C, L>
where
    C: CameraCapability,
    L: LocationCapability,
{
    pub fn new(student: Student, camera: C, location: L) -> Self {
        Self::with_config(student, camera, location, CaptureConfig::default())
    }

    pub fn with_config(student: Student, camera: C, location: L, config: CaptureConfig) -> Self {
        Self {
            student,
            camera,
            location,
            config,
            notifier: Notifier::new(),
            draft: AttendanceDraft::new(),
        }
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    pub fn draft(&self) -> &AttendanceDraft {
        &self.draft
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Request camera permission and capture a selfie into the draft.
    pub async fn acquire_photo(&mut self) -> Result<PhotoRef> {
        if !self.camera.request_permission().await.is_granted() {
            return Err(self.fail(AttendanceError::PermissionDenied(CapabilityKind::Camera)));
        }

        let photo = match self.camera.capture_photo().await {
            Ok(photo) => photo,
            Err(reason) => {
                return Err(self.fail(AttendanceError::CaptureFailed {
                    kind: CapabilityKind::Camera,
                    reason,
                }))
            }
        };

        self.draft.set_photo(photo.clone());
        self.notifier.success("Selfie captured");
        Ok(photo)
    }

    /// Request location permission and capture the current position into
    /// the draft, formatted for display.
    pub async fn acquire_location(&mut self) -> Result<String> {
        if !self.location.request_permission().await.is_granted() {
            return Err(self.fail(AttendanceError::PermissionDenied(CapabilityKind::Location)));
        }

        let point = match self.location.capture_location().await {
            Ok(point) => point,
            Err(reason) => {
                return Err(self.fail(AttendanceError::CaptureFailed {
                    kind: CapabilityKind::Location,
                    reason,
                }))
            }
        };

        let formatted = point.display(&self.config);
        self.draft.set_location(formatted.clone());
        self.notifier.success("Location captured");
        Ok(formatted)
    }

    /// Acquire photo and location concurrently. The two operations are
    /// independent; one failing does not abort the other.
    pub async fn acquire_all(&mut self) -> (Result<PhotoRef>, Result<String>) {
        let (photo, location) = tokio::join!(
            Self::try_photo(&self.camera),
            Self::try_location(&self.location, &self.config)
        );

        let photo = match photo {
            Ok(photo) => {
                self.draft.set_photo(photo.clone());
                self.notifier.success("Selfie captured");
                Ok(photo)
            }
            Err(err) => Err(self.fail(err)),
        };
        let location = match location {
            Ok(formatted) => {
                self.draft.set_location(formatted.clone());
                self.notifier.success("Location captured");
                Ok(formatted)
            }
            Err(err) => Err(self.fail(err)),
        };

        (photo, location)
    }

    async fn try_photo(camera: &C) -> Result<PhotoRef> {
        if !camera.request_permission().await.is_granted() {
            return Err(AttendanceError::PermissionDenied(CapabilityKind::Camera));
        }
        camera
            .capture_photo()
            .await
            .map_err(|reason| AttendanceError::CaptureFailed {
                kind: CapabilityKind::Camera,
                reason,
            })
    }

    async fn try_location(location: &L, config: &CaptureConfig) -> Result<String> {
        if !location.request_permission().await.is_granted() {
            return Err(AttendanceError::PermissionDenied(CapabilityKind::Location));
        }
        let point =
            location
                .capture_location()
                .await
                .map_err(|reason| AttendanceError::CaptureFailed {
                    kind: CapabilityKind::Location,
                    reason,
                })?;
        Ok(point.display(config))
    }

    /// Discard the in-progress draft without submitting.
    pub fn discard(&mut self) {
        self.draft.clear();
    }

    /// Submit the draft for approval.
    ///
    /// Refuses unless the draft is complete. On success the request is
    /// appended to the review queue, the draft is cleared, and a success
    /// notice is shown.
    pub async fn submit(&mut self, queue: &ReviewQueue) -> Result<PendingAttendanceRequest> {
        let (photo, location) = match (&self.draft.photo, &self.draft.location) {
            (Some(photo), Some(location)) => (photo.clone(), location.clone()),
            _ => {
                let missing = self.draft.missing_fields().join(", ");
                return Err(self.fail(AttendanceError::IncompleteDraft(missing)));
            }
        };

        let request = PendingAttendanceRequest::new(&self.student, photo, location);
        queue.push(request.clone()).await;
        self.draft.clear();

        self.notifier.success("Attendance submitted for approval");
        Ok(request)
    }

    fn fail(&self, err: AttendanceError) -> AttendanceError {
        tracing::warn!(student = %self.student.name, error = %err, "marking step failed");
        self.notifier.error(err.notice_text());
        err
    }
}
