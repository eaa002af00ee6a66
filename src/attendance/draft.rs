//! In-progress capture state for one marking attempt

use serde::{Deserialize, Serialize};

use crate::capture::PhotoRef;

/// The in-progress, unsubmitted attendance capture state for one student,
/// one day. Owned exclusively by the marking session; cleared on submit
/// or explicit discard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<PhotoRef>,
    /// Display-formatted coordinates, e.g. `27.7172°N, 85.3240°E`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl AttendanceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_photo(&mut self, photo: PhotoRef) {
        self.photo = Some(photo);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = Some(location.into());
    }

    /// Reset both fields to empty.
    pub fn clear(&mut self) {
        self.photo = None;
        self.location = None;
    }

    /// True iff both photo and location have been captured.
    pub fn is_complete(&self) -> bool {
        self.photo.is_some() && self.location.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.photo.is_none() && self.location.is_none()
    }

    /// Names of the fields still missing, for the validation failure message.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.photo.is_none() {
            missing.push("photo");
        }
        if self.location.is_none() {
            missing.push("location");
        }
        missing
    }
}
