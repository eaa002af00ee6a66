//! Pending attendance requests awaiting review

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capture::PhotoRef;
use crate::models::Student;

/// A submitted-but-unreviewed attendance claim awaiting teacher action.
///
/// Created by the submission gate, destroyed on approve or reject. The
/// submitting student keeps no reference to it after submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingAttendanceRequest {
    pub id: Uuid,
    pub student_id: Uuid,
    pub student_name: String,
    pub roll_number: String,
    pub submitted_at: DateTime<Utc>,
    /// Display-formatted coordinates at submission time
    pub location: String,
    pub photo: PhotoRef,
}

impl PendingAttendanceRequest {
    pub fn new(student: &Student, photo: PhotoRef, location: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id: student.id,
            student_name: student.name.clone(),
            roll_number: student.roll_number.clone(),
            submitted_at: Utc::now(),
            location: location.into(),
            photo,
        }
    }

    /// Submission date as shown to the reviewer, e.g. `2025-11-23`.
    pub fn date(&self) -> String {
        self.submitted_at.format("%Y-%m-%d").to_string()
    }

    /// Submission time as shown to the reviewer, e.g. `08:15 AM`.
    pub fn time(&self) -> String {
        self.submitted_at.format("%I:%M %p").to_string()
    }
}

/// Reviewer's verdict on a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

impl ReviewDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewDecision::Approved => "approved",
            ReviewDecision::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for ReviewDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(ReviewDecision::Approved),
            "rejected" => Ok(ReviewDecision::Rejected),
            _ => Err(format!("Invalid review decision: {}", s)),
        }
    }
}
