//! Data models for students and attendance records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student known to the portal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub roll_number: String,
}

impl Student {
    pub fn new(name: impl Into<String>, roll_number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            roll_number: roll_number.into(),
        }
    }
}

/// Attendance outcome for one student on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            _ => Err(format!("Invalid attendance status: {}", s)),
        }
    }
}

/// How an attendance record was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceMethod {
    /// Marked by the class teacher on the roster
    Manual,
    /// Self-reported via selfie + location capture
    Selfie,
}

impl AttendanceMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceMethod::Manual => "manual",
            AttendanceMethod::Selfie => "selfie",
        }
    }
}

impl std::str::FromStr for AttendanceMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(AttendanceMethod::Manual),
            "selfie" => Ok(AttendanceMethod::Selfie),
            _ => Err(format!("Invalid attendance method: {}", s)),
        }
    }
}

/// One day's attendance outcome in a student's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    /// None for absences, which have no capture method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<AttendanceMethod>,
}

impl AttendanceRecord {
    pub fn present(date: NaiveDate, method: AttendanceMethod) -> Self {
        Self {
            date,
            status: AttendanceStatus::Present,
            method: Some(method),
        }
    }

    pub fn absent(date: NaiveDate) -> Self {
        Self {
            date,
            status: AttendanceStatus::Absent,
            method: None,
        }
    }
}
