//! A student's attendance history and percentage

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceMethod, AttendanceRecord, AttendanceStatus};

/// Attendance percentage below which a student is flagged
pub const ADEQUACY_THRESHOLD: u32 = 75;

/// Ordered history of one student's attendance records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceLog {
    records: Vec<AttendanceRecord>,
}

impl AttendanceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    pub fn add(&mut self, record: AttendanceRecord) {
        self.records.push(record);
    }

    /// Record an approved selfie submission as a present day.
    pub fn record_approval(&mut self, date: NaiveDate) {
        self.add(AttendanceRecord::present(date, AttendanceMethod::Selfie));
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn present_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == AttendanceStatus::Present)
            .count()
    }

    /// Present days as a rounded percentage of all recorded days.
    /// An empty log is 0%.
    pub fn percentage(&self) -> u32 {
        if self.records.is_empty() {
            return 0;
        }
        let ratio = self.present_count() as f64 / self.records.len() as f64;
        (ratio * 100.0).round() as u32
    }

    pub fn is_adequate(&self) -> bool {
        self.percentage() >= ADEQUACY_THRESHOLD
    }
}
