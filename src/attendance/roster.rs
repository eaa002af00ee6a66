//! Class roster for teacher-side manual marking

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Student;

/// One student's row on the marking roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub student: Student,
    pub present: bool,
}

/// The class teacher's manual marking sheet for one day.
///
/// Every student starts absent; the teacher toggles rows and submits a
/// summary. Entirely in-memory, one roster per class per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRoster {
    pub class_name: String,
    entries: Vec<RosterEntry>,
}

impl ClassRoster {
    pub fn new(class_name: impl Into<String>, students: Vec<Student>) -> Self {
        Self {
            class_name: class_name.into(),
            entries: students
                .into_iter()
                .map(|student| RosterEntry {
                    student,
                    present: false,
                })
                .collect(),
        }
    }

    /// Flip the present flag for a student. Returns false when the id is
    /// not on the roster, leaving it unchanged.
    pub fn toggle(&mut self, student_id: Uuid) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|e| e.student.id == student_id)
        {
            Some(entry) => {
                entry.present = !entry.present;
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn present_count(&self) -> usize {
        self.entries.iter().filter(|e| e.present).count()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Submission summary shown to the teacher, e.g. `3/5 present`.
    pub fn summary(&self) -> String {
        format!("{}/{} present", self.present_count(), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_roster() -> ClassRoster {
        ClassRoster::new(
            "Class 10A",
            vec![
                Student::new("Alice Johnson", "101"),
                Student::new("Bob Wilson", "102"),
                Student::new("Charlie Brown", "103"),
            ],
        )
    }

    #[test]
    fn test_all_absent_initially() {
        let roster = make_roster();
        assert_eq!(roster.present_count(), 0);
        assert_eq!(roster.total(), 3);
        assert!(roster.entries().iter().all(|e| !e.present));
    }

    #[test]
    fn test_toggle() {
        let mut roster = make_roster();
        let id = roster.entries()[0].student.id;

        assert!(roster.toggle(id));
        assert!(roster.entries()[0].present);
        assert_eq!(roster.present_count(), 1);

        // Toggling again marks absent
        assert!(roster.toggle(id));
        assert!(!roster.entries()[0].present);
        assert_eq!(roster.present_count(), 0);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut roster = make_roster();
        assert!(!roster.toggle(Uuid::new_v4()));
        assert_eq!(roster.present_count(), 0);
    }

    #[test]
    fn test_summary() {
        let mut roster = make_roster();
        assert_eq!(roster.summary(), "0/3 present");

        let first = roster.entries()[0].student.id;
        let second = roster.entries()[1].student.id;
        roster.toggle(first);
        roster.toggle(second);
        assert_eq!(roster.summary(), "2/3 present");
    }
}
