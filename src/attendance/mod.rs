//! Attendance capture-and-approval workflow
//!
//! A student builds an `AttendanceDraft` through a `MarkingSession`
//! (camera + location capture), submits it through the completeness gate,
//! and the resulting `PendingAttendanceRequest` waits in the `ReviewQueue`
//! until the class teacher approves or rejects it.

pub mod draft;
pub mod history;
pub mod queue;
pub mod request;
pub mod roster;
pub mod session;

pub use draft::AttendanceDraft;
pub use history::AttendanceLog;
pub use queue::{AttendanceEvent, ReviewQueue};
pub use request::{PendingAttendanceRequest, ReviewDecision};
pub use roster::{ClassRoster, RosterEntry};
pub use session::MarkingSession;
