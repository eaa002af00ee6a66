//! Review queue for pending attendance requests
//!
//! Holds submitted requests in insertion order until the class teacher
//! resolves them. Approve and reject have identical removal semantics;
//! only the emitted event differs. Resolving an absent id is a no-op.

use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use super::request::{PendingAttendanceRequest, ReviewDecision};

/// Events emitted by the review queue
#[derive(Debug, Clone)]
pub enum AttendanceEvent {
    /// A student submitted a request for review
    Submitted {
        request_id: Uuid,
        student_id: Uuid,
        student_name: String,
    },
    /// The reviewer approved a request
    Approved { request_id: Uuid },
    /// The reviewer rejected a request
    Rejected { request_id: Uuid },
}

/// Queue of pending attendance requests, shared between submitting
/// sessions and the reviewer.
pub struct ReviewQueue {
    requests: RwLock<Vec<PendingAttendanceRequest>>,
    event_tx: broadcast::Sender<AttendanceEvent>,
}

impl ReviewQueue {
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            requests: RwLock::new(Vec::new()),
            event_tx,
        }
    }

    /// Subscribe to queue events
    pub fn subscribe(&self) -> broadcast::Receiver<AttendanceEvent> {
        self.event_tx.subscribe()
    }

    /// Append a submitted request. Called by the submission gate only,
    /// which guarantees a freshly generated id.
    pub async fn push(&self, request: PendingAttendanceRequest) {
        let request_id = request.id;
        let student_id = request.student_id;
        let student_name = request.student_name.clone();

        {
            let mut requests = self.requests.write().await;
            requests.push(request);
        }

        tracing::info!(%request_id, %student_name, "attendance request queued");

        let _ = self.event_tx.send(AttendanceEvent::Submitted {
            request_id,
            student_id,
            student_name,
        });
    }

    /// Approve the request with the given id.
    ///
    /// Returns the removed request, or `None` if no request matches;
    /// the absent case leaves the queue untouched.
    pub async fn approve(&self, id: Uuid) -> Option<PendingAttendanceRequest> {
        self.resolve(id, ReviewDecision::Approved).await
    }

    /// Reject the request with the given id. Same removal semantics as
    /// [`approve`](Self::approve); only the emitted event differs.
    pub async fn reject(&self, id: Uuid) -> Option<PendingAttendanceRequest> {
        self.resolve(id, ReviewDecision::Rejected).await
    }

    async fn resolve(
        &self,
        id: Uuid,
        decision: ReviewDecision,
    ) -> Option<PendingAttendanceRequest> {
        let removed = {
            let mut requests = self.requests.write().await;
            let pos = requests.iter().position(|r| r.id == id)?;
            requests.remove(pos)
        };

        tracing::info!(
            request_id = %id,
            student_name = %removed.student_name,
            decision = decision.as_str(),
            "attendance request resolved"
        );

        let event = match decision {
            ReviewDecision::Approved => AttendanceEvent::Approved { request_id: id },
            ReviewDecision::Rejected => AttendanceEvent::Rejected { request_id: id },
        };
        let _ = self.event_tx.send(event);

        Some(removed)
    }

    /// Snapshot of the pending requests, in insertion order.
    pub async fn list(&self) -> Vec<PendingAttendanceRequest> {
        let requests = self.requests.read().await;
        requests.clone()
    }

    pub async fn len(&self) -> usize {
        let requests = self.requests.read().await;
        requests.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for ReviewQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::PhotoRef;
    use crate::models::Student;

    fn make_request(name: &str, roll: &str) -> PendingAttendanceRequest {
        let student = Student::new(name, roll);
        PendingAttendanceRequest::new(
            &student,
            PhotoRef::new("img://selfie"),
            "27.7172°N, 85.3240°E",
        )
    }

    #[tokio::test]
    async fn test_push_and_list() {
        let queue = ReviewQueue::new();
        assert!(queue.is_empty().await);

        let request = make_request("Alice Johnson", "101");
        let id = request.id;
        queue.push(request).await;

        let pending = queue.list().await;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, id);
    }

    #[tokio::test]
    async fn test_push_emits_submitted_event() {
        let queue = ReviewQueue::new();
        let mut rx = queue.subscribe();

        let request = make_request("Alice Johnson", "101");
        let id = request.id;
        queue.push(request).await;

        match rx.try_recv().unwrap() {
            AttendanceEvent::Submitted {
                request_id,
                student_name,
                ..
            } => {
                assert_eq!(request_id, id);
                assert_eq!(student_name, "Alice Johnson");
            }
            other => panic!("Expected Submitted event, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_approve_removes_only_matching_entry() {
        let queue = ReviewQueue::new();

        let p1 = make_request("Alice Johnson", "101");
        let p2 = make_request("Bob Wilson", "102");
        let (id1, id2) = (p1.id, p2.id);
        queue.push(p1).await;
        queue.push(p2).await;

        let removed = queue.approve(id1).await.unwrap();
        assert_eq!(removed.id, id1);

        // Remaining entry keeps its original position
        let pending = queue.list().await;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, id2);
    }

    #[tokio::test]
    async fn test_reject_removes_entry() {
        let queue = ReviewQueue::new();
        let mut rx = queue.subscribe();

        let request = make_request("Alice Johnson", "101");
        let id = request.id;
        queue.push(request).await;
        let _ = rx.try_recv();

        let removed = queue.reject(id).await.unwrap();
        assert_eq!(removed.id, id);
        assert!(queue.is_empty().await);

        match rx.try_recv().unwrap() {
            AttendanceEvent::Rejected { request_id } => assert_eq!(request_id, id),
            other => panic!("Expected Rejected event, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_absent_id_is_noop() {
        let queue = ReviewQueue::new();
        let request = make_request("Alice Johnson", "101");
        queue.push(request).await;

        assert!(queue.approve(Uuid::new_v4()).await.is_none());
        assert!(queue.reject(Uuid::new_v4()).await.is_none());
        assert_eq!(queue.len().await, 1);
    }

    #[tokio::test]
    async fn test_double_approve_is_noop() {
        let queue = ReviewQueue::new();
        let request = make_request("Alice Johnson", "101");
        let id = request.id;
        queue.push(request).await;

        assert!(queue.approve(id).await.is_some());
        // Second call: no-op, not an error
        assert!(queue.approve(id).await.is_none());
        assert!(queue.is_empty().await);
    }

    #[tokio::test]
    async fn test_insertion_order_preserved() {
        let queue = ReviewQueue::new();
        let rolls = ["101", "102", "103"];
        for roll in rolls {
            queue.push(make_request("Student", roll)).await;
        }

        let pending = queue.list().await;
        let listed: Vec<_> = pending.iter().map(|r| r.roll_number.as_str()).collect();
        assert_eq!(listed, rolls);
    }

    #[tokio::test]
    async fn test_noop_resolve_emits_no_event() {
        let queue = ReviewQueue::new();
        let mut rx = queue.subscribe();

        queue.approve(Uuid::new_v4()).await;
        assert!(rx.try_recv().is_err());
    }
}
