//! In-memory record store for approval requests.
//!
//! Holds every record for the process lifetime; nothing is persisted and
//! nothing is ever hard-deleted. A single read-write lock guards both the
//! record map and the id counter, which is sufficient at this scale and
//! keeps id issuance serialized with record commits.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::approval::{ApprovalRequest, ApprovalStatus};

/// First identifier issued by a fresh store.
const ID_SEED: u64 = 1;

/// Draft accepted by [`RecordStore::create`].
///
/// Deliberately narrow: id, status, archived and decisions are owned by the
/// store and cannot be supplied by callers.
#[derive(Debug, Clone)]
pub struct NewApprovalRequest {
    pub requester: String,
    pub subject: String,
}

struct Inner {
    next_id: u64,
    records: HashMap<u64, ApprovalRequest>,
}

/// Shared, cheaply-cloneable record store.
///
/// Reads return snapshots (clones) so no reference to a record ever escapes
/// the lock. [`RecordStore::mutate`] holds the write lock across the whole
/// read-modify-write, so concurrent mutations of one id serialize and each
/// caller sees the effect of the previous one — no lost updates.
#[derive(Clone)]
pub struct RecordStore(Arc<RwLock<Inner>>);

impl RecordStore {
    pub fn new() -> Self {
        Self(Arc::new(RwLock::new(Inner {
            next_id: ID_SEED,
            records: HashMap::new(),
        })))
    }

    /// Issue the next id and store a normalized copy of the draft: status
    /// forced Pending, archived forced false, decisions forced empty.
    /// Returns the committed snapshot. The counter never rolls back, even
    /// if the caller discards the result.
    pub async fn create(&self, draft: NewApprovalRequest) -> ApprovalRequest {
        let mut inner = self.0.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let record = ApprovalRequest {
            id,
            requester: draft.requester,
            subject: draft.subject,
            archived: false,
            status: ApprovalStatus::Pending,
            decisions: Vec::new(),
        };
        inner.records.insert(id, record.clone());
        record
    }

    /// Snapshot of a single record, or `None` if the id is unknown.
    pub async fn get(&self, id: u64) -> Option<ApprovalRequest> {
        self.0.read().await.records.get(&id).cloned()
    }

    /// Snapshot of every record. Iteration order of the backing map leaks
    /// through here; callers must not depend on ordering.
    pub async fn list(&self) -> Vec<ApprovalRequest> {
        self.0.read().await.records.values().cloned().collect()
    }

    /// Apply `f` to the record under the write lock and return the
    /// committed snapshot. This is the only sanctioned way to change an
    /// existing record.
    pub async fn mutate<F>(&self, id: u64, f: F) -> Option<ApprovalRequest>
    where
        F: FnOnce(&mut ApprovalRequest),
    {
        let mut inner = self.0.write().await;
        let record = inner.records.get_mut(&id)?;
        f(record);
        Some(record.clone())
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::approval::{ApprovalDecision, ApprovalDecisionRecord};
    use crate::state_machine;

    fn draft(requester: &str, subject: &str) -> NewApprovalRequest {
        NewApprovalRequest {
            requester: requester.to_string(),
            subject: subject.to_string(),
        }
    }

    #[tokio::test]
    async fn create_normalizes_and_issues_sequential_ids() {
        let store = RecordStore::new();

        let first = store.create(draft("alice", "budget")).await;
        assert_eq!(first.id, 1);
        assert_eq!(first.status, ApprovalStatus::Pending);
        assert!(!first.archived);
        assert!(first.decisions.is_empty());

        let second = store.create(draft("bob", "travel")).await;
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn get_returns_snapshot_and_none_for_unknown() {
        let store = RecordStore::new();
        let created = store.create(draft("alice", "budget")).await;

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert!(store.get(999).await.is_none());
    }

    #[tokio::test]
    async fn mutate_unknown_id_is_a_noop() {
        let store = RecordStore::new();
        let result = store.mutate(42, |record| record.archived = true).await;
        assert!(result.is_none());
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn mutate_commits_and_returns_new_state() {
        let store = RecordStore::new();
        let created = store.create(draft("alice", "budget")).await;

        let updated = store
            .mutate(created.id, |record| record.archived = true)
            .await
            .unwrap();
        assert!(updated.archived);
        assert!(store.get(created.id).await.unwrap().archived);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_creates_issue_distinct_sequential_ids() {
        let store = RecordStore::new();
        let mut handles = Vec::new();
        for i in 0..32u64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create(draft(&format!("user-{i}"), "subject")).await.id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_decisions_are_never_lost() {
        let store = RecordStore::new();
        let id = store.create(draft("alice", "budget")).await.id;

        let mut handles = Vec::new();
        for decision in [ApprovalDecision::Approve, ApprovalDecision::Reject] {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .mutate(id, |record| {
                        state_machine::record_decision(
                            record,
                            ApprovalDecisionRecord {
                                approver: "reviewer".into(),
                                decision,
                            },
                        )
                    })
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Both decisions land regardless of interleaving, and the reject
        // dominates the final status.
        let record = store.get(id).await.unwrap();
        assert_eq!(record.decisions.len(), 2);
        assert_eq!(record.status, ApprovalStatus::Rejected);
    }
}
