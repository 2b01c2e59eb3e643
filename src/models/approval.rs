use serde::{Deserialize, Serialize};

/// Net outcome of the decisions recorded against a request so far.
///
/// Derived from the decision history by [`crate::state_machine::evaluate`];
/// never assigned directly from client input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// One approver's verdict. Anything other than `approve`/`reject` fails
/// deserialization at the boundary rather than being stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalDecision {
    Approve,
    Reject,
}

/// A single permanently-recorded decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalDecisionRecord {
    pub approver: String,
    pub decision: ApprovalDecision,
}

/// The tracked unit of work.
///
/// `id` is issued by the store and immutable. `status` is derived from
/// `decisions`, which is append-only. `archived` is a one-way advisory
/// flag and does not block further decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalRequest {
    pub id: u64,
    pub requester: String,
    pub subject: String,
    pub archived: bool,
    pub status: ApprovalStatus,
    pub decisions: Vec<ApprovalDecisionRecord>,
}
