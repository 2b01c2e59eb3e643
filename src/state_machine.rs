//! Pure decision-folding logic for approval requests.
//!
//! No I/O and no shared state here: everything is a deterministic function
//! of a decision sequence, so it is testable without the store. Callers
//! apply [`record_decision`] inside [`crate::store::RecordStore::mutate`]
//! so the append and the status recompute commit as one unit.

use crate::models::approval::{
    ApprovalDecision, ApprovalDecisionRecord, ApprovalRequest, ApprovalStatus,
};

/// Fold a decision history into a status.
///
/// Scans in insertion order: any reject wins immediately and permanently
/// (no later decision overrides it); otherwise a single approve suffices;
/// an empty history stays pending.
pub fn evaluate(decisions: &[ApprovalDecisionRecord]) -> ApprovalStatus {
    let mut status = ApprovalStatus::Pending;
    for record in decisions {
        match record.decision {
            ApprovalDecision::Reject => return ApprovalStatus::Rejected,
            ApprovalDecision::Approve => status = ApprovalStatus::Approved,
        }
    }
    status
}

/// Append `decision` to the request's history and recompute `status` from
/// the full history. Recomputing from scratch rather than incrementally
/// keeps the derived field from ever drifting out of sync.
pub fn record_decision(request: &mut ApprovalRequest, decision: ApprovalDecisionRecord) {
    request.decisions.push(decision);
    request.status = evaluate(&request.decisions);
}
