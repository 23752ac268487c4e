//! Verification plan
//!
//! The read-only accessors queried on a freshly deployed contract before a
//! record is written.

use serde::{Deserialize, Serialize};

/// What a verification field represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Owner / admin address
    Identity,
    /// Boolean status flag, rendered as Open/Closed
    Status,
    /// Cardinality counter
    Counter,
    #[default]
    Other,
}

/// One read-only accessor to query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationField {
    pub label: String,
    pub function: String,
    pub kind: FieldKind,
}

impl VerificationField {
    pub fn new(label: impl Into<String>, function: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            function: function.into(),
            kind,
        }
    }
}

/// Ordered, non-empty list of fields to verify
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationPlan(Vec<VerificationField>);

impl VerificationPlan {
    /// Returns `None` when `fields` is empty
    pub fn new(fields: Vec<VerificationField>) -> Option<Self> {
        if fields.is_empty() {
            None
        } else {
            Some(Self(fields))
        }
    }

    /// Accessors exposed by the `VotingSystem` contract
    pub fn voting_system() -> Self {
        Self(vec![
            VerificationField::new("Owner", "owner", FieldKind::Identity),
            VerificationField::new("Election Name", "electionName", FieldKind::Other),
            VerificationField::new("Voting Status", "votingOpen", FieldKind::Status),
            VerificationField::new("Total Candidates", "candidateCount", FieldKind::Counter),
            VerificationField::new("Total Votes", "totalVotes", FieldKind::Counter),
        ])
    }

    pub fn fields(&self) -> &[VerificationField] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of one successful verification read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedValue {
    pub label: String,
    pub function: String,
    pub value: String,
}
