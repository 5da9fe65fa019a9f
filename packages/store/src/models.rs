//! # Domain models shared across the workspace
//!
//! Client-side projections of the records the backend returns. Everything is
//! `Serialize + Deserialize` so the API layer can decode responses directly
//! into these types, and `PartialEq` so Dioxus signals can diff them.
//!
//! Unknown fields in server payloads are ignored on deserialization — the
//! backend ships rows wholesale (the login response even includes the raw
//! password column), and the client only models what it renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of an authenticated user. Gates the moderator navigation entry and
/// the moderation view; everything else treats both roles identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Moderator,
}

impl Role {
    pub fn is_moderator(self) -> bool {
        matches!(self, Role::Moderator)
    }
}

/// A user record as returned by `/login`, `/users/create` and `/leaderboard`.
/// Read-only to this client; created and scored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub points: i64,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The three fixed issue categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionType {
    Waste,
    Power,
    Tree,
}

impl SubmissionType {
    pub const ALL: [SubmissionType; 3] =
        [SubmissionType::Waste, SubmissionType::Power, SubmissionType::Tree];

    /// Wire value used in query strings and request bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionType::Waste => "waste",
            SubmissionType::Power => "power",
            SubmissionType::Tree => "tree",
        }
    }

    /// Human-readable category label. The wire values predate the current
    /// category names, hence the odd pairing.
    pub fn label(self) -> &'static str {
        match self {
            SubmissionType::Waste => "Waste Management",
            SubmissionType::Power => "Flood Control",
            SubmissionType::Tree => "Energy Solutions",
        }
    }
}

/// Lifecycle state of a submission. Client-observed transitions are
/// `pending -> approved -> resolved` and `pending -> rejected`; nothing is
/// reversible from this client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
    Resolved,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
            SubmissionStatus::Resolved => "resolved",
        }
    }

    /// Approve and Reject are only offered while the submission is pending.
    pub fn can_decide(self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    /// Resolve is only offered once the submission has been approved.
    pub fn can_resolve(self) -> bool {
        matches!(self, SubmissionStatus::Approved)
    }
}

/// A moderator's verdict on a pending submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    /// Fixed remark text posted alongside the decision.
    pub fn remarks(self) -> &'static str {
        match self {
            Decision::Approved => "Looks good",
            Decision::Rejected => "Does not meet guidelines",
        }
    }
}

/// AI annotation the backend attaches to a submission. Shape is
/// backend-defined; only the summary line is rendered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenAiAnalysis {
    #[serde(default)]
    pub result: Option<String>,
}

/// A citizen-reported issue, or a solution proposed against one
/// (`parent_submission_id` is set for solutions, `None` for original
/// reports).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub user_id: i64,
    pub submission_type: SubmissionType,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub image_url: String,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub parent_submission_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub genai_analysis: Option<GenAiAnalysis>,
}

impl Submission {
    /// Original issue reports have no parent; solutions do.
    pub fn is_original(&self) -> bool {
        self.parent_submission_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ignores_unlisted_columns() {
        // The backend returns database rows wholesale, password included.
        let raw = r#"{
            "id": 7,
            "username": "asha",
            "email": "asha@example.org",
            "role": "moderator",
            "password": "secret",
            "points": 120,
            "badges": ["early-bird"],
            "created_at": "2024-03-20T09:30:00Z"
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.role.is_moderator());
        assert_eq!(user.points, 120);
        assert_eq!(user.badges, vec!["early-bird".to_string()]);
    }

    #[test]
    fn submission_round_trip_with_optional_fields_missing() {
        let raw = r#"{
            "id": 3,
            "user_id": 7,
            "submission_type": "waste",
            "location": "Bandra, Mumbai",
            "latitude": 19.076,
            "longitude": 72.8777,
            "description": "Overflowing bins",
            "image_url": "https://example.org/bins.jpg",
            "status": "pending"
        }"#;
        let sub: Submission = serde_json::from_str(raw).unwrap();
        assert!(sub.is_original());
        assert!(sub.created_at.is_none());
        assert!(sub.genai_analysis.is_none());
        assert_eq!(sub.submission_type, SubmissionType::Waste);
        assert_eq!(sub.status, SubmissionStatus::Pending);
    }

    #[test]
    fn solution_parses_parent_and_analysis() {
        let raw = r#"{
            "id": 4,
            "user_id": 9,
            "submission_type": "tree",
            "location": "Dadar, Mumbai",
            "latitude": 19.0178,
            "longitude": 72.8478,
            "description": "Planted saplings",
            "image_url": "https://example.org/trees.jpg",
            "status": "approved",
            "parent_submission_id": 3,
            "genai_analysis": {"result": "Yes, this seems legit", "analysis": {"confidence_score": "85%"}}
        }"#;
        let sub: Submission = serde_json::from_str(raw).unwrap();
        assert!(!sub.is_original());
        assert_eq!(sub.parent_submission_id, Some(3));
        assert_eq!(
            sub.genai_analysis.unwrap().result.as_deref(),
            Some("Yes, this seems legit")
        );
    }

    #[test]
    fn wire_values_match_backend_patterns() {
        // The backend validates these with regex patterns; the serialized
        // forms must match exactly.
        assert_eq!(serde_json::to_string(&SubmissionType::Power).unwrap(), "\"power\"");
        assert_eq!(serde_json::to_string(&SubmissionStatus::Resolved).unwrap(), "\"resolved\"");
        assert_eq!(serde_json::to_string(&Decision::Rejected).unwrap(), "\"rejected\"");
        assert_eq!(serde_json::to_string(&Role::Moderator).unwrap(), "\"moderator\"");
        for ty in SubmissionType::ALL {
            assert_eq!(serde_json::to_string(&ty).unwrap(), format!("\"{}\"", ty.as_str()));
        }
    }

    #[test]
    fn moderation_gating_follows_lifecycle() {
        assert!(SubmissionStatus::Pending.can_decide());
        assert!(!SubmissionStatus::Pending.can_resolve());
        assert!(SubmissionStatus::Approved.can_resolve());
        assert!(!SubmissionStatus::Approved.can_decide());
        for terminal in [SubmissionStatus::Rejected, SubmissionStatus::Resolved] {
            assert!(!terminal.can_decide());
            assert!(!terminal.can_resolve());
        }
    }
}
