//! # API crate — typed HTTP client for the Circular Cities backend
//!
//! Every remote call the views make goes through this crate: one async
//! function per backend endpoint, JSON in and out, decoded straight into the
//! [`store`] models. There is no caching, batching, retry, or request
//! de-duplication — each call is a single `reqwest` round trip, and failures
//! are returned to the call site as [`ApiError`].
//!
//! ## Operations
//!
//! | Function | Endpoint |
//! |----------|----------|
//! | [`login`] | `POST /login` |
//! | [`register`] | `POST /users/create` |
//! | [`approved_submissions`] | `GET /submissions?status=approved` |
//! | [`solutions_for`] | `GET /submissions?parent_id=:id` |
//! | [`submission`] | `GET /submissions/:id` |
//! | [`create_submission`] | `POST /submissions` |
//! | [`pending_submissions`] | `GET /moderator/submissions?submission_type=:t` |
//! | [`decide`] | `POST /moderator/approve` |
//! | [`resolve`] | `POST /moderator/resolve` |
//! | [`leaderboard`] | `GET /leaderboard` |

use serde::{Deserialize, Serialize};

use store::{Decision, Submission, SubmissionType, User};

pub mod config;
mod error;

pub use error::ApiError;

/// Payload for `POST /submissions`, covering both original issue reports
/// and solutions posted against one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewSubmission {
    pub user_id: i64,
    pub submission_type: SubmissionType,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub image_url: String,
    pub parent_submission_id: Option<i64>,
}

impl NewSubmission {
    /// An original issue report (no parent).
    pub fn issue(
        user_id: i64,
        submission_type: SubmissionType,
        location: String,
        latitude: f64,
        longitude: f64,
        description: String,
        image_url: String,
    ) -> Self {
        Self {
            user_id,
            submission_type,
            location,
            latitude,
            longitude,
            description,
            image_url,
            parent_submission_id: None,
        }
    }

    /// A solution against an existing issue: carries the parent reference
    /// and inherits the parent's type, location and coordinates.
    pub fn solution_for(parent: &Submission, user_id: i64, description: String, image_url: String) -> Self {
        Self {
            user_id,
            submission_type: parent.submission_type,
            location: parent.location.clone(),
            latitude: parent.latitude,
            longitude: parent.longitude,
            description,
            image_url,
            parent_submission_id: Some(parent.id),
        }
    }
}

#[derive(Serialize)]
struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[allow(dead_code)]
    message: String,
    user: User,
}

#[derive(Serialize)]
struct RegisterRequest {
    username: String,
    email: String,
    password: String,
    role: &'static str,
}

#[derive(Deserialize)]
struct SubmissionResponse {
    #[allow(dead_code)]
    message: String,
    submission: Submission,
}

#[derive(Serialize)]
struct DecisionRequest {
    moderator_id: i64,
    submission_id: i64,
    decision: Decision,
    remarks: &'static str,
}

/// Map a non-success response to an [`ApiError`] carrying the server's
/// `detail` message.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let code = status.as_u16();
    let body = resp.text().await.unwrap_or_default();
    let err = error::from_response(code, &body);
    tracing::warn!(status = code, "api request failed: {err}");
    Err(err)
}

/// Exchange credentials for the user record. The caller persists the
/// returned record as the session.
pub async fn login(username: String, password: String) -> Result<User, ApiError> {
    let resp = reqwest::Client::new()
        .post(config::url("/login"))
        .json(&LoginRequest { username, password })
        .send()
        .await?;
    let body: LoginResponse = check(resp).await?.json().await?;
    Ok(body.user)
}

/// Create an ordinary-user account. Moderators are provisioned out of band.
pub async fn register(username: String, email: String, password: String) -> Result<User, ApiError> {
    let resp = reqwest::Client::new()
        .post(config::url("/users/create"))
        .json(&RegisterRequest {
            username,
            email,
            password,
            role: "user",
        })
        .send()
        .await?;
    Ok(check(resp).await?.json().await?)
}

/// All approved submissions, solutions included. Feed views drop the
/// solutions via [`store::feed::originals`].
pub async fn approved_submissions() -> Result<Vec<Submission>, ApiError> {
    let resp = reqwest::Client::new()
        .get(config::url("/submissions"))
        .query(&[("status", "approved")])
        .send()
        .await?;
    Ok(check(resp).await?.json().await?)
}

/// Solutions posted against one issue.
pub async fn solutions_for(parent_id: i64) -> Result<Vec<Submission>, ApiError> {
    let resp = reqwest::Client::new()
        .get(config::url("/submissions"))
        .query(&[("parent_id", parent_id)])
        .send()
        .await?;
    Ok(check(resp).await?.json().await?)
}

/// One submission by identifier.
pub async fn submission(id: i64) -> Result<Submission, ApiError> {
    let resp = reqwest::Client::new()
        .get(config::url(&format!("/submissions/{id}")))
        .send()
        .await?;
    Ok(check(resp).await?.json().await?)
}

/// Create an issue or a solution; returns the stored record so the caller
/// can append it to its in-memory list without re-fetching.
pub async fn create_submission(payload: NewSubmission) -> Result<Submission, ApiError> {
    let resp = reqwest::Client::new()
        .post(config::url("/submissions"))
        .json(&payload)
        .send()
        .await?;
    let body: SubmissionResponse = check(resp).await?.json().await?;
    Ok(body.submission)
}

/// Pending submissions of one category, for the moderation view.
pub async fn pending_submissions(ty: SubmissionType) -> Result<Vec<Submission>, ApiError> {
    let resp = reqwest::Client::new()
        .get(config::url("/moderator/submissions"))
        .query(&[("submission_type", ty.as_str())])
        .send()
        .await?;
    Ok(check(resp).await?.json().await?)
}

/// Approve or reject a pending submission. The remark text is fixed per
/// decision; moderators do not compose it.
pub async fn decide(moderator_id: i64, submission_id: i64, decision: Decision) -> Result<(), ApiError> {
    let resp = reqwest::Client::new()
        .post(config::url("/moderator/approve"))
        .json(&DecisionRequest {
            moderator_id,
            submission_id,
            decision,
            remarks: decision.remarks(),
        })
        .send()
        .await?;
    check(resp).await?;
    Ok(())
}

/// Mark an approved submission resolved.
pub async fn resolve(submission_id: i64, moderator_id: i64) -> Result<(), ApiError> {
    let resp = reqwest::Client::new()
        .post(config::url("/moderator/resolve"))
        .query(&[("submission_id", submission_id), ("moderator_id", moderator_id)])
        .send()
        .await?;
    check(resp).await?;
    Ok(())
}

/// Users sorted by points descending (server-side sort).
pub async fn leaderboard() -> Result<Vec<User>, ApiError> {
    let resp = reqwest::Client::new()
        .get(config::url("/leaderboard"))
        .send()
        .await?;
    Ok(check(resp).await?.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::SubmissionStatus;

    fn parent() -> Submission {
        Submission {
            id: 12,
            user_id: 3,
            submission_type: SubmissionType::Power,
            location: "Kurla, Mumbai".into(),
            latitude: 19.0726,
            longitude: 72.8845,
            description: "Blocked drain floods the street".into(),
            image_url: "https://example.org/drain.jpg".into(),
            status: SubmissionStatus::Approved,
            parent_submission_id: None,
            created_at: None,
            genai_analysis: None,
        }
    }

    #[test]
    fn solution_inherits_parent_context() {
        let payload = NewSubmission::solution_for(
            &parent(),
            7,
            "Cleared the drain".into(),
            "https://example.org/fixed.jpg".into(),
        );
        assert_eq!(payload.parent_submission_id, Some(12));
        assert_eq!(payload.submission_type, SubmissionType::Power);
        assert_eq!(payload.location, "Kurla, Mumbai");
        assert_eq!(payload.latitude, 19.0726);
        assert_eq!(payload.longitude, 72.8845);
        assert_eq!(payload.user_id, 7);
    }

    #[test]
    fn issue_has_no_parent_reference() {
        let payload = NewSubmission::issue(
            7,
            SubmissionType::Waste,
            "Bandra, Mumbai".into(),
            19.076,
            72.8777,
            "Overflowing bins".into(),
            "https://example.org/bins.jpg".into(),
        );
        assert_eq!(payload.parent_submission_id, None);

        let json = serde_json::to_value(&payload).unwrap();
        // The backend expects an explicit null for original reports.
        assert!(json.get("parent_submission_id").unwrap().is_null());
        assert_eq!(json["submission_type"], "waste");
    }

    #[test]
    fn decision_request_carries_fixed_remarks() {
        let req = DecisionRequest {
            moderator_id: 1,
            submission_id: 12,
            decision: Decision::Rejected,
            remarks: Decision::Rejected.remarks(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["decision"], "rejected");
        assert_eq!(json["remarks"], "Does not meet guidelines");
    }
}
