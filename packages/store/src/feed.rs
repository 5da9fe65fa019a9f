//! # Feed and leaderboard shaping
//!
//! Pure helpers the views share for turning raw collections into what gets
//! rendered. All filtering and ranking happens client-side over the full
//! fetched collection; there is no pagination or caching anywhere in this
//! client.

use crate::models::{Submission, SubmissionType, User};

/// How many entries the "recent" dashboard list shows.
pub const RECENT_LIMIT: usize = 5;

/// The primary issue feed: parent-less submissions only. Solutions are
/// listed on their parent's detail page, never in the feed.
pub fn originals(subs: &[Submission]) -> Vec<Submission> {
    subs.iter().filter(|s| s.is_original()).cloned().collect()
}

/// Submissions of one category, for the tabbed views.
pub fn of_type(subs: &[Submission], ty: SubmissionType) -> Vec<Submission> {
    subs.iter()
        .filter(|s| s.submission_type == ty)
        .cloned()
        .collect()
}

/// Most recent submissions first, capped at `limit`. Entries without a
/// timestamp sort last.
pub fn recent(subs: &[Submission], limit: usize) -> Vec<Submission> {
    let mut sorted = subs.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

/// One-based rank of `user_id` in a leaderboard list the server already
/// sorted by points. Returns 0 when the user is not listed.
pub fn rank_of(users: &[User], user_id: i64) -> usize {
    users
        .iter()
        .position(|u| u.id == user_id)
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// Time range tabs on the leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaderboardRange {
    AllTime,
    Month,
    Week,
}

impl LeaderboardRange {
    pub const ALL: [LeaderboardRange; 3] = [
        LeaderboardRange::AllTime,
        LeaderboardRange::Month,
        LeaderboardRange::Week,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeaderboardRange::AllTime => "All Time",
            LeaderboardRange::Month => "This Month",
            LeaderboardRange::Week => "This Week",
        }
    }
}

/// Point figure shown for a range tab. The backend keeps no historical
/// aggregates, so month and week are fixed display approximations of the
/// all-time total, not real time-windowed queries.
pub fn scaled_points(points: i64, range: LeaderboardRange) -> i64 {
    match range {
        LeaderboardRange::AllTime => points,
        LeaderboardRange::Month => (points as f64 * 0.7).floor() as i64,
        LeaderboardRange::Week => (points as f64 * 0.3).floor() as i64,
    }
}

/// Contribution-level badge text derived from the all-time point total.
pub fn contribution_level(points: i64) -> &'static str {
    if points >= 100 {
        "Champion"
    } else if points >= 50 {
        "Contributor"
    } else {
        "Newcomer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, SubmissionStatus};
    use chrono::{TimeZone, Utc};

    fn sub(id: i64, ty: SubmissionType, parent: Option<i64>, day: Option<u32>) -> Submission {
        Submission {
            id,
            user_id: 1,
            submission_type: ty,
            location: "Bandra, Mumbai".into(),
            latitude: 19.076,
            longitude: 72.8777,
            description: format!("issue {id}"),
            image_url: "https://example.org/i.jpg".into(),
            status: SubmissionStatus::Approved,
            parent_submission_id: parent,
            created_at: day.map(|d| Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap()),
            genai_analysis: None,
        }
    }

    fn user(id: i64, points: i64) -> User {
        User {
            id,
            username: format!("user{id}"),
            email: format!("user{id}@example.org"),
            role: Role::User,
            points,
            badges: Vec::new(),
            created_at: None,
        }
    }

    #[test]
    fn originals_exclude_solutions() {
        let subs = vec![
            sub(1, SubmissionType::Waste, None, Some(1)),
            sub(2, SubmissionType::Waste, Some(1), Some(2)),
            sub(3, SubmissionType::Tree, None, Some(3)),
        ];
        let feed = originals(&subs);
        assert_eq!(feed.len(), 2);
        assert!(feed.iter().all(|s| s.parent_submission_id.is_none()));
    }

    #[test]
    fn of_type_partitions_the_three_categories() {
        let subs = vec![
            sub(1, SubmissionType::Waste, None, None),
            sub(2, SubmissionType::Power, None, None),
            sub(3, SubmissionType::Waste, None, None),
            sub(4, SubmissionType::Tree, None, None),
        ];
        assert_eq!(of_type(&subs, SubmissionType::Waste).len(), 2);
        assert_eq!(of_type(&subs, SubmissionType::Power).len(), 1);
        assert_eq!(of_type(&subs, SubmissionType::Tree).len(), 1);
    }

    #[test]
    fn recent_sorts_descending_and_caps() {
        let subs = vec![
            sub(1, SubmissionType::Waste, None, Some(1)),
            sub(2, SubmissionType::Waste, None, Some(9)),
            sub(3, SubmissionType::Waste, None, Some(5)),
            sub(4, SubmissionType::Waste, None, None),
        ];
        let top = recent(&subs, 2);
        assert_eq!(top.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 3]);

        // Missing timestamps sort last.
        let all = recent(&subs, 10);
        assert_eq!(all.last().unwrap().id, 4);
    }

    #[test]
    fn rank_is_one_plus_index_or_zero() {
        let users = vec![user(10, 300), user(20, 150), user(30, 40)];
        assert_eq!(rank_of(&users, 10), 1);
        assert_eq!(rank_of(&users, 30), 3);
        assert_eq!(rank_of(&users, 99), 0);
        assert_eq!(rank_of(&[], 10), 0);
    }

    #[test]
    fn range_figures_use_fixed_multipliers() {
        assert_eq!(scaled_points(100, LeaderboardRange::AllTime), 100);
        assert_eq!(scaled_points(100, LeaderboardRange::Month), 70);
        assert_eq!(scaled_points(100, LeaderboardRange::Week), 30);
        // Floored, like the original display.
        assert_eq!(scaled_points(15, LeaderboardRange::Month), 10);
        assert_eq!(scaled_points(15, LeaderboardRange::Week), 4);
    }

    #[test]
    fn contribution_levels() {
        assert_eq!(contribution_level(0), "Newcomer");
        assert_eq!(contribution_level(49), "Newcomer");
        assert_eq!(contribution_level(50), "Contributor");
        assert_eq!(contribution_level(100), "Champion");
    }
}
