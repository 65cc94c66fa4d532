//! Capacity policy governing new-user admission
//!
//! Total user count is held at or below a fixed ceiling. When the ceiling is
//! reached, the account that has been inactive longer than the idle threshold
//! and was created earliest is evicted to make room.

use chrono::{DateTime, Duration, Utc};

use crate::entities::User;

/// Admission policy for the user-capacity gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPolicy {
    /// Maximum number of user rows allowed
    pub ceiling: i64,
    /// Inactivity duration beyond which an account is eviction-eligible
    pub idle_threshold: Duration,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            ceiling: 20,
            idle_threshold: Duration::hours(6),
        }
    }
}

impl CapacityPolicy {
    #[must_use]
    pub const fn new(ceiling: i64, idle_threshold: Duration) -> Self {
        Self {
            ceiling,
            idle_threshold,
        }
    }

    /// Whether a user count has reached the ceiling
    #[must_use]
    pub const fn is_at_capacity(&self, count: i64) -> bool {
        count >= self.ceiling
    }

    /// The timestamp before which an account's last update marks it idle
    #[must_use]
    pub fn idle_cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.idle_threshold
    }

    /// Select the eviction candidate among `users` as of `now`.
    ///
    /// Candidates are accounts inactive longer than the idle threshold; the
    /// tie-break among them is oldest account-creation time, not oldest
    /// inactivity. Returns `None` when no account qualifies.
    pub fn eviction_candidate<'a, I>(&self, users: I, now: DateTime<Utc>) -> Option<&'a User>
    where
        I: IntoIterator<Item = &'a User>,
    {
        users
            .into_iter()
            .filter(|u| u.is_idle(self.idle_threshold, now))
            .min_by_key(|u| u.created_at)
    }
}
