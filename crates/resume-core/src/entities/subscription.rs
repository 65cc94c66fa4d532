//! Subscription entity - mirrors the billing provider's subscription object

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user billing state synced from the billing provider.
///
/// This record is owned by the billing provider; local rows are a cache kept
/// in sync through webhooks and never mutated by application logic directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub customer_id: String,
    pub subscription_id: String,
    pub price_id: String,
    pub current_period_end: DateTime<Utc>,
    pub cancel_at_period_end: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Feature tier derived from the subscription's price id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionLevel {
    #[default]
    Free,
    Pro,
    ProPlus,
}

impl SubscriptionLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::ProPlus => "pro_plus",
        }
    }

    /// AI tools are a paid feature
    #[must_use]
    pub const fn can_use_ai_tools(self) -> bool {
        !matches!(self, Self::Free)
    }

    /// Maximum number of resumes, `None` meaning unlimited
    #[must_use]
    pub const fn max_resumes(self) -> Option<usize> {
        match self {
            Self::Free => Some(1),
            Self::Pro => Some(3),
            Self::ProPlus => None,
        }
    }

    /// Whether a user at this level with `current` resumes may create another
    #[must_use]
    pub fn can_create_resume(self, current: usize) -> bool {
        match self.max_resumes() {
            Some(max) => current < max,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_tool_gating() {
        assert!(!SubscriptionLevel::Free.can_use_ai_tools());
        assert!(SubscriptionLevel::Pro.can_use_ai_tools());
        assert!(SubscriptionLevel::ProPlus.can_use_ai_tools());
    }

    #[test]
    fn test_resume_limits() {
        assert!(SubscriptionLevel::Free.can_create_resume(0));
        assert!(!SubscriptionLevel::Free.can_create_resume(1));
        assert!(SubscriptionLevel::Pro.can_create_resume(2));
        assert!(!SubscriptionLevel::Pro.can_create_resume(3));
        assert!(SubscriptionLevel::ProPlus.can_create_resume(1000));
    }

    #[test]
    fn test_level_ordering() {
        assert!(SubscriptionLevel::Free < SubscriptionLevel::Pro);
        assert!(SubscriptionLevel::Pro < SubscriptionLevel::ProPlus);
    }
}
