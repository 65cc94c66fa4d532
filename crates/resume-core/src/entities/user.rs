//! User entity - a local account mirroring an identity-provider account

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role flag carried on every user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse a role string, falling back to the default role for unknown values
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }
}

/// User entity keyed by an external identity-provider id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub external_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Full display name, trimmed when the last name is empty
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    /// Whether the account has been inactive longer than `idle_threshold` as of `now`.
    ///
    /// The last-update timestamp is the sole activity signal.
    #[must_use]
    pub fn is_idle(&self, idle_threshold: Duration, now: DateTime<Utc>) -> bool {
        self.updated_at < now - idle_threshold
    }

    /// Apply profile fields relayed from the identity provider
    pub fn apply_profile(&mut self, profile: UserProfile) {
        self.email = profile.email;
        self.first_name = profile.first_name;
        self.last_name = profile.last_name;
        self.image_url = profile.image_url;
        self.role = profile.role;
        self.updated_at = Utc::now();
    }
}

/// Data required to provision a new user record
#[derive(Debug, Clone)]
pub struct NewUser {
    pub external_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
    pub role: UserRole,
}

impl NewUser {
    /// Build from the identity provider's payload, splitting the display name
    #[must_use]
    pub fn from_display_name(
        external_id: String,
        email: String,
        name: &str,
        image_url: Option<String>,
        role: UserRole,
    ) -> Self {
        let (first_name, last_name) = split_display_name(name);
        Self {
            external_id,
            email,
            first_name,
            last_name,
            image_url,
            role,
        }
    }
}

/// Profile fields mirrored from the identity provider on account updates
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
    pub role: UserRole,
}

impl UserProfile {
    /// Build from the identity provider's payload, splitting the display name
    #[must_use]
    pub fn from_display_name(
        email: String,
        name: &str,
        image_url: Option<String>,
        role: UserRole,
    ) -> Self {
        let (first_name, last_name) = split_display_name(name);
        Self {
            email,
            first_name,
            last_name,
            image_url,
            role,
        }
    }
}

/// Split a display name into first and last name.
///
/// The first whitespace-separated token becomes the first name; everything
/// after it joins into the last name.
#[must_use]
pub fn split_display_name(name: &str) -> (String, String) {
    let mut parts = name.trim().split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let last = parts.collect::<Vec<_>>().join(" ");
    (first, last)
}
