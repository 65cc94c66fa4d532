//! User entity <-> model mapper

use resume_core::entities::{User, UserRole};

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            external_id: model.external_id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            image_url: model.image_url,
            role: UserRole::parse_or_default(&model.role),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Borrowed view of a User entity for database insertion/update
pub struct UserRecord<'a> {
    pub external_id: &'a str,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub image_url: Option<&'a str>,
    pub role: &'static str,
}

impl<'a> UserRecord<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            external_id: &user.external_id,
            email: &user.email,
            first_name: &user.first_name,
            last_name: &user.last_name,
            image_url: user.image_url.as_deref(),
            role: user.role.as_str(),
        }
    }
}
