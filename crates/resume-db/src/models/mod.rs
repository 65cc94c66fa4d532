//! Database models - SQLx-compatible structs for PostgreSQL tables

mod resume;
mod subscription;
mod user;

pub use resume::ResumeModel;
pub use subscription::SubscriptionModel;
pub use user::UserModel;
