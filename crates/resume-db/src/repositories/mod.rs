//! PostgreSQL repository implementations

mod error;
mod resume;
mod subscription;
mod user;

pub use resume::PgResumeRepository;
pub use subscription::PgSubscriptionRepository;
pub use user::PgUserRepository;
