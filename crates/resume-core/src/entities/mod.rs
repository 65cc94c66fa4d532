//! Domain entities - core business objects

mod resume;
mod subscription;
mod user;

pub use resume::{BorderStyle, Education, Resume, WorkExperience, DEFAULT_COLOR_HEX};
pub use subscription::{Subscription, SubscriptionLevel};
pub use user::{split_display_name, NewUser, User, UserProfile, UserRole};
