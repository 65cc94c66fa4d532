//! Entity to model mappers
//!
//! This module provides conversions between domain entities (resume-core) and
//! database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Record` structs: Prepare entity data for database operations

mod resume;
mod subscription;
mod user;

pub use resume::ResumeRecord;
pub use user::UserRecord;
