//! Value objects - policies and small immutable domain types

mod capacity;

pub use capacity::CapacityPolicy;
