//! Cross-crate integration tests

pub mod cross_method;
pub mod spigot_properties;
