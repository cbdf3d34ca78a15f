//! Language-specific grammar configuration

pub mod typescript;
