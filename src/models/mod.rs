//! Models loaded from external configuration sources.

pub mod config;
