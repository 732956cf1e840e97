//! Domain types shared by the filter codec, quick search and services.

pub mod contract;
pub mod filter;
pub mod reference;
pub mod types;
