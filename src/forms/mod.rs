//! Form models backing the contract list search panel.

pub mod filters;
