//! Data transfer objects shaped for the contract list presentation layer.

pub mod contracts;
