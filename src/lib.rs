//! Filter-state sync and quick-search suggestions for the purchase/sale
//! contract list.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod linked;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod money;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod query;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;
#[cfg(feature = "data")]
pub mod suggestions;
