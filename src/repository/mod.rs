//! Data providers consumed by the contract list services.
//!
//! The filter core never talks to a backend directly; services reach the
//! contract collection and the reference lookups through these traits.

use serde::Serialize;

use crate::domain::contract::Contract;
use crate::domain::filter::RequestFilters;
use crate::domain::reference::{ClientOption, UserOption, VehicleOption};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod json;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use json::{Dataset, JsonRepository};

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractListQuery {
    /// `None` lists the whole collection.
    pub filters: Option<RequestFilters>,
    pub pagination: Option<Pagination>,
}

#[derive(Serialize)]
struct SearchParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<usize>,
    #[serde(flatten)]
    filters: &'a RequestFilters,
}

impl ContractListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(mut self, filters: RequestFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    /// Query string of the paginated search call, e.g.
    /// `page=0&size=10&contractType=SALE`.
    pub fn to_query_string(&self) -> RepositoryResult<String> {
        let empty = RequestFilters::default();
        let params = SearchParams {
            page: self.pagination.map(|p| p.page),
            size: self.pagination.map(|p| p.per_page),
            filters: self.filters.as_ref().unwrap_or(&empty),
        };
        Ok(serde_html_form::to_string(&params)?)
    }
}

pub trait ContractReader {
    /// Full, unfiltered collection used for summaries and the linked index.
    fn list_all_contracts(&self) -> RepositoryResult<Vec<Contract>>;
    /// One page of contracts with the total number of matches.
    fn list_contracts(&self, query: ContractListQuery) -> RepositoryResult<(usize, Vec<Contract>)>;
}

pub trait ReferenceReader {
    fn list_client_options(&self) -> RepositoryResult<Vec<ClientOption>>;
    fn list_user_options(&self) -> RepositoryResult<Vec<UserOption>>;
    fn list_vehicle_options(&self) -> RepositoryResult<Vec<VehicleOption>>;
}
