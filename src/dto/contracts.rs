use serde::Serialize;

use crate::domain::contract::{Contract, ContractSummary};
use crate::domain::filter::RequestFilters;
use crate::domain::reference::{ClientOption, UserOption, VehicleOption};
use crate::forms::filters::UiFilters;
use crate::linked::LinkedEntityIndex;
use crate::pagination::Paginated;
use crate::query::QueryParams;
use crate::suggestions::QuickSearchContext;

/// Inbound navigation state of the list page.
#[derive(Debug, Default, Clone)]
pub struct ListPageQuery {
    /// Raw page route segment; missing means the first page.
    pub page: Option<String>,
    /// Query parameters of the current URL.
    pub params: QueryParams,
}

/// Data required to render the contract list.
#[derive(Debug, Serialize)]
pub struct ListPageData {
    pub contracts: Paginated<Contract>,
    /// Form state decoded from the URL.
    pub filters: UiFilters,
    /// Filters the page was searched with; `None` for the plain listing.
    pub active_filters: Option<RequestFilters>,
}

/// Either a page to render or a navigation the caller must perform.
#[derive(Debug)]
pub enum ListPageOutcome {
    Page(ListPageData),
    Redirect {
        page: usize,
        query_params: Option<QueryParams>,
    },
}

/// Totals and linked entities computed from the full collection.
#[derive(Debug, Default)]
pub struct SummaryData {
    pub summary: ContractSummary,
    pub linked: LinkedEntityIndex,
}

/// Reference lookups backing quick search and the filter selects.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ReferenceData {
    pub clients: Vec<ClientOption>,
    pub users: Vec<UserOption>,
    pub vehicles: Vec<VehicleOption>,
}

impl ReferenceData {
    pub fn search_context<'a>(&'a self, linked: &'a LinkedEntityIndex) -> QuickSearchContext<'a> {
        QuickSearchContext::new(&self.clients, &self.users, &self.vehicles, linked)
    }
}

/// Form state after an interaction plus the query to navigate with.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterNavigation {
    pub filters: UiFilters,
    /// `None` navigates to the unfiltered first page.
    pub query_params: Option<QueryParams>,
}
