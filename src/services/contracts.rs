use crate::domain::contract::ContractSummary;
use crate::dto::contracts::{
    FilterNavigation, ListPageData, ListPageOutcome, ListPageQuery, ReferenceData, SummaryData,
};
use crate::forms::filters::UiFilters;
use crate::linked::LinkedEntityIndex;
use crate::pagination::Paginated;
use crate::query::{self, DecodedFilters};
use crate::repository::{ContractListQuery, ContractReader, ReferenceReader};
use crate::services::ServiceResult;
use crate::suggestions::{self, QuickSearchContext, QuickSuggestion};

/// Computes the summary counts and rebuilds the linked entity index from the
/// full contract collection.
///
/// A failing provider leaves the page usable: counts drop to zero and quick
/// search proposes no entities.
pub fn refresh_summary<R>(repo: &R) -> SummaryData
where
    R: ContractReader + ?Sized,
{
    match repo.list_all_contracts() {
        Ok(contracts) => SummaryData {
            summary: ContractSummary::from_contracts(&contracts),
            linked: LinkedEntityIndex::from_contracts(&contracts),
        },
        Err(err) => {
            log::warn!("Failed to load contracts for the summary: {err}");
            SummaryData::default()
        }
    }
}

/// Loads the client, user and vehicle options used by quick search.
pub fn load_reference_data<R>(repo: &R) -> ServiceResult<ReferenceData>
where
    R: ReferenceReader + ?Sized,
{
    let clients = repo.list_client_options().map_err(|err| {
        log::error!("Failed to load client options: {err}");
        err
    })?;
    let users = repo.list_user_options().map_err(|err| {
        log::error!("Failed to load user options: {err}");
        err
    })?;
    let vehicles = repo.list_vehicle_options().map_err(|err| {
        log::error!("Failed to load vehicle options: {err}");
        err
    })?;

    Ok(ReferenceData {
        clients,
        users,
        vehicles,
    })
}

/// Loads one page of the contract list for the current URL.
///
/// A page segment that is not a non-negative integer redirects to the first
/// page, keeping the cleaned query.
pub fn load_contract_list<R>(
    repo: &R,
    query: ListPageQuery,
    page_size: usize,
) -> ServiceResult<ListPageOutcome>
where
    R: ContractReader + ?Sized,
{
    let DecodedFilters {
        ui_filters,
        request_filters,
        cleaned_query_params,
    } = query::from_query_params(&query.params);

    let page = match query.page.as_deref().map(str::trim) {
        None | Some("") => 0,
        Some(raw) => match raw.parse::<usize>() {
            Ok(page) => page,
            Err(_) => {
                log::debug!("Invalid page {raw:?}, redirecting to the first page");
                return Ok(ListPageOutcome::Redirect {
                    page: 0,
                    query_params: cleaned_query_params,
                });
            }
        },
    };

    let mut list_query = ContractListQuery::new().paginate(page, page_size);
    if let Some(filters) = &request_filters {
        list_query = list_query.filters(filters.clone());
    }

    let (total, contracts) = repo.list_contracts(list_query).map_err(|err| {
        log::error!("Failed to list contracts: {err}");
        err
    })?;

    let total_pages = total.div_ceil(page_size.max(1));
    let contracts =
        Paginated::new(contracts, page, total_pages).with_query(cleaned_query_params.as_ref());

    Ok(ListPageOutcome::Page(ListPageData {
        contracts,
        filters: ui_filters,
        active_filters: request_filters,
    }))
}

/// Resolves hints from the free-text term and encodes the result for
/// navigation.
pub fn apply_filters(filters: &UiFilters, ctx: &QuickSearchContext<'_>) -> FilterNavigation {
    let filters = suggestions::hint(filters, ctx);
    let query_params = query::to_query_params(&filters);
    FilterNavigation {
        filters,
        query_params,
    }
}

/// Resets the form and navigates to the unfiltered listing.
pub fn clear_filters() -> FilterNavigation {
    FilterNavigation {
        filters: UiFilters::default(),
        query_params: None,
    }
}

/// Applies a picked quick-search suggestion and navigates with it.
pub fn choose_suggestion(filters: &UiFilters, suggestion: &QuickSuggestion) -> FilterNavigation {
    let filters = suggestions::select_suggestion(filters, suggestion);
    let query_params = query::to_query_params(&filters);
    FilterNavigation {
        filters,
        query_params,
    }
}
