use contract_filters::domain::contract::{ContractStatus, ContractType};
use contract_filters::domain::filter::Filter;
use contract_filters::dto::contracts::{ListPageOutcome, ListPageQuery};
use contract_filters::query::{self, QueryParams};
use contract_filters::repository::JsonRepository;
use contract_filters::services::contracts::{
    apply_filters, choose_suggestion, clear_filters, load_contract_list, load_reference_data,
    refresh_summary,
};
use contract_filters::suggestions::{SuggestionKind, suggest};

mod common;

#[test]
fn test_quick_search_round_trip() {
    let dataset = common::TestDataset::sample();
    let repo = JsonRepository::from_path(dataset.path()).unwrap();

    let summary = refresh_summary(&repo);
    assert_eq!(summary.summary.total, 3);
    assert_eq!(summary.summary.purchases, 2);
    assert_eq!(summary.summary.sales, 1);

    let references = load_reference_data(&repo).unwrap();
    let ctx = references.search_context(&summary.linked);

    // "Andrés Pardo" has no contracts and is never proposed.
    let found = suggest("an", &ctx);
    assert!(found.iter().any(|s| s.kind == SuggestionKind::Client && s.value == "5"));
    assert!(!found.iter().any(|s| s.value == "9"));
    assert!(found.len() <= 9);

    let pending = suggest("pend", &ctx);
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].kind, SuggestionKind::Status);
    assert_eq!(pending[0].value, "PENDING");

    let nav = choose_suggestion(&clear_filters().filters, &pending[0]);
    assert_eq!(nav.filters.contract_status, Filter::Value(ContractStatus::Pending));
    let params = nav.query_params.unwrap();

    let outcome = load_contract_list(
        &repo,
        ListPageQuery {
            page: None,
            params: QueryParams::parse(&params.to_query_string()),
        },
        10,
    )
    .unwrap();
    let ListPageOutcome::Page(data) = outcome else {
        panic!("expected a page");
    };
    assert_eq!(data.contracts.items.len(), 1);
    assert_eq!(data.contracts.items[0].id.get(), 3);
    assert_eq!(data.contracts.query.as_deref(), Some("contractStatus=PENDING"));
}

#[test]
fn test_apply_hints_the_plate_and_filters_the_list() {
    let dataset = common::TestDataset::sample();
    let repo = JsonRepository::from_path(dataset.path()).unwrap();
    let summary = refresh_summary(&repo);
    let references = load_reference_data(&repo).unwrap();
    let ctx = references.search_context(&summary.linked);

    let decoded = query::from_query_params(&QueryParams::parse("?contractType=SALE&term=abc123"));
    let nav = apply_filters(&decoded.ui_filters, &ctx);
    assert_eq!(nav.filters.vehicle_id, "7");
    assert_eq!(nav.filters.contract_type, Filter::Value(ContractType::Sale));

    let outcome = load_contract_list(
        &repo,
        ListPageQuery {
            page: Some("0".to_string()),
            params: nav.query_params.unwrap(),
        },
        10,
    )
    .unwrap();
    let ListPageOutcome::Page(data) = outcome else {
        panic!("expected a page");
    };
    assert_eq!(data.contracts.items.len(), 1);
    assert_eq!(data.contracts.items[0].id.get(), 2);
    assert_eq!(data.contracts.total_pages, 1);
}
