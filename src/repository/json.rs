//! File-backed provider that serves contracts and reference options from a
//! JSON dataset, applying search filters in memory.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::contract::Contract;
use crate::domain::filter::RequestFilters;
use crate::domain::reference::{ClientOption, UserOption, VehicleOption};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContractListQuery, ContractReader, ReferenceReader};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    #[serde(default)]
    pub contracts: Vec<Contract>,
    #[serde(default)]
    pub clients: Vec<ClientOption>,
    #[serde(default)]
    pub users: Vec<UserOption>,
    #[serde(default)]
    pub vehicles: Vec<VehicleOption>,
}

#[derive(Clone)]
pub struct JsonRepository {
    dataset: Arc<Dataset>,
}

impl JsonRepository {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Loads the dataset file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset: Dataset = serde_json::from_reader(BufReader::new(file))?;
        log::info!(
            "Loaded {} contracts from {}",
            dataset.contracts.len(),
            path.display()
        );
        Ok(Self::new(dataset))
    }
}

fn contains_term(value: Option<&str>, normalized_term: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(normalized_term))
}

fn within(value: f64, min: Option<u64>, max: Option<u64>) -> bool {
    min.is_none_or(|min| value >= min as f64) && max.is_none_or(|max| value <= max as f64)
}

/// Server-side search semantics: every present filter must hold.
fn matches(filters: &RequestFilters, contract: &Contract) -> bool {
    let same_id = |wanted: Option<i32>, actual: Option<i32>| wanted.is_none() || wanted == actual;

    filters
        .contract_type
        .is_none_or(|t| t == contract.contract_type)
        && filters
            .contract_status
            .is_none_or(|s| s == contract.contract_status)
        && filters
            .payment_method
            .is_none_or(|m| m == contract.payment_method)
        && same_id(filters.client_id.map(i32::from), contract.client_id)
        && same_id(filters.user_id.map(i32::from), contract.user_id)
        && same_id(filters.vehicle_id.map(i32::from), contract.vehicle_id)
        && within(
            contract.purchase_price,
            filters.min_purchase_price,
            filters.max_purchase_price,
        )
        && within(
            contract.sale_price,
            filters.min_sale_price,
            filters.max_sale_price,
        )
        && filters.term.as_deref().is_none_or(|term| {
            let term = term.trim().to_lowercase();
            term.is_empty()
                || contains_term(contract.client_name.as_deref(), &term)
                || contains_term(contract.user_name.as_deref(), &term)
                || contains_term(contract.vehicle_plate.as_deref(), &term)
        })
}

impl ContractReader for JsonRepository {
    fn list_all_contracts(&self) -> RepositoryResult<Vec<Contract>> {
        Ok(self.dataset.contracts.clone())
    }

    fn list_contracts(&self, query: ContractListQuery) -> RepositoryResult<(usize, Vec<Contract>)> {
        let matching: Vec<&Contract> = match &query.filters {
            Some(filters) => self
                .dataset
                .contracts
                .iter()
                .filter(|contract| matches(filters, contract))
                .collect(),
            None => self.dataset.contracts.iter().collect(),
        };
        let total = matching.len();

        let page = match query.pagination {
            Some(pagination) => matching
                .into_iter()
                .skip(pagination.page.saturating_mul(pagination.per_page))
                .take(pagination.per_page)
                .cloned()
                .collect(),
            None => matching.into_iter().cloned().collect(),
        };

        Ok((total, page))
    }
}

impl ReferenceReader for JsonRepository {
    fn list_client_options(&self) -> RepositoryResult<Vec<ClientOption>> {
        Ok(self.dataset.clients.clone())
    }

    fn list_user_options(&self) -> RepositoryResult<Vec<UserOption>> {
        Ok(self.dataset.users.clone())
    }

    fn list_vehicle_options(&self) -> RepositoryResult<Vec<VehicleOption>> {
        Ok(self.dataset.vehicles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contract::{ContractStatus, ContractType, PaymentMethod};
    use crate::domain::types::{ContractId, VehicleId};

    fn contract(id: i32, contract_type: ContractType, sale_price: f64, plate: &str) -> Contract {
        Contract {
            id: ContractId::new(id).unwrap(),
            client_id: Some(id),
            user_id: Some(1),
            vehicle_id: Some(id * 10),
            contract_type,
            contract_status: ContractStatus::Active,
            payment_method: PaymentMethod::Cash,
            purchase_price: sale_price * 0.8,
            sale_price,
            client_name: Some(format!("Client {id}")),
            user_name: Some("Seller".to_string()),
            vehicle_plate: Some(plate.to_string()),
        }
    }

    fn repo() -> JsonRepository {
        JsonRepository::new(Dataset {
            contracts: vec![
                contract(1, ContractType::Purchase, 1_000_000.0, "ABC123"),
                contract(2, ContractType::Sale, 2_000_000.0, "XYZ789"),
                contract(3, ContractType::Sale, 3_000_000.0, "ABD456"),
            ],
            ..Default::default()
        })
    }

    #[test]
    fn lists_pages_of_the_whole_collection() {
        let (total, items) = repo()
            .list_contracts(ContractListQuery::new().paginate(1, 2))
            .unwrap();
        assert_eq!(total, 3);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.get(), 3);
    }

    #[test]
    fn applies_request_filters() {
        let filters = RequestFilters {
            contract_type: Some(ContractType::Sale),
            min_sale_price: Some(2_500_000),
            ..Default::default()
        };
        let (total, items) = repo()
            .list_contracts(ContractListQuery::new().filters(filters))
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(items[0].id.get(), 3);

        let filters = RequestFilters {
            vehicle_id: Some(VehicleId::new(20).unwrap()),
            ..Default::default()
        };
        let (total, _) = repo()
            .list_contracts(ContractListQuery::new().filters(filters))
            .unwrap();
        assert_eq!(total, 1);
    }

    #[test]
    fn term_matches_party_names_and_plates() {
        let filters = RequestFilters {
            term: Some("ab".to_string()),
            ..Default::default()
        };
        let (total, _) = repo()
            .list_contracts(ContractListQuery::new().filters(filters))
            .unwrap();
        assert_eq!(total, 2);
    }
}
