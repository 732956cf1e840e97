//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::contract::Contract;
use crate::domain::reference::{ClientOption, UserOption, VehicleOption};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContractListQuery, ContractReader, ReferenceReader};

mock! {
    pub Repository {}

    impl ContractReader for Repository {
        fn list_all_contracts(&self) -> RepositoryResult<Vec<Contract>>;
        fn list_contracts(
            &self,
            query: ContractListQuery,
        ) -> RepositoryResult<(usize, Vec<Contract>)>;
    }

    impl ReferenceReader for Repository {
        fn list_client_options(&self) -> RepositoryResult<Vec<ClientOption>>;
        fn list_user_options(&self) -> RepositoryResult<Vec<UserOption>>;
        fn list_vehicle_options(&self) -> RepositoryResult<Vec<VehicleOption>>;
    }
}
