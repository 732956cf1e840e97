//! Index of the clients, users and vehicles that appear in the contract
//! collection.
//!
//! Quick search only proposes entities that would actually return results,
//! so the index must describe the full, unfiltered collection. Build a fresh
//! one on every full reload; never derive it from a filtered page.

use std::collections::HashSet;

use crate::domain::contract::Contract;
use crate::domain::types::{ClientId, UserId, VehicleId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkedEntityIndex {
    clients: HashSet<ClientId>,
    users: HashSet<UserId>,
    vehicles: HashSet<VehicleId>,
}

impl LinkedEntityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from the full contract collection.
    pub fn from_contracts<'a, I>(contracts: I) -> Self
    where
        I: IntoIterator<Item = &'a Contract>,
    {
        let mut index = Self::default();
        index.rebuild(contracts);
        index
    }

    /// Clears and repopulates all three sets.
    ///
    /// Missing or non-positive identifiers are skipped.
    pub fn rebuild<'a, I>(&mut self, contracts: I)
    where
        I: IntoIterator<Item = &'a Contract>,
    {
        self.clients.clear();
        self.users.clear();
        self.vehicles.clear();

        for contract in contracts {
            if let Some(id) = contract.client_id.and_then(|v| ClientId::new(v).ok()) {
                self.clients.insert(id);
            }
            if let Some(id) = contract.user_id.and_then(|v| UserId::new(v).ok()) {
                self.users.insert(id);
            }
            if let Some(id) = contract.vehicle_id.and_then(|v| VehicleId::new(v).ok()) {
                self.vehicles.insert(id);
            }
        }
    }

    pub fn has_client(&self, id: ClientId) -> bool {
        self.clients.contains(&id)
    }

    pub fn has_user(&self, id: UserId) -> bool {
        self.users.contains(&id)
    }

    pub fn has_vehicle(&self, id: VehicleId) -> bool {
        self.vehicles.contains(&id)
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }
}
