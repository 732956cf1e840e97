//! Filter values shared by the UI model and the request model.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::domain::contract::{ContractStatus, ContractType, PaymentMethod};
use crate::domain::types::{ClientId, UserId, VehicleId};

/// Selection state of an enum-like filter field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter<T> {
    /// No restriction, shown as "all" in the form.
    All,
    Value(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T> Filter<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Filter::All => None,
            Filter::Value(value) => Some(value),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Filter::All => None,
            Filter::Value(value) => Some(value),
        }
    }
}

impl<T: FromStr> Filter<T> {
    /// Accepts the raw token only when it names a known member; anything
    /// else selects [`Filter::All`].
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|token| token.parse().ok()).into()
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Filter::Value(value),
            None => Filter::All,
        }
    }
}

impl<T: Serialize> Serialize for Filter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Filter::All => serializer.serialize_str("ALL"),
            Filter::Value(value) => value.serialize(serializer),
        }
    }
}

/// Sparse, typed filter set handed to the contract query provider.
///
/// A field is `Some` only when it carries a real restriction.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_status: Option<ContractStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<VehicleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_purchase_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_purchase_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sale_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sale_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

impl RequestFilters {
    /// True when no field restricts the listing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `None` for an empty set, which callers treat as "list
    /// everything" rather than "search with no criteria".
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}
