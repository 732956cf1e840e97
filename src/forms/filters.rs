//! Form-facing filter model bound to the contract list search panel.

use serde::Serialize;

use crate::domain::contract::{ContractStatus, ContractType, PaymentMethod};
use crate::domain::filter::{Filter, RequestFilters};
use crate::money::{self, normalize_price_input};

/// The four independently filtered price bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceField {
    MinPurchase,
    MaxPurchase,
    MinSale,
    MaxSale,
}

impl PriceField {
    pub const VARIANTS: [PriceField; 4] = [
        PriceField::MinPurchase,
        PriceField::MaxPurchase,
        PriceField::MinSale,
        PriceField::MaxSale,
    ];

    /// Query parameter carrying this bound.
    pub const fn query_key(self) -> &'static str {
        match self {
            PriceField::MinPurchase => "minPurchasePrice",
            PriceField::MaxPurchase => "maxPurchasePrice",
            PriceField::MinSale => "minSalePrice",
            PriceField::MaxSale => "maxSalePrice",
        }
    }
}

/// Current state of the filter form.
///
/// Text inputs hold exactly what is displayed: an empty string means "no
/// filter", identifier inputs keep whatever the user typed and price inputs
/// keep locale formatted text.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UiFilters {
    pub contract_type: Filter<ContractType>,
    pub contract_status: Filter<ContractStatus>,
    pub payment_method: Filter<PaymentMethod>,
    pub client_id: String,
    pub user_id: String,
    pub vehicle_id: String,
    pub term: String,
    pub min_purchase_price: String,
    pub max_purchase_price: String,
    pub min_sale_price: String,
    pub max_sale_price: String,
}

impl UiFilters {
    pub fn price(&self, field: PriceField) -> &str {
        match field {
            PriceField::MinPurchase => &self.min_purchase_price,
            PriceField::MaxPurchase => &self.max_purchase_price,
            PriceField::MinSale => &self.min_sale_price,
            PriceField::MaxSale => &self.max_sale_price,
        }
    }

    pub fn price_mut(&mut self, field: PriceField) -> &mut String {
        match field {
            PriceField::MinPurchase => &mut self.min_purchase_price,
            PriceField::MaxPurchase => &mut self.max_purchase_price,
            PriceField::MinSale => &mut self.min_sale_price,
            PriceField::MaxSale => &mut self.max_sale_price,
        }
    }

    /// Applies a keystroke in a price input, re-rendering it canonically.
    pub fn set_price_input(&mut self, field: PriceField, raw: &str) {
        *self.price_mut(field) = normalize_price_input(raw);
    }

    /// True when every field sits at its "no filter" value.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Derives the request model; unparseable inputs are left out.
    pub fn to_request_filters(&self) -> RequestFilters {
        RequestFilters {
            contract_type: self.contract_type.into_option(),
            contract_status: self.contract_status.into_option(),
            payment_method: self.payment_method.into_option(),
            client_id: self.client_id.parse().ok(),
            user_id: self.user_id.parse().ok(),
            vehicle_id: self.vehicle_id.parse().ok(),
            min_purchase_price: money::parse_price(&self.min_purchase_price),
            max_purchase_price: money::parse_price(&self.max_purchase_price),
            min_sale_price: money::parse_price(&self.min_sale_price),
            max_sale_price: money::parse_price(&self.max_sale_price),
            term: Some(self.term.clone()).filter(|term| !term.is_empty()),
        }
    }
}
