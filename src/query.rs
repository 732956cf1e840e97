//! Conversions between the filter form, the request model and URL query
//! parameters.
//!
//! Query parameters only exist at the router boundary: they are decoded into
//! [`UiFilters`] and [`RequestFilters`] as soon as they arrive and encoded
//! back only when navigating.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::filter::{Filter, RequestFilters};
use crate::forms::filters::{PriceField, UiFilters};
use crate::money::{self, PRICE_DECIMALS};

pub const CONTRACT_TYPE_KEY: &str = "contractType";
pub const CONTRACT_STATUS_KEY: &str = "contractStatus";
pub const PAYMENT_METHOD_KEY: &str = "paymentMethod";
pub const CLIENT_ID_KEY: &str = "clientId";
pub const USER_ID_KEY: &str = "userId";
pub const VEHICLE_ID_KEY: &str = "vehicleId";
pub const TERM_KEY: &str = "term";

/// Flat string map backing a URL query string.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string such as `contractType=SALE&page=2`.
    ///
    /// A leading `?` is ignored and the first occurrence of a repeated key
    /// wins. Malformed input yields an empty map.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = match serde_html_form::from_str(query) {
            Ok(pairs) => pairs,
            Err(err) => {
                log::debug!("Ignoring malformed query string {query:?}: {err}");
                return Self::default();
            }
        };

        let mut params = BTreeMap::new();
        for (key, value) in pairs {
            params.entry(key).or_insert(value);
        }
        Self(params)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value of `key` when present and non-empty.
    fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the parameters as an URL-encoded query string.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(&self.0).unwrap_or_else(|err| {
            log::error!("Failed to encode query params: {err}");
            String::new()
        })
    }

    /// Collapses an empty map to `None`.
    pub fn non_empty_map(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Result of decoding inbound query parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedFilters {
    /// Form state to display.
    pub ui_filters: UiFilters,
    /// Filters to search with; `None` means the unfiltered listing.
    pub request_filters: Option<RequestFilters>,
    /// Non-empty inbound parameters, preserved for pager links.
    pub cleaned_query_params: Option<QueryParams>,
}

/// Serializes the form state, omitting every field at its default.
///
/// Returns `None` when nothing would be serialized.
pub fn to_query_params(filters: &UiFilters) -> Option<QueryParams> {
    let mut params = QueryParams::new();

    if let Filter::Value(contract_type) = filters.contract_type {
        params.insert(CONTRACT_TYPE_KEY, contract_type.as_str());
    }
    if let Filter::Value(status) = filters.contract_status {
        params.insert(CONTRACT_STATUS_KEY, status.as_str());
    }
    if let Filter::Value(method) = filters.payment_method {
        params.insert(PAYMENT_METHOD_KEY, method.as_str());
    }

    for (key, value) in [
        (CLIENT_ID_KEY, &filters.client_id),
        (USER_ID_KEY, &filters.user_id),
        (VEHICLE_ID_KEY, &filters.vehicle_id),
        (TERM_KEY, &filters.term),
    ] {
        if !value.is_empty() {
            params.insert(key, value.as_str());
        }
    }

    for field in PriceField::VARIANTS {
        if let Some(price) = money::parse_price(filters.price(field)) {
            params.insert(field.query_key(), price.to_string());
        }
    }

    params.non_empty_map()
}

/// Decodes inbound query parameters.
///
/// Unknown enum tokens and unparseable numbers are dropped silently so a
/// stale or hand-edited URL degrades to "no filter" for that field.
pub fn from_query_params(params: &QueryParams) -> DecodedFilters {
    let mut ui = UiFilters {
        contract_type: decode_enum(params, CONTRACT_TYPE_KEY),
        contract_status: decode_enum(params, CONTRACT_STATUS_KEY),
        payment_method: decode_enum(params, PAYMENT_METHOD_KEY),
        ..UiFilters::default()
    };

    // Identifiers are echoed as typed; only numeric ones reach the request.
    for (key, target) in [
        (CLIENT_ID_KEY, &mut ui.client_id),
        (USER_ID_KEY, &mut ui.user_id),
        (VEHICLE_ID_KEY, &mut ui.vehicle_id),
        (TERM_KEY, &mut ui.term),
    ] {
        if let Some(raw) = params.non_empty(key) {
            *target = raw.to_string();
        }
    }

    for field in PriceField::VARIANTS {
        if let Some(raw) = params.non_empty(field.query_key()) {
            *ui.price_mut(field) = money::normalize_input(raw, PRICE_DECIMALS).display_value;
        }
    }

    let request_filters = ui.to_request_filters().non_empty();
    let cleaned_query_params = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .collect::<QueryParams>()
        .non_empty_map();

    DecodedFilters {
        ui_filters: ui,
        request_filters,
        cleaned_query_params,
    }
}

fn decode_enum<T: std::str::FromStr>(params: &QueryParams, key: &str) -> Filter<T> {
    let raw = params.non_empty(key);
    let decoded = Filter::parse(raw);
    if let (Some(raw), Filter::All) = (raw, &decoded) {
        log::debug!("Dropping unknown {key} value {raw:?}");
    }
    decoded
}
