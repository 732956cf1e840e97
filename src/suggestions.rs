//! Quick search: typed suggestions for free text and filter inference.
//!
//! Matching is a literal, case-insensitive substring test against the labels
//! users see. Entity suggestions are restricted to entities present in the
//! [`LinkedEntityIndex`] so that picking one never yields an empty page.

use serde::Serialize;

use crate::domain::contract::{ContractStatus, ContractType};
use crate::domain::filter::Filter;
use crate::domain::reference::{ClientOption, ReferenceOption, UserOption, VehicleOption};
use crate::forms::filters::UiFilters;
use crate::linked::LinkedEntityIndex;

/// Entity matches kept per category.
pub const MAX_PER_GROUP: usize = 3;
/// Suggestions kept overall.
pub const MAX_SUGGESTIONS: usize = 9;
/// Shorter terms produce no suggestions.
pub const MIN_TERM_LENGTH: usize = 2;

const CLIENT_CONTEXT: &str = "Cliente con contratos";
const USER_CONTEXT: &str = "Usuario con contratos";
const VEHICLE_CONTEXT: &str = "Vehículo utilizado en contratos";
const STATUS_CONTEXT: &str = "Estado de contrato";
const TYPE_CONTEXT: &str = "Tipo de contrato";

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Client,
    User,
    Vehicle,
    Status,
    Type,
}

/// One entry of the quick search dropdown.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct QuickSuggestion {
    pub label: String,
    /// Category caption shown next to the label.
    pub context: &'static str,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Identifier or enum token applied when the suggestion is picked.
    pub value: String,
}

impl QuickSuggestion {
    fn entity<O: ReferenceOption>(option: &O, context: &'static str, kind: SuggestionKind) -> Self {
        Self {
            label: option.label().to_string(),
            context,
            kind,
            value: option.id().to_string(),
        }
    }
}

/// Reference data quick search runs against.
#[derive(Clone, Copy, Debug)]
pub struct QuickSearchContext<'a> {
    pub clients: &'a [ClientOption],
    pub users: &'a [UserOption],
    pub vehicles: &'a [VehicleOption],
    pub linked: &'a LinkedEntityIndex,
    pub statuses: &'a [ContractStatus],
    pub types: &'a [ContractType],
}

impl<'a> QuickSearchContext<'a> {
    /// Context over every contract status and type.
    pub fn new(
        clients: &'a [ClientOption],
        users: &'a [UserOption],
        vehicles: &'a [VehicleOption],
        linked: &'a LinkedEntityIndex,
    ) -> Self {
        Self {
            clients,
            users,
            vehicles,
            linked,
            statuses: ContractStatus::VARIANTS,
            types: ContractType::VARIANTS,
        }
    }

    fn matching_clients<'t>(&self, term: &'t str) -> impl Iterator<Item = &'a ClientOption> + 't
    where
        'a: 't,
    {
        let linked = self.linked;
        linked_matches(self.clients, term, move |id| linked.has_client(id))
    }

    fn matching_users<'t>(&self, term: &'t str) -> impl Iterator<Item = &'a UserOption> + 't
    where
        'a: 't,
    {
        let linked = self.linked;
        linked_matches(self.users, term, move |id| linked.has_user(id))
    }

    fn matching_vehicles<'t>(&self, term: &'t str) -> impl Iterator<Item = &'a VehicleOption> + 't
    where
        'a: 't,
    {
        let linked = self.linked;
        linked_matches(self.vehicles, term, move |id| linked.has_vehicle(id))
    }
}

/// Options that are linked and whose label contains `term`, in list order.
fn linked_matches<'o, 't, O, F>(
    options: &'o [O],
    term: &'t str,
    is_linked: F,
) -> impl Iterator<Item = &'o O> + 't
where
    'o: 't,
    O: ReferenceOption,
    F: Fn(O::Id) -> bool + 't,
{
    options
        .iter()
        .filter(move |option| is_linked(option.id()) && option.label().contains_term(term))
}

/// Lower-cased term, or `None` when it is too short to search.
fn normalize_term(term: &str) -> Option<String> {
    let normalized = term.trim().to_lowercase();
    (normalized.chars().count() >= MIN_TERM_LENGTH).then_some(normalized)
}

/// Builds the quick search dropdown for `term`.
///
/// Categories come in a fixed order (clients, users, vehicles, statuses,
/// types); entity categories keep at most [`MAX_PER_GROUP`] entries and the
/// whole list is cut at [`MAX_SUGGESTIONS`], so entities win over enums.
pub fn suggest(term: &str, ctx: &QuickSearchContext<'_>) -> Vec<QuickSuggestion> {
    let Some(normalized) = normalize_term(term) else {
        return Vec::new();
    };
    let normalized = normalized.as_str();

    let clients = ctx
        .matching_clients(normalized)
        .take(MAX_PER_GROUP)
        .map(|c| QuickSuggestion::entity(c, CLIENT_CONTEXT, SuggestionKind::Client));
    let users = ctx
        .matching_users(normalized)
        .take(MAX_PER_GROUP)
        .map(|u| QuickSuggestion::entity(u, USER_CONTEXT, SuggestionKind::User));
    let vehicles = ctx
        .matching_vehicles(normalized)
        .take(MAX_PER_GROUP)
        .map(|v| QuickSuggestion::entity(v, VEHICLE_CONTEXT, SuggestionKind::Vehicle));
    let statuses = ctx
        .statuses
        .iter()
        .filter(|status| status.matches_term(normalized))
        .map(|status| QuickSuggestion {
            label: status.label().to_string(),
            context: STATUS_CONTEXT,
            kind: SuggestionKind::Status,
            value: status.as_str().to_string(),
        });
    let types = ctx
        .types
        .iter()
        .filter(|contract_type| contract_type.matches_term(normalized))
        .map(|contract_type| QuickSuggestion {
            label: contract_type.label().to_string(),
            context: TYPE_CONTEXT,
            kind: SuggestionKind::Type,
            value: contract_type.as_str().to_string(),
        });

    clients
        .chain(users)
        .chain(vehicles)
        .chain(statuses)
        .chain(types)
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Infers entity filters from the free-text term before a search runs.
///
/// Vehicles, clients and users are tried in that order; the first linked
/// option whose label contains the term fills the matching identifier, but
/// only if the user left it empty. The trimmed term is kept so the server
/// can still search on it.
pub fn hint(filters: &UiFilters, ctx: &QuickSearchContext<'_>) -> UiFilters {
    let mut hinted = filters.clone();
    let term = filters.term.trim();
    if term.is_empty() {
        return hinted;
    }
    let normalized = term.to_lowercase();

    if hinted.vehicle_id.is_empty() {
        if let Some(vehicle) = ctx.matching_vehicles(&normalized).next() {
            log::debug!("Quick search {term:?} resolved to vehicle {}", vehicle.id);
            hinted.vehicle_id = vehicle.id.to_string();
        }
    }
    if hinted.client_id.is_empty() {
        if let Some(client) = ctx.matching_clients(&normalized).next() {
            log::debug!("Quick search {term:?} resolved to client {}", client.id);
            hinted.client_id = client.id.to_string();
        }
    }
    if hinted.user_id.is_empty() {
        if let Some(user) = ctx.matching_users(&normalized).next() {
            log::debug!("Quick search {term:?} resolved to user {}", user.id);
            hinted.user_id = user.id.to_string();
        }
    }

    hinted.term = term.to_string();
    hinted
}

/// Applies a picked suggestion to the form and clears the free text.
pub fn select_suggestion(filters: &UiFilters, suggestion: &QuickSuggestion) -> UiFilters {
    let mut selected = filters.clone();
    let value = suggestion.value.clone();
    match suggestion.kind {
        SuggestionKind::Client => selected.client_id = value,
        SuggestionKind::User => selected.user_id = value,
        SuggestionKind::Vehicle => selected.vehicle_id = value,
        SuggestionKind::Status => selected.contract_status = Filter::parse(Some(value.as_str())),
        SuggestionKind::Type => selected.contract_type = Filter::parse(Some(value.as_str())),
    }
    selected.term.clear();
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contract::{Contract, ContractStatus, ContractType, PaymentMethod};
    use crate::domain::reference::VehicleKind;
    use crate::domain::types::ContractId;

    fn contract(client: i32, user: i32, vehicle: i32) -> Contract {
        Contract {
            id: ContractId::new(1).unwrap(),
            client_id: Some(client),
            user_id: Some(user),
            vehicle_id: Some(vehicle),
            contract_type: ContractType::Sale,
            contract_status: ContractStatus::Active,
            payment_method: PaymentMethod::Cash,
            purchase_price: 0.0,
            sale_price: 0.0,
            client_name: None,
            user_name: None,
            vehicle_plate: None,
        }
    }

    struct Fixture {
        clients: Vec<ClientOption>,
        users: Vec<UserOption>,
        vehicles: Vec<VehicleOption>,
        linked: LinkedEntityIndex,
    }

    impl Fixture {
        fn new(contracts: &[Contract]) -> Self {
            Self {
                clients: vec![
                    ClientOption::person(1, "Juan", "Pérez", Some("123")).unwrap(),
                    ClientOption::person(2, "Ana", "Ruiz", Some("456")).unwrap(),
                    ClientOption::company(3, "Mazda Andina", Some("900")).unwrap(),
                ],
                users: vec![
                    UserOption::new(1, "Mariana", "Gómez", "mgomez").unwrap(),
                    UserOption::new(2, "Luis", "Mazo", "lmazo").unwrap(),
                ],
                vehicles: vec![
                    VehicleOption::new(1, VehicleKind::Car, "Mazda", "3", "ABC123", "SOLD")
                        .unwrap(),
                    VehicleOption::new(2, VehicleKind::Car, "Mazda", "CX-5", "XYZ789", "SOLD")
                        .unwrap(),
                ],
                linked: LinkedEntityIndex::from_contracts(contracts),
            }
        }

        fn ctx(&self) -> QuickSearchContext<'_> {
            QuickSearchContext::new(&self.clients, &self.users, &self.vehicles, &self.linked)
        }
    }

    #[test]
    fn short_terms_yield_nothing() {
        let fixture = Fixture::new(&[contract(1, 1, 1)]);
        assert!(suggest("", &fixture.ctx()).is_empty());
        assert!(suggest(" a", &fixture.ctx()).is_empty());
        assert!(suggest("j  ", &fixture.ctx()).is_empty());
        assert!(!suggest("ju", &fixture.ctx()).is_empty());
    }

    #[test]
    fn unlinked_entities_are_never_suggested() {
        let fixture = Fixture::new(&[contract(1, 1, 1)]);

        let suggestions = suggest("an", &fixture.ctx());

        assert!(suggestions.iter().all(|s| s.label != "Ana Ruiz (CC 456)"));
        // "Mariana" is linked and matches.
        assert!(
            suggestions
                .iter()
                .any(|s| s.kind == SuggestionKind::User && s.value == "1")
        );
    }

    #[test]
    fn entity_categories_cap_at_three_in_list_order() {
        let clients: Vec<ClientOption> = (1..=5)
            .map(|id| ClientOption::person(id, "Carlos", &format!("N{id}"), None).unwrap())
            .collect();
        let contracts: Vec<Contract> = (1..=5).map(|id| contract(id, 99, 99)).collect();
        let linked = LinkedEntityIndex::from_contracts(&contracts);
        let ctx = QuickSearchContext::new(&clients, &[], &[], &linked);

        let suggestions = suggest("carlos", &ctx);

        let values: Vec<&str> = suggestions.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, ["1", "2", "3"]);
        assert!(suggestions.iter().all(|s| s.context == "Cliente con contratos"));
    }

    #[test]
    fn global_cap_prefers_entities() {
        let clients: Vec<ClientOption> = (1..=4)
            .map(|id| ClientOption::company(id, &format!("Activos {id}"), None).unwrap())
            .collect();
        let users: Vec<UserOption> = (1..=4)
            .map(|id| UserOption::new(id, "Activa", &format!("U{id}"), "user").unwrap())
            .collect();
        let vehicles: Vec<VehicleOption> = (1..=4)
            .map(|id| {
                VehicleOption::new(id, VehicleKind::Motorcycle, "Activ", "X", "P", "SOLD").unwrap()
            })
            .collect();
        let contracts: Vec<Contract> = (1..=4).map(|id| contract(id, id, id)).collect();
        let linked = LinkedEntityIndex::from_contracts(&contracts);
        let ctx = QuickSearchContext::new(&clients, &users, &vehicles, &linked);

        let suggestions = suggest("activ", &ctx);

        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert!(suggestions.iter().all(|s| s.kind != SuggestionKind::Status));
        assert_eq!(suggestions[0].kind, SuggestionKind::Client);
        assert_eq!(suggestions[8].kind, SuggestionKind::Vehicle);
    }

    #[test]
    fn statuses_and_types_match_labels_and_tokens() {
        let fixture = Fixture::new(&[]);

        let by_label = suggest("activo", &fixture.ctx());
        assert_eq!(
            by_label,
            vec![QuickSuggestion {
                label: "Activo".to_string(),
                context: "Estado de contrato",
                kind: SuggestionKind::Status,
                value: "ACTIVE".to_string(),
            }]
        );

        let by_token = suggest("purch", &fixture.ctx());
        assert_eq!(by_token.len(), 1);
        assert_eq!(by_token[0].kind, SuggestionKind::Type);
        assert_eq!(by_token[0].label, "Compra");
    }

    #[test]
    fn hint_fills_unset_ids_in_order() {
        let fixture = Fixture::new(&[contract(3, 2, 2)]);
        let filters = UiFilters {
            term: "  mazda ".to_string(),
            ..Default::default()
        };

        let hinted = hint(&filters, &fixture.ctx());

        assert_eq!(hinted.vehicle_id, "2");
        assert_eq!(hinted.client_id, "3");
        assert_eq!(hinted.user_id, "");
        assert_eq!(hinted.term, "mazda");
        // The input model is untouched.
        assert_eq!(filters.vehicle_id, "");
    }

    #[test]
    fn hint_never_overwrites_explicit_ids() {
        let fixture = Fixture::new(&[contract(1, 1, 1), contract(3, 2, 2)]);
        let filters = UiFilters {
            vehicle_id: "7".to_string(),
            term: "mazda".to_string(),
            ..Default::default()
        };

        let hinted = hint(&filters, &fixture.ctx());

        assert_eq!(hinted.vehicle_id, "7");
        assert_eq!(hinted.client_id, "3");
    }

    #[test]
    fn hint_ignores_blank_terms() {
        let fixture = Fixture::new(&[contract(1, 1, 1)]);
        let filters = UiFilters {
            term: "   ".to_string(),
            ..Default::default()
        };

        assert_eq!(hint(&filters, &fixture.ctx()), filters);
    }

    #[test]
    fn selecting_a_suggestion_sets_filter_and_clears_term() {
        let filters = UiFilters {
            term: "acti".to_string(),
            ..Default::default()
        };
        let status = QuickSuggestion {
            label: "Activo".to_string(),
            context: STATUS_CONTEXT,
            kind: SuggestionKind::Status,
            value: "ACTIVE".to_string(),
        };

        let selected = select_suggestion(&filters, &status);
        assert_eq!(selected.contract_status, Filter::Value(ContractStatus::Active));
        assert!(selected.term.is_empty());

        let vehicle = QuickSuggestion {
            label: "Mazda 3 (ABC123)".to_string(),
            context: VEHICLE_CONTEXT,
            kind: SuggestionKind::Vehicle,
            value: "1".to_string(),
        };
        assert_eq!(select_suggestion(&filters, &vehicle).vehicle_id, "1");
    }
}
