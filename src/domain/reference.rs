//! Flattened reference options used to populate selects and quick search.
//!
//! Options are owned by the lookup provider; the filter core only reads them.
//! The builders mirror the labels users see in the dropdowns so that quick
//! search matches on exactly what is displayed.

use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, OptionLabel, UserId, VehicleId};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientKind {
    Person,
    Company,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleKind {
    Car,
    Motorcycle,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientOption {
    pub id: ClientId,
    pub label: OptionLabel,
    #[serde(rename = "type")]
    pub kind: ClientKind,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserOption {
    pub id: UserId,
    pub label: OptionLabel,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleOption {
    pub id: VehicleId,
    pub label: OptionLabel,
    #[serde(rename = "type")]
    pub kind: VehicleKind,
    /// Inventory status token as reported by the vehicle service.
    pub status: String,
    #[serde(default)]
    pub plate: Option<String>,
    #[serde(default)]
    pub line: Option<String>,
    #[serde(default)]
    pub purchase_price: Option<f64>,
}

/// Common read access used by quick search over the three option lists.
pub trait ReferenceOption {
    type Id: Copy + Eq + std::hash::Hash + ToString;

    fn id(&self) -> Self::Id;
    fn label(&self) -> &OptionLabel;
}

impl ReferenceOption for ClientOption {
    type Id = ClientId;

    fn id(&self) -> ClientId {
        self.id
    }

    fn label(&self) -> &OptionLabel {
        &self.label
    }
}

impl ReferenceOption for UserOption {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }

    fn label(&self) -> &OptionLabel {
        &self.label
    }
}

impl ReferenceOption for VehicleOption {
    type Id = VehicleId;

    fn id(&self) -> VehicleId {
        self.id
    }

    fn label(&self) -> &OptionLabel {
        &self.label
    }
}

impl ClientOption {
    /// Builds a person option labelled `First Last (CC nationalId)`.
    ///
    /// Returns `None` for entities without a usable id or name.
    pub fn person(
        id: i32,
        first_name: &str,
        last_name: &str,
        national_id: Option<&str>,
    ) -> Option<Self> {
        let label = format!(
            "{first_name} {last_name} (CC {})",
            national_id.unwrap_or("N/A")
        );
        Some(Self {
            id: ClientId::new(id).ok()?,
            label: OptionLabel::new(label).ok()?,
            kind: ClientKind::Person,
        })
    }

    /// Builds a company option labelled `Name (NIT taxId)`.
    pub fn company(id: i32, company_name: &str, tax_id: Option<&str>) -> Option<Self> {
        let label = format!("{company_name} (NIT {})", tax_id.unwrap_or("N/A"));
        Some(Self {
            id: ClientId::new(id).ok()?,
            label: OptionLabel::new(label).ok()?,
            kind: ClientKind::Company,
        })
    }
}

impl UserOption {
    /// Builds a user option labelled `First Last (@username)`.
    pub fn new(id: i32, first_name: &str, last_name: &str, username: &str) -> Option<Self> {
        let label = format!("{first_name} {last_name} (@{username})");
        Some(Self {
            id: UserId::new(id).ok()?,
            label: OptionLabel::new(label).ok()?,
        })
    }
}

impl VehicleOption {
    /// Builds a vehicle option labelled `Brand Model (PLATE)`.
    pub fn new(
        id: i32,
        kind: VehicleKind,
        brand: &str,
        model: &str,
        plate: &str,
        status: &str,
    ) -> Option<Self> {
        let label = format!("{brand} {model} ({plate})");
        Some(Self {
            id: VehicleId::new(id).ok()?,
            label: OptionLabel::new(label).ok()?,
            kind,
            status: status.to_string(),
            plate: Some(plate.to_string()).filter(|p| !p.is_empty()),
            line: None,
            purchase_price: None,
        })
    }
}
