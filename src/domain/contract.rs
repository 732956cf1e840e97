use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{ContractId, TypeConstraintError};

/// Generates a closed enumeration with its wire token and display label.
macro_rules! token_enum {
    ($name:ident, $doc:expr, { $($variant:ident => ($token:literal, $label:literal)),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every member in declaration order.
            pub const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            /// Wire token used in URLs and request payloads.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            /// Localized label shown to users.
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// True when either the label or the raw token contains the
            /// lower-cased term.
            pub fn matches_term(self, normalized_term: &str) -> bool {
                self.label().to_lowercase().contains(normalized_term)
                    || self.as_str().to_lowercase().contains(normalized_term)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            /// Case-sensitive membership test against the wire tokens.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err(TypeConstraintError::UnknownValue(other.to_string())),
                }
            }
        }
    };
}

token_enum!(ContractType, "Direction of a contract.", {
    Purchase => ("PURCHASE", "Compra"),
    Sale => ("SALE", "Venta"),
});

token_enum!(ContractStatus, "Lifecycle state of a contract.", {
    Pending => ("PENDING", "Pendiente"),
    Active => ("ACTIVE", "Activo"),
    Completed => ("COMPLETED", "Completado"),
    Canceled => ("CANCELED", "Cancelado"),
});

token_enum!(PaymentMethod, "How a contract is paid.", {
    Cash => ("CASH", "Efectivo"),
    BankTransfer => ("BANK_TRANSFER", "Transferencia bancaria"),
    BankDeposit => ("BANK_DEPOSIT", "Consignación bancaria"),
    CashiersCheck => ("CASHIERS_CHECK", "Cheque de gerencia"),
    Mixed => ("MIXED", "Pago combinado"),
    Financing => ("FINANCING", "Financiación"),
    DigitalWallet => ("DIGITAL_WALLET", "Billetera digital"),
    TradeIn => ("TRADE_IN", "Permuta"),
    InstallmentPayment => ("INSTALLMENT_PAYMENT", "Pago a plazos"),
});

/// A purchase/sale contract as listed by the collection provider.
///
/// Party identifiers are kept raw: the provider may send `null` or
/// non-positive values and consumers decide how to treat them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: ContractId,
    pub client_id: Option<i32>,
    pub user_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub contract_type: ContractType,
    pub contract_status: ContractStatus,
    pub payment_method: PaymentMethod,
    pub purchase_price: f64,
    pub sale_price: f64,
    /// Denormalized client name embedded by the provider.
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub vehicle_plate: Option<String>,
}

/// Totals computed over the full, unfiltered contract collection.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ContractSummary {
    pub total: usize,
    pub purchases: usize,
    pub sales: usize,
}

impl ContractSummary {
    pub fn from_contracts(contracts: &[Contract]) -> Self {
        let purchases = contracts
            .iter()
            .filter(|c| c.contract_type == ContractType::Purchase)
            .count();
        let sales = contracts
            .iter()
            .filter(|c| c.contract_type == ContractType::Sale)
            .count();
        Self {
            total: contracts.len(),
            purchases,
            sales,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_parse_case_sensitively() {
        assert_eq!("PURCHASE".parse::<ContractType>(), Ok(ContractType::Purchase));
        assert!("purchase".parse::<ContractType>().is_err());
        assert_eq!(
            "CASHIERS_CHECK".parse::<PaymentMethod>(),
            Ok(PaymentMethod::CashiersCheck)
        );
        assert_eq!(
            "DONE".parse::<ContractStatus>(),
            Err(TypeConstraintError::UnknownValue("DONE".to_string()))
        );
    }

    #[test]
    fn matches_label_or_token() {
        assert!(ContractStatus::Active.matches_term("activo"));
        assert!(ContractStatus::Active.matches_term("acti"));
        assert!(ContractStatus::Canceled.matches_term("canceled"));
        assert!(!ContractStatus::Pending.matches_term("venta"));
        assert!(ContractType::Sale.matches_term("venta"));
    }

    #[test]
    fn contract_deserializes_from_provider_json() {
        let contract: Contract = serde_json::from_value(serde_json::json!({
            "id": 1,
            "clientId": 4,
            "userId": null,
            "vehicleId": 9,
            "contractType": "SALE",
            "contractStatus": "ACTIVE",
            "paymentMethod": "BANK_TRANSFER",
            "purchasePrice": 1000.0,
            "salePrice": 1500.0
        }))
        .unwrap();

        assert_eq!(contract.client_id, Some(4));
        assert_eq!(contract.user_id, None);
        assert_eq!(contract.contract_type, ContractType::Sale);
        assert_eq!(contract.payment_method, PaymentMethod::BankTransfer);
        assert!(contract.client_name.is_none());
    }

    #[test]
    fn summary_counts_by_type() {
        let base: Contract = serde_json::from_value(serde_json::json!({
            "id": 1,
            "clientId": 1,
            "userId": 1,
            "vehicleId": 1,
            "contractType": "PURCHASE",
            "contractStatus": "PENDING",
            "paymentMethod": "CASH",
            "purchasePrice": 1.0,
            "salePrice": 2.0
        }))
        .unwrap();
        let sale = Contract {
            contract_type: ContractType::Sale,
            ..base.clone()
        };

        let summary = ContractSummary::from_contracts(&[base.clone(), base, sale]);
        assert_eq!(
            summary,
            ContractSummary {
                total: 3,
                purchases: 2,
                sales: 1
            }
        );
    }
}
