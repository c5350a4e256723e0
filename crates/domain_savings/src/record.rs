//! Raw transaction records as delivered by the merchant platform
//!
//! These mirror the provider's JSON payload field-for-field. Nothing here is
//! validated: a record is accepted as-is and handed to
//! [`crate::normalize`], which decides how to treat missing or malformed
//! values. Text fields of the wrong JSON type decode as absent, so one bad
//! record never fails the page it arrives in.

use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use core_kernel::PortError;

/// A transaction exactly as the merchant platform reported it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransactionRecord {
    /// Provider identifier; numeric on the wire, kept as text
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    /// ISO-8601 timestamp with offset, e.g. "2019-08-24T14:15:22Z"
    #[serde(default, deserialize_with = "string_or_none")]
    pub date: Option<String>,
    /// Signed amount in the transaction currency
    #[serde(rename = "transaction_amount")]
    pub amount: Decimal,
    /// Currency code of `amount`
    #[serde(rename = "transaction_currency", default, deserialize_with = "string_or_empty")]
    pub currency: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    /// Direction reported by the provider ("Credit" / "Debit")
    #[serde(default, deserialize_with = "string_or_none")]
    pub sign: Option<String>,
    /// Provider transaction category, used when `sign` is absent
    #[serde(default, deserialize_with = "string_or_none")]
    pub transaction_type: Option<String>,
    #[serde(flatten)]
    pub metadata: ProviderMetadata,
}

/// Provider-specific fields carried along but not used by the savings core
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    #[serde(default, deserialize_with = "string_or_none")]
    pub payment_reference: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub original_currency: Option<String>,
    #[serde(default, deserialize_with = "decimal_or_none")]
    pub original_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub reference_number: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub reference_number_type: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub terminal_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub account_number: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub ruid: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub billing_descriptor: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub pan: Option<String>,
}

impl RawTransactionRecord {
    /// Creates a record with the fields the savings core reads
    pub fn new(
        id: impl Into<String>,
        date: Option<&str>,
        amount: Decimal,
        currency: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.map(str::to_string),
            amount,
            currency: currency.into(),
            description: description.into(),
            sign: None,
            transaction_type: None,
            metadata: ProviderMetadata::default(),
        }
    }

    pub fn with_sign(mut self, sign: impl Into<String>) -> Self {
        self.sign = Some(sign.into());
        self
    }

    pub fn with_transaction_type(mut self, transaction_type: impl Into<String>) -> Self {
        self.transaction_type = Some(transaction_type.into());
        self
    }
}

/// One page of the provider's transaction listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    pub items: Vec<RawTransactionRecord>,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl TransactionPage {
    /// Decodes a page from the provider's JSON body
    pub fn from_json(body: &str) -> Result<Self, PortError> {
        serde_json::from_str(body)
            .map_err(|e| PortError::transformation(format!("invalid transaction page: {e}")))
    }

    pub fn into_records(self) -> Vec<RawTransactionRecord> {
        self.items
    }
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(i64),
        Text(String),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Number(n) => n.to_string(),
        Id::Text(s) => s,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lenient::Value(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

/// A string, or `None` for null and values of any other JSON type
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Lenient::<String>::deserialize(deserializer)?.into_option())
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_or_none(deserializer)?.unwrap_or_default())
}

fn decimal_or_none<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Lenient::<Decimal>::deserialize(deserializer)?.into_option())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const PAGE: &str = r#"{
        "items": [
            {
                "id": 9001,
                "date": "2019-08-24T14:15:22Z",
                "payment_reference": "INV-7",
                "transaction_type": "Payment",
                "transaction_currency": "EUR",
                "transaction_amount": 140.0,
                "original_currency": null,
                "original_amount": null,
                "sign": "Credit",
                "terminal_id": "T-1",
                "description": "Card payment"
            },
            {
                "id": "9002",
                "transaction_currency": "EUR",
                "transaction_amount": -60.25,
                "description": ""
            }
        ],
        "page": 1,
        "page_size": 50,
        "total_pages": 1,
        "total_count": 2,
        "has_previous_page": false,
        "has_next_page": false
    }"#;

    #[test]
    fn test_page_decodes_provider_fields() {
        let page = TransactionPage::from_json(PAGE).unwrap();
        assert_eq!(page.total_count, 2);

        let first = &page.items[0];
        assert_eq!(first.id, "9001");
        assert_eq!(first.amount, dec!(140.0));
        assert_eq!(first.sign.as_deref(), Some("Credit"));
        assert_eq!(first.metadata.payment_reference.as_deref(), Some("INV-7"));
        assert_eq!(first.metadata.terminal_id.as_deref(), Some("T-1"));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let page = TransactionPage::from_json(PAGE).unwrap();
        let second = &page.items[1];
        assert_eq!(second.id, "9002");
        assert_eq!(second.date, None);
        assert_eq!(second.sign, None);
        assert_eq!(second.amount, dec!(-60.25));
    }

    #[test]
    fn test_wrongly_typed_text_fields_decode_as_absent() {
        let body = r#"{
            "items": [{
                "id": 5,
                "date": 20240718,
                "transaction_amount": 3,
                "transaction_currency": null,
                "description": null,
                "sign": false,
                "terminal_id": 77,
                "original_amount": "n/a"
            }],
            "page": 1, "page_size": 1, "total_pages": 1, "total_count": 1,
            "has_previous_page": false, "has_next_page": false
        }"#;
        let record = &TransactionPage::from_json(body).unwrap().items[0];
        assert_eq!(record.date, None);
        assert_eq!(record.currency, "");
        assert_eq!(record.description, "");
        assert_eq!(record.sign, None);
        assert_eq!(record.metadata.terminal_id, None);
        assert_eq!(record.metadata.original_amount, None);
    }

    #[test]
    fn test_garbage_body_is_transformation_error() {
        let err = TransactionPage::from_json("<html>").unwrap_err();
        assert!(matches!(err, PortError::Transformation { .. }));
    }
}
