//! Tests for record decoding and normalization

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal_macros::dec;

use domain_savings::{
    normalize, normalize_batch, Classification, TransactionPage, PLACEHOLDER_DESCRIPTION,
};
use test_utils::{raw_record_strategy, RawTransactionRecordBuilder, RecordFixtures};

mod provider_payload {
    use super::*;

    #[test]
    fn test_page_decodes_numeric_and_text_fields() {
        let page = TransactionPage::from_json(RecordFixtures::provider_page_json()).unwrap();
        assert_eq!(page.total_count, 2);
        assert!(!page.has_next_page);

        let records = page.into_records();
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].amount, dec!(12.5));
        assert_eq!(records[0].metadata.terminal_id.as_deref(), Some("T-01"));
        assert_eq!(records[1].id, "2");
        assert_eq!(records[1].amount, dec!(2500));
        assert_eq!(records[1].sign, None);
    }

    #[test]
    fn test_malformed_page_is_a_transformation_error() {
        let err = TransactionPage::from_json("{\"items\": 3}").unwrap_err();
        assert!(matches!(err, core_kernel::PortError::Transformation { .. }));
    }

    #[test]
    fn test_decoded_page_normalizes() {
        let records = TransactionPage::from_json(RecordFixtures::provider_page_json())
            .unwrap()
            .into_records();
        let transactions = normalize_batch(&records);

        assert_eq!(
            transactions[0].timestamp,
            Some(Utc.with_ymd_and_hms(2019, 8, 24, 14, 15, 22).unwrap())
        );
        assert_eq!(transactions[0].classification, Some(Classification::Debit));

        assert_eq!(
            transactions[1].timestamp,
            Some(Utc.with_ymd_and_hms(2019, 8, 25, 6, 0, 0).unwrap())
        );
        assert_eq!(transactions[1].description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(transactions[1].classification, Some(Classification::Credit));
    }

    #[test]
    fn test_malformed_record_does_not_reject_page() {
        let body = r#"{
            "items": [
                {
                    "id": 1,
                    "date": "2024-07-18T09:00:00Z",
                    "transaction_amount": 40,
                    "transaction_currency": "EUR",
                    "description": "Coffee beans",
                    "sign": "Credit"
                },
                {
                    "id": 2,
                    "date": 20240718,
                    "transaction_amount": 15,
                    "transaction_currency": null,
                    "description": null,
                    "sign": "Credit"
                }
            ],
            "page": 1, "page_size": 2, "total_pages": 1, "total_count": 2,
            "has_previous_page": false, "has_next_page": false
        }"#;

        let records = TransactionPage::from_json(body).unwrap().into_records();
        assert_eq!(records.len(), 2);

        let transactions = normalize_batch(&records);
        assert_eq!(transactions[0].description, "Coffee beans");
        assert!(transactions[0].is_dated());
        assert_eq!(transactions[1].timestamp, None);
        assert_eq!(transactions[1].description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(transactions[1].savings_impact(), dec!(15));
    }
}

mod fallbacks {
    use super::*;

    #[test]
    fn test_unparseable_date_becomes_undated() {
        let record = RecordFixtures::undated();
        let transaction = normalize(&record);

        assert_eq!(transaction.timestamp, None);
        assert!(!transaction.is_dated());
        assert_eq!(transaction.id, "7");
        assert_eq!(transaction.amount, dec!(25));
        assert_eq!(transaction.currency, "EUR");
        assert_eq!(transaction.description, "Bakery");
        assert_eq!(transaction.classification, Some(Classification::Debit));
    }

    #[test]
    fn test_empty_description_uses_placeholder() {
        let record = RawTransactionRecordBuilder::new().with_description("").build();
        assert_eq!(normalize(&record).description, "Transaction");
    }

    #[test]
    fn test_missing_sign_and_type_leave_classification_empty() {
        let record = RawTransactionRecordBuilder::new().without_sign().build();
        let transaction = normalize(&record);
        assert_eq!(transaction.classification, None);
        assert_eq!(transaction.savings_impact(), dec!(0));
    }

    #[test]
    fn test_empty_batch() {
        assert!(normalize_batch(&[]).is_empty());
    }
}

proptest! {
    #[test]
    fn prop_batch_preserves_length_and_order(
        records in prop::collection::vec(raw_record_strategy(), 0..40)
    ) {
        let transactions = normalize_batch(&records);
        prop_assert_eq!(transactions.len(), records.len());
        for (record, transaction) in records.iter().zip(&transactions) {
            prop_assert_eq!(&record.id, &transaction.id);
            prop_assert_eq!(record.amount, transaction.amount);
            prop_assert!(!transaction.description.is_empty());
        }
    }

    #[test]
    fn prop_normalization_is_deterministic(record in raw_record_strategy()) {
        prop_assert_eq!(normalize(&record), normalize(&record));
    }
}
