//! Tests for savings aggregation and calendar filters

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Rate};
use domain_savings::{
    aggregate, expected_return, normalize_batch, total_saved, SavingsConfiguration,
    TransactionFilter,
};
use test_utils::{
    assert_dashboard_empty, assert_money_eq, assert_newest_first, assert_subset,
    transactions_strategy, ConfigurationFixtures, RecordFixtures, TemporalFixtures,
    TransactionBuilder,
};

mod dashboard {
    use super::*;

    #[test]
    fn test_monthly_scenario_totals() {
        let transactions = normalize_batch(&RecordFixtures::monthly_scenario());
        let state = aggregate(&transactions, &ConfigurationFixtures::standard(), TemporalFixtures::now());

        assert_money_eq(&state.total_saved, dec!(490.0));
        assert_money_eq(&state.expected_return, dec!(9.80));
        assert_money_eq(&state.progress_this_month, dec!(490.0));
        assert_money_eq(&state.earned_this_month, dec!(9.80));
        assert_eq!(state.total_saved.currency(), Currency::EUR);
        assert_eq!(state.recent_transactions.len(), 3);
        assert_eq!(state.recent_transactions[0].id, "3");
        assert_eq!(state.evaluated_at, TemporalFixtures::now());
    }

    #[test]
    fn test_empty_input_yields_zeroes_in_default_currency() {
        let state = aggregate(&[], &ConfigurationFixtures::standard(), TemporalFixtures::now());
        assert_dashboard_empty(&state);
        assert_eq!(state.total_saved.currency(), Currency::BGN);
        assert_eq!(state.undated_count, 0);
    }

    #[test]
    fn test_last_month_counts_toward_total_only() {
        let transactions = vec![
            TransactionBuilder::new().with_id("a").at(TemporalFixtures::last_month()).with_amount(dec!(100)).build(),
            TransactionBuilder::new().with_id("b").at(TemporalFixtures::earlier_this_month()).with_amount(dec!(40)).build(),
        ];
        let state = aggregate(&transactions, &ConfigurationFixtures::standard(), TemporalFixtures::now());
        assert_money_eq(&state.total_saved, dec!(140));
        assert_money_eq(&state.progress_this_month, dec!(40));
        assert_money_eq(&state.earned_this_month, dec!(0.8));
    }

    #[test]
    fn test_undated_transactions_count_toward_total_and_sort_last() {
        let transactions = vec![
            TransactionBuilder::new().with_id("undated").undated().with_amount(dec!(5)).build(),
            TransactionBuilder::new().with_id("dated").at(TemporalFixtures::this_morning()).build(),
        ];
        let state = aggregate(&transactions, &ConfigurationFixtures::standard(), TemporalFixtures::now());

        assert_money_eq(&state.total_saved, dec!(15));
        assert_money_eq(&state.progress_this_month, dec!(10));
        assert_eq!(state.undated_count, 1);
        assert_eq!(state.recent_transactions[0].id, "dated");
        assert_eq!(state.recent_transactions[1].id, "undated");
    }

    #[test]
    fn test_zero_bonus_rate_yields_zero_return() {
        let config = SavingsConfiguration::new(dec!(5), dec!(0)).unwrap();
        let transactions = normalize_batch(&RecordFixtures::monthly_scenario());
        let state = aggregate(&transactions, &config, TemporalFixtures::now());
        assert_money_eq(&state.expected_return, dec!(0));
        assert_money_eq(&state.total_saved, dec!(490));
    }

    #[test]
    fn test_totals_near_decimal_limit_saturate() {
        let half = Decimal::MAX / Decimal::TWO + Decimal::ONE;
        let transactions = vec![
            TransactionBuilder::new().with_id("a").at(TemporalFixtures::this_morning()).with_amount(half).build(),
            TransactionBuilder::new().with_id("b").at(TemporalFixtures::this_morning()).with_amount(half).build(),
        ];

        let state = aggregate(&transactions, &ConfigurationFixtures::standard(), TemporalFixtures::now());
        assert_eq!(state.total_saved.amount(), Decimal::MAX);
        assert_eq!(state.progress_this_month.amount(), Decimal::MAX);
        assert!(state.expected_return.amount() > Decimal::ZERO);
        assert!(state.expected_return.amount() < Decimal::MAX);
    }

    #[test]
    fn test_expected_return_helper() {
        assert_eq!(expected_return(dec!(490), Rate::from_percentage(dec!(2))), dec!(9.8));
    }
}

mod filters {
    use super::*;

    #[test]
    fn test_today_and_this_week() {
        let transactions = vec![
            TransactionBuilder::new().with_id("today").at(TemporalFixtures::this_morning()).build(),
            TransactionBuilder::new().with_id("monday").at(TemporalFixtures::start_of_week()).build(),
            TransactionBuilder::new().with_id("sunday").at(TemporalFixtures::last_week()).build(),
            TransactionBuilder::new().with_id("undated").undated().build(),
        ];
        let now = TemporalFixtures::now();

        let ids = |filter: TransactionFilter| -> Vec<String> {
            filter.apply(&transactions, now).into_iter().map(|t| t.id.clone()).collect()
        };

        assert_eq!(ids(TransactionFilter::Today), vec!["today"]);
        assert_eq!(ids(TransactionFilter::ThisWeek), vec!["today", "monday"]);
        assert_eq!(ids(TransactionFilter::All).len(), 4);
    }
}

mod configuration {
    use super::*;
    use domain_savings::SavingsSettings;

    #[test]
    fn test_out_of_range_percentage_is_rejected() {
        let err = SavingsConfiguration::new(dec!(16), dec!(2)).unwrap_err();
        assert!(err.is_configuration());
        let err = SavingsConfiguration::new(dec!(0), dec!(2)).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_settings_defaults() {
        let config = SavingsSettings::load(config::Config::builder())
            .unwrap()
            .into_configuration()
            .unwrap();
        assert_eq!(config.savings_percentage.value(), dec!(3));
        assert_eq!(config.bonus_rate, Rate::from_percentage(dec!(2)));
        assert_eq!(config.default_currency, Currency::BGN);
    }

    #[test]
    fn test_settings_overrides_are_validated() {
        let builder = config::Config::builder()
            .set_override("savings_percentage", "20")
            .unwrap();
        let err = SavingsSettings::load(builder).unwrap().into_configuration().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_settings_reject_bad_currency() {
        let builder = config::Config::builder()
            .set_override("default_currency", "euro")
            .unwrap();
        let err = SavingsSettings::load(builder).unwrap().into_configuration().unwrap_err();
        assert!(err.is_configuration());
    }
}

proptest! {
    #[test]
    fn prop_filters_select_nested_subsets(transactions in transactions_strategy(30)) {
        let now = TemporalFixtures::now();
        let today: Vec<_> = TransactionFilter::Today.apply(&transactions, now).into_iter().cloned().collect();
        let week: Vec<_> = TransactionFilter::ThisWeek.apply(&transactions, now).into_iter().cloned().collect();
        let all = TransactionFilter::All.apply(&transactions, now);

        assert_subset(&today, &week);
        assert_subset(&week, &transactions);
        prop_assert_eq!(all.len(), transactions.len());
        prop_assert!(today.iter().all(|t| t.is_dated()));
    }

    #[test]
    fn prop_aggregation_is_idempotent(transactions in transactions_strategy(30)) {
        let config = ConfigurationFixtures::standard();
        let now = TemporalFixtures::now();
        prop_assert_eq!(aggregate(&transactions, &config, now), aggregate(&transactions, &config, now));
    }

    #[test]
    fn prop_totals_are_bounded(transactions in transactions_strategy(30)) {
        let state = aggregate(&transactions, &ConfigurationFixtures::standard(), TemporalFixtures::now());
        prop_assert!(state.total_saved.amount() >= Decimal::ZERO);
        prop_assert!(state.progress_this_month.amount() <= state.total_saved.amount());
        prop_assert_eq!(state.total_saved.amount(), total_saved(&transactions));
        prop_assert_eq!(state.recent_transactions.len(), transactions.len());
        assert_newest_first(&state.recent_transactions);
    }
}
