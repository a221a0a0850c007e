#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::app::calc::{
        build_return_table, cumulative_returns, mean, risk_metrics, sample_std, weighted_returns,
    };
    use crate::error::AnalysisError;
    use crate::models::{ConfidenceLevel, PriceTable, ReturnTable};

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn sample_returns() -> Vec<f64> {
        vec![0.01, -0.02, 0.03, -0.01, 0.02]
    }

    #[test]
    fn mean_of_sample_series() {
        assert!((mean(&sample_returns()) - 0.006).abs() < 1e-12);
    }

    #[test]
    fn sample_std_uses_n_minus_one() {
        // Downside subset of the sample series.
        let downside = vec![-0.02, -0.01];
        let std = sample_std(&downside).unwrap();
        // mean -0.015, squared deviations 2 * 0.005^2, variance / (n-1) = 5e-5
        assert!((std - 5e-5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn sample_std_undefined_below_two_observations() {
        assert!(sample_std(&[]).is_none());
        assert!(sample_std(&[0.01]).is_none());
    }

    #[test]
    fn sortino_uses_downside_deviation_only() {
        let metrics = risk_metrics(&sample_returns(), 0.0, ConfidenceLevel::NinetyFive, 1.0);
        let downside_std = 5e-5_f64.sqrt();
        let sortino = metrics.sortino().unwrap();
        assert!((sortino - 0.006 / downside_std).abs() < 1e-9);
    }

    #[test]
    fn constant_returns_are_degenerate_not_a_crash() {
        let series = vec![0.01; 5];
        let metrics = risk_metrics(&series, 0.02 / 252.0, ConfidenceLevel::NinetyFive, 10_000.0);

        assert_eq!(metrics.std_dev(), &Some(0.0));
        assert!(metrics.sharpe().is_none());
        assert!(metrics.sortino().is_none());
    }

    #[test]
    fn all_negative_constant_returns_have_no_sortino() {
        let series = vec![-0.01; 5];
        let metrics = risk_metrics(&series, 0.0, ConfidenceLevel::NinetyFive, 1.0);

        // Downside deviation is zero, so the ratio stays undefined.
        assert!(metrics.sortino().is_none());
        assert!(metrics.sharpe().is_none());
    }

    #[test]
    fn value_at_risk_scenario() {
        let var = ConfidenceLevel::NinetyFive.z_score() * 0.02 * 10_000.0;
        assert!((var - 329.0).abs() < 1e-9);
    }

    #[test]
    fn z_score_lookup_table() {
        assert_eq!(ConfidenceLevel::Ninety.z_score(), 1.28);
        assert_eq!(ConfidenceLevel::NinetyFive.z_score(), 1.645);
        assert_eq!(ConfidenceLevel::NinetyNine.z_score(), 2.33);
    }

    #[test]
    fn value_at_risk_matches_own_std() {
        let series = sample_returns();
        let metrics = risk_metrics(&series, 0.0, ConfidenceLevel::NinetyNine, 10_000.0);
        let expected = 2.33 * sample_std(&series).unwrap() * 10_000.0;
        assert!((metrics.value_at_risk().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn cumulative_series_recurrence() {
        let series = vec![0.01, -0.02, 0.03];
        let cumulative = cumulative_returns(&series);

        assert_eq!(cumulative.len(), series.len());
        assert!((cumulative[0] - 1.01).abs() < 1e-12);
        for i in 1..series.len() {
            let expected = cumulative[i - 1] * (1.0 + series[i]);
            assert!((cumulative[i] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn return_table_from_prices() {
        let prices = PriceTable::new(
            vec!["AAPL".to_string(), "MSFT".to_string()],
            vec![d(2024, 1, 2), d(2024, 1, 3)],
            vec![vec![100.0, 100.0], vec![110.0, 90.0]],
        );

        let returns = build_return_table(&prices).unwrap();
        assert_eq!(returns.dates(), &vec![d(2024, 1, 3)]);
        assert!((returns.rows()[0][0] - 0.1).abs() < 1e-12);
        assert!((returns.rows()[0][1] + 0.1).abs() < 1e-12);
    }

    #[test]
    fn return_table_needs_two_price_rows() {
        let prices = PriceTable::new(
            vec!["AAPL".to_string()],
            vec![d(2024, 1, 2)],
            vec![vec![100.0]],
        );

        let result = build_return_table(&prices);
        assert!(matches!(
            result,
            Err(AnalysisError::InsufficientHistory { rows: 1 })
        ));
    }

    #[test]
    fn weighted_returns_is_a_dot_product() {
        let returns = ReturnTable::new(
            vec!["AAPL".to_string(), "MSFT".to_string()],
            vec![d(2024, 1, 3), d(2024, 1, 4)],
            vec![vec![0.01, 0.03], vec![-0.02, 0.01]],
        );
        let weights = vec![("AAPL".to_string(), 0.5), ("MSFT".to_string(), 0.5)];

        let combined = weighted_returns(&returns, &weights).unwrap();
        assert!((combined[0] - 0.02).abs() < 1e-12);
        assert!((combined[1] + 0.005).abs() < 1e-12);
    }

    #[test]
    fn weighted_returns_rejects_unknown_ticker() {
        let returns = ReturnTable::new(
            vec!["AAPL".to_string()],
            vec![d(2024, 1, 3)],
            vec![vec![0.01]],
        );
        let weights = vec![("TSLA".to_string(), 1.0)];

        let result = weighted_returns(&returns, &weights);
        assert!(matches!(result, Err(AnalysisError::MissingTicker(t)) if t == "TSLA"));
    }
}
