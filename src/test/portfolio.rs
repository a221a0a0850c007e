#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;

    use crate::app::Portfolio;
    use crate::error::AnalysisError;

    fn two_holding_portfolio() -> Portfolio {
        let mut portfolio = Portfolio::new(0.02);
        portfolio.add_holding("AAPL", dec!(100), dec!(10)).unwrap();
        portfolio.add_holding("MSFT", dec!(50), dec!(20)).unwrap();
        portfolio
    }

    #[test]
    fn equal_investments_get_equal_weights() {
        let portfolio = two_holding_portfolio();

        assert_eq!(portfolio.total_value(), dec!(2000));
        assert_eq!(portfolio.holdings()[0].investment(), dec!(1000));
        assert_eq!(portfolio.holdings()[1].investment(), dec!(1000));

        let weights = portfolio.weights().unwrap();
        assert_eq!(weights[0], ("AAPL".to_string(), dec!(0.5)));
        assert_eq!(weights[1], ("MSFT".to_string(), dec!(0.5)));
    }

    #[test]
    fn weights_sum_to_one() {
        let mut portfolio = Portfolio::new(0.02);
        portfolio.add_holding("AAPL", dec!(173.11), dec!(7)).unwrap();
        portfolio.add_holding("MSFT", dec!(421.9), dec!(3)).unwrap();
        portfolio.add_holding("NVDA", dec!(88.4), dec!(11)).unwrap();

        let sum: f64 = portfolio
            .weights()
            .unwrap()
            .iter()
            .map(|(_, w)| w.to_f64().unwrap())
            .sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_tickers_merge_into_one_weight() {
        let mut portfolio = Portfolio::new(0.02);
        portfolio.add_holding("AAPL", dec!(100), dec!(10)).unwrap();
        portfolio.add_holding("aapl", dec!(200), dec!(5)).unwrap();

        let weights = portfolio.weights().unwrap();
        assert_eq!(weights.len(), 1);
        assert_eq!(weights[0], ("AAPL".to_string(), dec!(1)));
    }

    #[test]
    fn empty_portfolio_is_an_explicit_error() {
        let portfolio = Portfolio::new(0.02);
        assert!(matches!(
            portfolio.weights(),
            Err(AnalysisError::EmptyPortfolio)
        ));
    }

    #[test]
    fn add_holding_validates_input() {
        let mut portfolio = Portfolio::new(0.02);

        assert!(portfolio.add_holding("", dec!(100), dec!(10)).is_err());
        assert!(portfolio.add_holding("AAPL", dec!(0), dec!(10)).is_err());
        assert!(portfolio.add_holding("AAPL", dec!(-1), dec!(10)).is_err());
        assert!(portfolio.add_holding("AAPL", dec!(100), dec!(0)).is_err());
        assert!(portfolio.add_holding("AAPL", dec!(100), dec!(2.5)).is_err());

        portfolio.add_holding(" aapl ", dec!(100), dec!(10)).unwrap();
        assert_eq!(portfolio.holdings()[0].ticker(), "AAPL");
    }

    #[test]
    fn import_holdings_from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ticker,avg_price,quantity").unwrap();
        writeln!(file, "AAPL,100,10").unwrap();
        writeln!(file, "MSFT,50.5,20").unwrap();
        file.flush().unwrap();

        let mut portfolio = Portfolio::new(0.02);
        let imported = portfolio
            .import_holdings(file.path().to_str().unwrap())
            .unwrap();

        assert_eq!(imported, 2);
        assert_eq!(portfolio.holdings().len(), 2);
        assert_eq!(portfolio.total_value(), dec!(2010));
    }

    #[test]
    fn import_skips_rows_that_fail_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ticker,avg_price,quantity").unwrap();
        writeln!(file, "AAPL,100,10").unwrap();
        writeln!(file, "MSFT,-50,20").unwrap();
        file.flush().unwrap();

        let mut portfolio = Portfolio::new(0.02);
        let imported = portfolio
            .import_holdings(file.path().to_str().unwrap())
            .unwrap();

        assert_eq!(imported, 1);
        assert_eq!(portfolio.holdings().len(), 1);
    }

    #[test]
    fn import_rejects_unparseable_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ticker,avg_price,quantity").unwrap();
        writeln!(file, "AAPL,not-a-price,10").unwrap();
        file.flush().unwrap();

        let mut portfolio = Portfolio::new(0.02);
        assert!(
            portfolio
                .import_holdings(file.path().to_str().unwrap())
                .is_err()
        );
    }
}
