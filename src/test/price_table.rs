#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::app::calc::build_return_table;
    use crate::models::{PriceSeries, PriceTable};

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn misaligned_series() -> Vec<PriceSeries> {
        vec![
            PriceSeries::new(
                "AAPL".to_string(),
                vec![
                    (d(2024, 1, 2), 100.0),
                    (d(2024, 1, 3), 102.0),
                    (d(2024, 1, 4), 104.0),
                ],
            ),
            // No bar on the 3rd.
            PriceSeries::new(
                "MSFT".to_string(),
                vec![(d(2024, 1, 2), 200.0), (d(2024, 1, 4), 210.0)],
            ),
        ]
    }

    #[test]
    fn alignment_keeps_only_common_dates() {
        let table = PriceTable::align(&misaligned_series());

        assert_eq!(table.dates(), &vec![d(2024, 1, 2), d(2024, 1, 4)]);
        assert_eq!(table.rows(), &vec![vec![100.0, 200.0], vec![104.0, 210.0]]);
    }

    #[test]
    fn aligned_table_yields_single_gap_return() {
        let table = PriceTable::align(&misaligned_series());
        let returns = build_return_table(&table).unwrap();

        // One return row, spanning the d1 -> d3 gap.
        assert_eq!(returns.dates(), &vec![d(2024, 1, 4)]);
        assert!((returns.rows()[0][0] - 0.04).abs() < 1e-12);
        assert!((returns.rows()[0][1] - 0.05).abs() < 1e-12);
    }

    #[test]
    fn alignment_is_idempotent() {
        let once = PriceTable::align(&misaligned_series());

        // Rebuild per-ticker series from the aligned table and align again.
        let rebuilt: Vec<PriceSeries> = once
            .tickers()
            .iter()
            .enumerate()
            .map(|(column, ticker)| {
                let points = once
                    .dates()
                    .iter()
                    .zip(once.rows().iter())
                    .map(|(date, row)| (*date, row[column]))
                    .collect();
                PriceSeries::new(ticker.clone(), points)
            })
            .collect();
        let twice = PriceTable::align(&rebuilt);

        assert_eq!(once.tickers(), twice.tickers());
        assert_eq!(once.dates(), twice.dates());
        assert_eq!(once.rows(), twice.rows());
    }

    #[test]
    fn aligning_nothing_is_empty() {
        let table = PriceTable::align(&[]);
        assert_eq!(table.row_count(), 0);
        assert!(table.tickers().is_empty());
    }

    #[test]
    fn disjoint_dates_align_to_nothing() {
        let series = vec![
            PriceSeries::new("AAPL".to_string(), vec![(d(2024, 1, 2), 100.0)]),
            PriceSeries::new("MSFT".to_string(), vec![(d(2024, 1, 3), 200.0)]),
        ];

        let table = PriceTable::align(&series);
        assert_eq!(table.row_count(), 0);
        assert!(build_return_table(&table).is_err());
    }
}
