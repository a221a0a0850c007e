use thiserror::Error;

/// Failure kinds for a single analysis run. The portfolio itself survives
/// every one of these; the caller reports and retries.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("portfolio is empty, add at least one holding first")]
    EmptyPortfolio,

    #[error("failed to retrieve prices for {symbol}: {reason}")]
    DataRetrieval { symbol: String, reason: String },

    #[error("only {rows} price row(s) remain after date alignment, need at least 2")]
    InsufficientHistory { rows: usize },

    #[error("no price history column for ticker {0}")]
    MissingTicker(String),
}
