use clap::Parser;
use portfolio_risk_tui::{
    app::{App, Portfolio},
    logging,
};

#[derive(Parser)]
#[command(
    name = "portfolio-risk-tui",
    about = "Terminal portfolio risk analysis and benchmark comparison"
)]
struct Args {
    /// CSV file with holdings to preload (ticker,avg_price,quantity)
    #[arg(short, long)]
    import: Option<String>,

    /// Annual risk-free rate used for Sharpe and Sortino
    #[arg(long, default_value_t = 0.02)]
    risk_free_rate: f64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    let _log_guard = logging::init()?;

    let mut portfolio = Portfolio::new(args.risk_free_rate);
    if let Some(path) = &args.import {
        let expanded = shellexpand::tilde(path);
        portfolio.import_holdings(&expanded)?;
    }

    let mut app = App::new(portfolio);
    app.run(args.import.as_deref()).await?;

    Ok(())
}
