use super::Host;
use super::common::{CommonArgs, init_logging};
use crate::Result;
use crate::rates::RateFetcher;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct RatesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Fetch the current conversion rates and print them
pub async fn show_rates<H: Host>(host: &mut H, args: &RatesArgs) -> Result<()> {
    init_logging(args.common.log_level);
    let config = args.common.load_config(host)?;

    let fetcher = RateFetcher::from_config(&config)?;
    let rates = fetcher.fetch_rates().await;

    if rates.is_empty() {
        let _ = writeln!(host.error(), "No conversion rates could be fetched");
        return Ok(());
    }

    let mut ordered: Vec<(&str, f64)> = rates.iter().collect();
    ordered.sort_by(|a, b| a.0.cmp(b.0));

    let width = ordered.iter().map(|(currency, _)| currency.len()).max().unwrap_or(0);
    for (currency, rate) in ordered {
        let _ = writeln!(host.output(), "{currency:<width$}  {rate}");
    }

    Ok(())
}
