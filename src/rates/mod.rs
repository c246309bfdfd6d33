//! Exchange-rate fetching and ERG value calculation
//!
//! Rates come from two structurally different sources: the Spectrum market
//! API (token/ERG trading pairs) and the on-chain gold oracle pool (ERG per
//! gram, read from a box register). Each source is independently
//! fault-tolerant; a failure logs and omits that source's keys rather than
//! aborting the other fetch, so [`RateFetcher::fetch_rates`] always returns
//! whatever subset it could assemble.
//!
//! The assembled [`RateTable`] is immutable for the rest of the run and is
//! passed by reference to every conversion call; there is no global rate
//! state.

pub mod market;
pub mod oracle;

mod rate_table;
mod value;

pub use rate_table::{Direction, GOLD_RATE_KEY, RateTable, conversion_for};
pub use value::{to_erg_string, to_erg_value};

use crate::Result;
use crate::config::Config;

const LOG_TARGET: &str = "     rates";

/// Assembles the per-run rate table from the market and oracle sources
#[derive(Debug)]
pub struct RateFetcher {
    market: market::Provider,
    oracle: oracle::Provider,
}

impl RateFetcher {
    /// Create a fetcher from the configured endpoints and timeouts
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            market: market::Provider::new(&config.market_api_url, config.market_timeout_secs)?,
            oracle: oracle::Provider::new(
                &config.oracle_api_url,
                &config.oracle_pool_token_id,
                config.oracle_gold_scale,
                config.oracle_timeout_secs,
            )?,
        })
    }

    /// Fetch all rates, tolerating per-source failure.
    ///
    /// The two sources are queried concurrently and their partial results
    /// joined into one table after both complete. No caching happens here;
    /// every call makes fresh network requests.
    pub async fn fetch_rates(&self) -> RateTable {
        let (pairs, gold) = tokio::join!(self.market.fetch_pairs(), self.oracle.fetch_gold_rate());

        let mut table = RateTable::new();

        match pairs {
            Ok(pairs) => {
                for (currency, rate) in market::select_rates(&pairs) {
                    table.insert(currency, rate);
                }

                // BENE is pegged to $1 of ERG value and SigUSD is itself a
                // USD-pegged stablecoin, so SigUSD's rate stands in for BENE
                // without a second source. No SigUSD rate means no BENE rate.
                if let Some(sigusd) = table.get("SigUSD") {
                    table.insert("BENE".to_owned(), sigusd);
                }
            }
            Err(e) => {
                log::error!(target: LOG_TARGET, "market rates unavailable: {e}");
            }
        }

        match gold {
            Ok(rate) => table.insert(GOLD_RATE_KEY.to_owned(), rate),
            Err(e) => {
                log::error!(target: LOG_TARGET, "gold oracle rate unavailable: {e}");
            }
        }

        log::info!(target: LOG_TARGET, "assembled {} exchange rate(s)", table.len());
        table
    }
}
