use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, bail};
use serde::Deserialize;

const LOG_TARGET: &str = "    market";

/// Fungible currencies priced from market trading pairs. BENE is absent
/// because its rate is derived from SigUSD's, not fetched.
pub const MARKET_CURRENCIES: &[&str] = &["SigUSD", "GORT", "RSN"];

/// One trading-pair record as returned by the market API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPair {
    pub base_symbol: String,
    pub quote_symbol: String,
    pub last_price: f64,
    #[serde(default)]
    pub base_volume: Option<BaseVolume>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseVolume {
    pub value: f64,
}

/// Market-data API client.
///
/// One call returns every trading pair at once; pair selection is a pure
/// function over that list so it can be tested without a network.
#[derive(Debug)]
pub struct Provider {
    client: reqwest::Client,
    url: String,
}

impl Provider {
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("bounty-board")
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .into_app_err("unable to create market HTTP client")?;

        Ok(Self {
            client,
            url: url.to_owned(),
        })
    }

    /// Fetch the full trading-pair list.
    ///
    /// Errors are returned to the caller, which degrades by omitting all
    /// market-sourced rates; they are never fatal to the run.
    pub async fn fetch_pairs(&self) -> Result<Vec<MarketPair>> {
        log::info!(target: LOG_TARGET, "querying market pairs from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .into_app_err("unable to reach the market API")?;

        if !response.status().is_success() {
            bail!("market API returned HTTP {}", response.status());
        }

        let pairs: Vec<MarketPair> = response.json().await.into_app_err("malformed market API payload")?;

        log::debug!(target: LOG_TARGET, "received {} trading pair(s)", pairs.len());
        Ok(pairs)
    }
}

/// Select one rate per target currency from the pair list.
///
/// For each target, the candidates are pairs quoting that currency against
/// an ERG base; the one with the largest traded volume wins when volume is
/// reported, otherwise the first candidate. A currency with no candidate is
/// simply absent from the result.
#[must_use]
pub fn select_rates(pairs: &[MarketPair]) -> Vec<(String, f64)> {
    let mut rates = Vec::new();

    for target in MARKET_CURRENCIES {
        let candidates: Vec<&MarketPair> = pairs
            .iter()
            .filter(|pair| pair.base_symbol == "ERG" && pair.quote_symbol == *target)
            .collect();

        let selected = if candidates.iter().any(|pair| pair.base_volume.is_some()) {
            candidates
                .iter()
                .max_by(|a, b| volume_of(a).total_cmp(&volume_of(b)))
                .copied()
        } else {
            candidates.first().copied()
        };

        match selected {
            Some(pair) if pair.last_price > 0.0 => {
                log::debug!(target: LOG_TARGET, "{target}: {} per ERG", pair.last_price);
                rates.push(((*target).to_owned(), pair.last_price));
            }
            Some(pair) => {
                log::warn!(target: LOG_TARGET, "{target}: ignoring non-positive price {}", pair.last_price);
            }
            None => {
                log::warn!(target: LOG_TARGET, "{target}: no ERG pair found, rate omitted");
            }
        }
    }

    rates
}

fn volume_of(pair: &MarketPair) -> f64 {
    pair.base_volume.as_ref().map_or(f64::MIN, |volume| volume.value)
}
