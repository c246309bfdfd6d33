use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, app_err, bail};
use serde::Deserialize;

const LOG_TARGET: &str = "    oracle";

/// Default scale factor for the oracle's R4 register value. Empirically tied
/// to the oracle's decimal convention; overridable through configuration.
pub const DEFAULT_ORACLE_GOLD_SCALE: u64 = 100;

/// Numerator of the register-to-price formula: `price = 10^18 / (R4 * scale)`
const ORACLE_PRICE_NUMERATOR: f64 = 1e18;

#[derive(Debug, Deserialize)]
struct BoxesResponse {
    items: Vec<OracleBox>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OracleBox {
    #[serde(default)]
    additional_registers: Registers,
}

#[derive(Debug, Default, Deserialize)]
struct Registers {
    #[serde(rename = "R4")]
    r4: Option<Register>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Register {
    #[serde(default)]
    rendered_value: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

/// Oracle-pool client reading the gold price from the most recent unspent
/// box carrying the pool NFT.
#[derive(Debug)]
pub struct Provider {
    client: reqwest::Client,
    url: String,
    scale: u64,
}

impl Provider {
    pub fn new(base_url: &str, pool_token_id: &str, scale: u64, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("bounty-board")
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .into_app_err("unable to create oracle HTTP client")?;

        Ok(Self {
            client,
            url: format!("{}/{pool_token_id}", base_url.trim_end_matches('/')),
            scale,
        })
    }

    /// Fetch the current gold price in ERG per gram.
    ///
    /// Only `items[0]` of the response is consulted, assumed to be the most
    /// recent box. Errors degrade to an omitted rate at the caller.
    pub async fn fetch_gold_rate(&self) -> Result<f64> {
        log::info!(target: LOG_TARGET, "querying gold oracle at {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .into_app_err("unable to reach the oracle API")?;

        if !response.status().is_success() {
            bail!("oracle API returned HTTP {}", response.status());
        }

        let boxes: BoxesResponse = response.json().await.into_app_err("malformed oracle API payload")?;

        let register = boxes
            .items
            .first()
            .and_then(|oracle_box| oracle_box.additional_registers.r4.as_ref())
            .ok_or_else(|| app_err!("oracle response carries no R4 register"))?;

        let raw = register
            .rendered_value
            .as_deref()
            .or(register.value.as_deref())
            .ok_or_else(|| app_err!("oracle R4 register carries no value"))?;

        let register_value = raw
            .parse::<u64>()
            .into_app_err_with(|| format!("oracle R4 register value '{raw}' is not numeric"))?;

        let rate = gold_rate_from_register(register_value, self.scale)?;
        log::debug!(target: LOG_TARGET, "gold: {rate} ERG per gram (R4 = {register_value})");
        Ok(rate)
    }
}

/// Apply the register-to-price formula.
///
/// The register encodes the inverse gold price in the oracle's fixed-point
/// convention; `scale` tracks that convention and must stay in sync with it.
pub fn gold_rate_from_register(register_value: u64, scale: u64) -> Result<f64> {
    if register_value == 0 || scale == 0 {
        bail!("oracle register value and scale must be positive (register {register_value}, scale {scale})");
    }

    #[expect(clippy::cast_precision_loss, reason = "price computation tolerates f64 rounding")]
    let denominator = (register_value as f64) * (scale as f64);
    Ok(ORACLE_PRICE_NUMERATOR / denominator)
}
