use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration YAML content, embedded from `default_config.yml`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../default_config.yml");

/// What a bare `$` (and `usd` / `dollars`) in issue text resolves to.
///
/// `SigUsd` treats dollar amounts as the SigUSD stablecoin so they convert to
/// ERG using the SigUSD market rate. `Usd` keeps them as a distinct `USD`
/// currency which has no exchange rate and therefore reports 0 ERG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DollarConvention {
    #[default]
    SigUsd,
    Usd,
}

const fn default_oracle_gold_scale() -> u64 {
    100
}

const fn default_market_timeout_secs() -> u64 {
    30
}

// The oracle explorer endpoint is observed to be slower than the market API.
const fn default_oracle_timeout_secs() -> u64 {
    60
}

const fn default_github_timeout_secs() -> u64 {
    30
}

const fn default_min_erg_badge_value() -> f64 {
    0.0
}

fn default_market_api_url() -> String {
    "https://api.spectrum.fi/v1/price-tracking/markets".to_owned()
}

fn default_oracle_api_url() -> String {
    "https://api.ergoplatform.com/api/v1/boxes/unspent/byTokenId".to_owned()
}

fn default_oracle_pool_token_id() -> String {
    // NFT identifying the ERG/XAU oracle pool
    "011d3364de07e5a26f0c4eef0852cddb387039a921b7154ef3cab22c6eda887f".to_owned()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Repositories to scan for bounty issues, as `owner/name` pairs
    #[serde(default)]
    pub repos: Vec<String>,

    /// Market-data endpoint returning all trading pairs in one call
    #[serde(default = "default_market_api_url")]
    pub market_api_url: String,

    /// Explorer endpoint for unspent boxes by token id (the token id is appended)
    #[serde(default = "default_oracle_api_url")]
    pub oracle_api_url: String,

    /// Token id of the gold oracle pool NFT
    #[serde(default = "default_oracle_pool_token_id")]
    pub oracle_pool_token_id: String,

    /// Scale factor applied to the oracle's R4 register value.
    /// Sensitive to the oracle's decimal convention; override with care.
    #[serde(default = "default_oracle_gold_scale")]
    pub oracle_gold_scale: u64,

    /// How a bare `$` / `usd` / `dollars` token is interpreted
    #[serde(default)]
    pub dollar_convention: DollarConvention,

    /// Timeout in seconds for market API requests
    #[serde(default = "default_market_timeout_secs")]
    pub market_timeout_secs: u64,

    /// Timeout in seconds for oracle API requests
    #[serde(default = "default_oracle_timeout_secs")]
    pub oracle_timeout_secs: u64,

    /// Timeout in seconds for GitHub API requests
    #[serde(default = "default_github_timeout_secs")]
    pub github_timeout_secs: u64,

    /// Total ERG value below which the generated value badge turns yellow
    #[serde(default = "default_min_erg_badge_value")]
    pub min_erg_badge_value: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repos: Vec::new(),
            market_api_url: default_market_api_url(),
            oracle_api_url: default_oracle_api_url(),
            oracle_pool_token_id: default_oracle_pool_token_id(),
            oracle_gold_scale: default_oracle_gold_scale(),
            dollar_convention: DollarConvention::default(),
            market_timeout_secs: default_market_timeout_secs(),
            oracle_timeout_secs: default_oracle_timeout_secs(),
            github_timeout_secs: default_github_timeout_secs(),
            min_erg_badge_value: default_min_erg_badge_value(),
        }
    }
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(base_path: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<(Self, Vec<String>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading bounty-board configuration from {path}"))?;
            (path.clone(), text)
        } else {
            let candidates = [
                base_path.join("bounties.toml"),
                base_path.join("bounties.yml"),
                base_path.join("bounties.yaml"),
                base_path.join("bounties.json"),
            ];

            let mut found = None;
            for path in &candidates {
                match fs::read_to_string(path) {
                    Ok(text) => {
                        found = Some((path.clone(), text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading bounty-board configuration from {path}")),
                }
            }

            let Some(result) = found else {
                let config = Self::default();
                let mut warnings = Vec::new();
                config.validate(&mut warnings);
                return Ok((config, warnings));
            };
            result
        };

        let extension = final_path.extension().unwrap_or_default();
        let config: Self = match extension {
            "toml" => toml::from_str(&text).into_app_err_with(|| format!("parsing TOML configuration from {final_path}"))?,
            "yml" | "yaml" => serde_yaml::from_str(&text).into_app_err_with(|| format!("parsing YAML configuration from {final_path}"))?,
            "json" => serde_json::from_str(&text).into_app_err_with(|| format!("parsing JSON configuration from {final_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        let mut warnings = Vec::new();
        config.validate(&mut warnings);
        Ok((config, warnings))
    }

    /// Save configuration to a file
    ///
    /// YAML output preserves the commented default template when the
    /// configuration equals the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or serialization fails
    pub fn save(&self, output_path: &Utf8Path) -> Result<()> {
        let extension = output_path.extension().unwrap_or_default();
        let text = match extension {
            "toml" => {
                toml::to_string_pretty(self).into_app_err_with(|| format!("serializing configuration to TOML for saving to {output_path}"))?
            }
            "yml" | "yaml" => {
                serde_yaml::to_string(self).into_app_err_with(|| format!("serializing configuration to YAML for saving to {output_path}"))?
            }
            "json" => serde_json::to_string_pretty(self)
                .into_app_err_with(|| format!("serializing configuration to JSON for saving to {output_path}"))?,
            _ => return Err(app_err!("unsupported configuration file extension: {extension}")),
        };

        fs::write(output_path, text).into_app_err_with(|| format!("writing configuration to {output_path}"))?;
        Ok(())
    }

    /// Write the commented default configuration template
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default_template(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_YAML).into_app_err_with(|| format!("writing configuration to {output_path}"))?;
        Ok(())
    }

    /// Check the configuration for problems that don't prevent execution
    pub fn validate(&self, warnings: &mut Vec<String>) {
        if self.repos.is_empty() {
            warnings.push("no repositories configured, reports will be empty".to_owned());
        }

        for repo in &self.repos {
            let mut segments = repo.split('/');
            let owner = segments.next().unwrap_or_default();
            let name = segments.next().unwrap_or_default();
            if owner.is_empty() || name.is_empty() || segments.next().is_some() {
                warnings.push(format!("repository '{repo}' is not of the form owner/name and will be skipped"));
            }
        }

        for (label, url) in [("market_api_url", &self.market_api_url), ("oracle_api_url", &self.oracle_api_url)] {
            if Url::parse(url).is_err() {
                warnings.push(format!("{label} '{url}' is not a valid URL"));
            }
        }

        if self.oracle_pool_token_id.is_empty() {
            warnings.push("oracle_pool_token_id is empty, gold-priced bounties will report 0 ERG".to_owned());
        }

        if self.oracle_gold_scale == 0 {
            warnings.push("oracle_gold_scale is 0, gold-priced bounties will report 0 ERG".to_owned());
        }

        if self.min_erg_badge_value < 0.0 {
            warnings.push("min_erg_badge_value is negative, the value badge will always be green".to_owned());
        }

        for (label, timeout) in [
            ("market_timeout_secs", self.market_timeout_secs),
            ("oracle_timeout_secs", self.oracle_timeout_secs),
            ("github_timeout_secs", self.github_timeout_secs),
        ] {
            if timeout == 0 {
                warnings.push(format!("{label} is 0, requests on that source will always fail"));
            }
        }
    }
}
