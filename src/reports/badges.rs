use super::{BountyRow, total_erg};
use crate::Result;
use ohno::IntoAppError;
use serde::Serialize;

/// Shields.io endpoint badge payload, consumed via
/// `https://img.shields.io/endpoint?url=...`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Badge {
    schema_version: u32,
    label: &'static str,
    message: String,
    color: &'static str,
}

impl Badge {
    fn render(&self) -> Result<String> {
        serde_json::to_string_pretty(self).into_app_err("serializing badge")
    }
}

/// Badge showing how many open bounties exist
pub fn generate_count_badge(rows: &[BountyRow]) -> Result<String> {
    Badge {
        schema_version: 1,
        label: "Open Bounties",
        message: rows.len().to_string(),
        color: "blue",
    }
    .render()
}

/// Badge showing the combined ERG value of all open bounties.
/// The badge is yellow when the total falls below `min_erg`.
pub fn generate_value_badge(rows: &[BountyRow], min_erg: f64) -> Result<String> {
    let total = total_erg(rows);
    Badge {
        schema_version: 1,
        label: "Bounty Value",
        message: format!("{total:.2} ERG"),
        color: if total < min_erg { "yellow" } else { "green" },
    }
    .render()
}
