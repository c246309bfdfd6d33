//! Multi-format report generation for extracted bounties
//!
//! Three report generators are provided, each accessed through a `generate`
//! function:
//! - **Markdown**: a document with summary, conversion rates, per-currency
//!   breakdown, and the full bounty table
//! - **Badges**: shields.io endpoint JSON for embedding bounty counts and
//!   totals in READMEs
//! - **Console**: terminal output with ANSI colors
//!
//! All generators operate on the same input: a slice of [`BountyRow`] plus
//! the conversion rates that were in effect when the ERG values were
//! computed. Rows are presented in descending ERG value with sentinel-valued
//! bounties at the end, so callers never need to pre-sort.

mod badges;
mod console;
mod markdown;

pub use badges::{generate_count_badge, generate_value_badge};
pub use console::generate as generate_console;
pub use markdown::generate as generate_markdown;

use crate::extract::{BountyAmount, ONGOING};

/// One extracted bounty, ready for reporting
#[derive(Debug, Clone)]
pub struct BountyRow {
    /// `owner/name` of the repository the issue belongs to
    pub repo: String,
    pub number: u64,
    pub title: String,
    pub url: String,
    pub bounty: BountyAmount,
    /// Converted value in ERG; `0.0` for sentinels and unconvertible currencies
    pub erg_value: f64,
}

/// Order rows for display: highest ERG value first, concrete bounties before
/// sentinels, ongoing bounties before unspecified ones, ties broken by
/// repository and issue number for stable output.
fn sorted_rows(rows: &[BountyRow]) -> Vec<&BountyRow> {
    let mut sorted: Vec<&BountyRow> = rows.iter().collect();
    sorted.sort_by(|a, b| {
        rank(a)
            .cmp(&rank(b))
            .then_with(|| b.erg_value.total_cmp(&a.erg_value))
            .then_with(|| a.repo.cmp(&b.repo))
            .then_with(|| a.number.cmp(&b.number))
    });
    sorted
}

fn rank(row: &BountyRow) -> u8 {
    if !row.bounty.is_sentinel() {
        0
    } else if row.bounty.currency() == ONGOING {
        1
    } else {
        2
    }
}

/// Sum of the ERG values across all rows
fn total_erg(rows: &[BountyRow]) -> f64 {
    rows.iter().map(|row| row.erg_value).sum()
}

#[cfg(test)]
pub(crate) fn test_rows() -> Vec<BountyRow> {
    vec![
        BountyRow {
            repo: "ergoplatform/sigma-rust".to_string(),
            number: 42,
            title: "Fix parser".to_string(),
            url: "https://github.com/ergoplatform/sigma-rust/issues/42".to_string(),
            bounty: BountyAmount::new("100", "SigUSD"),
            erg_value: 121.95,
        },
        BountyRow {
            repo: "ergoplatform/oracle-core".to_string(),
            number: 7,
            title: "Document the connector | protocol".to_string(),
            url: "https://github.com/ergoplatform/oracle-core/issues/7".to_string(),
            bounty: BountyAmount::new("250", "ERG"),
            erg_value: 250.0,
        },
        BountyRow {
            repo: "ergoplatform/oracle-core".to_string(),
            number: 9,
            title: "Ongoing translation work".to_string(),
            url: "https://github.com/ergoplatform/oracle-core/issues/9".to_string(),
            bounty: BountyAmount::ongoing(),
            erg_value: 0.0,
        },
        BountyRow {
            repo: "ergoplatform/sigma-rust".to_string(),
            number: 50,
            title: "Mystery task".to_string(),
            url: "https://github.com/ergoplatform/sigma-rust/issues/50".to_string(),
            bounty: BountyAmount::not_specified(),
            erg_value: 0.0,
        },
    ]
}
