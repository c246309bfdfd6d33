use super::{BountyRow, sorted_rows, total_erg};
use crate::Result;
use crate::rates::RateTable;
use chrono::{DateTime, Utc};
use core::fmt::Write;
use std::collections::BTreeMap;

/// Render the full markdown bounty report.
///
/// The timestamp is passed in rather than sampled here so output is
/// deterministic under test.
pub fn generate<W: Write>(rows: &[BountyRow], rates: &RateTable, now: DateTime<Utc>, writer: &mut W) -> Result<()> {
    writeln!(writer, "# Open Bounties")?;
    writeln!(writer)?;
    writeln!(writer, "_Generated {}_", now.format("%Y-%m-%d %H:%M UTC"))?;
    writeln!(writer)?;
    writeln!(writer, "**{}** open bounties worth a total of **{:.2} ERG**", rows.len(), total_erg(rows))?;
    writeln!(writer)?;

    write_rates(rates, writer)?;
    write_breakdown(rows, writer)?;

    writeln!(writer, "## Bounties")?;
    writeln!(writer)?;
    writeln!(writer, "| Repository | Issue | Title | Bounty | Value (ERG) |")?;
    writeln!(writer, "|------------|-------|-------|--------|-------------|")?;
    for row in sorted_rows(rows) {
        let value = if row.bounty.is_sentinel() {
            "—".to_string()
        } else {
            format!("{:.2}", row.erg_value)
        };
        writeln!(
            writer,
            "| {} | [#{}]({}) | {} | {} | {value} |",
            escape_cell(&row.repo),
            row.number,
            row.url,
            escape_cell(&row.title),
            row.bounty
        )?;
    }

    Ok(())
}

fn write_rates<W: Write>(rates: &RateTable, writer: &mut W) -> Result<()> {
    if rates.is_empty() {
        return Ok(());
    }

    writeln!(writer, "## Conversion Rates")?;
    writeln!(writer)?;
    writeln!(writer, "| Currency | Rate |")?;
    writeln!(writer, "|----------|------|")?;

    // BTreeMap for stable ordering across runs
    let ordered: BTreeMap<&str, f64> = rates.iter().collect();
    for (currency, rate) in ordered {
        writeln!(writer, "| {currency} | {rate} |")?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Per-currency counts and ERG subtotals, sentinels included as their own rows
fn write_breakdown<W: Write>(rows: &[BountyRow], writer: &mut W) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    let mut by_currency: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for row in rows {
        let entry = by_currency.entry(row.bounty.currency()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += row.erg_value;
    }

    writeln!(writer, "## By Currency")?;
    writeln!(writer)?;
    writeln!(writer, "| Currency | Bounties | Value (ERG) |")?;
    writeln!(writer, "|----------|----------|-------------|")?;
    for (currency, (count, erg)) in by_currency {
        writeln!(writer, "| {currency} | {count} | {erg:.2} |")?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Pipes would break out of the table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_rows;
    use chrono::TimeZone;

    fn test_rates() -> RateTable {
        [("SigUSD".to_string(), 0.82), ("gGOLD".to_string(), 84.03)].into_iter().collect()
    }

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_report_structure() {
        let mut output = String::new();
        generate(&test_rows(), &test_rates(), test_now(), &mut output).unwrap();

        assert!(output.starts_with("# Open Bounties"));
        assert!(output.contains("_Generated 2026-03-01 12:00 UTC_"));
        assert!(output.contains("**4** open bounties worth a total of **371.95 ERG**"));
        assert!(output.contains("## Conversion Rates"));
        assert!(output.contains("| SigUSD | 0.82 |"));
        assert!(output.contains("## By Currency"));
        assert!(output.contains("| ERG | 1 | 250.00 |"));
        assert!(output.contains("[#42](https://github.com/ergoplatform/sigma-rust/issues/42)"));
    }

    #[test]
    fn test_sentinel_rows_render_dash_value() {
        let mut output = String::new();
        generate(&test_rows(), &test_rates(), test_now(), &mut output).unwrap();
        assert!(output.contains("| Ongoing | — |"));
        assert!(output.contains("| Not specified | — |"));
    }

    #[test]
    fn test_pipes_escaped_in_titles() {
        let mut output = String::new();
        generate(&test_rows(), &test_rates(), test_now(), &mut output).unwrap();
        assert!(output.contains("Document the connector \\| protocol"));
    }

    #[test]
    fn test_empty_rows_and_rates() {
        let mut output = String::new();
        generate(&[], &RateTable::new(), test_now(), &mut output).unwrap();
        assert!(output.contains("**0** open bounties"));
        assert!(!output.contains("## Conversion Rates"));
        assert!(!output.contains("## By Currency"));
    }
}
