use super::{BountyRow, sorted_rows, total_erg};
use crate::Result;
use crate::rates::RateTable;
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

pub fn generate<W: Write>(rows: &[BountyRow], rates: &RateTable, use_colors: bool, writer: &mut W) -> Result<()> {
    if rows.is_empty() {
        writeln!(writer, "No open bounties found.")?;
        return Ok(());
    }

    let heading = format!("{} open bounties, {:.2} ERG total", rows.len(), total_erg(rows));
    if use_colors {
        writeln!(writer, "{}", heading.bold())?;
    } else {
        writeln!(writer, "{heading}")?;
    }
    writeln!(writer)?;

    let sorted = sorted_rows(rows);

    // Fixed-width columns for repo/issue/bounty/value, the title soaks up
    // whatever terminal width is left
    let repo_width = sorted.iter().map(|row| row.repo.len()).max().unwrap_or(0);
    let bounty_width = sorted.iter().map(|row| row.bounty.to_string().len()).max().unwrap_or(0);
    let title_width = get_terminal_width().saturating_sub(repo_width + bounty_width + 26).max(20);

    for row in &sorted {
        let title = truncate(&row.title, title_width);
        let bounty = row.bounty.to_string();
        let value = if row.bounty.is_sentinel() {
            "-".to_string()
        } else {
            format!("{:.2} ERG", row.erg_value)
        };

        // Pad before colorizing so ANSI escapes don't throw off alignment
        let repo_cell = format!("{:<repo_width$}", row.repo);
        let title_cell = format!("{title:<title_width$}");
        let bounty_cell = format!("{bounty:>bounty_width$}");
        let value_cell = format!("{value:>12}");

        if use_colors {
            writeln!(
                writer,
                "  {}  #{:<5} {title_cell}  {}  {}",
                repo_cell.cyan(),
                row.number,
                bounty_cell.yellow(),
                value_cell.green().bold()
            )?;
        } else {
            writeln!(writer, "  {repo_cell}  #{:<5} {title_cell}  {bounty_cell}  {value_cell}", row.number)?;
        }
    }

    if !rates.is_empty() {
        writeln!(writer)?;
        let mut ordered: Vec<(&str, f64)> = rates.iter().collect();
        ordered.sort_by(|a, b| a.0.cmp(b.0));
        let rate_list = ordered.iter().map(|(currency, rate)| format!("{currency}={rate}")).collect::<Vec<_>>().join(", ");
        if use_colors {
            writeln!(writer, "{} {rate_list}", "rates:".dimmed())?;
        } else {
            writeln!(writer, "rates: {rate_list}")?;
        }
    }

    Ok(())
}

/// Get the terminal width, defaulting to 80 if not detectable
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| w as usize)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_rows;

    #[test]
    fn test_empty_rows() {
        let mut output = String::new();
        generate(&[], &RateTable::new(), false, &mut output).unwrap();
        assert_eq!(output, "No open bounties found.\n");
    }

    #[test]
    fn test_plain_output_has_no_ansi_codes() {
        let mut output = String::new();
        let rates: RateTable = [("SigUSD".to_string(), 0.82)].into_iter().collect();
        generate(&test_rows(), &rates, false, &mut output).unwrap();
        assert!(!output.contains("\x1b["));
        assert!(output.contains("4 open bounties, 371.95 ERG total"));
        assert!(output.contains("#42"));
        assert!(output.contains("rates: SigUSD=0.82"));
    }

    #[test]
    fn test_colored_output_has_ansi_codes() {
        let mut output = String::new();
        generate(&test_rows(), &RateTable::new(), true, &mut output).unwrap();
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn test_sentinel_values_render_dash() {
        let mut output = String::new();
        generate(&test_rows(), &RateTable::new(), false, &mut output).unwrap();
        assert!(output.contains("Ongoing"));
        assert!(output.contains("Not specified"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 20), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
