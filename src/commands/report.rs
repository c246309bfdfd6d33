use super::Host;
use super::common::{CommonArgs, init_logging};
use crate::Result;
use crate::config::Config;
use crate::extract::{Extractor, is_bounty_issue};
use crate::github::{GITHUB_API_URL, Provider, ProviderResult, RepoSpec};
use crate::rates::{RateFetcher, RateTable, to_erg_value};
use crate::reports::{BountyRow, generate_console, generate_count_badge, generate_markdown, generate_value_badge};
use camino::Utf8PathBuf;
use chrono::Utc;
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the markdown report to this file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub markdown: Option<Utf8PathBuf>,

    /// Write shields.io badge JSON files into this directory
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub badges: Option<Utf8PathBuf>,
}

/// Fetch everything, extract bounty values, and emit the requested reports.
///
/// Console output is shown only when no file reports are requested. A
/// repository that cannot be fetched is reported on the error stream and
/// skipped; the remaining repositories still contribute to the report.
pub async fn process_report<H: Host>(host: &mut H, args: &ReportArgs) -> Result<()> {
    init_logging(args.common.log_level);
    let config = args.common.load_config(host)?;

    let fetcher = RateFetcher::from_config(&config)?;
    let provider = Provider::new(args.common.github_token.as_deref(), GITHUB_API_URL, config.github_timeout_secs)?;

    let rates = fetcher.fetch_rates().await;
    let rows = collect_rows(host, &provider, &config, &rates).await;

    let generating_files = args.markdown.is_some() || args.badges.is_some();
    if !generating_files {
        let mut console_output = String::new();
        generate_console(&rows, &rates, args.common.use_colors(), &mut console_output)?;
        let _ = write!(host.output(), "{console_output}");
    }

    if let Some(filename) = &args.markdown {
        let mut markdown = String::new();
        generate_markdown(&rows, &rates, Utc::now(), &mut markdown)?;
        fs::write(filename, markdown).into_app_err_with(|| format!("writing markdown report to {filename}"))?;
    }

    if let Some(dir) = &args.badges {
        fs::create_dir_all(dir).into_app_err_with(|| format!("creating badge directory {dir}"))?;

        let count_path = dir.join("open_bounties.json");
        fs::write(&count_path, generate_count_badge(&rows)?).into_app_err_with(|| format!("writing badge to {count_path}"))?;

        let value_path = dir.join("bounty_value.json");
        fs::write(&value_path, generate_value_badge(&rows, config.min_erg_badge_value)?)
            .into_app_err_with(|| format!("writing badge to {value_path}"))?;
    }

    Ok(())
}

/// Scan every configured repository, keeping bounty-tagged issues only
async fn collect_rows<H: Host>(host: &mut H, provider: &Provider, config: &Config, rates: &RateTable) -> Vec<BountyRow> {
    let extractor = Extractor::new(config.dollar_convention);
    let mut rows = Vec::new();

    for repo_entry in &config.repos {
        let repo = match RepoSpec::parse(repo_entry) {
            Ok(repo) => repo,
            Err(e) => {
                let _ = writeln!(host.error(), "Skipping repository '{repo_entry}': {e:#}");
                continue;
            }
        };

        match provider.open_issues(&repo).await {
            ProviderResult::Found(issues) => {
                for issue in issues.iter().filter(|issue| is_bounty_issue(issue)) {
                    let bounty = extractor.extract(issue);
                    let erg_value = to_erg_value(bounty.amount(), bounty.currency(), rates);
                    rows.push(BountyRow {
                        repo: repo.to_string(),
                        number: issue.number,
                        title: issue.title.clone(),
                        url: issue.html_url.clone(),
                        bounty,
                        erg_value,
                    });
                }
            }
            ProviderResult::RepoNotFound => {
                let _ = writeln!(host.error(), "Repository '{repo}' not found");
            }
            ProviderResult::Error(e) => {
                let _ = writeln!(host.error(), "Unable to fetch issues for '{repo}': {e:#}");
            }
        }
    }

    rows
}
