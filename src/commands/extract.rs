use super::Host;
use super::common::{LogLevel, init_logging};
use crate::Result;
use crate::config::DollarConvention;
use crate::extract::{Extractor, is_bounty_issue};
use crate::github::{Issue, Label};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Issue title to extract from
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub title: String,

    /// Issue body to extract from
    #[arg(long, value_name = "TEXT")]
    pub body: Option<String>,

    /// Issue label to extract from; may be repeated
    #[arg(long = "label", value_name = "NAME")]
    pub labels: Vec<String>,

    /// Treat dollar amounts as USD instead of SigUSD
    #[arg(long)]
    pub usd: bool,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Run the extraction patterns against ad-hoc issue text, without touching
/// the network. Useful for checking how a label or title will be interpreted
/// before it goes on a real issue.
pub fn extract_adhoc<H: Host>(host: &mut H, args: &ExtractArgs) -> Result<()> {
    init_logging(args.log_level);

    let issue = Issue {
        number: 0,
        title: args.title.clone(),
        body: args.body.clone(),
        html_url: String::new(),
        labels: args.labels.iter().map(|name| Label { name: name.clone() }).collect(),
        pull_request: None,
    };

    let convention = if args.usd { DollarConvention::Usd } else { DollarConvention::SigUsd };
    let bounty = Extractor::new(convention).extract(&issue);

    let _ = writeln!(host.output(), "Bounty: {bounty}");
    if !is_bounty_issue(&issue) {
        let _ = writeln!(host.output(), "Note: this issue would not be picked up by a scan (no bounty tag)");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::TestHost;

    fn args(title: &str, labels: &[&str]) -> ExtractArgs {
        ExtractArgs {
            title: title.to_string(),
            body: None,
            labels: labels.iter().map(ToString::to_string).collect(),
            usd: false,
            log_level: LogLevel::None,
        }
    }

    #[test]
    fn test_extract_from_label() {
        let mut host = TestHost::new();
        extract_adhoc(&mut host, &args("Fix the parser", &["bounty-100erg"])).unwrap();
        assert!(host.output_str().contains("Bounty: 100 ERG"));
        assert!(!host.output_str().contains("would not be picked up"));
    }

    #[test]
    fn test_dollar_convention_flag() {
        let mut host = TestHost::new();
        let mut usd_args = args("Bounty: $50 for this", &[]);
        usd_args.usd = true;
        extract_adhoc(&mut host, &usd_args).unwrap();
        assert!(host.output_str().contains("Bounty: 50 USD"));
    }

    #[test]
    fn test_untagged_issue_warns() {
        let mut host = TestHost::new();
        extract_adhoc(&mut host, &args("Just a bug", &[])).unwrap();
        assert!(host.output_str().contains("Bounty: Not specified"));
        assert!(host.output_str().contains("would not be picked up"));
    }
}
