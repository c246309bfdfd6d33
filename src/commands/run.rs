//! Command dispatch logic for bounty-board

use super::{ExtractArgs, InitArgs, RatesArgs, ReportArgs, ValidateArgs, extract_adhoc, init_config, process_report, show_rates, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "bounty-board", author, version, long_about = None)]
#[command(about = "Collect bounty-labeled GitHub issues and report their value in ERG")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: BountySubcommand,
}

#[derive(Subcommand, Debug)]
enum BountySubcommand {
    /// Scan the configured repositories and generate bounty reports
    Report(Box<ReportArgs>),
    /// Fetch and display the current conversion rates
    Rates(RatesArgs),
    /// Run bounty extraction against ad-hoc issue text
    Extract(ExtractArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    match &cli.command {
        BountySubcommand::Report(report_args) => process_report(host, report_args).await,
        BountySubcommand::Rates(rates_args) => show_rates(host, rates_args).await,
        BountySubcommand::Extract(extract_args) => extract_adhoc(host, extract_args),
        BountySubcommand::Init(init_args) => init_config(host, init_args),
        BountySubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
