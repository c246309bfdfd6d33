use super::Host;
use crate::Result;
use crate::config::Config;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output configuration file path (default is `bounties.toml`)
    #[arg(value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

/// Generate a default configuration file.
///
/// YAML targets get the commented template verbatim; other formats are
/// serialized from the default configuration.
pub fn init_config<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| Utf8PathBuf::from("bounties.toml"));

    match output.extension() {
        Some("yml" | "yaml") => Config::save_default_template(&output)?,
        _ => Config::default().save(&output)?,
    }

    let _ = writeln!(host.output(), "Generated default configuration file: {output}");
    Ok(())
}
