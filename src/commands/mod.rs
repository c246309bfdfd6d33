//! Command-line interface and orchestration for bounty-board
//!
//! This module implements the CLI commands and coordinates the other modules
//! to perform end-to-end issue collection, bounty extraction, currency
//! conversion, and reporting.
//!
//! # Implementation Model
//!
//! The module is organized around five commands:
//!
//! - **report**: Fetch open issues from the configured repositories, extract
//!   bounty amounts, convert them to ERG, and generate reports
//! - **rates**: Fetch and display the current conversion rates
//! - **extract**: Run the extraction patterns against an ad-hoc title, body,
//!   and labels without touching the network
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and field values
//!
//! The `run` function parses command-line arguments using clap and routes to
//! the appropriate command handler. The `common` module provides shared
//! functionality like logging setup, color mode handling, and configuration
//! loading with warning display.

mod common;
mod extract;
mod init;
mod rates;
mod report;
mod run;
mod validate;

pub use common::{ColorMode, CommonArgs, LogLevel};
pub use extract::{ExtractArgs, extract_adhoc};
pub use init::{InitArgs, init_config};
pub use rates::{RatesArgs, show_rates};
pub use report::{ReportArgs, process_report};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
use std::io::Write;

/// Abstract the host environment to enable testing
pub trait Host: Send + Sync {
    // where to send normal output (e.g., stdout)
    fn output(&mut self) -> impl Write;

    // where to send error output (e.g., stderr)
    fn error(&mut self) -> impl Write;

    /// Terminate the process (although in a test environment this might just set a flag and return).
    fn exit(&mut self, code: i32);
}

/// Test host that captures output to in-memory buffers
#[cfg(test)]
pub struct TestHost {
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
    pub exit_code: Option<i32>,
}

#[cfg(test)]
impl TestHost {
    pub const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}
