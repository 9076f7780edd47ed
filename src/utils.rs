//! Utils

use std::path::PathBuf;

use clap::Parser;

use crate::{logging::LoggingConfig, statement::StatementFormat};

/// Arguments for the statement demo
#[derive(Debug, Parser)]
pub struct StatementArgs {
    /// Fixture set to load plays, invoices and pricing from
    #[clap(short, long, default_value = "default")]
    pub fixture: String,

    /// Directory containing the fixture sets
    #[clap(long, default_value = "./fixtures")]
    pub base_path: PathBuf,

    /// Output format
    #[clap(long, value_enum, default_value_t = StatementFormat::Text)]
    pub format: StatementFormat,

    /// Only print the invoice at this index
    #[clap(short, long)]
    pub invoice: Option<usize>,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::logging::LogFormat;

    use super::*;

    #[test]
    fn defaults_print_every_invoice_as_text() -> TestResult {
        let args = StatementArgs::try_parse_from(["statement"])?;

        assert_eq!(args.fixture, "default");
        assert_eq!(args.base_path, PathBuf::from("./fixtures"));
        assert_eq!(args.format, StatementFormat::Text);
        assert_eq!(args.invoice, None);
        assert!(matches!(args.logging.log_format, LogFormat::Compact));

        Ok(())
    }

    #[test]
    fn parses_html_format_and_invoice_index() -> TestResult {
        let args = StatementArgs::try_parse_from([
            "statement",
            "-f",
            "touring",
            "--format",
            "html",
            "-i",
            "1",
            "--log-format",
            "json",
        ])?;

        assert_eq!(args.fixture, "touring");
        assert_eq!(args.format, StatementFormat::Html);
        assert_eq!(args.invoice, Some(1));
        assert!(matches!(args.logging.log_format, LogFormat::Json));

        Ok(())
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(StatementArgs::try_parse_from(["statement", "--format", "pdf"]).is_err());
    }
}
