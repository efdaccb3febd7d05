//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── service: ServiceConfig   # App sub-path, fixture file
//! └── command: Command         # What to print
//! ```
//!
//! Service options can be given as arguments or environment variables
//! (`APP_SUB_URL`, `GAUGE_FIXTURE_PATH`).

use anyhow::Context;
use clap::{Parser, Subcommand};
use gauge_server::service::ServiceConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::TRACING_TARGET_CONFIG;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "gauge")]
#[command(about = "Inspect credential-safe data source views")]
#[command(version)]
pub struct Cli {
    /// Service configuration (sub-path, record fixtures).
    #[clap(flatten)]
    pub service: ServiceConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Data source views.
    #[command(subcommand, name = "data-source")]
    DataSource(DataSourceCommand),

    /// Prints the avatar URL for an identity (usually an email address).
    Avatar {
        /// Identity to derive the avatar token from.
        identity: String,
    },
}

/// Data source commands.
#[derive(Debug, Clone, Subcommand)]
pub enum DataSourceCommand {
    /// Prints the redacted view of a single data source.
    Show {
        /// Organization owning the data source.
        #[arg(long = "org", default_value_t = 1)]
        org_id: i64,
        /// Data source identifier.
        data_source_id: i64,
    },

    /// Prints the organization's default data source.
    #[command(name = "default")]
    ShowDefault {
        /// Organization to look in.
        #[arg(long = "org", default_value_t = 1)]
        org_id: i64,
    },

    /// Prints all data sources of an organization ordered by name.
    List {
        /// Organization to list.
        #[arg(long = "org", default_value_t = 1)]
        org_id: i64,
    },
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    ///
    /// Logs are written to stderr so stdout carries only command output.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    /// Validates the service configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.service
            .avatar_config()
            .context("invalid app sub url")?;
        Ok(())
    }

    /// Logs configuration at debug level.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            app_sub_url = %self.service.app_sub_url,
            fixture_path = ?self.service.fixture_path,
            "service configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_data_source_show() {
        let cli = Cli::try_parse_from([
            "gauge",
            "--app-sub-url",
            "/grafana",
            "data-source",
            "show",
            "--org",
            "3",
            "7",
        ])
        .unwrap();

        assert_eq!(cli.service.app_sub_url, "/grafana");
        assert!(matches!(
            cli.command,
            Command::DataSource(DataSourceCommand::Show {
                org_id: 3,
                data_source_id: 7,
            })
        ));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn org_defaults_to_main_org() {
        let cli = Cli::try_parse_from(["gauge", "data-source", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::DataSource(DataSourceCommand::List { org_id: 1 })
        ));
    }

    #[test]
    fn relative_sub_url_fails_validation() {
        let cli = Cli::try_parse_from(["gauge", "--app-sub-url", "grafana", "avatar", "a@b.com"])
            .unwrap();
        assert!(cli.validate().is_err());
    }
}
