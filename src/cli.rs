//! Command-line interface definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stu::config::{Config, DEFAULT_SEPARATOR};

/// Manage remotely stored email templates from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "stu",
    version,
    about = "List, fetch, and mirror remote email templates",
    long_about = "stu lists the email templates stored in AWS SESv2, prints a \
                  single template's content, and mirrors the whole template \
                  set into a local directory tree derived from template names."
)]
pub struct Cli {
    /// Remote region (falls back to AWS_REGION/profile, then us-east-1)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Named credentials profile
    #[arg(long, global = true, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Endpoint override (for local test endpoints)
    #[arg(long, global = true, hide = true)]
    pub endpoint_url: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all remote templates
    List,

    /// Print one template's content as JSON
    Get {
        /// Template name, exactly as stored remotely
        name: String,
    },

    /// Mirror all remote templates into a local directory
    Pull {
        /// Target directory (created if missing)
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Substring treated as a directory separator in template names
        #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
        separator: String,

        /// Maximum number of templates fetched and written at once
        #[arg(long, default_value_t = 8)]
        concurrency: usize,
    },
}

impl Cli {
    /// Fold the parsed arguments into a validated configuration.
    pub fn to_config(&self) -> Config {
        let mut config = Config::default();

        config.gateway.region = self.region.clone();
        config.gateway.profile = self.profile.clone();
        config.gateway.endpoint_url = self.endpoint_url.clone();

        if let Commands::Pull {
            separator,
            concurrency,
            ..
        } = &self.command
        {
            config.pull.separator = separator.clone();
            config.pull.concurrency = *concurrency;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let cli = Cli::parse_from(["stu", "list"]);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn test_region_defaults_to_ambient_chain() {
        let cli = Cli::parse_from(["stu", "list"]);
        let config = cli.to_config();
        assert!(config.gateway.region.is_none());
    }

    #[test]
    fn test_parse_get() {
        let cli = Cli::parse_from(["stu", "get", "welcome_fr"]);
        match cli.command {
            Commands::Get { name } => assert_eq!(name, "welcome_fr"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_pull_defaults() {
        let cli = Cli::parse_from(["stu", "pull"]);
        match cli.command {
            Commands::Pull {
                dir,
                separator,
                concurrency,
            } => {
                assert_eq!(dir, PathBuf::from("."));
                assert_eq!(separator, "_");
                assert_eq!(concurrency, 8);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_pull_flags_flow_into_config() {
        let cli = Cli::parse_from(["stu", "pull", "out", "--separator=--", "--concurrency", "2"]);
        let config = cli.to_config();
        assert_eq!(config.pull.separator, "--");
        assert_eq!(config.pull.concurrency, 2);
    }

    #[test]
    fn test_region_flag_flows_into_config() {
        let cli = Cli::parse_from(["stu", "--region", "eu-west-1", "list"]);
        let config = cli.to_config();
        assert_eq!(config.gateway.region.as_deref(), Some("eu-west-1"));
    }
}
