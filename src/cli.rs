use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "userdeck", version, about = "Terminal client for the ReqRes users API")]
pub struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL from the config file
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Keep the session token in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Open the editor for this user id on startup
    #[arg(long, value_name = "ID")]
    pub edit: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forget the persisted session token and exit
    Logout,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the file config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_flag_overrides_config() {
        let cli = Cli::parse_from(["userdeck", "--base-url", "http://localhost:9000"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(cli.command, None);
    }

    #[test]
    fn edit_flag_parses_user_id() {
        let cli = Cli::parse_from(["userdeck", "--edit", "42"]);
        assert_eq!(cli.edit, Some(42));
        assert!(Cli::try_parse_from(["userdeck", "--edit", "george"]).is_err());
    }

    #[test]
    fn logout_subcommand_parses() {
        let cli = Cli::parse_from(["userdeck", "--ephemeral", "logout"]);
        assert!(cli.ephemeral);
        assert_eq!(cli.command, Some(Command::Logout));
    }
}
