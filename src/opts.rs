//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::wargaming::constants::{DEFAULT_APPLICATION_ID, DEFAULT_SERVER};

mod parsers;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    #[command(flatten)]
    pub api: ApiOpts,

    /// Sentry DSN
    #[arg(short, long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    #[command(subcommand)]
    pub subcommand: Command,
}

#[derive(Args)]
pub struct ApiOpts {
    /// Wargaming.net API application ID
    #[arg(
        short,
        long,
        env = "BLITZ_ACHIEVEMENTS_APPLICATION_ID",
        default_value = DEFAULT_APPLICATION_ID,
    )]
    pub application_id: String,

    /// Wargaming.net API server base URL
    #[arg(long, env = "BLITZ_ACHIEVEMENTS_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// JSON file with the tracked accounts: `[{"id": "…", "name": "…"}]`
    #[arg(long, env = "BLITZ_ACHIEVEMENTS_ACCOUNTS")]
    pub accounts: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Prints the supported achievement descriptions
    Achievements,

    /// Prints the vehicle catalog
    Vehicles,

    /// Searches the accounts by nickname, leaving out the tracked ones
    Search(SearchOpts),

    /// Prints the account summary with the per-vehicle records
    Account(AccountOpts),

    /// Prints the tracked accounts with a new placeholder account appended
    AddAccount,
}

#[derive(Args)]
pub struct SearchOpts {
    /// Nickname prefix, at least 3 characters
    #[arg(value_parser = parsers::search_query)]
    pub query: String,
}

#[derive(Args)]
pub struct AccountOpts {
    /// Account ID
    #[arg(value_parser = parsers::account_id)]
    pub account_id: String,
}

pub fn parse() -> Opts {
    Opts::parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_opts_ok() {
        Opts::command().debug_assert();
    }

    #[test]
    fn parse_account_ok() -> crate::prelude::Result {
        let opts = Opts::try_parse_from(["blitz-achievements", "account", "5589968"])?;
        match opts.subcommand {
            Command::Account(opts) => assert_eq!(opts.account_id, "5589968"),
            _ => unreachable!(),
        }
        assert_eq!(opts.api.server, DEFAULT_SERVER);
        Ok(())
    }

    #[test]
    fn short_search_query_fails_ok() {
        assert!(Opts::try_parse_from(["blitz-achievements", "search", "ab"]).is_err());
    }
}
