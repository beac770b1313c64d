use futures::future::try_join;
use serde::Serialize;

use crate::models::{build_records, load_accounts, Account};
use crate::opts::{ApiOpts, Command, Opts};
use crate::prelude::*;
use crate::wargaming::WargamingApi;

mod helpers;
mod models;
mod opts;
mod prelude;
mod wargaming;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountReport {
    #[serde(flatten)]
    summary: models::AccountSummary,

    records: Vec<models::Record>,
}

#[tokio::main]
async fn main() -> Result {
    let opts = opts::parse();
    let _sentry_guard = helpers::tracing::init(opts.sentry_dsn.clone())?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting up…");
    let result = run(opts).await;
    if let Err(error) = &result {
        error!("{:#}", error);
    }
    result
}

async fn run(opts: Opts) -> Result {
    let api = WargamingApi::new(&opts.api.server, &opts.api.application_id)?;
    let tracked = tracked_accounts(&opts.api)?;
    match opts.subcommand {
        Command::Achievements => print_json(&api.get_achievement_descriptions().await?),
        Command::Vehicles => print_json(&api.get_vehicle_info().await?),
        Command::Search(search) => {
            print_json(&api.search_accounts(&search.query, &tracked).await?)
        }
        Command::Account(account) => {
            let (summary, vehicles) = try_join(
                api.get_account_summary(&account.account_id),
                api.get_vehicle_info(),
            )
            .await?;
            let records = build_records(&summary.stats, &summary.achievements, &vehicles);
            print_json(&AccountReport { summary, records })
        }
        Command::AddAccount => {
            let mut accounts = tracked;
            accounts.push(Account::next_temporary(&accounts));
            print_json(&accounts)
        }
    }
}

fn tracked_accounts(opts: &ApiOpts) -> Result<Vec<Account>> {
    match &opts.accounts {
        Some(path) => load_accounts(path),
        None => Ok(Vec::new()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
