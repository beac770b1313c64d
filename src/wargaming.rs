//! Wargaming.net API client: fetch, check, filter and shape.

use std::sync::Arc;

use futures::future::try_join3;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use self::error::{Error, Result};
pub use self::models::*;

use self::endpoint::{missing_parameters, normalize_options, Endpoint, PartialOptions, UrlBuilder};
use self::filters::{
    filter_achievement_descriptions, filter_search_results, filter_vehicle_achievements,
    limit_search_results, to_array,
};
use self::mappers::{
    to_achievement_descriptions, to_search_options, to_vehicle_achievements, to_vehicle_info,
    to_vehicles_stats,
};
use self::response::check_response_status;
use self::transport::{HttpTransport, Transport};
use crate::models::{self as app, Account};
use crate::prelude::{debug, instrument, warn, AHashMap};

pub mod constants;
pub mod endpoint;
pub mod error;
pub mod filters;
pub mod mappers;
pub mod models;
pub mod response;
pub mod transport;

#[derive(Clone)]
pub struct WargamingApi {
    urls: Arc<UrlBuilder>,
    transport: Arc<dyn Transport>,
}

impl WargamingApi {
    pub fn new(server: &str, application_id: &str) -> anyhow::Result<Self> {
        Ok(Self::with_transport(
            UrlBuilder::new(server, application_id),
            HttpTransport::new()?,
        ))
    }

    pub fn with_transport(urls: UrlBuilder, transport: impl Transport + 'static) -> Self {
        Self {
            urls: Arc::new(urls),
            transport: Arc::new(transport),
        }
    }

    /// Achievement descriptions of the supported achievements.
    #[instrument(skip_all)]
    pub async fn get_achievement_descriptions(&self) -> Result<app::AchievementDescriptions> {
        let data = self
            .call(Endpoint::EncyclopediaAchievements, PartialOptions::default(), &[])
            .await?;
        let data: AHashMap<String, AchievementDescription> = serde_json::from_value(data)?;
        Ok(to_achievement_descriptions(filter_achievement_descriptions(data)))
    }

    /// The whole vehicle catalog.
    #[instrument(skip_all)]
    pub async fn get_vehicle_info(&self) -> Result<app::Vehicles> {
        let data = self
            .call(Endpoint::EncyclopediaVehicles, PartialOptions::default(), &[])
            .await?;
        let data: AHashMap<String, Vehicle> = serde_json::from_value(data)?;
        debug!(n_vehicles = data.len());
        Ok(to_vehicle_info(data))
    }

    /// Supported achievements on every vehicle the account has ever played.
    #[instrument(skip_all, fields(account_id = account_id))]
    pub async fn get_vehicle_achievements(
        &self,
        account_id: &str,
    ) -> Result<Vec<app::VehicleAchievements>> {
        let data = self
            .call(Endpoint::TanksAchievements, PartialOptions::with_id(account_id), &[])
            .await?;
        let data: Vec<TankAchievements> = from_items(to_array(take_account_data(data, account_id)))?;
        Ok(to_vehicle_achievements(filter_vehicle_achievements(data)))
    }

    /// Hit percentage on every vehicle the account has ever played.
    #[instrument(skip_all, fields(account_id = account_id))]
    pub async fn get_vehicles_stats(&self, account_id: &str) -> Result<Vec<app::VehicleStats>> {
        let data = self
            .call(Endpoint::TanksStats, PartialOptions::with_id(account_id), &[])
            .await?;
        let data: Vec<TankStatistics> = from_items(to_array(take_account_data(data, account_id)))?;
        let n_never_fired = data.iter().filter(|tank| tank.all.shots == 0).count();
        if n_never_fired != 0 {
            warn!(n_never_fired, "some vehicles have never fired, their hit percentage is NaN");
        }
        Ok(to_vehicles_stats(data))
    }

    /// Account-wide totals. `None` if the account does not exist.
    #[instrument(skip_all, fields(account_id = account_id))]
    pub async fn get_account_info(&self, account_id: &str) -> Result<Option<app::AccountInfo>> {
        let data = self
            .call(Endpoint::AccountInfo, PartialOptions::with_id(account_id), &[])
            .await?;
        match take_account_data(data, account_id) {
            Value::Null => Ok(None),
            info => Ok(Some(serde_json::from_value::<AccountInfo>(info)?.into())),
        }
    }

    /// Searches the accounts by nickname, leaving out the tracked ones.
    #[instrument(skip_all, fields(query = query))]
    pub async fn search_accounts(
        &self,
        query: &str,
        tracked: &[Account],
    ) -> Result<Vec<app::SearchOption>> {
        let data = self
            .call(Endpoint::AccountList, PartialOptions::with_search(query), tracked)
            .await?;
        let data: Vec<FoundAccount> = serde_json::from_value(data)?;
        debug!(n_found = data.len());
        Ok(to_search_options(limit_search_results(filter_search_results(data, tracked))))
    }

    /// Fetches the account info, achievements and stats at once.
    /// Fails if any of them fails.
    #[instrument(skip_all, fields(account_id = account_id))]
    pub async fn get_account_summary(&self, account_id: &str) -> Result<app::AccountSummary> {
        let (info, achievements, stats) = try_join3(
            self.get_account_info(account_id),
            self.get_vehicle_achievements(account_id),
            self.get_vehicles_stats(account_id),
        )
        .await?;
        Ok(app::AccountSummary {
            account_id: account_id.to_string(),
            info,
            achievements,
            stats,
        })
    }

    /// Validates the options and requests the raw JSON body.
    ///
    /// Missing parameters are reported before anything is sent.
    pub async fn fetch_data(
        &self,
        endpoint: Endpoint,
        options: PartialOptions,
        tracked: &[Account],
    ) -> Result<Value> {
        let missing = missing_parameters(endpoint, &options);
        if !missing.is_empty() {
            return Err(Error::MissingParameters { endpoint, missing });
        }
        let url = self.urls.get_url(endpoint, &normalize_options(options), tracked);
        self.transport.get_json(&url).await.map_err(Error::Transport)
    }

    /// Fetches and unwraps the `data` of a successful response.
    async fn call(
        &self,
        endpoint: Endpoint,
        options: PartialOptions,
        tracked: &[Account],
    ) -> Result<Value> {
        let body = self.fetch_data(endpoint, options, tracked).await?;
        let success = check_response_status(body)?;
        debug!(%endpoint, count = ?success.meta.and_then(|meta| meta.count), "ok");
        Ok(success.data)
    }
}

/// Per-account endpoints return the data keyed by the account ID.
fn take_account_data(data: Value, account_id: &str) -> Value {
    match data {
        Value::Object(mut map) => map.remove(account_id).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

fn from_items<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>> {
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(Error::from))
        .collect()
}
