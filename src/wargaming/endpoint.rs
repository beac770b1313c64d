//! Endpoint registry, request options and the request URL builder.

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::models::{count_permanent_accounts, Account};
use crate::wargaming::constants::{API_VERSION, SEARCH_RESULTS_LIMIT};

/// Logical API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// See <https://developers.wargaming.net/reference/all/wotb/account/info/>.
    AccountInfo,

    /// See <https://developers.wargaming.net/reference/all/wotb/account/list/>.
    AccountList,

    /// See <https://developers.wargaming.net/reference/all/wotb/encyclopedia/achievements/>.
    EncyclopediaAchievements,

    /// See <https://developers.wargaming.net/reference/all/wotb/encyclopedia/vehicles/>.
    EncyclopediaVehicles,

    /// See <https://developers.wargaming.net/reference/all/wotb/tanks/achievements/>.
    TanksAchievements,

    /// See <https://developers.wargaming.net/reference/all/wotb/tanks/stats/>.
    TanksStats,
}

/// Builds the endpoint-specific query parameters, except for `application_id` and `fields`.
pub type ParamsBuilder = fn(&RequestOptions, &[Account]) -> Vec<(&'static str, String)>;

/// Request contract of an endpoint.
pub struct Descriptor {
    pub path: &'static str,
    pub required: &'static [Param],

    /// Requested response fields, the API returns nothing else.
    pub fields: &'static [&'static str],

    pub params: ParamsBuilder,
}

static ACCOUNT_INFO: Descriptor = Descriptor {
    path: "account/info",
    required: &[Param::Id],
    fields: &[],
    params: account_id_params,
};

static ACCOUNT_LIST: Descriptor = Descriptor {
    path: "account/list",
    required: &[Param::Search],
    fields: &[],
    params: account_list_params,
};

static ENCYCLOPEDIA_ACHIEVEMENTS: Descriptor = Descriptor {
    path: "encyclopedia/achievements",
    required: &[],
    fields: &["achievement_id", "image", "name"],
    params: no_params,
};

static ENCYCLOPEDIA_VEHICLES: Descriptor = Descriptor {
    path: "encyclopedia/vehicles",
    required: &[],
    fields: &["images.preview", "name", "tank_id"],
    params: no_params,
};

static TANKS_ACHIEVEMENTS: Descriptor = Descriptor {
    path: "tanks/achievements",
    required: &[Param::Id],
    fields: &["achievements", "tank_id"],
    params: account_id_params,
};

static TANKS_STATS: Descriptor = Descriptor {
    path: "tanks/stats",
    required: &[Param::Id],
    fields: &["all.hits", "all.shots", "tank_id"],
    params: account_id_params,
};

impl Endpoint {
    pub fn descriptor(self) -> &'static Descriptor {
        match self {
            Self::AccountInfo => &ACCOUNT_INFO,
            Self::AccountList => &ACCOUNT_LIST,
            Self::EncyclopediaAchievements => &ENCYCLOPEDIA_ACHIEVEMENTS,
            Self::EncyclopediaVehicles => &ENCYCLOPEDIA_VEHICLES,
            Self::TanksAchievements => &TANKS_ACHIEVEMENTS,
            Self::TanksStats => &TANKS_STATS,
        }
    }

    #[inline]
    pub fn path(self) -> &'static str {
        self.descriptor().path
    }
}

impl Display for Endpoint {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.path())
    }
}

fn no_params(_options: &RequestOptions, _tracked: &[Account]) -> Vec<(&'static str, String)> {
    Vec::new()
}

fn account_id_params(options: &RequestOptions, _tracked: &[Account]) -> Vec<(&'static str, String)> {
    vec![("account_id", urlencoding::encode(&options.id).into_owned())]
}

/// Already tracked accounts get filtered out of the results afterwards,
/// so the limit is raised to still fill up the whole page.
fn account_list_params(options: &RequestOptions, tracked: &[Account]) -> Vec<(&'static str, String)> {
    let limit = SEARCH_RESULTS_LIMIT + count_permanent_accounts(tracked);
    vec![
        ("limit", limit.to_string()),
        ("search", urlencoding::encode(&options.search).into_owned()),
    ]
}

/// Request option name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Id,
    Search,
}

impl Param {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Search => "search",
        }
    }
}

impl Display for Param {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Request options as specified by a caller. `None` means the key is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialOptions {
    pub id: Option<String>,
    pub search: Option<String>,
}

impl PartialOptions {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Default::default()
        }
    }

    pub const fn contains(&self, param: Param) -> bool {
        match param {
            Param::Id => self.id.is_some(),
            Param::Search => self.search.is_some(),
        }
    }
}

/// Complete request options. The default value is the empty options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub id: String,
    pub search: String,
}

/// Fills in the options missing from `options` with the defaults.
pub fn normalize_options(options: PartialOptions) -> RequestOptions {
    let defaults = RequestOptions::default();
    RequestOptions {
        id: options.id.unwrap_or(defaults.id),
        search: options.search.unwrap_or(defaults.search),
    }
}

/// Lists the parameters required by the endpoint which are absent from the options.
/// Only the presence is checked, an empty value is fine.
pub fn missing_parameters(endpoint: Endpoint, options: &PartialOptions) -> Vec<Param> {
    endpoint
        .descriptor()
        .required
        .iter()
        .copied()
        .filter(|param| !options.contains(*param))
        .collect()
}

/// Checks whether the options contain all the parameters required by the endpoint.
#[inline]
pub fn check_options(endpoint: Endpoint, options: &PartialOptions) -> bool {
    missing_parameters(endpoint, options).is_empty()
}

/// Builds request URLs for the configured server and application.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    server: String,
    application_id: String,
}

impl UrlBuilder {
    pub fn new(server: impl Into<String>, application_id: impl Into<String>) -> Self {
        let mut server = server.into();
        while server.ends_with('/') {
            server.pop();
        }
        Self {
            server,
            application_id: application_id.into(),
        }
    }

    /// Builds the request URL. `tracked` is only used by [`Endpoint::AccountList`].
    pub fn get_url(&self, endpoint: Endpoint, options: &RequestOptions, tracked: &[Account]) -> String {
        let descriptor = endpoint.descriptor();
        let mut params = vec![format!("application_id={}", self.application_id)];
        params.extend(
            (descriptor.params)(options, tracked)
                .into_iter()
                .map(|(name, value)| format!("{}={}", name, value)),
        );
        if !descriptor.fields.is_empty() {
            params.push(format!("fields={}", descriptor.fields.iter().join(",")));
        }
        format!(
            "{}/{}/{}/?{}",
            self.server,
            API_VERSION,
            descriptor.path,
            params.iter().join("&"),
        )
    }
}
