use serde::Deserialize;
use serde_json::Value;

use crate::wargaming::error::{Error, Result};

/// Generic Wargaming.net API response.
///
/// The API always answers with `200 OK`, the outcome is in the `status` field.
#[derive(Deserialize, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok(Success),

    /// See: <https://developers.wargaming.net/documentation/guide/getting-started/#common-errors>
    ///
    /// The error body (`code`, `field`, `message` and `value`) is carried as is.
    Error {
        #[serde(default)]
        error: Value,
    },
}

#[derive(Deserialize, Debug, PartialEq, Default)]
pub struct Success {
    #[serde(default)]
    pub meta: Option<Meta>,

    #[serde(default)]
    pub data: Value,
}

#[derive(Deserialize, Debug, PartialEq, Default, Clone, Copy)]
pub struct Meta {
    #[serde(default)]
    pub count: Option<u64>,
}

/// Unwraps the successful response, otherwise fails with the serialized error body.
/// An envelope without a known `status` is an error too.
pub fn check_response_status(body: Value) -> Result<Success> {
    match serde_json::from_value::<Response>(body) {
        Ok(Response::Ok(success)) => Ok(success),
        Ok(Response::Error { error }) => Err(Error::Api(serde_json::to_string(&error)?)),
        Err(error) => Err(Error::Api(format!("malformed envelope: {}", error))),
    }
}
