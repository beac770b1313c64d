use itertools::Itertools;

use crate::wargaming::endpoint::{Endpoint, Param};

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single pipeline call. Nothing is retried, every variant ends the call.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request options lack a parameter the endpoint requires.
    /// Raised before anything is sent.
    #[error("not all the required parameters are specified for `{endpoint}`: {}", .missing.iter().join(", "))]
    MissingParameters {
        endpoint: Endpoint,
        missing: Vec<Param>,
    },

    /// The API answered with `"status": "error"`. Holds the serialized error body.
    #[error("the API has returned an error: {0}")]
    Api(String),

    /// Network, HTTP or JSON decoding failure of the underlying client.
    #[error("request has failed")]
    Transport(#[source] anyhow::Error),

    /// The `data` payload does not have the expected shape.
    #[error("unexpected payload")]
    Payload(#[from] serde_json::Error),
}
