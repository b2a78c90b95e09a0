use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-chosen id echoed back on the matching [`EngineEvent`].
pub type RequestId = u64;

/// Variables of the `GetLaunches` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchesQuery {
    pub offset: u32,
    pub limit: u32,
    pub sort: String,
    pub order: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaunchRecord {
    pub id: String,
    #[serde(default)]
    pub mission_name: Option<String>,
    #[serde(default)]
    pub launch_date_local: Option<String>,
    #[serde(default)]
    pub launch_success: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LinksRecord {
    #[serde(default)]
    pub article_link: Option<String>,
    #[serde(default)]
    pub video_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaunchDetailRecord {
    #[serde(default)]
    pub mission_name: Option<String>,
    #[serde(default)]
    pub launch_date_local: Option<String>,
    #[serde(default)]
    pub launch_success: Option<bool>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub links: Option<LinksRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    LaunchesFetched {
        request_id: RequestId,
        result: Result<Vec<LaunchRecord>, QueryError>,
    },
    LaunchFetched {
        request_id: RequestId,
        result: Result<LaunchDetailRecord, QueryError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct QueryError {
    pub kind: FailureKind,
    pub message: String,
}

impl QueryError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Transport-level failures, as opposed to errors reported by the query service.
    pub fn is_network(&self) -> bool {
        matches!(
            self.kind,
            FailureKind::Network
                | FailureKind::Timeout
                | FailureKind::HttpStatus(_)
                | FailureKind::TooLarge { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    Network,
    Timeout,
    HttpStatus(u16),
    TooLarge { max_bytes: u64 },
    Decode,
    GraphQl,
    NotFound,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::TooLarge { max_bytes } => {
                write!(f, "response too large (max {max_bytes})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::GraphQl => write!(f, "graphql error"),
            FailureKind::NotFound => write!(f, "not found"),
        }
    }
}
