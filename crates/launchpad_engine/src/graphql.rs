//! GraphQL-over-HTTP wire format for the two launch queries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{LaunchDetailRecord, LaunchRecord};

/// A named query document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

pub const GET_LAUNCHES: Operation = Operation {
    name: "GetLaunches",
    document: "query GetLaunches($offset: Int!, $limit: Int!, $sort: String!, $order: String!) {
  launches(offset: $offset, limit: $limit, sort: $sort, order: $order) {
    id
    mission_name
    launch_date_local
    launch_success
  }
}",
};

pub const GET_LAUNCH: Operation = Operation {
    name: "GetLaunch",
    document: "query GetLaunch($id: ID!) {
  launch(id: $id) {
    mission_name
    launch_date_local
    launch_success
    details
    links {
      article_link
      video_link
    }
  }
}",
};

#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    pub variables: &'a V,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// One entry of a response's `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub locations: Option<Vec<SourceLocation>>,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct LaunchVariables<'a> {
    pub id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LaunchesData {
    #[serde(default)]
    pub launches: Option<Vec<LaunchRecord>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LaunchData {
    #[serde(default)]
    pub launch: Option<LaunchDetailRecord>,
}
